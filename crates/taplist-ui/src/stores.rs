//! Store list rendering for the featured beer.

use taplist_core::Store;

use crate::map::directions_url;

/// Shown while a store lookup is in flight.
pub const LOADING_PLACEHOLDER: &str = "<li>loading...</li>";

/// List-item markup for one store, including its directions link.
#[must_use]
pub fn store_item_markup(store: &Store, postal_code: Option<&str>) -> String {
    let directions = directions_url(postal_code.unwrap_or(""), store);
    format!(
        r#"<li data-store-id="{id}">
  <div>
    <h3>{name}</h3>
    <p>{address}</p>
    <a href="{directions}" target="_blank">Get directions via Google Maps</a>
  </div>
  <hr class="divider">
</li>"#,
        id = store.id,
        name = store.name,
        address = store.address_line_1,
    )
}

/// Renders every resolved store in API response order.
#[must_use]
pub fn render_store_list(stores: &[Store], postal_code: Option<&str>) -> String {
    stores
        .iter()
        .map(|store| store_item_markup(store, postal_code))
        .collect::<Vec<_>>()
        .join("\n")
}
