//! Embedded map configuration and outbound directions links.

use taplist_core::Store;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

/// Configuration for the footer map embed: center point, one marker, and
/// an info popup opened on load.
#[derive(Debug, Clone, PartialEq)]
pub struct MapEmbed {
    pub zoom: u8,
    pub center: LatLng,
    pub marker: LatLng,
    pub info_window_html: String,
}

pub const BREWERY_LOCATION: LatLng = LatLng {
    lat: 45.516_908,
    lng: -74.637_32,
};

/// The brewery map as embedded in the site footer.
#[must_use]
pub fn brewery_embed() -> MapEmbed {
    MapEmbed {
        zoom: 11,
        center: BREWERY_LOCATION,
        marker: BREWERY_LOCATION,
        info_window_html: "<strong>10 TERRY FOX DR.<br>K0B1R0 VANKLEEK HILL</strong>".to_owned(),
    }
}

/// Directions link from the stored postal code to a store's address.
///
/// Spaces become `+`, matching the map service's path-segment form. An
/// absent origin leaves the segment empty and the service falls back to
/// the visitor's location.
#[must_use]
pub fn directions_url(origin_postal: &str, store: &Store) -> String {
    let address = format!(
        "{}, {}, {}",
        store.address_line_1, store.city, store.postal_code
    );
    format!(
        "https://www.google.ca/maps/dir/{}/{}/",
        plus_encode(origin_postal),
        plus_encode(&address)
    )
}

fn plus_encode(s: &str) -> String {
    s.replace(' ', "+")
}
