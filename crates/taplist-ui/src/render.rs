//! Beer list rendering: markup generation, the paced-reveal schedule, and
//! the "load more" window over a consolidated list.

use std::time::Duration;

use taplist_core::Beer;

/// Items rendered per "load more" activation.
pub const BEERS_PER_PAGE: usize = 20;

/// Shown when a record carries no thumbnail URL.
pub const PLACEHOLDER_IMAGE: &str = "dist/images/beer-no-image.jpg";

/// Duration of each item's fade-in.
pub const REVEAL_FADE: Duration = Duration::from_millis(750);

/// Batch positions 0..STAGGERED_REVEALS fade in with an increasing delay;
/// everything after them uses one flat delay.
const STAGGERED_REVEALS: usize = 5;
const REVEAL_STAGGER: Duration = Duration::from_millis(400);
const REVEAL_FLAT_DELAY: Duration = Duration::from_millis(2000);

/// Reveal delay for an item at `index` within its freshly rendered batch.
#[must_use]
pub fn reveal_delay(index: usize) -> Duration {
    if index < STAGGERED_REVEALS {
        REVEAL_STAGGER * u32::try_from(index).unwrap_or(u32::MAX)
    } else {
        REVEAL_FLAT_DELAY
    }
}

/// Formats the stored hundredths-of-a-percent value for display:
/// `50` → `"0.5%"`, `550` → `"5.5%"`, `500` → `"5%"`.
#[must_use]
pub fn alcohol_display(alcohol_content: i32) -> String {
    let whole = alcohol_content / 100;
    let frac = alcohol_content % 100;
    if frac == 0 {
        format!("{whole}%")
    } else if frac % 10 == 0 {
        format!("{whole}.{}%", frac / 10)
    } else {
        format!("{whole}.{frac:02}%")
    }
}

/// List-item markup for one beer.
///
/// Optional fields render as defined fallbacks, never as errors: missing
/// thumbnail becomes the placeholder image, missing descriptive fields
/// become empty strings. The separator glyph between varietal and alcohol
/// content appears only when both varietal and style are present.
#[must_use]
pub fn beer_item_markup(beer: &Beer) -> String {
    let image_thumb = beer.image_thumb_url.as_deref().unwrap_or(PLACEHOLDER_IMAGE);
    let alcohol_content = alcohol_display(beer.alcohol_content);
    let varietal = beer.varietal.as_deref().unwrap_or("");
    let style = beer.style.as_deref().unwrap_or("");
    let tasting_note = beer.tasting_note.as_deref().unwrap_or("");
    let divider = if !varietal.is_empty() && !style.is_empty() {
        " \u{2022} "
    } else {
        " "
    };

    format!(
        r#"<li data-equalize-height='beer-container' data-equalize-medium-up data-product-id="{id}">
  <div class="beer-image-container">
    <img
      src="{image_thumb}"
      alt="Bottle of {name}">
  </div>
  <div class="details" data-equalize-height='beer-details' data-equalize-medium-up>
    <div class="heading" data-equalize-height='beer-heading' data-equalize-medium-up>
      <h2>{name}</h2>
    </div>
    <p class="uppercase">{varietal}{divider}{alcohol_content}</p>
    <p>{style}</p>
    <p class="tasting-note">{tasting_note}</p>
  </div>
  <div class="view">View<span class="screen-reader-only"> about {name}</span></div>
  <div class="stores">
    <h2>Stores</h2>
    <div class="postal-code-container">
    </div>
    <ul class="stores-list hide-default-list-styles">
      <li>loading...</li>
    </ul>
  </div>
</li>"#,
        id = beer.id,
        name = beer.name,
    )
}

/// One freshly rendered list item plus its reveal schedule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevealedItem {
    pub markup: String,
    pub delay: Duration,
}

/// The result of one render pass over the consolidated list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListBatch {
    pub items: Vec<RevealedItem>,
    /// Whether the "load more" affordance stays visible after this batch.
    pub load_more_visible: bool,
}

/// Tracks how much of the consolidated list has been shown, advancing one
/// page-size per activation.
#[derive(Debug, Default)]
pub struct BeerListView {
    shown_total: usize,
}

impl BeerListView {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn shown_total(&self) -> usize {
        self.shown_total
    }

    /// Renders the next page-size worth of items starting at the shown
    /// counter, in list order. The load-more affordance is hidden once the
    /// counter reaches the list's length.
    pub fn render_next(&mut self, beers: &[Beer]) -> ListBatch {
        let start = self.shown_total.min(beers.len());
        let end = (start + BEERS_PER_PAGE).min(beers.len());
        let items = beers[start..end]
            .iter()
            .enumerate()
            .map(|(index, beer)| RevealedItem {
                markup: beer_item_markup(beer),
                delay: reveal_delay(index),
            })
            .collect();
        self.shown_total = end;
        ListBatch {
            items,
            load_more_visible: self.shown_total < beers.len(),
        }
    }

    /// Forgets everything shown, for a fresh query target.
    pub fn reset(&mut self) {
        self.shown_total = 0;
    }
}
