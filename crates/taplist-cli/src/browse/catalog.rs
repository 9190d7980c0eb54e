//! Catalog pipeline: fetch every page of the seasonal listing, apply the
//! exclusion filter once, then render the list batch by batch.

use taplist_api::{run_to_completion, CatalogQuery, FetchOutcome, PageCursor, QueryGeneration};
use taplist_core::{load_exclusions, AppConfig};
use taplist_ui::BeerListView;

use super::session::{page_registry, Session};

const CATALOG_SEARCH: &str = "Beau's";
const SEASONAL_CONDITION: &str = "is_seasonal";

/// Fetch, filter, and render the full seasonal beer list.
///
/// A stalled fetch is a silent failure: the warning is logged and nothing
/// renders, mirroring the page's behavior when the API is unreachable.
pub(crate) async fn run_browse_beers(config: AppConfig) -> anyhow::Result<()> {
    let session = Session::new(config)?;
    let mut registry = page_registry()?;
    registry.run_ready();

    let exclusions = load_exclusions(&session.config.exclusions_path)?;

    let query = CatalogQuery::new(&session.client, CATALOG_SEARCH, Some(SEASONAL_CONDITION));
    let mut cursor = PageCursor::new();
    let generation = QueryGeneration::new();

    match run_to_completion(&query, &mut cursor, &generation.token()).await {
        FetchOutcome::Complete(beers) => {
            let consolidated = beers.len();
            let beers = exclusions.apply(beers);
            tracing::debug!(
                consolidated,
                excluded = consolidated - beers.len(),
                "catalog consolidated and filtered"
            );

            let mut view = BeerListView::new();
            loop {
                let batch = view.render_next(&beers);
                for item in &batch.items {
                    tracing::debug!(delay_ms = item.delay.as_millis(), "revealing item");
                    println!("{}", item.markup);
                }
                if !batch.load_more_visible {
                    break;
                }
                // Each further pass models one "load more" activation.
                tracing::debug!(shown = view.shown_total(), "load more activated");
            }
            println!("{} seasonal beers shown", view.shown_total());
        }
        FetchOutcome::Stalled => {
            tracing::warn!("catalog fetch stalled; nothing to render");
        }
        FetchOutcome::Superseded => {}
    }

    Ok(())
}
