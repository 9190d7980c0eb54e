//! Featured-beer store lookup, driven through the detail overlay machine:
//! the resolver runs when the overlay enters its open state, and again
//! whenever a new postal code is committed while it is open.

use taplist_api::{run_to_completion, FetchOutcome, PageCursor, QueryGeneration, StoreQuery};
use taplist_core::{AppConfig, Store};
use taplist_ui::stores::{render_store_list, LOADING_PLACEHOLDER};
use taplist_ui::{OverlayController, OverlayEffect, PostalEffect, Rect};

use super::session::Session;

/// Nominal viewport for the headless run; wide enough for the secondary
/// overlay layout.
const VIEWPORT_WIDTH: u32 = 1024;

/// Per-target store query state: cursor plus the generation that lets a
/// reset orphan any in-flight fetch.
struct StoreQuerySlot {
    cursor: PageCursor<Store>,
    generation: QueryGeneration,
}

impl StoreQuerySlot {
    fn new() -> Self {
        Self {
            cursor: PageCursor::new(),
            generation: QueryGeneration::new(),
        }
    }

    fn reset(&mut self) {
        self.generation.invalidate();
        self.cursor.reset();
    }
}

/// Feature a beer, resolve its nearby stores, and tear the overlay down.
pub(crate) async fn run_find_stores(
    config: AppConfig,
    product_id: i64,
    new_postal: Option<String>,
) -> anyhow::Result<()> {
    let mut session = Session::new(config)?;
    let mut slot = StoreQuerySlot::new();

    let mut overlay = OverlayController::new(VIEWPORT_WIDTH);
    // Source geometry is captured from the list item before any markup
    // mutation; headless, a nominal list-slot rect stands in for it.
    let source = Rect {
        top: 320.0,
        left: 48.0,
        width: 270.0,
        height: 410.0,
    };

    for effect in overlay.open(product_id, source, 0.0) {
        apply_overlay_effect(&session, effect, &mut slot).await;
    }
    for effect in overlay.open_animation_done() {
        apply_overlay_effect(&session, effect, &mut slot).await;
    }

    if let Some(code) = new_postal {
        let effects = session.postal.save(&code);
        session.persist_jar()?;
        for effect in effects {
            match effect {
                PostalEffect::ShowLoadingPlaceholder => println!("{LOADING_PLACEHOLDER}"),
                PostalEffect::ClearStoreList => {}
                PostalEffect::ResetStoreQuery => slot.reset(),
                PostalEffect::ReloadStores => {
                    resolve_stores(&session, product_id, &mut slot).await;
                }
            }
        }
    }

    for effect in overlay.request_close() {
        apply_overlay_effect(&session, effect, &mut slot).await;
    }
    for effect in overlay.close_animation_done() {
        apply_overlay_effect(&session, effect, &mut slot).await;
    }

    Ok(())
}

async fn apply_overlay_effect(
    session: &Session,
    effect: OverlayEffect,
    slot: &mut StoreQuerySlot,
) {
    match effect {
        OverlayEffect::PushHistory(fragment) => {
            tracing::debug!(%fragment, "history updated");
        }
        OverlayEffect::ShowPostalCodeUi => println!("{}", session.postal.markup()),
        OverlayEffect::ShowLoadingPlaceholder => println!("{LOADING_PLACEHOLDER}"),
        OverlayEffect::ResolveStores { product_id } => {
            resolve_stores(session, product_id, slot).await;
        }
        OverlayEffect::ResetStoreQuery => slot.reset(),
        OverlayEffect::AnimateToFullView { .. }
        | OverlayEffect::AnimateToRect { .. }
        | OverlayEffect::LockScroll
        | OverlayEffect::UnlockScroll
        | OverlayEffect::RestoreScroll(_)
        | OverlayEffect::WideLayout => {}
    }
}

/// The nearby-location resolver: fresh cursor and generation, loading
/// placeholder, then the paginated lookup scoped to the featured beer and
/// the stored postal code.
async fn resolve_stores(session: &Session, product_id: i64, slot: &mut StoreQuerySlot) {
    slot.reset();
    println!("{LOADING_PLACEHOLDER}");

    let postal = session.postal.postal_code();
    let query = StoreQuery::new(&session.client, product_id, postal.as_deref());
    let token = slot.generation.token();

    match run_to_completion(&query, &mut slot.cursor, &token).await {
        FetchOutcome::Complete(stores) => {
            if stores.is_empty() {
                println!("no stores carry this beer right now");
            } else {
                println!("{}", render_store_list(&stores, postal.as_deref()));
            }
        }
        FetchOutcome::Stalled => {
            tracing::warn!(product_id, "store lookup stalled; placeholder left in place");
        }
        FetchOutcome::Superseded => {
            tracing::debug!(product_id, "store lookup superseded; result discarded");
        }
    }
}
