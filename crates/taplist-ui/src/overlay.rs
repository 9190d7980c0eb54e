//! Detail overlay state machine: a clicked list item expands into a
//! full-view detail panel and collapses back symmetrically.
//!
//! The machine is headless: callers feed it interaction events and apply
//! the returned [`OverlayEffect`]s (history updates, animation targets,
//! scroll locking, store resolution) against the real page. Geometry is
//! captured by the caller at click time, before any markup mutation, and
//! held by the machine so the close animation always returns to the exact
//! source rect.

use crate::MEDIUM_BREAKPOINT_PX;

/// Position and size of a list item at capture time, in page pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub top: f64,
    pub left: f64,
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OverlayState {
    Closed,
    /// Cloned item animating from its source rect to the full view.
    Opening {
        product_id: i64,
        source: Rect,
        scroll_top: f64,
    },
    Open {
        product_id: i64,
        source: Rect,
        scroll_top: f64,
    },
    /// Reverse animation back to the stored source rect.
    Closing { source: Rect, scroll_top: f64 },
}

/// Side effects the caller applies against the page.
#[derive(Debug, Clone, PartialEq)]
pub enum OverlayEffect {
    /// Update the URL fragment without navigating.
    PushHistory(String),
    /// Animate the clone from the source rect to the full view.
    AnimateToFullView { from: Rect },
    /// Animate the clone back to the captured source rect.
    AnimateToRect { target: Rect },
    LockScroll,
    UnlockScroll,
    RestoreScroll(f64),
    /// Secondary layout adjustment for wide viewports.
    WideLayout,
    /// Render the postal-code UI appropriate to the stored code.
    ShowPostalCodeUi,
    /// Kick off the nearby-location lookup for the featured item.
    ResolveStores { product_id: i64 },
    /// Replace the store list with its loading placeholder.
    ShowLoadingPlaceholder,
    /// Discard the store query's cursor and generation.
    ResetStoreQuery,
}

/// Drives the `Closed → Opening → Open → Closing → Closed` cycle.
#[derive(Debug)]
pub struct OverlayController {
    state: OverlayState,
    viewport_width: u32,
}

impl OverlayController {
    #[must_use]
    pub fn new(viewport_width: u32) -> Self {
        Self {
            state: OverlayState::Closed,
            viewport_width,
        }
    }

    #[must_use]
    pub fn state(&self) -> &OverlayState {
        &self.state
    }

    /// A list item was clicked. Valid only while closed; `source` and
    /// `scroll_top` must be captured before any markup mutation.
    pub fn open(&mut self, product_id: i64, source: Rect, scroll_top: f64) -> Vec<OverlayEffect> {
        if !matches!(self.state, OverlayState::Closed) {
            tracing::debug!(product_id, "ignoring open: overlay is not closed");
            return Vec::new();
        }
        self.state = OverlayState::Opening {
            product_id,
            source,
            scroll_top,
        };
        vec![
            OverlayEffect::PushHistory(format!("#/product-id={product_id}")),
            OverlayEffect::AnimateToFullView { from: source },
        ]
    }

    /// The opening animation finished.
    pub fn open_animation_done(&mut self) -> Vec<OverlayEffect> {
        let OverlayState::Opening {
            product_id,
            source,
            scroll_top,
        } = self.state
        else {
            tracing::debug!("ignoring open_animation_done: overlay is not opening");
            return Vec::new();
        };
        self.state = OverlayState::Open {
            product_id,
            source,
            scroll_top,
        };

        let mut effects = Vec::new();
        if self.viewport_width >= MEDIUM_BREAKPOINT_PX {
            effects.push(OverlayEffect::LockScroll);
            effects.push(OverlayEffect::WideLayout);
        }
        effects.push(OverlayEffect::ShowPostalCodeUi);
        effects.push(OverlayEffect::ResolveStores { product_id });
        effects
    }

    /// Explicit close action.
    pub fn request_close(&mut self) -> Vec<OverlayEffect> {
        let OverlayState::Open {
            source, scroll_top, ..
        } = self.state
        else {
            tracing::debug!("ignoring close: overlay is not open");
            return Vec::new();
        };
        self.state = OverlayState::Closing { source, scroll_top };
        vec![
            OverlayEffect::UnlockScroll,
            OverlayEffect::RestoreScroll(scroll_top),
            OverlayEffect::AnimateToRect { target: source },
        ]
    }

    /// Escape key: equivalent to the close action while open, otherwise
    /// ignored.
    pub fn escape_pressed(&mut self) -> Vec<OverlayEffect> {
        self.request_close()
    }

    /// The closing animation finished.
    pub fn close_animation_done(&mut self) -> Vec<OverlayEffect> {
        if !matches!(self.state, OverlayState::Closing { .. }) {
            tracing::debug!("ignoring close_animation_done: overlay is not closing");
            return Vec::new();
        }
        self.state = OverlayState::Closed;
        vec![
            OverlayEffect::ShowLoadingPlaceholder,
            OverlayEffect::ResetStoreQuery,
            OverlayEffect::PushHistory("#/".to_owned()),
        ]
    }

    /// Viewport size changed. Affects only future wide-layout decisions;
    /// captured geometry is untouched.
    pub fn viewport_resized(&mut self, width: u32) {
        self.viewport_width = width;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SOURCE: Rect = Rect {
        top: 320.0,
        left: 48.0,
        width: 270.0,
        height: 410.0,
    };

    fn open_controller(width: u32) -> OverlayController {
        let mut controller = OverlayController::new(width);
        let _ = controller.open(517_797, SOURCE, 1280.0);
        let _ = controller.open_animation_done();
        controller
    }

    #[test]
    fn open_pushes_history_and_animates_from_source() {
        let mut controller = OverlayController::new(1024);
        let effects = controller.open(517_797, SOURCE, 1280.0);
        assert_eq!(
            effects,
            vec![
                OverlayEffect::PushHistory("#/product-id=517797".to_owned()),
                OverlayEffect::AnimateToFullView { from: SOURCE },
            ]
        );
        assert!(matches!(controller.state(), OverlayState::Opening { .. }));
    }

    #[test]
    fn entering_open_resolves_stores() {
        let mut controller = OverlayController::new(1024);
        let _ = controller.open(517_797, SOURCE, 1280.0);
        let effects = controller.open_animation_done();
        assert_eq!(
            effects,
            vec![
                OverlayEffect::LockScroll,
                OverlayEffect::WideLayout,
                OverlayEffect::ShowPostalCodeUi,
                OverlayEffect::ResolveStores {
                    product_id: 517_797
                },
            ]
        );
    }

    #[test]
    fn narrow_viewport_skips_wide_layout() {
        let mut controller = OverlayController::new(375);
        let _ = controller.open(517_797, SOURCE, 1280.0);
        let effects = controller.open_animation_done();
        assert!(!effects.contains(&OverlayEffect::WideLayout));
        assert!(!effects.contains(&OverlayEffect::LockScroll));
        assert!(effects.contains(&OverlayEffect::ResolveStores {
            product_id: 517_797
        }));
    }

    #[test]
    fn close_restores_exact_captured_geometry() {
        let mut controller = open_controller(1024);
        // Resizes between open and close must not disturb the captured rect.
        controller.viewport_resized(500);
        let effects = controller.request_close();
        assert!(effects.contains(&OverlayEffect::AnimateToRect { target: SOURCE }));
        assert!(effects.contains(&OverlayEffect::RestoreScroll(1280.0)));
    }

    #[test]
    fn close_completion_resets_store_query_and_history() {
        let mut controller = open_controller(1024);
        let _ = controller.request_close();
        let effects = controller.close_animation_done();
        assert_eq!(
            effects,
            vec![
                OverlayEffect::ShowLoadingPlaceholder,
                OverlayEffect::ResetStoreQuery,
                OverlayEffect::PushHistory("#/".to_owned()),
            ]
        );
        assert!(matches!(controller.state(), OverlayState::Closed));
    }

    #[test]
    fn escape_while_closed_is_ignored() {
        let mut controller = OverlayController::new(1024);
        assert!(controller.escape_pressed().is_empty());
        assert!(matches!(controller.state(), OverlayState::Closed));
    }

    #[test]
    fn open_while_open_is_ignored() {
        let mut controller = open_controller(1024);
        let effects = controller.open(
            999,
            Rect {
                top: 0.0,
                left: 0.0,
                width: 1.0,
                height: 1.0,
            },
            0.0,
        );
        assert!(effects.is_empty());
        assert!(
            matches!(controller.state(), OverlayState::Open { product_id, .. } if *product_id == 517_797)
        );
    }

    #[test]
    fn full_cycle_returns_to_closed() {
        let mut controller = OverlayController::new(1024);
        let _ = controller.open(1, SOURCE, 0.0);
        let _ = controller.open_animation_done();
        let _ = controller.escape_pressed();
        let _ = controller.close_animation_done();
        assert!(matches!(controller.state(), OverlayState::Closed));
        // A second cycle starts cleanly.
        assert!(!controller.open(2, SOURCE, 0.0).is_empty());
    }
}
