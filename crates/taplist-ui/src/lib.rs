//! Headless presentation layer: markup rendering, interaction state
//! machines, and layout policies, all decoupled from any real DOM so the
//! transformation logic is testable on its own.

pub mod equalize;
pub mod map;
pub mod nav;
pub mod overlay;
pub mod postal;
pub mod registry;
pub mod render;
pub mod stores;

pub use equalize::{EqualizedItem, Height, HeightEqualizer};
pub use nav::NavMenu;
pub use overlay::{OverlayController, OverlayEffect, OverlayState, Rect};
pub use postal::{PostalCodeManager, PostalCodeUi, PostalEffect};
pub use registry::{Module, Registry, RegistryError};
pub use render::BeerListView;

/// Viewport width at which the "medium and up" layout policies engage.
pub const MEDIUM_BREAKPOINT_PX: u32 = 640;
