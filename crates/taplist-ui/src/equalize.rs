//! Height equalization for grouped page elements.
//!
//! Elements declare a grouping key; every element sharing a key ends up
//! with the tallest member's height. Runs on load, on resize, and whenever
//! new keyed elements attach. Elements flagged medium-up revert to auto
//! height below the medium breakpoint.

use crate::MEDIUM_BREAKPOINT_PX;

/// An applied element height.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Height {
    Auto,
    Px(u32),
}

/// One element participating in equalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EqualizedItem {
    /// Grouping key; all elements sharing it get the same height.
    pub key: String,
    /// Equalize only at the medium breakpoint and above.
    pub medium_up: bool,
    /// Height the element measures at `Height::Auto`, including padding.
    pub natural_height: u32,
    pub height: Height,
}

impl EqualizedItem {
    #[must_use]
    pub fn new(key: &str, natural_height: u32) -> Self {
        Self {
            key: key.to_owned(),
            medium_up: false,
            natural_height,
            height: Height::Auto,
        }
    }

    #[must_use]
    pub fn medium_up(mut self) -> Self {
        self.medium_up = true;
        self
    }
}

/// Tracks discovered grouping keys and applies per-key maximum heights.
#[derive(Debug, Default)]
pub struct HeightEqualizer {
    keys: Vec<String>,
}

impl HeightEqualizer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    /// Records any not-yet-seen keys, preserving discovery order.
    pub fn collect_keys(&mut self, items: &[EqualizedItem]) {
        for item in items {
            if !self.keys.contains(&item.key) {
                self.keys.push(item.key.clone());
            }
        }
    }

    /// Re-checks for new keys, then equalizes: every element is reset to
    /// auto, re-measured, and given its group's maximum height. Below the
    /// medium breakpoint, medium-up elements revert to auto instead.
    pub fn force_resize(&mut self, items: &mut [EqualizedItem], viewport_width: u32) {
        self.collect_keys(items);

        for key in &self.keys {
            for item in items.iter_mut().filter(|item| &item.key == key) {
                item.height = Height::Auto;
            }
            let highest = items
                .iter()
                .filter(|item| &item.key == key)
                .map(|item| item.natural_height)
                .max();
            if let Some(highest) = highest {
                for item in items.iter_mut().filter(|item| &item.key == key) {
                    item.height = Height::Px(highest);
                }
            }
        }

        if viewport_width < MEDIUM_BREAKPOINT_PX {
            for item in items.iter_mut().filter(|item| item.medium_up) {
                item.height = Height::Auto;
            }
        }
    }
}
