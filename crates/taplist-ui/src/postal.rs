//! Postal-code management: the one durable preference in the system.
//!
//! Wraps the cookie jar and selects between the "enter code" and "code is
//! set" markup states. Committing or clearing a code returns effects the
//! caller applies: resetting the store query and, on save, reloading the
//! store list for the featured item.

use taplist_core::CookieJar;

pub const POSTAL_CODE_COOKIE: &str = "postalCode";
pub const POSTAL_CODE_TTL_DAYS: i64 = 30;

/// Which of the two postal-code markup states to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PostalCodeUi {
    HaveCode(String),
    NeedCode,
}

/// Side effects of committing or clearing a code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PostalEffect {
    /// Replace the store list with its loading placeholder.
    ShowLoadingPlaceholder,
    /// Empty the store list entirely.
    ClearStoreList,
    /// Discard the store query's cursor and generation.
    ResetStoreQuery,
    /// Re-run the nearby-location lookup for the featured item.
    ReloadStores,
}

pub struct PostalCodeManager {
    jar: CookieJar,
}

impl PostalCodeManager {
    #[must_use]
    pub fn new(jar: CookieJar) -> Self {
        Self { jar }
    }

    /// The jar, for persisting after mutations.
    #[must_use]
    pub fn jar(&self) -> &CookieJar {
        &self.jar
    }

    /// The stored code, or `None` when unset or expired.
    #[must_use]
    pub fn postal_code(&self) -> Option<String> {
        self.jar.get(POSTAL_CODE_COOKIE)
    }

    #[must_use]
    pub fn ui_state(&self) -> PostalCodeUi {
        match self.postal_code() {
            Some(code) => PostalCodeUi::HaveCode(code),
            None => PostalCodeUi::NeedCode,
        }
    }

    /// Markup for the current state: a summary with a "change it" action
    /// when a code is stored, the entry form otherwise.
    #[must_use]
    pub fn markup(&self) -> String {
        match self.ui_state() {
            PostalCodeUi::HaveCode(code) => format!(
                r##"<span class="existing-postal-code">
  Stores near this location: <b><span id="postal-code">{code}</span></b>.
  <a href="#" class="clear-postal-code">Enter another Postal Code</a>
</span>"##
            ),
            PostalCodeUi::NeedCode => r#"<form action="" method="post" class="enter-postal-code">
  <label for="postal-code-input">Enter your postal code to find stores near you</label>
  <input type="text" class="text" pattern="[A-Za-z][0-9][A-Za-z] [0-9][A-Za-z][0-9]" id="postal-code-input" placeholder="M4W 3N5">
  <label for="postal-code-submit" class="screen-reader-only">Submit to find stores near you</label>
  <input type="submit" class="submit" id="postal-code-submit" value="Enter">
</form>"#
                .to_owned(),
        }
    }

    /// Commits a new code for thirty days and reloads the store list.
    pub fn save(&mut self, code: &str) -> Vec<PostalEffect> {
        self.jar.set(POSTAL_CODE_COOKIE, code, POSTAL_CODE_TTL_DAYS);
        vec![
            PostalEffect::ShowLoadingPlaceholder,
            PostalEffect::ResetStoreQuery,
            PostalEffect::ReloadStores,
        ]
    }

    /// Clears the stored code; the caller falls back to the default store
    /// list on its next lookup.
    pub fn clear(&mut self) -> Vec<PostalEffect> {
        self.jar.unset(POSTAL_CODE_COOKIE);
        vec![PostalEffect::ClearStoreList, PostalEffect::ResetStoreQuery]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn save_then_read_round_trips() {
        let mut manager = PostalCodeManager::new(CookieJar::new());
        let _ = manager.save("M4W 3N5");
        assert_eq!(manager.postal_code().as_deref(), Some("M4W 3N5"));
        assert_eq!(
            manager.ui_state(),
            PostalCodeUi::HaveCode("M4W 3N5".to_owned())
        );
    }

    #[test]
    fn clear_yields_absence() {
        let mut manager = PostalCodeManager::new(CookieJar::new());
        let _ = manager.save("M4W 3N5");
        let _ = manager.clear();
        assert_eq!(manager.postal_code(), None);
        assert_eq!(manager.ui_state(), PostalCodeUi::NeedCode);
    }

    #[test]
    fn save_resets_and_reloads_the_store_query() {
        let mut manager = PostalCodeManager::new(CookieJar::new());
        assert_eq!(
            manager.save("K0B 1R0"),
            vec![
                PostalEffect::ShowLoadingPlaceholder,
                PostalEffect::ResetStoreQuery,
                PostalEffect::ReloadStores,
            ]
        );
    }

    #[test]
    fn clear_resets_without_reloading() {
        let mut manager = PostalCodeManager::new(CookieJar::new());
        let _ = manager.save("K0B 1R0");
        let effects = manager.clear();
        assert!(effects.contains(&PostalEffect::ResetStoreQuery));
        assert!(!effects.contains(&PostalEffect::ReloadStores));
    }

    #[test]
    fn markup_matches_ui_state() {
        let mut manager = PostalCodeManager::new(CookieJar::new());
        assert!(manager.markup().contains("postal-code-input"));

        let _ = manager.save("M4W 3N5");
        let markup = manager.markup();
        assert!(markup.contains("M4W 3N5"));
        assert!(markup.contains("Enter another Postal Code"));
    }
}
