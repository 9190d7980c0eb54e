//! Composition root: constructs each component with its collaborators,
//! resolves the effective API key, and assembles the page-module registry.

use taplist_api::{page_url_param, InventoryClient};
use taplist_core::{AppConfig, CookieJar};
use taplist_ui::{HeightEqualizer, Module, NavMenu, PostalCodeManager, Registry};

pub(crate) struct Session {
    pub config: AppConfig,
    pub client: InventoryClient,
    pub postal: PostalCodeManager,
}

impl Session {
    /// Wires the client and the cookie-backed postal manager.
    ///
    /// The API key resolves in override order: an `apikey` query parameter
    /// on the configured page URL wins over the configured key.
    pub(crate) fn new(config: AppConfig) -> anyhow::Result<Self> {
        let api_key = config
            .page_url
            .as_deref()
            .and_then(|url| page_url_param(url, "apikey"))
            .unwrap_or_else(|| config.api_key.clone());

        let client = InventoryClient::with_base_url(
            &api_key,
            config.request_timeout_secs,
            &config.user_agent,
            &config.api_base_url,
        )?;

        let jar = CookieJar::load(&config.cookie_jar_path)?;
        let postal = PostalCodeManager::new(jar);

        Ok(Self {
            config,
            client,
            postal,
        })
    }

    /// Writes the cookie jar back to disk after a mutation.
    pub(crate) fn persist_jar(&self) -> anyhow::Result<()> {
        self.postal.jar().save(&self.config.cookie_jar_path)?;
        Ok(())
    }
}

struct MenuModule {
    menu: NavMenu,
}

impl Module for MenuModule {
    fn initialize(&mut self) {
        tracing::debug!(open = self.menu.is_open(), "navigation menu listeners armed");
    }
}

struct FocusTrapModule;

impl Module for FocusTrapModule {
    fn initialize(&mut self) {
        tracing::debug!("focus trap listeners armed");
    }
}

struct EqualizeModule {
    equalizer: HeightEqualizer,
}

impl Module for EqualizeModule {
    fn ready(&mut self) {
        tracing::debug!(
            keys = self.equalizer.keys().len(),
            "height equalizer watching load/resize"
        );
    }
}

/// Registers the page's interactive modules under their unique names.
/// A duplicate name here is a wiring bug and aborts startup.
pub(crate) fn page_registry() -> anyhow::Result<Registry> {
    let mut registry = Registry::new();
    registry.register(
        "hamburgerMenu",
        Box::new(MenuModule {
            menu: NavMenu::new(),
        }),
    )?;
    registry.register("accessibility", Box::new(FocusTrapModule))?;
    registry.register(
        "equalizeHeights",
        Box::new(EqualizeModule {
            equalizer: HeightEqualizer::new(),
        }),
    )?;
    Ok(registry)
}
