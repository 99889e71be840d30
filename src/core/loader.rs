use crate::config::SharedConfig;
use crate::core::events::{EventOutcome, UiEvent};
use crate::core::initializers::ModuleHandlers;
use crate::core::page::{ErrorBlock, Page};
use crate::domain::module::ModuleName;
use crate::domain::ports::FragmentSource;
use crate::utils::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    Loaded,
    Failed,
    /// The module's feature flag is off.
    Disabled,
    /// The name matched no module.
    Unknown,
}

/// Loads module fragments into the page and routes events to their handlers.
pub struct ScoutApp<F: FragmentSource> {
    config: SharedConfig,
    fragments: F,
    page: Page,
    handlers: ModuleHandlers,
}

impl<F: FragmentSource> ScoutApp<F> {
    pub fn new(config: SharedConfig, fragments: F) -> Self {
        Self::with_page(config, fragments, Page::new())
    }

    pub fn with_page(config: SharedConfig, fragments: F, page: Page) -> Self {
        Self {
            handlers: ModuleHandlers::new(config.clone(), page.clone()),
            config,
            fragments,
            page,
        }
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    /// Page ready: load the default module.
    pub async fn start(&self) -> LoadOutcome {
        tracing::info!(
            "Starting {} {} ({})",
            self.config.app.name,
            self.config.app.version,
            self.config.app.environment
        );
        self.load_module(ModuleName::DEFAULT).await
    }

    pub async fn load_module_by_name(&self, name: &str) -> LoadOutcome {
        match name.parse::<ModuleName>() {
            Ok(module) => self.load_module(module).await,
            Err(e) => {
                tracing::debug!("{}, ignoring", e);
                LoadOutcome::Unknown
            }
        }
    }

    /// Fetches the module's fragment, swaps it into the container and runs the
    /// initializer. Failures leave an error block with a retry control.
    pub async fn load_module(&self, module: ModuleName) -> LoadOutcome {
        if !module.is_enabled(&self.config.features) {
            tracing::info!("Module {} is disabled, not loading", module);
            return LoadOutcome::Disabled;
        }

        let _loading = self.page.loading();
        match self.try_load(module).await {
            Ok(()) => {
                tracing::info!("Module {} loaded", module);
                LoadOutcome::Loaded
            }
            Err(e) => {
                tracing::error!(
                    "Error loading module {}: {} (Category: {:?})",
                    module,
                    e,
                    e.category()
                );
                self.page.show_error(ErrorBlock::for_module(module));
                LoadOutcome::Failed
            }
        }
    }

    async fn try_load(&self, module: ModuleName) -> Result<()> {
        let html = self
            .fragments
            .fetch_fragment(&module.fragment_file())
            .await?;
        self.page.set_content(module, html);
        self.handlers.initialize(module).await
    }

    pub async fn dispatch(&self, event: UiEvent) -> EventOutcome {
        match event {
            UiEvent::NavClicked(module) | UiEvent::RetryClicked(module) => {
                match self.load_module(module).await {
                    LoadOutcome::Loaded => EventOutcome::Handled,
                    LoadOutcome::Failed => EventOutcome::Failed,
                    LoadOutcome::Disabled | LoadOutcome::Unknown => EventOutcome::Ignored,
                }
            }
            event => self.handlers.handle(event).await,
        }
    }
}
