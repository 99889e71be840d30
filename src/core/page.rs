use crate::core::events::Trigger;
use crate::domain::module::ModuleName;
use crate::utils::html::escape;
use scraper::{Html, Selector};
use std::collections::{BTreeMap, BTreeSet};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

pub const CONTAINER_ID: &str = "content-container";

const LOADER_HTML: &str = r#"<div class="loader"><div class="spinner"></div></div>"#;

/// Inline failure notice with a retry control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorBlock {
    /// What failed to load, e.g. `opportunities` or `job listings`.
    pub label: String,
    pub retry: ModuleName,
    pub detail: Option<String>,
}

impl ErrorBlock {
    pub fn for_module(module: ModuleName) -> Self {
        Self {
            label: module.to_string(),
            retry: module,
            detail: None,
        }
    }

    pub fn to_html(&self) -> String {
        let detail = self
            .detail
            .as_deref()
            .map(|d| format!("\n    <p class=\"error-detail\">{}</p>", escape(d)))
            .unwrap_or_default();

        format!(
            r#"<div class="error-message">
    <p>Error loading {} data. Please try again later.</p>{}
    <button data-retry="{}">Retry</button>
</div>"#,
            escape(&self.label),
            detail,
            self.retry
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Overlay {
    Loader,
    Error(ErrorBlock),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Binding {
    pub module: ModuleName,
    pub trigger: Trigger,
    pub selector: &'static str,
}

#[derive(Debug, Default)]
struct PageState {
    current: Option<ModuleName>,
    content: String,
    overlays: Vec<Overlay>,
    regions: BTreeMap<String, String>,
    revealed: BTreeSet<String>,
    bindings: Vec<Binding>,
}

/// Headless stand-in for the content container and everything attached to it.
///
/// Cloning yields another handle to the same page.
#[derive(Debug, Clone, Default)]
pub struct Page {
    state: Arc<Mutex<PageState>>,
}

impl Page {
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> MutexGuard<'_, PageState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Replaces the container markup. Regions, bindings and error blocks that
    /// belonged to the previous content go with it; loaders stay.
    pub fn set_content(&self, module: ModuleName, html: String) {
        let mut state = self.state();
        state.current = Some(module);
        state.content = html;
        state.regions.clear();
        state.revealed.clear();
        state.bindings.clear();
        state.overlays.retain(|overlay| *overlay == Overlay::Loader);
    }

    pub fn content(&self) -> String {
        self.state().content.clone()
    }

    pub fn current_module(&self) -> Option<ModuleName> {
        self.state().current
    }

    /// Whether `selector` matches anything in the current content. Invalid
    /// selectors match nothing.
    pub fn has_element(&self, selector: &str) -> bool {
        let Ok(selector) = Selector::parse(selector) else {
            tracing::warn!("Invalid selector: {}", selector);
            return false;
        };
        let content = self.content();
        let fragment = Html::parse_fragment(&content);
        let found = fragment.select(&selector).next().is_some();
        found
    }

    pub fn show_loading(&self) {
        self.state().overlays.push(Overlay::Loader);
    }

    /// Removes the oldest loader, if any.
    pub fn hide_loading(&self) {
        let mut state = self.state();
        if let Some(index) = state.overlays.iter().position(|o| *o == Overlay::Loader) {
            state.overlays.remove(index);
        }
    }

    /// Shows a loader until the returned guard drops.
    pub fn loading(&self) -> LoadingGuard {
        self.show_loading();
        LoadingGuard { page: self.clone() }
    }

    pub fn is_loading(&self) -> bool {
        self.state().overlays.contains(&Overlay::Loader)
    }

    pub fn show_error(&self, block: ErrorBlock) {
        self.state().overlays.push(Overlay::Error(block));
    }

    pub fn errors(&self) -> Vec<ErrorBlock> {
        self.state()
            .overlays
            .iter()
            .filter_map(|overlay| match overlay {
                Overlay::Error(block) => Some(block.clone()),
                Overlay::Loader => None,
            })
            .collect()
    }

    /// Sets the inner markup of `selector`; does nothing when the element is
    /// not part of the current content.
    pub fn render_region(&self, selector: &str, html: String) -> bool {
        if !self.has_element(selector) {
            tracing::debug!("Region {} not present, skipping render", selector);
            return false;
        }
        self.state().regions.insert(selector.to_string(), html);
        true
    }

    pub fn region(&self, selector: &str) -> Option<String> {
        self.state().regions.get(selector).cloned()
    }

    pub fn reveal(&self, selector: &str) -> bool {
        if !self.has_element(selector) {
            return false;
        }
        self.state().revealed.insert(selector.to_string());
        true
    }

    pub fn is_revealed(&self, selector: &str) -> bool {
        self.state().revealed.contains(selector)
    }

    /// Attaches a binding unless an identical one is already attached.
    pub fn bind(&self, binding: Binding) -> bool {
        let mut state = self.state();
        if state.bindings.contains(&binding) {
            return false;
        }
        state.bindings.push(binding);
        true
    }

    pub fn binding_for(&self, trigger: Trigger, selector: &str) -> Option<Binding> {
        self.state()
            .bindings
            .iter()
            .find(|b| b.trigger == trigger && b.selector == selector)
            .copied()
    }

    pub fn bindings(&self) -> Vec<Binding> {
        self.state().bindings.clone()
    }

    /// Serializes the container with its rendered regions and overlays.
    pub fn snapshot(&self) -> String {
        let state = self.state();
        let mut html = format!("<div id=\"{}\">\n{}\n", CONTAINER_ID, state.content.trim());

        for (selector, inner) in &state.regions {
            html.push_str(&format!(
                "<section data-region=\"{}\">\n{}\n</section>\n",
                escape(selector),
                inner.trim()
            ));
        }
        for selector in &state.revealed {
            html.push_str(&format!("<!-- {} display: block -->\n", escape(selector)));
        }
        for overlay in &state.overlays {
            match overlay {
                Overlay::Loader => html.push_str(LOADER_HTML),
                Overlay::Error(block) => html.push_str(&block.to_html()),
            }
            html.push('\n');
        }

        html.push_str("</div>\n");
        html
    }
}

/// Hides its loader on drop, whichever way the work ended.
#[must_use = "the loader is hidden as soon as the guard drops"]
pub struct LoadingGuard {
    page: Page,
}

impl Drop for LoadingGuard {
    fn drop(&mut self) {
        self.page.hide_loading();
    }
}
