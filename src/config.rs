//! Host-facing configuration.
//!
//! `ChatConfig` is assembled once at startup and handed to the host's render
//! loop. The kit reads it; it never mutates it after setup.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use futures::future::BoxFuture;

use crate::render::RendererSettings;
use crate::theme::adapter::adapt_theme;
use crate::theme::color_support::detect_terminal_color_support;
use crate::theme::Theme;

/// Async source of extra HTTP headers for host networking (auth tokens and
/// the like). The kit stores the provider and hands it back out; it performs
/// no requests itself.
pub type HeaderProvider =
    Arc<dyn Fn() -> BoxFuture<'static, HashMap<String, String>> + Send + Sync>;

pub struct ChatConfig {
    pub renderers: RendererSettings,
    pub theme: Theme,
    /// Minimum delay the host should leave between consecutive bot messages.
    pub timeout_between_messages: Duration,
    pub extra_headers_provider: Option<HeaderProvider>,
    /// Opaque per-widget payloads the host defines; the kit passes them
    /// through untouched.
    pub widgets: serde_json::Map<String, serde_json::Value>,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            renderers: RendererSettings::default(),
            theme: Theme::default(),
            timeout_between_messages: Duration::from_secs(1),
            extra_headers_provider: None,
            widgets: serde_json::Map::new(),
        }
    }
}

impl ChatConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_renderers(mut self, renderers: RendererSettings) -> Self {
        self.renderers = renderers;
        self
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn with_timeout_between_messages(mut self, timeout: Duration) -> Self {
        self.timeout_between_messages = timeout;
        self
    }

    pub fn with_extra_headers_provider(mut self, provider: HeaderProvider) -> Self {
        self.extra_headers_provider = Some(provider);
        self
    }

    pub fn with_widget(mut self, name: impl Into<String>, payload: serde_json::Value) -> Self {
        self.widgets.insert(name.into(), payload);
        self
    }

    /// The configured theme downgraded to what the current terminal can
    /// show, per detected color support.
    pub fn terminal_theme(&self) -> Theme {
        adapt_theme(&self.theme, detect_terminal_color_support())
    }
}

impl fmt::Debug for ChatConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChatConfig")
            .field("renderers", &self.renderers)
            .field("theme", &self.theme)
            .field("timeout_between_messages", &self.timeout_between_messages)
            .field(
                "extra_headers_provider",
                &self.extra_headers_provider.is_some(),
            )
            .field("widgets", &self.widgets)
            .finish()
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
