//! Pluggable content renderers.
//!
//! Widgets never draw message content themselves: they ask the registries for
//! a renderer by semantic slot and invoke whatever comes back. A registry
//! always resolves to *some* renderer — unset slots fall back to `default`,
//! which is supplied at construction and therefore cannot be absent. A missing
//! specialized renderer must never break the transcript; it degrades.

pub mod image;
pub mod registry;
pub mod text;

use std::fmt;
use std::sync::Arc;

use crate::core::geom::Rect;
use crate::core::style::Style;
use crate::core::widget::Ui;
use crate::message::ImageSource;

use self::image::Placeholder;
use self::registry::Registry;
use self::text::{InlineText, PlainText, SanitizedText};

/// A registry's slot set: a fixed enum with a mandatory `default` member.
pub trait Slot: Copy + Eq + fmt::Debug + 'static {
    /// Registry kind as it appears in debug labels ("Text", "Image").
    const KIND: &'static str;
    const DEFAULT: Self;
    const ALL: &'static [Self];

    fn name(self) -> &'static str;
    fn index(self) -> usize;
}

/// Semantic slots for text content.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TextSlot {
    Default,
    /// Block markdown (bot-authored rich text).
    Markdown,
    /// Single-line markdown fragments (card subtitles, captions).
    MarkdownInline,
    /// Untrusted user-authored text; rendered through a sanitizer.
    UserContent,
}

impl Slot for TextSlot {
    const KIND: &'static str = "Text";
    const DEFAULT: Self = Self::Default;
    const ALL: &'static [Self] = &[
        Self::Default,
        Self::Markdown,
        Self::MarkdownInline,
        Self::UserContent,
    ];

    fn name(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Markdown => "markdown",
            Self::MarkdownInline => "markdown_inline",
            Self::UserContent => "user_content",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// Semantic slots for image content.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ImageSlot {
    Default,
    /// An image that is the whole message.
    Standalone,
    /// A card's cover image.
    Card,
    /// A small icon inside a button row.
    ButtonIcon,
}

impl Slot for ImageSlot {
    const KIND: &'static str = "Image";
    const DEFAULT: Self = Self::Default;
    const ALL: &'static [Self] = &[
        Self::Default,
        Self::Standalone,
        Self::Card,
        Self::ButtonIcon,
    ];

    fn name(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Standalone => "standalone",
            Self::Card => "card",
            Self::ButtonIcon => "button_icon",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// Common surface of every registered renderer.
pub trait Renderer {
    /// Intrinsic name used in debug labels; `None` makes the registry label
    /// the renderer after the slot it is registered under.
    fn name(&self) -> Option<&str> {
        None
    }
}

/// Draws text content into a rect. Renderers own their wrapping/truncation
/// policy; `measure` must agree with what `render` paints.
pub trait TextRenderer: Renderer + Send + Sync {
    fn measure(&self, text: &str, width: u16) -> u16;
    fn render(&self, ui: &mut Ui, rect: Rect, text: &str, style: Style);
}

/// Draws image content into a rect. The kit never fetches or decodes image
/// data; what a renderer paints for a source is its business (the built-in
/// one paints a placeholder box, hosts with graphics protocols install their
/// own).
pub trait ImageRenderer: Renderer + Send + Sync {
    fn measure(&self, source: &ImageSource, width: u16) -> u16;
    fn render(&self, ui: &mut Ui, rect: Rect, source: &ImageSource, style: Style);
}

/// The per-app-instance renderer configuration: one registry per content
/// kind. Hosts override slots at setup time; widgets resolve per render pass.
pub struct RendererSettings {
    pub text: Registry<TextSlot, dyn TextRenderer>,
    pub image: Registry<ImageSlot, dyn ImageRenderer>,
}

impl RendererSettings {
    pub fn new(default_text: Arc<dyn TextRenderer>, default_image: Arc<dyn ImageRenderer>) -> Self {
        Self {
            text: Registry::new(default_text),
            image: Registry::new(default_image),
        }
    }
}

impl Default for RendererSettings {
    /// Out-of-the-box configuration: wrapping plain text as the text default,
    /// a placeholder box as the image default, inline truncation for
    /// `MarkdownInline`, and the sanitizer for `UserContent`. `Markdown` is
    /// intentionally left unset so it degrades to plain text until a host
    /// installs a markdown renderer.
    fn default() -> Self {
        let mut settings = Self::new(Arc::new(PlainText), Arc::new(Placeholder));
        settings
            .text
            .register(TextSlot::MarkdownInline, Arc::new(InlineText));
        settings
            .text
            .register(TextSlot::UserContent, Arc::new(SanitizedText));
        settings
    }
}

impl fmt::Debug for RendererSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RendererSettings")
            .field("text", &self.text)
            .field("image", &self.image)
            .finish()
    }
}
