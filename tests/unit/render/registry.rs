use super::*;
use crate::core::geom::Rect;
use crate::core::style::Style;
use crate::core::widget::Ui;
use crate::message::ImageSource;
use crate::render::{ImageRenderer, ImageSlot, RendererSettings, TextRenderer, TextSlot};

struct Named(&'static str);

impl Renderer for Named {
    fn name(&self) -> Option<&str> {
        Some(self.0)
    }
}

impl TextRenderer for Named {
    fn measure(&self, _text: &str, _width: u16) -> u16 {
        1
    }

    fn render(&self, _ui: &mut Ui, _rect: Rect, _text: &str, _style: Style) {}
}

struct Anonymous;

impl Renderer for Anonymous {}

impl TextRenderer for Anonymous {
    fn measure(&self, _text: &str, _width: u16) -> u16 {
        1
    }

    fn render(&self, _ui: &mut Ui, _rect: Rect, _text: &str, _style: Style) {}
}

struct StubImage;

impl Renderer for StubImage {}

impl ImageRenderer for StubImage {
    fn measure(&self, _source: &ImageSource, _width: u16) -> u16 {
        1
    }

    fn render(&self, _ui: &mut Ui, _rect: Rect, _source: &ImageSource, _style: Style) {}
}

fn text_registry() -> (Registry<TextSlot, dyn TextRenderer>, Arc<dyn TextRenderer>) {
    let default: Arc<dyn TextRenderer> = Arc::new(Named("plain"));
    (Registry::new(Arc::clone(&default)), default)
}

#[test]
fn unset_slots_resolve_to_the_default_identity() {
    let (reg, default) = text_registry();
    for slot in TextSlot::ALL {
        assert!(
            Arc::ptr_eq(reg.resolve(*slot).renderer(), &default),
            "slot {slot:?} should fall back to default"
        );
    }
}

#[test]
fn registered_slot_resolves_to_that_renderer() {
    let (mut reg, default) = text_registry();
    let markdown: Arc<dyn TextRenderer> = Arc::new(Named("markdown-it"));
    reg.register(TextSlot::Markdown, Arc::clone(&markdown));

    assert!(Arc::ptr_eq(
        reg.resolve(TextSlot::Markdown).renderer(),
        &markdown
    ));
    // Other slots still degrade to default.
    assert!(Arc::ptr_eq(
        reg.resolve(TextSlot::UserContent).renderer(),
        &default
    ));
}

#[test]
fn get_reports_absence_resolve_never_does() {
    let (reg, _default) = text_registry();
    assert!(reg.get(TextSlot::Markdown).is_none());
    assert!(reg.get(TextSlot::Default).is_some());
    // resolve always yields an entry.
    let _ = reg.resolve(TextSlot::Markdown);
}

#[test]
fn registering_the_default_slot_replaces_the_default() {
    let (mut reg, old_default) = text_registry();
    let new_default: Arc<dyn TextRenderer> = Arc::new(Named("fancy"));
    reg.register(TextSlot::Default, Arc::clone(&new_default));

    assert!(Arc::ptr_eq(
        reg.resolve(TextSlot::Markdown).renderer(),
        &new_default
    ));
    assert!(!Arc::ptr_eq(
        reg.resolve(TextSlot::Default).renderer(),
        &old_default
    ));
    assert_eq!(reg.default_entry().label(), "Text(fancy)");
}

#[test]
fn labels_synthesize_from_renderer_name() {
    let (mut reg, _default) = text_registry();
    assert_eq!(reg.default_entry().label(), "Text(plain)");

    reg.register(TextSlot::Markdown, Arc::new(Named("markdown-it")));
    assert_eq!(reg.resolve(TextSlot::Markdown).label(), "Text(markdown-it)");
}

#[test]
fn anonymous_renderers_are_labeled_after_their_slot() {
    let mut reg: Registry<TextSlot, dyn TextRenderer> = Registry::new(Arc::new(Anonymous));
    assert_eq!(reg.default_entry().label(), "Text(default)");

    reg.register(TextSlot::Markdown, Arc::new(Anonymous));
    assert_eq!(reg.resolve(TextSlot::Markdown).label(), "Text(markdown)");
}

#[test]
fn repeated_resolution_is_stable() {
    let (mut reg, _default) = text_registry();
    reg.register(TextSlot::Markdown, Arc::new(Named("markdown-it")));

    let first_label = reg.resolve(TextSlot::Markdown).label().to_string();
    let first = Arc::clone(reg.resolve(TextSlot::Markdown).renderer());
    assert_eq!(reg.resolve(TextSlot::Markdown).label(), first_label);
    assert!(Arc::ptr_eq(reg.resolve(TextSlot::Markdown).renderer(), &first));

    // The unset path is just as stable.
    let fallback = Arc::clone(reg.resolve(TextSlot::UserContent).renderer());
    assert!(Arc::ptr_eq(
        reg.resolve(TextSlot::UserContent).renderer(),
        &fallback
    ));
}

#[test]
fn image_registry_resolves_bound_and_falls_back_unbound() {
    let default: Arc<dyn ImageRenderer> = Arc::new(StubImage);
    let card: Arc<dyn ImageRenderer> = Arc::new(StubImage);
    let mut reg: Registry<ImageSlot, dyn ImageRenderer> = Registry::new(Arc::clone(&default));
    reg.register(ImageSlot::Card, Arc::clone(&card));

    assert!(Arc::ptr_eq(reg.resolve(ImageSlot::Card).renderer(), &card));
    assert!(Arc::ptr_eq(
        reg.resolve(ImageSlot::Standalone).renderer(),
        &default
    ));
}

#[test]
fn debug_lists_only_bound_slots() {
    let (mut reg, _default) = text_registry();
    reg.register(TextSlot::Markdown, Arc::new(Named("markdown-it")));

    let dump = format!("{reg:?}");
    assert!(dump.contains("\"default\""));
    assert!(dump.contains("\"markdown\""));
    assert!(!dump.contains("user_content"));
}

#[test]
fn settings_default_wires_builtin_renderers() {
    let settings = RendererSettings::default();

    assert_eq!(settings.text.resolve(TextSlot::Default).label(), "Text(plain)");
    assert_eq!(
        settings.text.resolve(TextSlot::MarkdownInline).label(),
        "Text(inline)"
    );
    assert_eq!(
        settings.text.resolve(TextSlot::UserContent).label(),
        "Text(sanitized)"
    );
    // Markdown ships unset and degrades to the default.
    assert!(settings.text.get(TextSlot::Markdown).is_none());
    assert_eq!(settings.text.resolve(TextSlot::Markdown).label(), "Text(plain)");
    assert_eq!(
        settings.image.resolve(ImageSlot::Standalone).label(),
        "Image(placeholder)"
    );
}
