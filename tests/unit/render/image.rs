use super::*;
use crate::backend::test::{TestBackend, TestBuffer};
use crate::backend::Backend;
use crate::core::painter::Painter;
use crate::core::tree::UiTree;
use crate::render::RendererSettings;
use crate::theme::Theme;

fn render_into(w: u16, h: u16, source: &ImageSource) -> TestBuffer {
    let mut painter = Painter::new();
    let mut tree = UiTree::new();
    let theme = Theme::default();
    let renderers = RendererSettings::default();
    {
        let mut ui = Ui::new(
            Rect::new(0, 0, w, h),
            &mut painter,
            &mut tree,
            &theme,
            &renderers,
        );
        Placeholder.render(&mut ui, Rect::new(0, 0, w, h), source, Style::default());
    }
    let mut backend = TestBackend::new(w, h);
    backend.draw(Rect::new(0, 0, w, h), painter.cmds());
    backend.buffer().clone()
}

#[test]
fn measure_degrades_with_width() {
    let src = ImageSource::new("https://example.com/a.png");
    assert_eq!(Placeholder.measure(&src, 0), 0);
    assert_eq!(Placeholder.measure(&src, 1), 1);
    assert_eq!(Placeholder.measure(&src, 2), 1);
    assert_eq!(Placeholder.measure(&src, 3), BOX_HEIGHT);
    assert_eq!(Placeholder.measure(&src, 80), BOX_HEIGHT);
}

#[test]
fn one_row_rect_paints_the_icon_marker() {
    let src = ImageSource::new("https://example.com/a.png");
    let buf = render_into(2, 1, &src);
    assert_eq!(buf.cell(0, 0).unwrap().symbol, ICON_MARKER);
}

#[test]
fn box_frames_centered_alt_text() {
    let src = ImageSource::new("https://example.com/a.png").with_alt("poster");
    let buf = render_into(20, 3, &src);

    assert_eq!(buf.cell(0, 0).unwrap().symbol, "┌");
    assert_eq!(buf.cell(19, 0).unwrap().symbol, "┐");
    assert_eq!(buf.cell(0, 2).unwrap().symbol, "└");
    assert_eq!(buf.cell(19, 2).unwrap().symbol, "┘");

    // Inner width 18, alt width 6: centered at x = 1 + 6.
    assert!(buf.row_text(1).contains("poster"));
    assert_eq!(buf.cell(7, 1).unwrap().symbol, "p");
}

#[test]
fn long_alt_truncates_with_ellipsis() {
    let src = ImageSource::new("https://example.com/a.png").with_alt("wide banner image");
    let buf = render_into(8, 3, &src);
    assert!(buf.row_text(1).contains('…'));
    assert!(!buf.row_text(1).contains("image"));
}

#[test]
fn missing_or_empty_alt_reads_image() {
    let unnamed = ImageSource::new("https://example.com/a.png");
    let buf = render_into(12, 3, &unnamed);
    assert!(buf.row_text(1).contains("image"));

    let empty = ImageSource::new("https://example.com/a.png").with_alt("");
    let buf = render_into(12, 3, &empty);
    assert!(buf.row_text(1).contains("image"));
}

#[test]
fn tall_rect_keeps_the_box_at_fixed_height() {
    let src = ImageSource::new("https://example.com/a.png").with_alt("poster");
    let buf = render_into(20, 6, &src);
    // The box occupies the top three rows only.
    assert_eq!(buf.cell(0, 2).unwrap().symbol, "└");
    assert_eq!(buf.cell(0, 3).unwrap().symbol, " ");
}
