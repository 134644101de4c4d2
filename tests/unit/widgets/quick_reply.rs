use super::*;
use crate::backend::test::{TestBackend, TestBuffer};
use crate::backend::Backend;
use crate::core::painter::Painter;
use crate::core::tree::UiTree;
use crate::render::RendererSettings;

fn base() -> IdPath {
    IdPath::root("test")
}

fn reply_id(idx: u64) -> Id {
    base().push_str("reply").push_u64(idx).finish()
}

fn run(replies: &[QuickReply], focused: Option<Id>, w: u16) -> (Painter, UiTree) {
    let mut painter = Painter::new();
    let mut tree = UiTree::new();
    let theme = Theme::default();
    let renderers = RendererSettings::default();
    {
        let mut ui = Ui::new(
            Rect::new(0, 0, w, 1),
            &mut painter,
            &mut tree,
            &theme,
            &renderers,
        );
        let mut bar = QuickReplyBar {
            id_base: base(),
            layer: 0,
            replies,
            focused,
            custom_style: None,
        };
        bar.ui(&mut ui);
    }
    (painter, tree)
}

fn replay(painter: &Painter, w: u16) -> TestBuffer {
    let mut backend = TestBackend::new(w, 1);
    backend.draw(Rect::new(0, 0, w, 1), painter.cmds());
    backend.buffer().clone()
}

#[test]
fn empty_reply_list_is_inert() {
    let (painter, tree) = run(&[], None, 20);
    assert!(painter.cmds().is_empty());
    assert!(tree.nodes().is_empty());
}

#[test]
fn pills_flow_left_to_right_with_a_gap() {
    let replies = [QuickReply::new("Yes", "yes"), QuickReply::new("No", "no")];
    let (painter, tree) = run(&replies, None, 20);

    assert_eq!(tree.nodes().len(), 2);
    assert_eq!(tree.nodes()[0].rect, Rect::new(0, 0, 5, 1));
    assert_eq!(tree.nodes()[0].kind, NodeKind::QuickReply { index: 0 });
    assert_eq!(tree.nodes()[1].rect, Rect::new(6, 0, 4, 1));
    assert_eq!(tree.nodes()[1].kind, NodeKind::QuickReply { index: 1 });

    let buf = replay(&painter, 20);
    assert!(buf.row_text(0).contains(" Yes "));
    assert!(buf.row_text(0).contains(" No "));
}

#[test]
fn pills_are_dropped_whole_never_clipped() {
    let replies = [QuickReply::new("Yes", "yes"), QuickReply::new("Nope", "no")];
    // " Yes " fits in 8 columns, " Nope " does not.
    let (painter, tree) = run(&replies, None, 8);

    assert_eq!(tree.nodes().len(), 1);
    assert_eq!(tree.nodes()[0].kind, NodeKind::QuickReply { index: 0 });
    assert!(!replay(&painter, 8).row_text(0).contains('N'));
}

#[test]
fn even_the_first_pill_is_dropped_when_too_wide() {
    let replies = [QuickReply::new("Absolutely", "yes")];
    let (painter, tree) = run(&replies, None, 4);
    assert!(tree.nodes().is_empty());
    assert!(painter.cmds().is_empty());
}

#[test]
fn pills_sense_hover_click_and_focus() {
    let replies = [QuickReply::new("Yes", "yes")];
    let (_painter, tree) = run(&replies, None, 20);
    let sense = tree.nodes()[0].sense;
    assert!(sense.contains(Sense::HOVER | Sense::CLICK | Sense::FOCUS));
}

#[test]
fn focused_pill_takes_the_focused_style() {
    let theme = Theme::default();
    let replies = [QuickReply::new("Yes", "yes"), QuickReply::new("No", "no")];
    let (painter, _tree) = run(&replies, Some(reply_id(1)), 20);
    let buf = replay(&painter, 20);

    assert_eq!(
        buf.cell(6, 0).unwrap().style.bg,
        Some(theme.quick_reply_focused_bg)
    );
    assert_eq!(buf.cell(0, 0).unwrap().style.bg, Some(theme.quick_reply_bg));
}
