use super::*;

#[test]
fn records_commands_in_call_order() {
    let mut p = Painter::new();
    let r = Rect::new(0, 0, 4, 2);
    p.fill_rect(r, Style::default());
    p.text(Pos::new(1, 1), "hi", Style::default());

    let cmds = p.cmds();
    assert_eq!(cmds.len(), 2);
    assert!(matches!(cmds[0], PaintCmd::FillRect { .. }));
    assert!(matches!(&cmds[1], PaintCmd::Text { text, clip: None, .. } if text == "hi"));
}

#[test]
fn clear_drops_all_commands() {
    let mut p = Painter::new();
    p.hline(Pos::new(0, 0), 3, '-', Style::default());
    assert_eq!(p.cmds().len(), 1);
    p.clear();
    assert!(p.cmds().is_empty());
}

#[test]
fn text_clipped_carries_the_clip_rect() {
    let mut p = Painter::new();
    let clip = Rect::new(2, 2, 5, 1);
    p.text_clipped(Pos::new(2, 2), "clipped", Style::default(), clip);

    match &p.cmds()[0] {
        PaintCmd::Text { clip: Some(c), .. } => assert_eq!(*c, clip),
        other => panic!("expected clipped text, got {other:?}"),
    }
}

#[test]
fn line_helpers_record_geometry() {
    let mut p = Painter::new();
    p.hline(Pos::new(1, 2), 7, '─', Style::default());
    p.vline(Pos::new(3, 0), 4, '│', Style::default());

    assert!(
        matches!(p.cmds()[0], PaintCmd::HLine { pos, len, ch, .. } if pos == Pos::new(1, 2) && len == 7 && ch == '─')
    );
    assert!(
        matches!(p.cmds()[1], PaintCmd::VLine { pos, len, ch, .. } if pos == Pos::new(3, 0) && len == 4 && ch == '│')
    );
}

#[test]
fn border_glyph_sets_differ_by_kind() {
    let plain = border_glyphs(BorderKind::Plain);
    let rounded = border_glyphs(BorderKind::Rounded);
    assert_eq!(plain.0, '┌');
    assert_eq!(rounded.0, '╭');
    // Edges are shared between the two sets.
    assert_eq!(plain.4, rounded.4);
    assert_eq!(plain.5, rounded.5);
}
