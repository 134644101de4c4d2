use super::*;
use crate::core::style::Color;

fn red() -> Style {
    Style::default().fg(Color::Indexed(1))
}

fn blue() -> Style {
    Style::default().fg(Color::Indexed(4))
}

fn draw(backend: &mut TestBackend, cmds: Vec<PaintCmd>) {
    let area = backend.buffer().area();
    backend.draw(area, &cmds);
}

#[test]
fn fill_then_text_replays_in_order() {
    let mut backend = TestBackend::new(10, 2);
    draw(
        &mut backend,
        vec![
            PaintCmd::FillRect {
                rect: Rect::new(0, 0, 10, 2),
                style: red(),
            },
            PaintCmd::Text {
                pos: Pos::new(1, 0),
                text: "hi".to_string(),
                style: blue(),
                clip: None,
            },
        ],
    );

    let buf = backend.buffer();
    assert_eq!(buf.cell(1, 0).unwrap().symbol, "h");
    assert_eq!(buf.cell(1, 0).unwrap().style, blue());
    assert_eq!(buf.cell(0, 0).unwrap().symbol, " ");
    assert_eq!(buf.cell(0, 0).unwrap().style, red());
    assert_eq!(buf.row_text(0), " hi       ");
}

#[test]
fn text_clips_to_the_buffer_by_default() {
    let mut backend = TestBackend::new(5, 1);
    draw(
        &mut backend,
        vec![
            PaintCmd::Text {
                pos: Pos::new(3, 0),
                text: "abcdef".to_string(),
                style: red(),
                clip: None,
            },
            PaintCmd::Text {
                pos: Pos::new(0, 4),
                text: "below".to_string(),
                style: red(),
                clip: None,
            },
        ],
    );

    assert_eq!(backend.buffer().row_text(0), "   ab");
}

#[test]
fn explicit_clip_skips_cells_outside_it() {
    let mut backend = TestBackend::new(10, 1);
    draw(
        &mut backend,
        vec![PaintCmd::Text {
            pos: Pos::new(0, 0),
            text: "hello".to_string(),
            style: red(),
            clip: Some(Rect::new(2, 0, 3, 1)),
        }],
    );

    // The first two glyphs fall before the clip and are skipped in place.
    assert_eq!(backend.buffer().row_text(0), "  llo     ");
}

#[test]
fn wide_glyphs_never_render_partially() {
    let mut backend = TestBackend::new(10, 1);
    draw(
        &mut backend,
        vec![PaintCmd::Text {
            pos: Pos::new(0, 0),
            text: "日本".to_string(),
            style: red(),
            clip: Some(Rect::new(0, 0, 3, 1)),
        }],
    );

    let buf = backend.buffer();
    assert_eq!(buf.cell(0, 0).unwrap().symbol, "日");
    // Continuation cell is blanked and styled with the glyph.
    assert_eq!(buf.cell(1, 0).unwrap().symbol, " ");
    assert_eq!(buf.cell(1, 0).unwrap().style, red());
    // The second glyph would cross the clip edge, so it is dropped whole.
    assert_eq!(buf.cell(2, 0).unwrap().symbol, " ");
    assert_eq!(buf.cell(2, 0).unwrap().style, Style::default());
}

#[test]
fn lines_clip_to_the_buffer() {
    let mut backend = TestBackend::new(10, 4);
    draw(
        &mut backend,
        vec![
            PaintCmd::HLine {
                pos: Pos::new(8, 0),
                len: 5,
                ch: '─',
                style: red(),
            },
            PaintCmd::VLine {
                pos: Pos::new(0, 2),
                len: 9,
                ch: '│',
                style: red(),
            },
        ],
    );

    let buf = backend.buffer();
    assert_eq!(buf.cell(8, 0).unwrap().symbol, "─");
    assert_eq!(buf.cell(9, 0).unwrap().symbol, "─");
    assert_eq!(buf.cell(0, 2).unwrap().symbol, "│");
    assert_eq!(buf.cell(0, 3).unwrap().symbol, "│");
}

#[test]
fn border_uses_the_requested_glyph_set() {
    let mut backend = TestBackend::new(6, 3);
    draw(
        &mut backend,
        vec![PaintCmd::Border {
            rect: Rect::new(0, 0, 4, 3),
            style: red(),
            kind: BorderKind::Plain,
        }],
    );
    let buf = backend.buffer();
    assert_eq!(buf.cell(0, 0).unwrap().symbol, "┌");
    assert_eq!(buf.cell(3, 0).unwrap().symbol, "┐");
    assert_eq!(buf.cell(0, 2).unwrap().symbol, "└");
    assert_eq!(buf.cell(3, 2).unwrap().symbol, "┘");
    assert_eq!(buf.cell(1, 0).unwrap().symbol, "─");
    assert_eq!(buf.cell(0, 1).unwrap().symbol, "│");

    let mut backend = TestBackend::new(6, 3);
    draw(
        &mut backend,
        vec![PaintCmd::Border {
            rect: Rect::new(0, 0, 4, 3),
            style: red(),
            kind: BorderKind::Rounded,
        }],
    );
    assert_eq!(backend.buffer().cell(0, 0).unwrap().symbol, "╭");
    assert_eq!(backend.buffer().cell(3, 2).unwrap().symbol, "╯");
}

#[test]
fn degenerate_borders_are_ignored() {
    let mut backend = TestBackend::new(6, 3);
    draw(
        &mut backend,
        vec![PaintCmd::Border {
            rect: Rect::new(0, 0, 1, 3),
            style: red(),
            kind: BorderKind::Plain,
        }],
    );
    assert_eq!(backend.buffer().cell(0, 0).unwrap().symbol, " ");
}

#[test]
fn style_rect_keeps_symbols() {
    let mut backend = TestBackend::new(10, 1);
    draw(
        &mut backend,
        vec![
            PaintCmd::Text {
                pos: Pos::new(0, 0),
                text: "ab".to_string(),
                style: red(),
                clip: None,
            },
            PaintCmd::StyleRect {
                rect: Rect::new(0, 0, 2, 1),
                style: blue(),
            },
        ],
    );

    let buf = backend.buffer();
    assert_eq!(buf.cell(0, 0).unwrap().symbol, "a");
    assert_eq!(buf.cell(0, 0).unwrap().style, blue());
    assert_eq!(buf.cell(1, 0).unwrap().symbol, "b");
}

#[test]
fn out_of_bounds_commands_are_no_ops() {
    let mut backend = TestBackend::new(4, 2);
    draw(
        &mut backend,
        vec![
            PaintCmd::FillRect {
                rect: Rect::new(10, 10, 3, 3),
                style: red(),
            },
            PaintCmd::HLine {
                pos: Pos::new(6, 0),
                len: 2,
                ch: 'x',
                style: red(),
            },
        ],
    );

    let buf = backend.buffer();
    for y in 0..2 {
        assert_eq!(buf.row_text(y), "    ");
    }
}

#[test]
fn cursor_is_recorded() {
    let mut backend = TestBackend::new(4, 2);
    assert_eq!(backend.cursor(), None);
    backend.set_cursor(Some(Pos::new(1, 1)));
    assert_eq!(backend.cursor(), Some(Pos::new(1, 1)));
    backend.set_cursor(None);
    assert_eq!(backend.cursor(), None);
}
