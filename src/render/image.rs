use unicode_width::UnicodeWidthStr;

use super::text::truncate_to_width;
use super::{ImageRenderer, Renderer};
use crate::core::geom::{Insets, Pos, Rect};
use crate::core::painter::BorderKind;
use crate::core::style::Style;
use crate::core::widget::Ui;
use crate::message::ImageSource;

/// Fallback image renderer: a bordered box around the alt text.
///
/// A presentational kit cannot fetch or decode remote images; hosts with a
/// graphics-capable terminal (sixel, kitty) register their own renderer and
/// this one only stands in for it. In a one-row rect (button icons) the box
/// degrades to a single marker glyph.
#[derive(Clone, Copy, Debug, Default)]
pub struct Placeholder;

const BOX_HEIGHT: u16 = 3;
const ICON_MARKER: &str = "▣";

impl Placeholder {
    fn alt_text(source: &ImageSource) -> &str {
        match source.alt.as_deref() {
            Some(alt) if !alt.is_empty() => alt,
            _ => "image",
        }
    }
}

impl Renderer for Placeholder {
    fn name(&self) -> Option<&str> {
        Some("placeholder")
    }
}

impl ImageRenderer for Placeholder {
    fn measure(&self, _source: &ImageSource, width: u16) -> u16 {
        match width {
            0 => 0,
            1..=2 => 1,
            _ => BOX_HEIGHT,
        }
    }

    fn render(&self, ui: &mut Ui, rect: Rect, source: &ImageSource, style: Style) {
        if rect.is_empty() {
            return;
        }

        let alt = Self::alt_text(source);

        if rect.h < BOX_HEIGHT || rect.w < 3 {
            ui.painter
                .text_clipped(Pos::new(rect.x, rect.y), ICON_MARKER, style, rect);
            return;
        }

        let boxed = Rect::new(rect.x, rect.y, rect.w, BOX_HEIGHT);
        ui.painter.border(boxed, style, BorderKind::Plain);

        let inner = boxed.inset(Insets::all(1));
        let max_w = inner.w as usize;
        let line = if alt.width() > max_w {
            let end = truncate_to_width(alt, max_w.saturating_sub(1));
            let mut s = alt[..end].to_string();
            s.push('…');
            s
        } else {
            alt.to_string()
        };
        let line_w = line.width().min(u16::MAX as usize) as u16;
        let slot = inner.centered(line_w, 1);
        ui.painter
            .text_clipped(Pos::new(slot.x, inner.y), line, style, inner);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/image.rs"]
mod tests;
