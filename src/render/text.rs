use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use super::{Renderer, TextRenderer};
use crate::core::geom::{Pos, Rect};
use crate::core::style::Style;
use crate::core::widget::Ui;

/// Returns how many bytes from the start of `s` fit into `max_width` cells.
/// The returned end always lands on a char boundary.
pub fn truncate_to_width(s: &str, max_width: usize) -> usize {
    if max_width == 0 || s.is_empty() {
        return 0;
    }

    let mut used = 0usize;
    let mut end = 0usize;
    for (idx, ch) in s.char_indices() {
        let w = UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + w > max_width {
            break;
        }
        used += w;
        end = idx + ch.len_utf8();
    }

    end
}

/// Drop control characters (except newline) so untrusted text cannot smuggle
/// escape sequences or cursor movement into the terminal.
pub fn sanitize_text(text: &str) -> String {
    text.chars()
        .filter(|c| !c.is_control() || *c == '\n')
        .collect()
}

/// Wrap `text` to `width` cells, preserving explicit line breaks.
pub fn wrapped_lines(text: &str, width: u16) -> Vec<String> {
    if width == 0 {
        return Vec::new();
    }
    let mut out = Vec::new();
    for line in text.lines() {
        if line.is_empty() {
            out.push(String::new());
            continue;
        }
        for piece in textwrap::wrap(line, width as usize) {
            out.push(piece.into_owned());
        }
    }
    out
}

/// Word-wrapping text renderer; the text `default` slot out of the box.
#[derive(Clone, Copy, Debug, Default)]
pub struct PlainText;

impl Renderer for PlainText {
    fn name(&self) -> Option<&str> {
        Some("plain")
    }
}

impl TextRenderer for PlainText {
    fn measure(&self, text: &str, width: u16) -> u16 {
        wrapped_lines(text, width).len().min(u16::MAX as usize) as u16
    }

    fn render(&self, ui: &mut Ui, rect: Rect, text: &str, style: Style) {
        if rect.is_empty() {
            return;
        }
        for (row, line) in wrapped_lines(text, rect.w)
            .into_iter()
            .take(rect.h as usize)
            .enumerate()
        {
            let pos = Pos::new(rect.x, rect.y.saturating_add(row as u16));
            ui.painter.text_clipped(pos, line, style, rect);
        }
    }
}

/// Single-line renderer with ellipsis truncation; used for card subtitles and
/// other inline fragments.
#[derive(Clone, Copy, Debug, Default)]
pub struct InlineText;

impl Renderer for InlineText {
    fn name(&self) -> Option<&str> {
        Some("inline")
    }
}

impl TextRenderer for InlineText {
    fn measure(&self, text: &str, width: u16) -> u16 {
        if width == 0 || text.is_empty() {
            0
        } else {
            1
        }
    }

    fn render(&self, ui: &mut Ui, rect: Rect, text: &str, style: Style) {
        if rect.is_empty() || text.is_empty() {
            return;
        }
        // Inline content never spans lines; explicit breaks collapse.
        let flat = text.replace('\n', " ");
        let line = if flat.width() > rect.w as usize {
            let end = truncate_to_width(&flat, (rect.w as usize).saturating_sub(1));
            let mut s = flat[..end].to_string();
            s.push('…');
            s
        } else {
            flat
        };
        ui.painter
            .text_clipped(Pos::new(rect.x, rect.y), line, style, rect);
    }
}

/// Wrapping renderer for untrusted user-authored text; the `user_content`
/// slot out of the box. Sanitizes before painting.
#[derive(Clone, Copy, Debug, Default)]
pub struct SanitizedText;

impl Renderer for SanitizedText {
    fn name(&self) -> Option<&str> {
        Some("sanitized")
    }
}

impl TextRenderer for SanitizedText {
    fn measure(&self, text: &str, width: u16) -> u16 {
        PlainText.measure(&sanitize_text(text), width)
    }

    fn render(&self, ui: &mut Ui, rect: Rect, text: &str, style: Style) {
        PlainText.render(ui, rect, &sanitize_text(text), style);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/text.rs"]
mod tests;
