use unicode_width::UnicodeWidthStr;

use crate::core::geom::{Pos, Rect};
use crate::core::id::{Id, IdPath};
use crate::core::style::{Style, StyleChain};
use crate::core::tree::{Node, NodeKind, Sense};
use crate::core::widget::{Ui, Widget};
use crate::message::Button;
use crate::render::text::truncate_to_width;
use crate::render::ImageSlot;
use crate::theme::Theme;

#[derive(Clone, Copy, Debug)]
pub struct ButtonStyles {
    pub base: Style,
    pub url: Style,
    pub post_back: Style,
    pub focused: Style,
}

impl ButtonStyles {
    pub fn from_theme(theme: &Theme) -> Self {
        Self {
            base: Style::default().fg(theme.text_fg),
            url: Style::default().fg(theme.link_fg).bg(theme.button_bg),
            post_back: Style::default().fg(theme.button_fg).bg(theme.button_bg),
            focused: Style::default()
                .fg(theme.button_focused_fg)
                .bg(theme.button_focused_bg),
        }
    }
}

/// Stacked button rows for a card.
///
/// The one place in the kit that renders the button union: URL and postback
/// variants are matched exhaustively here. Zero buttons produce no output and
/// no group node. With `focusable` unset (hidden slides) the rows register
/// without the focus sense so sequential navigation cannot land on them.
pub struct ButtonRow<'a> {
    pub id_base: IdPath,
    /// Owning widget's id, carried on every node for host-side demuxing.
    pub card_id: u32,
    pub layer: u8,
    pub buttons: &'a [Button],
    pub focusable: bool,
    pub focused: Option<Id>,
    pub custom_style: Option<Style>,
}

impl ButtonRow<'_> {
    pub fn measure(&self) -> u16 {
        self.buttons.len().min(u16::MAX as usize) as u16
    }
}

impl Widget for ButtonRow<'_> {
    fn ui(&mut self, ui: &mut Ui) {
        let area = ui.rect;
        if area.is_empty() || self.buttons.is_empty() {
            return;
        }

        let renderers = ui.renderers;
        let styles = ButtonStyles::from_theme(ui.theme);
        let overrides = ui.theme.overrides;

        let rows = (self.buttons.len() as u16).min(area.h);
        let group_rect = Rect::new(area.x, area.y, area.w, rows);
        ui.tree.push(Node {
            id: self.id_base.push_str("button_group").finish(),
            rect: group_rect,
            layer: self.layer,
            z: 0,
            sense: Sense::HOVER,
            kind: NodeKind::ButtonGroup {
                count: self.buttons.len(),
            },
        });

        for (idx, button) in self.buttons.iter().enumerate().take(rows as usize) {
            let row_y = area.y.saturating_add(idx as u16);
            let row_rect = Rect::new(area.x, row_y, area.w, 1);

            let id = self.id_base.push_str("button").push_u64(idx as u64).finish();
            let mut sense = Sense::HOVER | Sense::CLICK;
            if self.focusable {
                sense |= Sense::FOCUS;
            }
            ui.tree.push(Node {
                id,
                rect: row_rect,
                layer: self.layer,
                z: 0,
                sense,
                kind: NodeKind::Button {
                    card: self.card_id,
                    index: idx,
                },
            });

            let (variant_default, theme_override, is_url) = match button {
                Button::Url(_) => (styles.url, overrides.url_button, true),
                Button::PostBack(_) => (styles.post_back, overrides.post_back_button, false),
            };
            let chain = StyleChain::base(styles.base)
                .with(variant_default)
                .with_opt(self.custom_style.or(theme_override));
            let mut style = chain.resolve();
            if self.focused == Some(id) {
                style = style.patch(styles.focused);
            }

            ui.painter.fill_rect(row_rect, style);

            let mut x = row_rect.x;
            let prefix = if self.focused == Some(id) { "▸ " } else { "  " };
            ui.painter
                .text_clipped(Pos::new(x, row_y), prefix, style, row_rect);
            x = x.saturating_add(2);

            if let Some(icon) = button.icon() {
                let icon_rect = Rect::new(x, row_y, 2, 1).intersect(row_rect);
                if !icon_rect.is_empty() {
                    let entry = renderers.image.resolve(ImageSlot::ButtonIcon);
                    entry.renderer().render(ui, icon_rect, icon, style);
                }
                x = x.saturating_add(3);
            }

            let marker_w: u16 = if is_url { 2 } else { 0 };
            let label_w = row_rect
                .right()
                .saturating_sub(x)
                .saturating_sub(marker_w) as usize;
            let label = button.label();
            let mut text = label.to_string();
            if text.width() > label_w {
                let end = truncate_to_width(&text, label_w);
                text.truncate(end);
            }
            ui.painter
                .text_clipped(Pos::new(x, row_y), text, style, row_rect);

            if is_url && row_rect.w > marker_w {
                let marker_x = row_rect.right().saturating_sub(2);
                ui.painter
                    .text_clipped(Pos::new(marker_x, row_y), "↗", style, row_rect);
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/widgets/button.rs"]
mod tests;
