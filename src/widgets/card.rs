use unicode_width::UnicodeWidthStr;

use super::button::ButtonRow;
use crate::core::geom::{Insets, Pos, Rect};
use crate::core::id::{Id, IdPath};
use crate::core::painter::BorderKind;
use crate::core::style::{Mod, Style, StyleChain};
use crate::core::tree::{Node, NodeKind, Sense};
use crate::core::widget::{Ui, Widget};
use crate::message::CardData;
use crate::render::text::truncate_to_width;
use crate::render::{ImageSlot, RendererSettings, TextSlot};
use crate::theme::Theme;

/// Marks a card as one slide among several. Presence switches the wrapper
/// node to `NodeKind::Slide` and paints the "i/n" badge; standalone cards
/// carry neither.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SlideContext {
    pub index: usize,
    pub total: usize,
}

#[derive(Clone, Copy, Debug)]
pub struct CardStyles {
    pub body: Style,
    pub border: Style,
    pub title: Style,
    pub subtitle: Style,
    pub separator: Style,
    pub badge: Style,
}

impl CardStyles {
    pub fn from_theme(theme: &Theme) -> Self {
        Self {
            body: Style::default().fg(theme.text_fg).bg(theme.card_bg),
            border: Style::default().fg(theme.card_border),
            title: Style::default().fg(theme.card_title_fg).add_mod(Mod::BOLD),
            subtitle: Style::default().fg(theme.card_subtitle_fg),
            separator: Style::default().fg(theme.card_border).add_mod(Mod::DIM),
            badge: Style::default()
                .fg(theme.slide_badge_fg)
                .bg(theme.slide_badge_bg),
        }
    }
}

/// Height of a card rendered at `width`, borders included. Zero when the
/// width cannot hold a bordered row.
pub fn measure_card(renderers: &RendererSettings, data: &CardData, width: u16) -> u16 {
    if width < 4 {
        return 0;
    }
    let inner_w = width - 2;
    let mut h: u16 = 0;
    if let Some(cover) = &data.cover {
        let entry = renderers.image.resolve(ImageSlot::Card);
        h = h.saturating_add(entry.renderer().measure(cover, inner_w));
    }
    h = h.saturating_add(1); // title
    if let Some(subtitle) = &data.subtitle {
        let entry = renderers.text.resolve(TextSlot::MarkdownInline);
        h = h.saturating_add(entry.renderer().measure(subtitle, inner_w));
    }
    if !data.buttons.is_empty() {
        let rows = data.buttons.len().min(u16::MAX as usize) as u16;
        h = h.saturating_add(1).saturating_add(rows); // separator + rows
    }
    h.saturating_add(2)
}

/// Bordered card: cover image, title, subtitle, button rows, slide badge.
///
/// `hidden` models an off-screen carousel slide: the card still renders and
/// registers its nodes, but buttons drop the focus sense so keyboard
/// navigation cannot be trapped on something invisible. Keeping it out of
/// sight is the carousel's business, not this widget's.
pub struct Card<'a> {
    pub id_base: IdPath,
    pub card_id: u32,
    pub layer: u8,
    pub data: &'a CardData,
    pub hidden: bool,
    pub slide: Option<SlideContext>,
    pub focused: Option<Id>,
    pub custom_style: Option<Style>,
}

impl Card<'_> {
    pub fn measure(&self, renderers: &RendererSettings, width: u16) -> u16 {
        measure_card(renderers, self.data, width)
    }
}

impl Widget for Card<'_> {
    fn ui(&mut self, ui: &mut Ui) {
        let area = ui.rect;
        if area.w < 4 || area.h < 3 {
            return;
        }

        let renderers = ui.renderers;
        let styles = CardStyles::from_theme(ui.theme);
        let override_style = ui.theme.overrides.card;

        let kind = match self.slide {
            Some(ctx) => NodeKind::Slide {
                index: ctx.index,
                total: ctx.total,
            },
            None => NodeKind::Card,
        };
        ui.tree.push(Node {
            id: self.id_base.push_str("card").finish(),
            rect: area,
            layer: self.layer,
            z: 0,
            sense: Sense::HOVER,
            kind,
        });

        let chain = StyleChain::base(styles.body)
            .with_opt(self.custom_style.or(override_style));
        let body = chain.resolve();

        ui.painter.fill_rect(area, body);
        ui.painter.border(area, styles.border, BorderKind::Rounded);

        if let Some(ctx) = self.slide {
            let badge = format!("{}/{}", ctx.index.saturating_add(1), ctx.total);
            let badge_w = badge.width().min(u16::MAX as usize) as u16;
            if area.w > badge_w.saturating_add(3) {
                let x = area.right().saturating_sub(badge_w).saturating_sub(2);
                ui.painter.text(Pos::new(x, area.y), badge, styles.badge);
            }
        }

        let mut inner = area.inset(Insets::all(1));

        if let Some(cover) = &self.data.cover {
            let entry = renderers.image.resolve(ImageSlot::Card);
            let h = entry.renderer().measure(cover, inner.w).min(inner.h);
            if h > 0 {
                let (slot, rest) = inner.split_top(h);
                entry.renderer().render(ui, slot, cover, body);
                inner = rest;
            }
        }

        if inner.h > 0 {
            let (title_row, rest) = inner.split_top(1);
            inner = rest;
            let mut title = self.data.title.to_string();
            if title.width() > title_row.w as usize {
                let end = truncate_to_width(&title, title_row.w as usize);
                title.truncate(end);
            }
            ui.painter.text_clipped(
                Pos::new(title_row.x, title_row.y),
                title,
                body.patch(styles.title),
                title_row,
            );
        }

        if let Some(subtitle) = &self.data.subtitle {
            let entry = renderers.text.resolve(TextSlot::MarkdownInline);
            let h = entry.renderer().measure(subtitle, inner.w).min(inner.h);
            if h > 0 {
                let (slot, rest) = inner.split_top(h);
                entry
                    .renderer()
                    .render(ui, slot, subtitle, body.patch(styles.subtitle));
                inner = rest;
            }
        }

        if !self.data.buttons.is_empty() && inner.h > 1 {
            let (sep, rest) = inner.split_top(1);
            ui.painter.hline(
                Pos::new(sep.x, sep.y),
                sep.w,
                '─',
                body.patch(styles.separator),
            );
            let mut row = ButtonRow {
                id_base: self.id_base,
                card_id: self.card_id,
                layer: self.layer,
                buttons: &self.data.buttons,
                focusable: !self.hidden,
                focused: self.focused,
                custom_style: None,
            };
            ui.with_rect(rest, |ui| row.ui(ui));
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/widgets/card.rs"]
mod tests;
