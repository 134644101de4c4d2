use unicode_width::UnicodeWidthStr;

use super::card::{measure_card, Card, SlideContext};
use crate::core::geom::{Pos, Rect};
use crate::core::id::{Id, IdPath};
use crate::core::style::Style;
use crate::core::widget::{Ui, Widget};
use crate::message::CardData;
use crate::render::RendererSettings;

/// Several cards sharing one area, one visible at a time.
///
/// The active slide is rendered last so it wins both painting and
/// hit-testing; the others render as hidden cards underneath, keeping their
/// nodes in the tree but without the focus sense. Every slide gets the same
/// rect, sized to the tallest card so switching slides never reflows the
/// transcript.
pub struct Carousel<'a> {
    pub id_base: IdPath,
    pub layer: u8,
    pub cards: &'a [CardData],
    pub active: usize,
    pub focused: Option<Id>,
    pub custom_style: Option<Style>,
}

impl Carousel<'_> {
    /// Tallest slide plus the indicator row.
    pub fn measure(&self, renderers: &RendererSettings, width: u16) -> u16 {
        let tallest = self
            .cards
            .iter()
            .map(|c| measure_card(renderers, c, width))
            .max()
            .unwrap_or(0);
        if tallest == 0 {
            0
        } else {
            tallest.saturating_add(1)
        }
    }

    fn clamped_active(&self) -> usize {
        if self.active >= self.cards.len() {
            tracing::debug!(
                active = self.active,
                total = self.cards.len(),
                "carousel active index out of range, clamping"
            );
            self.cards.len().saturating_sub(1)
        } else {
            self.active
        }
    }
}

impl Widget for Carousel<'_> {
    fn ui(&mut self, ui: &mut Ui) {
        let area = ui.rect;
        if area.is_empty() || self.cards.is_empty() {
            return;
        }

        let renderers = ui.renderers;
        let active = self.clamped_active();
        let total = self.cards.len();

        let tallest = self
            .cards
            .iter()
            .map(|c| measure_card(renderers, c, area.w))
            .max()
            .unwrap_or(0);
        let (cards_area, indicator) = area.split_bottom(1);
        let slide_rect = Rect::new(
            cards_area.x,
            cards_area.y,
            cards_area.w,
            tallest.min(cards_area.h),
        );

        let mut render_slide = |ui: &mut Ui, index: usize, hidden: bool| {
            let mut card = Card {
                id_base: self.id_base.push_str("slide").push_u64(index as u64),
                card_id: index as u32,
                layer: self.layer,
                data: &self.cards[index],
                hidden,
                slide: Some(SlideContext { index, total }),
                focused: self.focused,
                custom_style: self.custom_style,
            };
            ui.with_rect(slide_rect, |ui| card.ui(ui));
        };

        // Hidden slides first so the active one ends up on top, in paint
        // order and in z-order.
        for index in 0..total {
            if index != active {
                render_slide(ui, index, true);
            }
        }
        render_slide(ui, active, false);

        if !indicator.is_empty() {
            let mut dots = String::new();
            for index in 0..total {
                if !dots.is_empty() {
                    dots.push(' ');
                }
                dots.push(if index == active { '●' } else { '○' });
            }
            let w = dots.width().min(u16::MAX as usize) as u16;
            let slot = indicator.centered(w, 1);
            let style = Style::default().fg(ui.theme.muted_fg);
            ui.painter
                .text_clipped(Pos::new(slot.x, slot.y), dots, style, indicator);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/widgets/carousel.rs"]
mod tests;
