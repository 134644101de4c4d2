use unicode_width::UnicodeWidthStr;

use super::card::{measure_card, Card};
use super::quick_reply::QuickReplyBar;
use crate::core::geom::{Insets, Pos, Rect};
use crate::core::id::{Id, IdPath};
use crate::core::style::{Mod, Style};
use crate::core::tree::{Node, NodeKind, Sense};
use crate::core::widget::{Ui, Widget};
use crate::message::{Author, Message, MessageBody};
use crate::render::{ImageSlot, RendererSettings, TextSlot};
use crate::theme::Theme;

/// Host-owned scroll state for the transcript.
///
/// Offsets count whole messages from the bottom. While stuck to the bottom
/// the newest message stays visible as messages append; scrolling up
/// detaches, scrolling back to the bottom re-attaches.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TranscriptScroll {
    offset_from_bottom: usize,
    stick_to_bottom: bool,
}

impl Default for TranscriptScroll {
    fn default() -> Self {
        Self {
            offset_from_bottom: 0,
            stick_to_bottom: true,
        }
    }
}

impl TranscriptScroll {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn offset_from_bottom(&self) -> usize {
        self.offset_from_bottom
    }

    pub fn is_stuck(&self) -> bool {
        self.stick_to_bottom
    }

    pub fn scroll_up(&mut self, n: usize) {
        self.stick_to_bottom = false;
        self.offset_from_bottom = self.offset_from_bottom.saturating_add(n);
    }

    pub fn scroll_down(&mut self, n: usize) {
        self.offset_from_bottom = self.offset_from_bottom.saturating_sub(n);
        if self.offset_from_bottom == 0 {
            self.stick_to_bottom = true;
        }
    }

    pub fn stick(&mut self) {
        self.offset_from_bottom = 0;
        self.stick_to_bottom = true;
    }

    fn clamp(&mut self, message_count: usize) {
        if self.stick_to_bottom {
            self.offset_from_bottom = 0;
        } else {
            self.offset_from_bottom = self
                .offset_from_bottom
                .min(message_count.saturating_sub(1));
        }
    }
}

/// Height of one transcript entry at `width`: a meta row plus the body,
/// with the accent gutter already accounted for.
pub fn measure_message(renderers: &RendererSettings, msg: &Message, width: u16) -> u16 {
    let content_w = width.saturating_sub(GUTTER_W);
    if content_w == 0 {
        return 0;
    }
    let body_h = match &msg.body {
        MessageBody::Text { text } => {
            let slot = text_slot_for(msg.author);
            renderers.text.resolve(slot).renderer().measure(text, content_w)
        }
        MessageBody::Markdown { text } => renderers
            .text
            .resolve(TextSlot::Markdown)
            .renderer()
            .measure(text, content_w),
        MessageBody::Image { image } => renderers
            .image
            .resolve(ImageSlot::Standalone)
            .renderer()
            .measure(image, content_w),
        MessageBody::Card { card } => measure_card(renderers, card, content_w),
        MessageBody::QuickReplies { prompt, replies } => {
            let mut h: u16 = if replies.is_empty() { 0 } else { 1 };
            if let Some(prompt) = prompt {
                h = h.saturating_add(
                    renderers
                        .text
                        .resolve(TextSlot::Default)
                        .renderer()
                        .measure(prompt, content_w),
                );
            }
            h
        }
    };
    if body_h == 0 {
        return 0;
    }
    body_h.saturating_add(1)
}

/// Accent gutter: one bar column plus one space.
const GUTTER_W: u16 = 2;

fn text_slot_for(author: Author) -> TextSlot {
    // User-authored text goes through the sanitizing slot; everything else
    // is trusted host/bot content.
    match author {
        Author::User => TextSlot::UserContent,
        Author::Bot | Author::System => TextSlot::Default,
    }
}

fn accent_color(theme: &Theme, author: Author) -> crate::core::style::Color {
    match author {
        Author::User => theme.user_accent,
        Author::Bot => theme.bot_accent,
        Author::System => theme.system_fg,
    }
}

/// The message list: renders the newest messages bottom-anchored, whole
/// messages only, one blank row between entries.
pub struct Transcript<'a> {
    pub id_base: IdPath,
    pub layer: u8,
    pub messages: &'a [Message],
    pub scroll: &'a mut TranscriptScroll,
    pub focused: Option<Id>,
}

impl Widget for Transcript<'_> {
    fn ui(&mut self, ui: &mut Ui) {
        let area = ui.rect;
        if area.is_empty() {
            return;
        }

        let renderers = ui.renderers;
        ui.painter
            .fill_rect(area, Style::default().bg(ui.theme.transcript_bg));

        if self.messages.is_empty() {
            return;
        }
        self.scroll.clamp(self.messages.len());

        // Walk up from the scroll position collecting the entries that fit,
        // then render them top-down so node registration follows reading
        // order.
        let mut visible: Vec<(usize, u16)> = Vec::new();
        let mut used: u16 = 0;
        let mut truncated = false;
        for (idx, msg) in self
            .messages
            .iter()
            .enumerate()
            .rev()
            .skip(self.scroll.offset_from_bottom)
        {
            let h = measure_message(renderers, msg, area.w);
            if h == 0 {
                continue;
            }
            let gap: u16 = if visible.is_empty() { 0 } else { 1 };
            if used.saturating_add(gap).saturating_add(h) > area.h {
                truncated = true;
                break;
            }
            used = used.saturating_add(gap).saturating_add(h);
            visible.push((idx, h));
        }
        visible.reverse();

        let (slack, mut content) = area.split_top(area.h.saturating_sub(used));
        if truncated && !slack.is_empty() {
            let style = Style::default().fg(ui.theme.muted_fg);
            ui.painter
                .text(Pos::new(slack.x, slack.bottom().saturating_sub(1)), "⋮", style);
        }

        for (pos, (idx, h)) in visible.iter().copied().enumerate() {
            if pos > 0 {
                let (_gap, rest) = content.split_top(1);
                content = rest;
            }
            let (slot, rest) = content.split_top(h);
            content = rest;
            self.render_message(ui, slot, idx);
        }
    }
}

impl Transcript<'_> {
    fn render_message(&mut self, ui: &mut Ui, slot: Rect, idx: usize) {
        let renderers = ui.renderers;
        let theme = ui.theme;
        let msg = &self.messages[idx];
        let msg_id = self.id_base.push_str("msg").push_u64(idx as u64);

        ui.tree.push(Node {
            id: msg_id.finish(),
            rect: slot,
            layer: self.layer,
            z: 0,
            sense: Sense::HOVER,
            kind: NodeKind::Message { index: idx },
        });

        let accent = Style::default().fg(accent_color(theme, msg.author));
        ui.painter
            .vline(Pos::new(slot.x, slot.y), slot.h, '▌', accent);

        let content = slot.inset(Insets {
            left: GUTTER_W,
            right: 0,
            top: 0,
            bottom: 0,
        });
        if content.is_empty() {
            return;
        }

        let (meta, body_rect) = content.split_top(1);
        ui.painter.text_clipped(
            Pos::new(meta.x, meta.y),
            msg.author_label(),
            accent.add_mod(Mod::BOLD),
            meta,
        );
        if let Some(ts) = &msg.timestamp {
            let w = ts.width().min(u16::MAX as usize) as u16;
            if meta.w > w.saturating_add(5) {
                let x = meta.right().saturating_sub(w);
                ui.painter.text_clipped(
                    Pos::new(x, meta.y),
                    ts.as_str(),
                    Style::default().fg(theme.timestamp_fg),
                    meta,
                );
            }
        }

        let text_style = Style::default().fg(theme.text_fg);
        match &msg.body {
            MessageBody::Text { text } => {
                let slot_kind = text_slot_for(msg.author);
                let entry = renderers.text.resolve(slot_kind);
                entry.renderer().render(ui, body_rect, text, text_style);
            }
            MessageBody::Markdown { text } => {
                let entry = renderers.text.resolve(TextSlot::Markdown);
                entry.renderer().render(ui, body_rect, text, text_style);
            }
            MessageBody::Image { image } => {
                ui.tree.push(Node {
                    id: msg_id.push_str("image").finish(),
                    rect: body_rect,
                    layer: self.layer,
                    z: 0,
                    sense: Sense::HOVER,
                    kind: NodeKind::Image,
                });
                let entry = renderers.image.resolve(ImageSlot::Standalone);
                entry.renderer().render(
                    ui,
                    body_rect,
                    image,
                    Style::default().fg(theme.image_alt_fg),
                );
            }
            MessageBody::Card { card } => {
                let mut widget = Card {
                    id_base: msg_id,
                    card_id: idx as u32,
                    layer: self.layer,
                    data: card,
                    hidden: false,
                    slide: None,
                    focused: self.focused,
                    custom_style: None,
                };
                ui.with_rect(body_rect, |ui| widget.ui(ui));
            }
            MessageBody::QuickReplies { prompt, replies } => {
                let mut rest = body_rect;
                if let Some(prompt) = prompt {
                    let entry = renderers.text.resolve(TextSlot::Default);
                    let h = entry.renderer().measure(prompt, rest.w).min(rest.h);
                    let (slot, below) = rest.split_top(h);
                    entry.renderer().render(ui, slot, prompt, text_style);
                    rest = below;
                }
                let mut bar = QuickReplyBar {
                    id_base: msg_id,
                    layer: self.layer,
                    replies,
                    focused: self.focused,
                    custom_style: None,
                };
                ui.with_rect(rest, |ui| bar.ui(ui));
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/widgets/transcript.rs"]
mod tests;
