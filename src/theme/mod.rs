//! Theming: semantic color tokens for the chat widgets, terminal color
//! support detection, and downgrade mapping for non-truecolor terminals.

pub mod adapter;
pub mod color_support;

use crate::core::style::{Color, Style};

/// Semantic theme tokens.
///
/// Widgets derive their default styles from these; hosts restyle the kit by
/// supplying a different `Theme`, not by reaching into widget internals.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Token {
    TranscriptBg,
    TextFg,
    MutedFg,
    TimestampFg,
    UserAccent,
    BotAccent,
    SystemFg,
    CardBorder,
    CardBg,
    CardTitleFg,
    CardSubtitleFg,
    ButtonFg,
    ButtonBg,
    ButtonFocusedFg,
    ButtonFocusedBg,
    LinkFg,
    QuickReplyFg,
    QuickReplyBg,
    QuickReplyFocusedFg,
    QuickReplyFocusedBg,
    SlideBadgeFg,
    SlideBadgeBg,
    ImageBorder,
    ImageAltFg,
}

/// Optional per-widget style overrides.
///
/// When set, an override takes the last position in the widget's style chain
/// unless the caller passes its own custom style for that render.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WidgetOverrides {
    pub card: Option<Style>,
    pub url_button: Option<Style>,
    pub post_back_button: Option<Style>,
    pub quick_reply: Option<Style>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Theme {
    pub transcript_bg: Color,
    pub text_fg: Color,
    pub muted_fg: Color,
    pub timestamp_fg: Color,
    pub user_accent: Color,
    pub bot_accent: Color,
    pub system_fg: Color,
    pub card_border: Color,
    pub card_bg: Color,
    pub card_title_fg: Color,
    pub card_subtitle_fg: Color,
    pub button_fg: Color,
    pub button_bg: Color,
    pub button_focused_fg: Color,
    pub button_focused_bg: Color,
    pub link_fg: Color,
    pub quick_reply_fg: Color,
    pub quick_reply_bg: Color,
    pub quick_reply_focused_fg: Color,
    pub quick_reply_focused_bg: Color,
    pub slide_badge_fg: Color,
    pub slide_badge_bg: Color,
    pub image_border: Color,
    pub image_alt_fg: Color,
    pub overrides: WidgetOverrides,
}

impl Theme {
    pub fn color(&self, token: Token) -> Color {
        match token {
            Token::TranscriptBg => self.transcript_bg,
            Token::TextFg => self.text_fg,
            Token::MutedFg => self.muted_fg,
            Token::TimestampFg => self.timestamp_fg,
            Token::UserAccent => self.user_accent,
            Token::BotAccent => self.bot_accent,
            Token::SystemFg => self.system_fg,
            Token::CardBorder => self.card_border,
            Token::CardBg => self.card_bg,
            Token::CardTitleFg => self.card_title_fg,
            Token::CardSubtitleFg => self.card_subtitle_fg,
            Token::ButtonFg => self.button_fg,
            Token::ButtonBg => self.button_bg,
            Token::ButtonFocusedFg => self.button_focused_fg,
            Token::ButtonFocusedBg => self.button_focused_bg,
            Token::LinkFg => self.link_fg,
            Token::QuickReplyFg => self.quick_reply_fg,
            Token::QuickReplyBg => self.quick_reply_bg,
            Token::QuickReplyFocusedFg => self.quick_reply_focused_fg,
            Token::QuickReplyFocusedBg => self.quick_reply_focused_bg,
            Token::SlideBadgeFg => self.slide_badge_fg,
            Token::SlideBadgeBg => self.slide_badge_bg,
            Token::ImageBorder => self.image_border,
            Token::ImageAltFg => self.image_alt_fg,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            transcript_bg: Color::Reset,
            text_fg: Color::Indexed(15),           // White
            muted_fg: Color::Indexed(8),           // DarkGray
            timestamp_fg: Color::Indexed(8),       // DarkGray
            user_accent: Color::Indexed(6),        // Cyan
            bot_accent: Color::Indexed(5),         // Magenta
            system_fg: Color::Indexed(3),          // Yellow
            card_border: Color::Indexed(8),        // DarkGray
            card_bg: Color::Reset,
            card_title_fg: Color::Indexed(15),     // White
            card_subtitle_fg: Color::Indexed(7),   // Gray
            button_fg: Color::Indexed(15),         // White
            button_bg: Color::Indexed(8),          // DarkGray
            button_focused_fg: Color::Indexed(0),  // Black
            button_focused_bg: Color::Indexed(6),  // Cyan
            link_fg: Color::Indexed(4),            // Blue
            quick_reply_fg: Color::Indexed(6),     // Cyan
            quick_reply_bg: Color::Reset,
            quick_reply_focused_fg: Color::Indexed(0), // Black
            quick_reply_focused_bg: Color::Indexed(6), // Cyan
            slide_badge_fg: Color::Indexed(0),     // Black
            slide_badge_bg: Color::Indexed(3),     // Yellow
            image_border: Color::Indexed(8),       // DarkGray
            image_alt_fg: Color::Indexed(7),       // Gray
            overrides: WidgetOverrides::default(),
        }
    }
}
