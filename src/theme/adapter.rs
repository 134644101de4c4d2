use super::color_support::TerminalColorSupport;
use super::{Theme, WidgetOverrides};
use crate::core::style::{Color, Style};

/// Downgrade a theme's colors to what the terminal can show. Identity under
/// truecolor.
pub fn adapt_theme(theme: &Theme, support: TerminalColorSupport) -> Theme {
    if support == TerminalColorSupport::TrueColor {
        return theme.clone();
    }

    Theme {
        transcript_bg: map_color_for_support(theme.transcript_bg, support),
        text_fg: map_color_for_support(theme.text_fg, support),
        muted_fg: map_color_for_support(theme.muted_fg, support),
        timestamp_fg: map_color_for_support(theme.timestamp_fg, support),
        user_accent: map_color_for_support(theme.user_accent, support),
        bot_accent: map_color_for_support(theme.bot_accent, support),
        system_fg: map_color_for_support(theme.system_fg, support),
        card_border: map_color_for_support(theme.card_border, support),
        card_bg: map_color_for_support(theme.card_bg, support),
        card_title_fg: map_color_for_support(theme.card_title_fg, support),
        card_subtitle_fg: map_color_for_support(theme.card_subtitle_fg, support),
        button_fg: map_color_for_support(theme.button_fg, support),
        button_bg: map_color_for_support(theme.button_bg, support),
        button_focused_fg: map_color_for_support(theme.button_focused_fg, support),
        button_focused_bg: map_color_for_support(theme.button_focused_bg, support),
        link_fg: map_color_for_support(theme.link_fg, support),
        quick_reply_fg: map_color_for_support(theme.quick_reply_fg, support),
        quick_reply_bg: map_color_for_support(theme.quick_reply_bg, support),
        quick_reply_focused_fg: map_color_for_support(theme.quick_reply_focused_fg, support),
        quick_reply_focused_bg: map_color_for_support(theme.quick_reply_focused_bg, support),
        slide_badge_fg: map_color_for_support(theme.slide_badge_fg, support),
        slide_badge_bg: map_color_for_support(theme.slide_badge_bg, support),
        image_border: map_color_for_support(theme.image_border, support),
        image_alt_fg: map_color_for_support(theme.image_alt_fg, support),
        overrides: WidgetOverrides {
            card: theme.overrides.card.map(|s| map_style_for_support(s, support)),
            url_button: theme
                .overrides
                .url_button
                .map(|s| map_style_for_support(s, support)),
            post_back_button: theme
                .overrides
                .post_back_button
                .map(|s| map_style_for_support(s, support)),
            quick_reply: theme
                .overrides
                .quick_reply
                .map(|s| map_style_for_support(s, support)),
        },
    }
}

pub fn map_color_to_support(color: Color, support: TerminalColorSupport) -> Color {
    map_color_for_support(color, support)
}

pub fn color_to_rgb(color: Color) -> Option<(u8, u8, u8)> {
    match color {
        Color::Reset => None,
        Color::Rgb(r, g, b) => Some((r, g, b)),
        Color::Indexed(i) => Some(ansi256_index_to_rgb(i)),
    }
}

fn map_style_for_support(style: Style, support: TerminalColorSupport) -> Style {
    Style {
        fg: style.fg.map(|c| map_color_for_support(c, support)),
        bg: style.bg.map(|c| map_color_for_support(c, support)),
        mods: style.mods,
    }
}

fn map_color_for_support(color: Color, support: TerminalColorSupport) -> Color {
    match (support, color) {
        (TerminalColorSupport::TrueColor, value) => value,
        (_, Color::Reset) => Color::Reset,
        (TerminalColorSupport::Ansi256, Color::Rgb(r, g, b)) => {
            Color::Indexed(rgb_to_ansi256_index(r, g, b))
        }
        (TerminalColorSupport::Ansi256, Color::Indexed(i)) => Color::Indexed(i),
        (TerminalColorSupport::Ansi16, Color::Rgb(r, g, b)) => {
            Color::Indexed(rgb_to_ansi16_index(r, g, b))
        }
        (TerminalColorSupport::Ansi16, Color::Indexed(i)) if i <= 15 => Color::Indexed(i),
        (TerminalColorSupport::Ansi16, Color::Indexed(i)) => {
            let (r, g, b) = ansi256_index_to_rgb(i);
            Color::Indexed(rgb_to_ansi16_index(r, g, b))
        }
    }
}

fn rgb_to_ansi256_index(r: u8, g: u8, b: u8) -> u8 {
    // Note: ANSI 0..15 colors are terminal-theme-dependent. For predictable results across
    // terminals (notably macOS Terminal.app), prefer the standardized 16..255 palette.
    let mut best_index = 16u8;
    let mut best_distance = u32::MAX;

    for index in 16u16..=255u16 {
        let index_u8 = index as u8;
        let (pr, pg, pb) = ansi256_index_to_rgb(index_u8);
        let distance = color_distance_sq(r, g, b, pr, pg, pb);
        if distance < best_distance {
            best_distance = distance;
            best_index = index_u8;
        }
    }

    best_index
}

fn rgb_to_ansi16_index(r: u8, g: u8, b: u8) -> u8 {
    let mut best_index = 0u8;
    let mut best_distance = u32::MAX;

    for (index, (pr, pg, pb)) in ANSI16_RGB.iter().copied().enumerate() {
        let distance = color_distance_sq(r, g, b, pr, pg, pb);
        if distance < best_distance {
            best_distance = distance;
            best_index = index as u8;
        }
    }

    best_index
}

fn ansi256_index_to_rgb(index: u8) -> (u8, u8, u8) {
    if index <= 15 {
        return ANSI16_RGB[index as usize];
    }

    if (16..=231).contains(&index) {
        let level = [0u8, 95, 135, 175, 215, 255];
        let offset = index - 16;
        let r = level[(offset / 36) as usize];
        let g = level[((offset / 6) % 6) as usize];
        let b = level[(offset % 6) as usize];
        return (r, g, b);
    }

    let gray = 8u8.saturating_add((index - 232).saturating_mul(10));
    (gray, gray, gray)
}

fn color_distance_sq(r1: u8, g1: u8, b1: u8, r2: u8, g2: u8, b2: u8) -> u32 {
    let dr = i32::from(r1) - i32::from(r2);
    let dg = i32::from(g1) - i32::from(g2);
    let db = i32::from(b1) - i32::from(b2);
    (dr * dr + dg * dg + db * db) as u32
}

const ANSI16_RGB: [(u8, u8, u8); 16] = [
    (0, 0, 0),
    (205, 0, 0),
    (0, 205, 0),
    (205, 205, 0),
    (0, 0, 238),
    (205, 0, 205),
    (0, 205, 205),
    (229, 229, 229),
    (127, 127, 127),
    (255, 0, 0),
    (0, 255, 0),
    (255, 255, 0),
    (92, 92, 255),
    (255, 0, 255),
    (0, 255, 255),
    (255, 255, 255),
];

#[cfg(test)]
#[path = "../../tests/unit/theme/adapter.rs"]
mod tests;
