//! Central UI style constants and helpers.
use crate::flow::Tone;
use serenity::builder::CreateEmbed;

pub const COLOR_BRAND: u32 = 0x5865F2; // Blurple
pub const COLOR_SUCCESS: u32 = 0x2ECC71; // Green
pub const COLOR_WARNING: u32 = 0xF39C12; // Orange
pub const COLOR_ALERT: u32 = 0xE74C3C; // Red

// Standard target widths for padded button labels (approx char counts before Discord trimming)
pub const BTN_W_STD: usize = 16;
pub const BTN_W_PRIMARY: usize = 22;

pub fn tone_color(tone: Tone) -> u32 {
    match tone {
        Tone::Normal => COLOR_BRAND,
        Tone::Success => COLOR_SUCCESS,
        Tone::Warning => COLOR_WARNING,
        Tone::Error => COLOR_ALERT,
    }
}

/// Pads a label to a target visible width using spaces so multi-row action bars align better.
/// Discord strips excessive trailing spaces, so the pad is clamped to 2.
pub fn pad_label(label: &str, target_min: usize) -> String {
    let len = label.chars().count();
    if len >= target_min {
        return label.to_string();
    }
    format!("{label}{pad}", pad = " ".repeat((target_min - len).min(2)))
}

pub fn pad_primary(label: &str) -> String {
    pad_label(label, BTN_W_PRIMARY)
}
pub fn pad_std(label: &str) -> String {
    pad_label(label, BTN_W_STD)
}

/// Embed for a reply body with the accent colour of its tone.
pub fn reply_embed(body: &str, tone: Tone) -> CreateEmbed {
    CreateEmbed::new().description(body).color(tone_color(tone))
}
