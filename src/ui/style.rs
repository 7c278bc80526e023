//! Central UI style constants and helpers.
use serenity::builder::CreateEmbed;

pub const COLOR_MAIN: u32 = 0xC69C6D; // Latte
pub const COLOR_SUCCESS: u32 = 0x2ECC71; // Green
pub const COLOR_ADMIN: u32 = 0xF1C40F; // Gold
pub const COLOR_ALERT: u32 = 0xE74C3C; // Red

/// Convenience builder for an alert/error-styled embed.
pub fn error_embed<T: Into<String>, U: Into<String>>(title: T, description: U) -> CreateEmbed {
    CreateEmbed::new()
        .title(title)
        .description(description)
        .color(COLOR_ALERT)
}
