//! Presentation: transport-neutral text and keyboards, plus serenity rendering helpers.
pub mod buttons;
pub mod format;
pub mod keyboard;
pub mod style;
