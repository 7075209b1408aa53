//! Renders transport-neutral keyboards into serenity action rows.
use crate::constants::MAX_LABEL_LEN;
use crate::ui::format::truncate;
use crate::ui::keyboard::{Button, ButtonStyle, Keyboard};
use crate::ui::style::{pad_primary, pad_std};
use serenity::builder::{CreateActionRow, CreateButton};
use serenity::model::application::ButtonStyle as DiscordStyle;

pub struct Btn;
impl Btn {
    pub fn primary(id: &str, label: &str) -> CreateButton {
        CreateButton::new(id)
            .label(pad_primary(label))
            .style(DiscordStyle::Primary)
    }
    pub fn success(id: &str, label: &str) -> CreateButton {
        CreateButton::new(id)
            .label(pad_primary(label))
            .style(DiscordStyle::Success)
    }
    pub fn secondary(id: &str, label: &str) -> CreateButton {
        CreateButton::new(id)
            .label(pad_std(label))
            .style(DiscordStyle::Secondary)
    }
    pub fn danger(id: &str, label: &str) -> CreateButton {
        CreateButton::new(id)
            .label(pad_std(label))
            .style(DiscordStyle::Danger)
    }

    pub fn from_button(b: &Button) -> CreateButton {
        let label = truncate(&b.label, MAX_LABEL_LEN - 2);
        let btn = match b.style {
            ButtonStyle::Primary => Self::primary(&b.token, &label),
            ButtonStyle::Success => Self::success(&b.token, &label),
            ButtonStyle::Secondary => Self::secondary(&b.token, &label),
            ButtonStyle::Danger => Self::danger(&b.token, &label),
        };
        btn.disabled(b.disabled)
    }
}

pub fn action_rows(keyboard: &Keyboard) -> Vec<CreateActionRow> {
    keyboard
        .clone()
        .clamped()
        .rows
        .iter()
        .map(|row| CreateActionRow::Buttons(row.iter().map(Btn::from_button).collect()))
        .collect()
}
