//! Shared interaction utility helpers (single defer + ephemeral notice).
use serenity::builder::{CreateInteractionResponse, CreateInteractionResponseMessage};
use serenity::http::Http;
use serenity::model::application::ComponentInteraction;
use std::sync::Arc;

/// Acknowledge a component interaction (non-ephemeral) ignoring duplicate/late errors.
pub async fn defer_component(http: &Arc<Http>, c: &ComponentInteraction) {
    if let Err(e) = c.defer(http).await {
        tracing::debug!(target = "ui.defer", cid = %c.data.custom_id, error = ?e, "defer failed (already acknowledged?)");
    }
}

/// Interaction response visible only to the invoking user.
pub fn ephemeral(content: &str) -> CreateInteractionResponse {
    CreateInteractionResponse::Message(
        CreateInteractionResponseMessage::new()
            .content(content)
            .ephemeral(true),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ephemeral_notice_is_flagged_private() {
        let json = serde_json::to_value(ephemeral("denied")).unwrap();
        assert_eq!(json["type"], 4);
        assert_eq!(json["data"]["content"], "denied");
        assert_eq!(json["data"]["flags"], 64);
    }
}
