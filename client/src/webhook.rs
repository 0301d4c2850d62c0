//! # Order Notifications
//!
//! Discord webhook embed for each confirmed order. Strictly best-effort: the
//! checkout succeeds whether or not this call does, and no URL configured
//! means no call at all.

use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::Serialize;

use crate::models::OrderPayload;

const EMBED_TITLE: &str = "New Pandaren Food Order!";
const EMBED_COLOR: u32 = 0x00d1_282e;
const EMBED_FOOTER: &str = "Pandaren Express Delivery Service";

#[derive(Serialize, Debug, PartialEq, Eq)]
pub struct EmbedField {
    pub name: &'static str,
    pub value: String,
    pub inline: bool,
}

#[derive(Serialize, Debug)]
struct EmbedFooter {
    text: &'static str,
}

#[derive(Serialize, Debug)]
pub struct Embed {
    title: &'static str,
    color: u32,
    pub fields: Vec<EmbedField>,
    footer: EmbedFooter,
    timestamp: String,
}

#[derive(Serialize, Debug)]
struct WebhookBody {
    embeds: Vec<Embed>,
}

fn field(name: &'static str, value: String, inline: bool) -> EmbedField {
    EmbedField {
        name,
        value,
        inline,
    }
}

fn or_none(value: &str) -> String {
    if value.is_empty() {
        "None".to_string()
    } else {
        value.to_string()
    }
}

pub fn build_embed(payload: &OrderPayload, now: DateTime<Utc>) -> Embed {
    let items = payload
        .items
        .iter()
        .map(|item| format!("• {}", item.name))
        .collect::<Vec<_>>()
        .join("\n");

    let coordinates = format!(
        "({}, {})",
        payload.delivery_location.x, payload.delivery_location.y
    );

    Embed {
        title: EMBED_TITLE,
        color: EMBED_COLOR,
        fields: vec![
            field("Character", payload.character_name.clone(), true),
            field("Map", payload.delivery_location.map.clone(), true),
            field("Coordinates", coordinates, true),
            field("Items", items, false),
            field(
                "Special Instructions",
                or_none(&payload.special_instructions),
                false,
            ),
            field("Total", format!("{} gold", payload.total_amount), true),
            field(
                "Coupon",
                payload
                    .coupon_used
                    .clone()
                    .unwrap_or_else(|| "None".to_string()),
                true,
            ),
            field("Custom Tokens", payload.tokens_used.to_string(), true),
            field(
                "Order Time",
                now.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
                true,
            ),
        ],
        footer: EmbedFooter {
            text: EMBED_FOOTER,
        },
        timestamp: now.to_rfc3339(),
    }
}

pub async fn notify(http: &Client, url: &str, embed: Embed) -> Result<(), reqwest::Error> {
    let body = WebhookBody {
        embeds: vec![embed],
    };

    http.post(url)
        .json(&body)
        .send()
        .await?
        .error_for_status()?;

    Ok(())
}
