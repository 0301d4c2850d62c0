use serde::{Deserialize, Serialize};

/// In-game drop point for an order.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct DeliveryLocation {
    pub x: String,
    pub y: String,
    pub map: String,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct OrderItem {
    pub name: String,
    pub quantity: u32,
    pub price: u64,
}

/// Body of `POST /api/orders`.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct OrderPayload {
    pub total_amount: u64,
    pub delivery_address: String,
    pub notes: String,
    pub special_instructions: String,
    pub items: Vec<OrderItem>,
    pub character_name: String,
    pub delivery_location: DeliveryLocation,
    pub coupon_used: Option<String>,
    pub tokens_used: u32,
}

#[derive(Deserialize, Debug, Clone)]
pub struct OrderConfirmation {
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Deserialize, Debug, Clone, Copy)]
pub struct TokenBalance {
    pub reward_tokens: u32,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SiteStatus {
    Open,
    Closed,
}

#[derive(Deserialize, Debug, Clone, Copy)]
pub struct SiteStatusResponse {
    pub status: SiteStatus,
}

/// Error body shape shared by the backend's non-2xx responses.
#[derive(Deserialize, Debug, Default)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Serialize, Debug, Clone)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

#[derive(Deserialize, Debug, Clone)]
pub struct UserProfile {
    #[serde(default)]
    pub id: Option<u64>,
    pub username: String,
    #[serde(default)]
    pub reward_tokens: u32,
    #[serde(default)]
    pub is_admin: bool,
}

#[derive(Deserialize, Debug, Clone)]
pub struct AuthResponse {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub user: Option<UserProfile>,
    #[serde(default)]
    pub message: Option<String>,
}

/// A user's own order as returned by the history endpoints.
#[derive(Deserialize, Debug, Clone)]
pub struct Order {
    pub id: u64,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub total_amount: u64,
    #[serde(default)]
    pub order_date: Option<String>,
    #[serde(default)]
    pub delivery_address: Option<String>,
    #[serde(default)]
    pub tokens_used: u32,
}

#[derive(Deserialize, Debug, Clone)]
pub struct AdminOrder {
    pub id: u64,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub total_amount: u64,
    #[serde(default)]
    pub character_name: Option<String>,
    #[serde(default)]
    pub delivery_address: Option<String>,
    #[serde(default)]
    pub tokens_used: u32,
}

#[derive(Deserialize, Debug, Clone)]
pub struct AdminUser {
    pub id: u64,
    pub username: String,
    #[serde(default)]
    pub reward_tokens: u32,
    #[serde(default)]
    pub is_admin: bool,
}

/// Partial update for `PATCH /api/auth/admin/users/{id}`; unset fields are
/// left untouched by the backend.
#[derive(Serialize, Debug, Clone, Default)]
pub struct AdminUserUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_admin: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_site_status_decodes_lowercase() {
        let open: SiteStatusResponse = serde_json::from_str(r#"{"status":"open"}"#).unwrap();
        let closed: SiteStatusResponse = serde_json::from_str(r#"{"status":"closed"}"#).unwrap();

        assert_eq!(open.status, SiteStatus::Open);
        assert_eq!(closed.status, SiteStatus::Closed);
    }

    #[test]
    fn test_order_history_decodes() {
        let orders: Vec<Order> = serde_json::from_str(
            r#"[{"id":7,"status":"delivered","total_amount":150,"order_date":"2024-05-01T12:00:00Z"},
                {"id":8}]"#,
        )
        .unwrap();

        assert_eq!(orders.len(), 2);
        assert_eq!(orders[0].id, 7);
        assert_eq!(orders[0].status.as_deref(), Some("delivered"));
        assert_eq!(orders[0].total_amount, 150);
        assert_eq!(orders[1].tokens_used, 0);
        assert!(orders[1].order_date.is_none());
    }

    #[test]
    fn test_error_body_message_is_optional() {
        let body: ErrorBody = serde_json::from_str(r#"{"message":"Insufficient gold"}"#).unwrap();
        assert_eq!(body.message.as_deref(), Some("Insufficient gold"));

        let empty: ErrorBody = serde_json::from_str("{}").unwrap();
        assert!(empty.message.is_none());
    }

    #[test]
    fn test_order_payload_serializes_null_coupon() {
        let payload = OrderPayload {
            total_amount: 50,
            delivery_address: "Durotar - (32, 48)".to_string(),
            notes: "Character: Chen".to_string(),
            special_instructions: String::new(),
            items: vec![OrderItem {
                name: "Steamed Dumplings".to_string(),
                quantity: 1,
                price: 50,
            }],
            character_name: "Chen".to_string(),
            delivery_location: DeliveryLocation {
                x: "32".to_string(),
                y: "48".to_string(),
                map: "Durotar".to_string(),
            },
            coupon_used: None,
            tokens_used: 0,
        };

        let json = serde_json::to_value(&payload).unwrap();
        assert!(json["coupon_used"].is_null());
        assert_eq!(json["items"][0]["quantity"], 1);
    }
}
