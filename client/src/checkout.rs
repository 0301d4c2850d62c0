//! # Checkout
//!
//! Validates the cart, submits the order, reconciles the token balance, and
//! fires the notification webhook.
//!
//! Failure handling follows three tiers: validation failures never reach the
//! network, backend failures leave the cart untouched so the user can retry,
//! and webhook failures are logged and dropped.

use chrono::Utc;
use tracing::{info, warn};

use crate::{
    api::ApiClient,
    cart::CartState,
    config::Config,
    error::{AppError, ValidationError},
    gate::SECRET_MENU_COUPON,
    models::{OrderConfirmation, OrderItem, OrderPayload},
    webhook,
};

/// All delivery fields set, at least one item, and the earmarked tokens
/// covered by the balance.
pub fn validate(cart: &CartState) -> Result<(), ValidationError> {
    if cart.character_name.is_empty()
        || cart.delivery_x.is_empty()
        || cart.delivery_y.is_empty()
        || cart.map_name.is_empty()
        || cart.cart_count() == 0
    {
        return Err(ValidationError::MissingFields);
    }

    if cart.tokens_used > cart.user_tokens {
        return Err(ValidationError::InsufficientTokens {
            needed: cart.tokens_used,
            available: cart.user_tokens,
        });
    }

    Ok(())
}

/// Whether the submit button should be enabled.
pub fn can_submit(cart: &CartState) -> bool {
    validate(cart).is_ok()
}

pub fn build_payload(cart: &CartState) -> OrderPayload {
    let delivery_location = cart.delivery_location();

    OrderPayload {
        total_amount: cart.cart_total(),
        delivery_address: format!(
            "{} - ({}, {})",
            delivery_location.map, delivery_location.x, delivery_location.y
        ),
        notes: format!("Character: {}", cart.character_name),
        special_instructions: cart.special_instructions.clone(),
        items: cart
            .items()
            .iter()
            .map(|item| OrderItem {
                name: item.name.clone(),
                quantity: 1,
                price: item.price,
            })
            .collect(),
        character_name: cart.character_name.clone(),
        delivery_location,
        coupon_used: cart
            .show_secret_menu
            .then(|| SECRET_MENU_COUPON.to_string()),
        tokens_used: cart.tokens_used,
    }
}

/// Runs the full submit flow. On a backend error the cart is returned exactly
/// as it was so the user can correct and retry.
pub async fn submit_order(
    api: &ApiClient,
    config: &Config,
    cart: &mut CartState,
) -> Result<OrderConfirmation, AppError> {
    validate(cart)?;

    let payload = build_payload(cart);
    let confirmation = api.create_order(&payload).await?;
    info!("Order created for {}", payload.character_name);

    if cart.tokens_used > 0 {
        reconcile_tokens(api, cart).await;
    }

    if let Some(url) = &config.webhook_url {
        let embed = webhook::build_embed(&payload, Utc::now());
        if let Err(error) = webhook::notify(api.http(), url, embed).await {
            warn!("Failed to send order notification: {error}");
        }
    }

    cart.set_order_submitted(true);
    Ok(confirmation)
}

/// The local balance is a cache. Prefer the backend's number after a
/// successful order and only deduct locally when the refresh itself fails.
async fn reconcile_tokens(api: &ApiClient, cart: &mut CartState) {
    match api.user_tokens().await {
        Ok(balance) => cart.set_user_tokens(balance),
        Err(error) => {
            warn!("Token balance refresh failed, deducting locally: {error}");
            cart.set_user_tokens(cart.user_tokens.saturating_sub(cart.tokens_used));
        }
    }
}

/// Dismissing the confirmation view starts a fresh order form.
pub fn dismiss_confirmation(cart: &mut CartState) {
    cart.reset_order_form();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::CartItem;

    fn ready_cart() -> CartState {
        let mut cart = CartState::new();
        cart.set_character_name("Chen Stormstout");
        cart.set_delivery_x("52.2");
        cart.set_delivery_y("48.7");
        cart.set_map_name("Valley of the Four Winds");
        cart.add_item(CartItem {
            id: 1,
            name: "Steamed Dumplings".to_string(),
            price: 50,
            token_cost: None,
        });
        cart
    }

    #[test]
    fn test_validate_requires_every_field() {
        assert!(validate(&ready_cart()).is_ok());

        let mut cart = ready_cart();
        cart.set_character_name("");
        assert_eq!(validate(&cart), Err(ValidationError::MissingFields));

        let mut cart = ready_cart();
        cart.set_delivery_x("");
        assert_eq!(validate(&cart), Err(ValidationError::MissingFields));

        let mut cart = ready_cart();
        cart.set_delivery_y("");
        assert_eq!(validate(&cart), Err(ValidationError::MissingFields));

        let mut cart = ready_cart();
        cart.set_map_name("");
        assert_eq!(validate(&cart), Err(ValidationError::MissingFields));

        let mut cart = ready_cart();
        cart.clear();
        assert_eq!(validate(&cart), Err(ValidationError::MissingFields));
    }

    #[test]
    fn test_validate_checks_token_cover() {
        let mut cart = ready_cart();
        cart.set_tokens_used(1);

        assert_eq!(
            validate(&cart),
            Err(ValidationError::InsufficientTokens {
                needed: 1,
                available: 0,
            })
        );

        cart.set_user_tokens(1);
        assert!(validate(&cart).is_ok());
        assert!(can_submit(&cart));
    }

    #[test]
    fn test_payload_shape() {
        let mut cart = ready_cart();
        cart.add_item(CartItem {
            id: 5,
            name: "Five-Spice Tea".to_string(),
            price: 50,
            token_cost: None,
        });
        cart.set_special_instructions("Leave by the brewery door");

        let payload = build_payload(&cart);

        assert_eq!(payload.total_amount, 100);
        assert_eq!(
            payload.delivery_address,
            "Valley of the Four Winds - (52.2, 48.7)"
        );
        assert_eq!(payload.notes, "Character: Chen Stormstout");
        assert_eq!(payload.items.len(), 2);
        assert!(payload.items.iter().all(|item| item.quantity == 1));
        assert_eq!(payload.coupon_used, None);
        assert_eq!(payload.tokens_used, 0);
    }

    #[test]
    fn test_payload_records_coupon_when_unlocked() {
        let mut cart = ready_cart();
        cart.set_show_secret_menu(true);

        assert_eq!(
            build_payload(&cart).coupon_used,
            Some("pandaren".to_string())
        );
    }

    #[test]
    fn test_build_payload_leaves_cart_untouched() {
        let cart = ready_cart();
        let before = cart.clone();

        let _ = build_payload(&cart);

        assert_eq!(cart.items(), before.items());
        assert_eq!(cart.cart_total(), before.cart_total());
        assert!(!cart.order_submitted);
    }

    #[tokio::test]
    async fn test_backend_rejection_preserves_cart() {
        // Port 9 (discard) never answers; the create_order call fails and
        // submit_order must bail before mutating anything.
        let api = ApiClient::new("http://127.0.0.1:9");
        let config = Config {
            api_url: "http://127.0.0.1:9".to_string(),
            webhook_url: None,
            status_poll_secs: 30,
        };
        let mut cart = ready_cart();
        let before = cart.clone();

        let result = submit_order(&api, &config, &mut cart).await;

        assert!(result.is_err());
        assert_eq!(cart.items(), before.items());
        assert!(!cart.order_submitted);
        assert_eq!(cart.user_tokens, before.user_tokens);
    }

    #[tokio::test]
    async fn test_validation_failure_is_not_a_network_error() {
        let api = ApiClient::new("http://127.0.0.1:9");
        let config = Config {
            api_url: "http://127.0.0.1:9".to_string(),
            webhook_url: None,
            status_poll_secs: 30,
        };
        let mut cart = CartState::new();

        match submit_order(&api, &config, &mut cart).await {
            Err(AppError::Validation(ValidationError::MissingFields)) => {}
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_dismiss_resets_form() {
        let mut cart = ready_cart();
        cart.set_user_tokens(2);
        cart.set_order_submitted(true);

        dismiss_confirmation(&mut cart);

        assert_eq!(cart.cart_count(), 0);
        assert!(!cart.order_submitted);
        assert_eq!(cart.user_tokens, 2);
    }
}
