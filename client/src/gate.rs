//! # Token Gate
//!
//! Secret-menu visibility and reward-token policy. The gold-vs-token budget
//! itself is enforced inside the cart store; this layer only decides who may
//! see the secret catalog and who may earmark a token.

use crate::{cart::CartState, error::ValidationError, session::Session};

/// The one coupon phrase that unlocks the secret menu.
pub const SECRET_MENU_COUPON: &str = "pandaren";

pub fn coupon_unlocks(code: &str) -> bool {
    code.eq_ignore_ascii_case(SECRET_MENU_COUPON)
}

/// Checks the entered coupon and flips the gate on a match. Returns whether
/// the coupon was accepted.
pub fn apply_coupon(cart: &mut CartState) -> bool {
    if coupon_unlocks(&cart.coupon_code) {
        cart.set_show_secret_menu(true);
        true
    } else {
        false
    }
}

/// Toggles the custom-order token on or off. Unauthenticated sessions can
/// browse prices but never apply tokens.
pub fn apply_token(cart: &mut CartState, session: &Session) -> Result<(), ValidationError> {
    if !session.is_authenticated() {
        return Err(ValidationError::NotAuthenticated);
    }

    let next = if cart.tokens_used > 0 { 0 } else { 1 };
    cart.set_tokens_used(next);

    if next > 0 {
        cart.set_show_secret_menu(true);
    }

    Ok(())
}

/// Catalog-mount hook: an authenticated user with a positive backend balance
/// sees the secret menu without any coupon.
pub fn sync_visibility(cart: &mut CartState, session: &Session) {
    if !session.is_authenticated() {
        return;
    }

    if cart.user_tokens > 0 || cart.tokens_used > 0 {
        cart.set_show_secret_menu(true);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::UserProfile;

    fn signed_in() -> Session {
        let mut session = Session::default();
        session.start(
            "token".to_string(),
            Some(UserProfile {
                id: Some(1),
                username: "chen".to_string(),
                reward_tokens: 1,
                is_admin: false,
            }),
        );
        session
    }

    #[test]
    fn test_coupon_is_case_insensitive() {
        assert!(coupon_unlocks("pandaren"));
        assert!(coupon_unlocks("PaNdArEn"));
        assert!(coupon_unlocks("PANDAREN"));
        assert!(!coupon_unlocks("panda"));
        assert!(!coupon_unlocks(""));
    }

    #[test]
    fn test_apply_coupon_flips_gate() {
        let mut cart = CartState::new();
        cart.set_coupon_code("PaNdArEn");

        assert!(apply_coupon(&mut cart));
        assert!(cart.show_secret_menu);

        let mut cart = CartState::new();
        cart.set_coupon_code("panda");

        assert!(!apply_coupon(&mut cart));
        assert!(!cart.show_secret_menu);
    }

    #[test]
    fn test_apply_token_requires_authentication() {
        let mut cart = CartState::new();

        assert_eq!(
            apply_token(&mut cart, &Session::default()),
            Err(ValidationError::NotAuthenticated)
        );
        assert_eq!(cart.tokens_used, 0);
    }

    #[test]
    fn test_apply_token_toggles() {
        let mut cart = CartState::new();
        let session = signed_in();

        apply_token(&mut cart, &session).unwrap();
        assert_eq!(cart.tokens_used, 1);
        assert!(cart.show_secret_menu);

        apply_token(&mut cart, &session).unwrap();
        assert_eq!(cart.tokens_used, 0);
    }

    #[test]
    fn test_sync_visibility_unlocks_on_balance() {
        let mut cart = CartState::new();
        cart.set_user_tokens(1);

        sync_visibility(&mut cart, &Session::default());
        assert!(!cart.show_secret_menu);

        sync_visibility(&mut cart, &signed_in());
        assert!(cart.show_secret_menu);
    }

    #[test]
    fn test_sync_visibility_stays_hidden_without_tokens() {
        let mut cart = CartState::new();

        sync_visibility(&mut cart, &signed_in());
        assert!(!cart.show_secret_menu);
    }
}
