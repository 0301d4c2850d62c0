//! # Cart Store
//!
//! Authoritative in-memory shopping cart for the active session.
//!
//! Duplicates are permitted: each add pushes a new entry, so the cart count is
//! the number of entries, not distinct items. `items` and
//! `secret_menu_tokens_spent` stay private so the token budget invariant
//! (spent tokens never exceed the user's balance) can only move through
//! [`CartState::add_item`] and [`CartState::remove_item_at`].

use menu::MenuItem;

use crate::models::DeliveryLocation;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartItem {
    pub id: u32,
    pub name: String,
    pub price: u64,
    pub token_cost: Option<u32>,
}

impl From<&MenuItem> for CartItem {
    fn from(item: &MenuItem) -> Self {
        Self {
            id: item.id,
            name: item.name.to_string(),
            price: item.price,
            token_cost: item.token_cost,
        }
    }
}

/// Result of an insert attempt, so callers can react to a rejection instead
/// of re-checking the budget themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    Added,
    RejectedInsufficientTokens,
}

impl AddOutcome {
    pub fn is_added(self) -> bool {
        self == AddOutcome::Added
    }
}

#[derive(Debug, Clone, Default)]
pub struct CartState {
    items: Vec<CartItem>,
    secret_menu_tokens_spent: u32,
    pub character_name: String,
    pub delivery_x: String,
    pub delivery_y: String,
    pub map_name: String,
    pub coupon_code: String,
    pub show_secret_menu: bool,
    pub tokens_used: u32,
    pub user_tokens: u32,
    pub special_instructions: String,
    pub order_submitted: bool,
}

impl CartState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an item. Token-costed items are checked against the user's
    /// balance first; a rejected add leaves the cart untouched.
    pub fn add_item(&mut self, item: CartItem) -> AddOutcome {
        if let Some(cost) = item.token_cost {
            // Overflow means the cost can't be covered either way.
            let Some(would_be_spent) = self.secret_menu_tokens_spent.checked_add(cost) else {
                return AddOutcome::RejectedInsufficientTokens;
            };
            if would_be_spent > self.user_tokens {
                return AddOutcome::RejectedInsufficientTokens;
            }
            self.secret_menu_tokens_spent = would_be_spent;
        }

        self.items.push(item);
        AddOutcome::Added
    }

    /// Removes the entry at `index`, refunding its token cost. Out-of-range
    /// indexes are a no-op.
    pub fn remove_item_at(&mut self, index: usize) {
        if index >= self.items.len() {
            return;
        }

        if let Some(cost) = self.items[index].token_cost {
            self.secret_menu_tokens_spent -= cost;
        }

        self.items.remove(index);
    }

    /// Empties the cart. Delivery fields are left alone.
    pub fn clear(&mut self) {
        self.items.clear();
        self.secret_menu_tokens_spent = 0;
    }

    /// Wipes everything back to the initial state except `user_tokens`,
    /// which reflects the backend balance.
    pub fn reset_order_form(&mut self) {
        let user_tokens = self.user_tokens;
        *self = Self::default();
        self.user_tokens = user_tokens;
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn secret_menu_tokens_spent(&self) -> u32 {
        self.secret_menu_tokens_spent
    }

    pub fn cart_count(&self) -> usize {
        self.items.len()
    }

    pub fn cart_total(&self) -> u64 {
        self.items.iter().map(|item| item.price).sum()
    }

    pub fn delivery_location(&self) -> DeliveryLocation {
        DeliveryLocation {
            x: self.delivery_x.clone(),
            y: self.delivery_y.clone(),
            map: self.map_name.clone(),
        }
    }

    pub fn set_character_name(&mut self, value: impl Into<String>) {
        self.character_name = value.into();
    }

    pub fn set_delivery_x(&mut self, value: impl Into<String>) {
        self.delivery_x = value.into();
    }

    pub fn set_delivery_y(&mut self, value: impl Into<String>) {
        self.delivery_y = value.into();
    }

    pub fn set_map_name(&mut self, value: impl Into<String>) {
        self.map_name = value.into();
    }

    pub fn set_coupon_code(&mut self, value: impl Into<String>) {
        self.coupon_code = value.into();
    }

    pub fn set_special_instructions(&mut self, value: impl Into<String>) {
        self.special_instructions = value.into();
    }

    pub fn set_tokens_used(&mut self, value: u32) {
        self.tokens_used = value;
    }

    pub fn set_user_tokens(&mut self, value: u32) {
        self.user_tokens = value;
    }

    pub fn set_show_secret_menu(&mut self, value: bool) {
        self.show_secret_menu = value;
    }

    pub fn set_order_submitted(&mut self, value: bool) {
        self.order_submitted = value;
    }
}
