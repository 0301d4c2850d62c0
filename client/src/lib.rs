//! # Pandaren Express Order Client
//!
//! Client for the Pandaren Express delivery backend: an in-memory shopping
//! cart with a token-gated secret menu, a checkout flow against the REST API,
//! and a site-status gate that swaps in a maintenance view when operators
//! close the site.
//!
//!
//!
//! # Flow
//!
//! - User actions mutate the [`cart::CartState`] synchronously; totals and
//!   counts are derived on read, never stored.
//! - The secret menu unlocks through the [`gate`]: a positive reward-token
//!   balance, the coupon phrase, or an applied token.
//! - [`checkout::submit_order`] validates, posts the order, reconciles the
//!   token balance, and fires the best-effort Discord webhook.
//! - [`status::StatusGate`] polls the open/closed flag on an interval and
//!   falls back to open on any failure, so an unreachable backend never locks
//!   users out. Admin routes bypass the gate.
//!
//!
//!
//! # Reward tokens
//!
//! Tokens are granted by the backend when an admin marks an order complete.
//! The cart enforces the budget at insertion: the summed token cost of secret
//! items can never pass the user's balance, and removing a secret item refunds
//! its cost. The local balance is a cache of the backend's; it is re-fetched
//! after every token-spending order.
//!
//!
//!
//! # Environment
//!
//! - `PANDAREN_API_URL`: backend base URL, default `http://localhost:3001`
//! - `PANDAREN_WEBHOOK_URL`: Discord webhook, unset disables notifications
//! - `PANDAREN_STATUS_POLL_SECS`: site-status poll interval, default 30

pub mod api;
pub mod cart;
pub mod checkout;
pub mod config;
pub mod error;
pub mod gate;
pub mod models;
pub mod session;
pub mod state;
pub mod status;
pub mod webhook;

pub use state::App;
