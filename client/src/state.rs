use std::time::Duration;

use tracing::info;

use crate::{
    api::ApiClient,
    cart::CartState,
    checkout,
    config::Config,
    error::AppError,
    gate,
    models::{Credentials, OrderConfirmation, SiteStatus},
    session::Session,
    status::{self, StatusGate},
};

/// One application session: config, REST client, cart, auth session, and the
/// site-status gate, owned together with an explicit lifecycle instead of
/// ambient globals. Dropping the `App` stops the status poll.
pub struct App {
    pub config: Config,
    pub api: ApiClient,
    pub cart: CartState,
    pub session: Session,
    status: StatusGate,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    /// Must be called inside a tokio runtime; spawns the status poll task.
    pub fn new() -> Self {
        let config = Config::load();
        Self::with_config(config)
    }

    pub fn with_config(config: Config) -> Self {
        let api = ApiClient::new(&config.api_url);
        let status = StatusGate::spawn(api.clone(), Duration::from_secs(config.status_poll_secs));

        Self {
            config,
            api,
            cart: CartState::new(),
            session: Session::default(),
            status,
        }
    }

    pub async fn signin(&mut self, credentials: &Credentials) -> Result<(), AppError> {
        let response = self.api.signin(credentials).await?;
        self.adopt_auth(response.token, response.user)
    }

    pub async fn signup(&mut self, credentials: &Credentials) -> Result<(), AppError> {
        let response = self.api.signup(credentials).await?;
        self.adopt_auth(response.token, response.user)
    }

    fn adopt_auth(
        &mut self,
        token: Option<String>,
        user: Option<crate::models::UserProfile>,
    ) -> Result<(), AppError> {
        let token = token.ok_or(AppError::Backend {
            message: "Something went wrong".to_string(),
        })?;

        self.api.set_token(&token);
        self.session.start(token, user);
        info!("Session started");

        Ok(())
    }

    pub fn logout(&mut self) {
        self.api.clear_token();
        self.session.clear();
        self.cart.set_tokens_used(0);
    }

    /// Catalog-mount hook: pulls the authoritative token balance and unlocks
    /// the secret menu for users holding tokens.
    pub async fn refresh_tokens(&mut self) -> Result<(), AppError> {
        if !self.session.is_authenticated() {
            return Ok(());
        }

        let balance = self.api.user_tokens().await?;
        self.cart.set_user_tokens(balance);
        gate::sync_visibility(&mut self.cart, &self.session);

        Ok(())
    }

    pub async fn submit_order(&mut self) -> Result<OrderConfirmation, AppError> {
        checkout::submit_order(&self.api, &self.config, &mut self.cart).await
    }

    pub fn site_status(&self) -> SiteStatus {
        self.status.current()
    }

    /// Whether the maintenance view replaces the content at `path`.
    pub fn route_blocked(&self, path: &str) -> bool {
        status::route_blocked(self.site_status(), path)
    }
}
