//! # REST Client
//!
//! Thin typed wrapper over the backend's JSON API. Every call attaches the
//! session's bearer token when one is set; admin endpoints rely on the backend
//! rejecting non-admin tokens.

use reqwest::{Client, Method, RequestBuilder, Response};
use serde::{de::DeserializeOwned, Serialize};

use crate::{
    error::AppError,
    models::{
        AdminOrder, AdminUser, AdminUserUpdate, AuthResponse, Credentials, ErrorBody, Order,
        OrderConfirmation, OrderPayload, SiteStatus, SiteStatusResponse, TokenBalance, UserProfile,
    },
};

#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            token: None,
        }
    }

    pub fn set_token(&mut self, token: &str) {
        self.token = Some(token.to_string());
    }

    pub fn clear_token(&mut self) {
        self.token = None;
    }

    /// Shared connection pool, reused for the webhook call.
    pub fn http(&self) -> &Client {
        &self.http
    }

    fn request(&self, method: Method, endpoint: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, endpoint);
        let builder = self.http.request(method, url);

        match &self.token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    /// Backend errors surface their `message` verbatim, with a status-code
    /// fallback when the body has none.
    async fn failure(response: Response) -> AppError {
        let status = response.status();
        let message = response
            .json::<ErrorBody>()
            .await
            .ok()
            .and_then(|body| body.message)
            .unwrap_or_else(|| format!("Request failed with status {status}"));

        AppError::Backend { message }
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, AppError> {
        if !response.status().is_success() {
            return Err(Self::failure(response).await);
        }

        Ok(response.json::<T>().await?)
    }

    async fn get<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, AppError> {
        let response = self.request(Method::GET, endpoint).send().await?;
        Self::decode(response).await
    }

    async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> Result<T, AppError> {
        let response = self.request(Method::POST, endpoint).json(body).send().await?;
        Self::decode(response).await
    }

    async fn patch<B: Serialize, T: DeserializeOwned>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> Result<T, AppError> {
        let response = self
            .request(Method::PATCH, endpoint)
            .json(body)
            .send()
            .await?;
        Self::decode(response).await
    }

    async fn delete(&self, endpoint: &str) -> Result<(), AppError> {
        let response = self.request(Method::DELETE, endpoint).send().await?;

        if !response.status().is_success() {
            return Err(Self::failure(response).await);
        }

        Ok(())
    }

    pub async fn create_order(&self, payload: &OrderPayload) -> Result<OrderConfirmation, AppError> {
        self.post("/api/orders", payload).await
    }

    pub async fn user_orders(&self) -> Result<Vec<Order>, AppError> {
        self.get("/api/orders").await
    }

    pub async fn order_by_id(&self, order_id: u64) -> Result<Order, AppError> {
        self.get(&format!("/api/orders/{order_id}")).await
    }

    pub async fn user_tokens(&self) -> Result<u32, AppError> {
        let balance: TokenBalance = self.get("/api/orders/user/tokens").await?;
        Ok(balance.reward_tokens)
    }

    pub async fn site_status(&self) -> Result<SiteStatus, AppError> {
        let response: SiteStatusResponse = self.get("/api/auth/site-status").await?;
        Ok(response.status)
    }

    pub async fn signin(&self, credentials: &Credentials) -> Result<AuthResponse, AppError> {
        self.post("/api/auth/signin", credentials).await
    }

    pub async fn signup(&self, credentials: &Credentials) -> Result<AuthResponse, AppError> {
        self.post("/api/auth/signup", credentials).await
    }

    pub async fn profile(&self) -> Result<UserProfile, AppError> {
        self.get("/api/auth/profile").await
    }

    // Admin surface. Thin authorized calls only, the dashboard logic lives
    // with the operator.

    pub async fn admin_orders(&self) -> Result<Vec<AdminOrder>, AppError> {
        self.get("/api/orders/admin/all").await
    }

    pub async fn admin_complete_order(
        &self,
        order_id: u64,
        tokens_to_award: u32,
    ) -> Result<AdminOrder, AppError> {
        self.patch(
            &format!("/api/orders/admin/{order_id}/complete"),
            &serde_json::json!({ "tokens_to_award": tokens_to_award }),
        )
        .await
    }

    pub async fn admin_update_order_status(
        &self,
        order_id: u64,
        status: &str,
    ) -> Result<AdminOrder, AppError> {
        self.patch(
            &format!("/api/orders/admin/{order_id}/status"),
            &serde_json::json!({ "status": status }),
        )
        .await
    }

    pub async fn admin_delete_order(&self, order_id: u64) -> Result<(), AppError> {
        self.delete(&format!("/api/orders/{order_id}")).await
    }

    pub async fn admin_users(&self) -> Result<Vec<AdminUser>, AppError> {
        self.get("/api/auth/admin/users").await
    }

    pub async fn admin_update_user(
        &self,
        user_id: u64,
        update: &AdminUserUpdate,
    ) -> Result<AdminUser, AppError> {
        self.patch(&format!("/api/auth/admin/users/{user_id}"), update)
            .await
    }

    pub async fn admin_update_user_tokens(
        &self,
        user_id: u64,
        tokens: u32,
    ) -> Result<AdminUser, AppError> {
        self.patch(
            &format!("/api/auth/admin/users/{user_id}/tokens"),
            &serde_json::json!({ "tokens": tokens }),
        )
        .await
    }

    pub async fn admin_delete_user(&self, user_id: u64) -> Result<(), AppError> {
        self.delete(&format!("/api/auth/admin/users/{user_id}")).await
    }

    pub async fn admin_site_status(&self) -> Result<SiteStatus, AppError> {
        let response: SiteStatusResponse = self.get("/api/auth/admin/site-status").await?;
        Ok(response.status)
    }

    pub async fn admin_toggle_site(&self) -> Result<SiteStatus, AppError> {
        let response: SiteStatusResponse = self
            .post("/api/auth/admin/toggle-site", &serde_json::json!({}))
            .await?;
        Ok(response.status)
    }
}
