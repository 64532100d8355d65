use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;
use store::{AdminStats, Category, PendingDeposit, Product, ProfileUpdate, User};

use crate::error::{ApiError, Result};
use crate::models::{
    AmountRequest, LoginRequest, LoginResponse, MessageResponse, ProductFields, ProductImage,
    ProfileRequest, PurchaseReceipt, RegisterRequest, VerifyEmailRequest,
};

/// HTTP client for the storefront REST API.
///
/// Cheap to clone. The bearer token is attached to protected routes; calling a
/// protected route without one fails fast with [`ApiError::NotAuthenticated`].
#[derive(Debug, Clone)]
pub struct ShopApi {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl ShopApi {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            token: None,
        }
    }

    /// Use `token` for authenticated routes.
    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.token = token;
        self
    }

    fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    fn authed(&self, builder: RequestBuilder) -> Result<RequestBuilder> {
        let token = self.token.as_deref().ok_or(ApiError::NotAuthenticated)?;
        Ok(builder.bearer_auth(token))
    }

    async fn send_raw(builder: RequestBuilder) -> Result<String> {
        let resp = builder.send().await?;
        let status = resp.status();
        let body = resp.text().await?;
        if !status.is_success() {
            tracing::debug!("API error {}: {}", status, body);
            return Err(ApiError::from_body(status.as_u16(), &body));
        }
        Ok(body)
    }

    async fn send<T: DeserializeOwned>(builder: RequestBuilder) -> Result<T> {
        let body = Self::send_raw(builder).await?;
        Ok(serde_json::from_str(&body)?)
    }

    async fn post_json<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T> {
        Self::send(self.client.post(self.url(path)).json(body)).await
    }

    // ---- Authentication -------------------------------------------------

    /// `POST /auth/login`
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResponse> {
        let body = LoginRequest {
            email: email.trim().to_string(),
            password: password.to_string(),
        };
        self.post_json("/auth/login", &body).await
    }

    /// `POST /auth/register`. The account stays unverified until the OTP is confirmed.
    pub async fn register(&self, request: &RegisterRequest) -> Result<()> {
        Self::send_raw(self.client.post(self.url("/auth/register")).json(request)).await?;
        Ok(())
    }

    /// `POST /auth/verify-email`
    pub async fn verify_email(&self, email: &str, otp: &str) -> Result<LoginResponse> {
        let body = VerifyEmailRequest {
            email: email.trim().to_string(),
            otp: otp.trim().to_string(),
        };
        self.post_json("/auth/verify-email", &body).await
    }

    // ---- Current user ---------------------------------------------------

    /// `GET /api/user/me`
    pub async fn current_user(&self) -> Result<User> {
        Self::send(self.authed(self.client.get(self.url("/api/user/me")))?).await
    }

    /// `PUT /api/user/me`. Returns the fields the backend changed.
    pub async fn update_profile(&self, name: &str, avatar: Option<String>) -> Result<ProfileUpdate> {
        let body = ProfileRequest {
            name: name.trim().to_string(),
            avatar,
        };
        Self::send(self.authed(self.client.put(self.url("/api/user/me")).json(&body))?).await
    }

    /// `POST /api/user/me/deposit`
    pub async fn request_deposit(&self, amount: i64) -> Result<()> {
        let builder = self
            .client
            .post(self.url("/api/user/me/deposit"))
            .json(&AmountRequest { amount });
        Self::send_raw(self.authed(builder)?).await?;
        Ok(())
    }

    /// `POST /api/user/me/notify-deposit`: creates the pending deposit record.
    pub async fn notify_deposit(&self, amount: i64) -> Result<()> {
        let builder = self
            .client
            .post(self.url("/api/user/me/notify-deposit"))
            .json(&AmountRequest { amount });
        Self::send_raw(self.authed(builder)?).await?;
        Ok(())
    }

    // ---- Catalog --------------------------------------------------------

    /// `GET /products?category=...`
    pub async fn list_products(&self, category: Category) -> Result<Vec<Product>> {
        let builder = self
            .client
            .get(self.url("/products"))
            .query(&[("category", category.as_str())]);
        Self::send(builder).await
    }

    /// `POST /products/buy/:id`
    pub async fn buy_product(&self, id: &str) -> Result<PurchaseReceipt> {
        let builder = self
            .client
            .post(self.url(&format!("/products/buy/{id}")))
            .json(&serde_json::json!({}));
        Self::send(self.authed(builder)?).await
    }

    // ---- Admin: products ------------------------------------------------

    /// `GET /api/admin/all-products`
    pub async fn admin_products(&self) -> Result<Vec<Product>> {
        Self::send(self.authed(self.client.get(self.url("/api/admin/all-products")))?).await
    }

    /// `GET /products/admin/:id`, including the account credentials.
    pub async fn admin_product(&self, id: &str) -> Result<Product> {
        let builder = self.client.get(self.url(&format!("/products/admin/{id}")));
        Self::send(self.authed(builder)?).await
    }

    /// `POST /products` as multipart. The image is mandatory for new listings.
    pub async fn create_product(&self, fields: &ProductFields, image: ProductImage) -> Result<()> {
        let form = fields.into_form(Some(image))?;
        let builder = self.client.post(self.url("/products")).multipart(form);
        Self::send_raw(self.authed(builder)?).await?;
        Ok(())
    }

    /// `PUT /products/:id` as multipart. Without an image the current one is kept.
    pub async fn update_product(
        &self,
        id: &str,
        fields: &ProductFields,
        image: Option<ProductImage>,
    ) -> Result<()> {
        let form = fields.into_form(image)?;
        let builder = self
            .client
            .put(self.url(&format!("/products/{id}")))
            .multipart(form);
        Self::send_raw(self.authed(builder)?).await?;
        Ok(())
    }

    /// `DELETE /products/:id`
    pub async fn delete_product(&self, id: &str) -> Result<()> {
        let builder = self.client.delete(self.url(&format!("/products/{id}")));
        Self::send_raw(self.authed(builder)?).await?;
        Ok(())
    }

    // ---- Admin: dashboard -----------------------------------------------

    /// `GET /api/admin/revenue`
    pub async fn revenue(&self) -> Result<AdminStats> {
        Self::send(self.authed(self.client.get(self.url("/api/admin/revenue")))?).await
    }

    /// `GET /api/admin/pending-deposits`
    pub async fn pending_deposits(&self) -> Result<Vec<PendingDeposit>> {
        Self::send(self.authed(self.client.get(self.url("/api/admin/pending-deposits")))?).await
    }

    /// `POST /api/admin/approve-deposit/:id`. Irreversible; the backend credits the balance.
    pub async fn approve_deposit(&self, id: &str) -> Result<MessageResponse> {
        let builder = self
            .client
            .post(self.url(&format!("/api/admin/approve-deposit/{id}")))
            .json(&serde_json::json!({}));
        Self::send(self.authed(builder)?).await
    }

    /// `GET /api/admin/seed-products`: creates demo listings for testing.
    pub async fn seed_products(&self) -> Result<MessageResponse> {
        Self::send(self.authed(self.client.get(self.url("/api/admin/seed-products")))?).await
    }
}
