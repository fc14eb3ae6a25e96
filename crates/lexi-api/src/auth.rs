use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::client::BackendClient;
use crate::error::ApiError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub email: String,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    /// Any other profile fields the backend sends
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl User {
    pub fn display_name(&self) -> String {
        match (&self.first_name, &self.last_name) {
            (Some(first), Some(last)) => format!("{first} {last}"),
            (Some(name), None) | (None, Some(name)) => name.clone(),
            (None, None) => self.email.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RegisterForm {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub password: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub access_token: Option<String>,
    #[serde(default)]
    pub token_type: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RefreshResponse {
    #[serde(default)]
    pub google_tokens_valid: bool,
}

/// Whether a Google sign-in should create an account or use an existing one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OAuthIntent {
    Login,
    Register,
}

impl OAuthIntent {
    pub fn as_str(&self) -> &'static str {
        match self {
            OAuthIntent::Login => "login",
            OAuthIntent::Register => "register",
        }
    }
}

/// Authentication endpoints
#[async_trait]
pub trait AuthApi: Send + Sync {
    async fn register(&self, form: &RegisterForm) -> Result<serde_json::Value, ApiError>;

    async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, ApiError>;

    async fn logout(&self) -> Result<serde_json::Value, ApiError>;

    async fn refresh(&self) -> Result<RefreshResponse, ApiError>;

    async fn me(&self) -> Result<User, ApiError>;
}

impl BackendClient {
    /// Browser URL that starts the Google OAuth flow
    pub fn google_login_url(&self, intent: OAuthIntent) -> reqwest::Url {
        let mut url = self.endpoint(&["auth", "google", "login"]);
        url.query_pairs_mut().append_pair("intent", intent.as_str());
        url
    }
}

#[async_trait]
impl AuthApi for BackendClient {
    async fn register(&self, form: &RegisterForm) -> Result<serde_json::Value, ApiError> {
        let url = self.endpoint(&["auth", ""]);
        self.send(self.http().post(url).json(form)).await
    }

    /// OAuth2 password form: `username` carries the email
    async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, ApiError> {
        let url = self.endpoint(&["auth", "token"]);
        let params = [("username", email), ("password", password)];
        self.send(self.http().post(url).form(&params)).await
    }

    async fn logout(&self) -> Result<serde_json::Value, ApiError> {
        let url = self.endpoint(&["auth", "logout"]);
        self.send(self.http().post(url)).await
    }

    async fn refresh(&self) -> Result<RefreshResponse, ApiError> {
        let url = self.endpoint(&["auth", "refresh"]);
        self.send(self.http().post(url)).await
    }

    async fn me(&self) -> Result<User, ApiError> {
        let url = self.endpoint(&["auth", "me"]);
        self.send(self.http().get(url)).await
    }
}
