use std::sync::Arc;

use tokio::sync::RwLock;

use crate::auth::{AuthApi, RegisterForm, User};
use crate::error::ApiError;

#[derive(Debug, Clone, Default)]
pub struct SessionState {
    pub user: Option<User>,
    pub google_tokens_valid: bool,
    pub loading: bool,
    pub error: Option<String>,
}

impl SessionState {
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}

/// Current user's authentication state.
///
/// Created once at startup, initialized with [`Session::initialize`] and
/// cleared by [`Session::logout`].
pub struct Session {
    auth: Arc<dyn AuthApi>,
    state: RwLock<SessionState>,
}

impl Session {
    pub fn new(auth: Arc<dyn AuthApi>) -> Self {
        Self {
            auth,
            state: RwLock::new(SessionState::default()),
        }
    }

    pub async fn snapshot(&self) -> SessionState {
        self.state.read().await.clone()
    }

    pub async fn is_authenticated(&self) -> bool {
        self.state.read().await.is_authenticated()
    }

    pub async fn user(&self) -> Option<User> {
        self.state.read().await.user.clone()
    }

    /// Restore a session from existing cookies.
    ///
    /// On 401 the tokens are refreshed and the user lookup retried once.
    pub async fn initialize(&self) -> bool {
        {
            let mut state = self.state.write().await;
            state.loading = true;
            state.error = None;
        }

        tracing::info!("Checking authentication...");
        let (user, google_tokens_valid) = match self.auth.me().await {
            Ok(user) => {
                let valid = match self.auth.refresh().await {
                    Ok(refresh) => refresh.google_tokens_valid,
                    Err(_) => false,
                };
                (Some(user), valid)
            }
            Err(e) if e.is_unauthorized() => {
                tracing::info!("Not authenticated, trying to refresh token");
                match self.refresh_and_retry().await {
                    Ok((user, valid)) => (Some(user), valid),
                    Err(e) => {
                        tracing::info!("Token refresh failed: {}", e);
                        (None, false)
                    }
                }
            }
            Err(e) => {
                tracing::info!("Not authenticated: {}", e);
                (None, false)
            }
        };

        let mut state = self.state.write().await;
        if let Some(user) = &user {
            tracing::info!("User authenticated: {}", user.email);
        }
        state.user = user;
        state.google_tokens_valid = google_tokens_valid;
        state.loading = false;
        state.is_authenticated()
    }

    async fn refresh_and_retry(&self) -> Result<(User, bool), ApiError> {
        let refresh = self.auth.refresh().await?;
        let user = self.auth.me().await?;
        Ok((user, refresh.google_tokens_valid))
    }

    /// Password login followed by a profile fetch
    pub async fn login(&self, email: &str, password: &str) -> Result<User, ApiError> {
        let result = async {
            let token = self.auth.login(email, password).await?;
            tracing::debug!("Login token type: {:?}", token.token_type);
            self.auth.me().await
        }
        .await;

        let mut state = self.state.write().await;
        match result {
            Ok(user) => {
                state.user = Some(user.clone());
                state.error = None;
                // fresh login implies fresh Google tokens
                state.google_tokens_valid = true;
                Ok(user)
            }
            Err(e) => {
                state.error = Some(e.message_or("Login failed"));
                Err(e)
            }
        }
    }

    pub async fn register(&self, form: &RegisterForm) -> Result<serde_json::Value, ApiError> {
        self.auth.register(form).await.inspect_err(|e| {
            tracing::warn!("Registration failed: {}", e.message_or("Registration failed"));
        })
    }

    /// Local state is cleared even if the backend call fails
    pub async fn logout(&self) {
        if let Err(e) = self.auth.logout().await {
            tracing::error!("Logout error: {}", e);
        }

        let mut state = self.state.write().await;
        state.user = None;
        state.error = None;
        state.google_tokens_valid = false;
    }
}
