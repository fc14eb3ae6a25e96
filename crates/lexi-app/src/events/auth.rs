use kanal::AsyncSender;
use lexi_api::{OAuthIntent, RegisterForm};
use lexi_types::DisplayEvent;

use crate::state::AppState;

pub async fn handle_login(
    state: &AppState,
    app_to_ui_tx: &AsyncSender<DisplayEvent>,
    email: &str,
    password: &str,
) -> anyhow::Result<()> {
    let event = match state.session.login(email, password).await {
        Ok(user) => {
            tracing::info!("Logged in as {}", user.email);
            DisplayEvent::Status(format!("Signed in as {}", user.display_name()))
        }
        Err(e) => DisplayEvent::Error(e.message_or("Login failed")),
    };
    app_to_ui_tx.send(event).await?;

    Ok(())
}

pub async fn handle_register(
    state: &AppState,
    app_to_ui_tx: &AsyncSender<DisplayEvent>,
    form: RegisterForm,
) -> anyhow::Result<()> {
    let event = match state.session.register(&form).await {
        Ok(_) => DisplayEvent::Status(format!(
            "Account created for {}; sign in with `login`",
            form.email
        )),
        Err(e) => DisplayEvent::Error(e.message_or("Registration failed")),
    };
    app_to_ui_tx.send(event).await?;

    Ok(())
}

pub async fn handle_logout(
    state: &AppState,
    app_to_ui_tx: &AsyncSender<DisplayEvent>,
) -> anyhow::Result<()> {
    state.session.logout().await;
    app_to_ui_tx
        .send(DisplayEvent::Status("Signed out".into()))
        .await?;

    Ok(())
}

pub async fn handle_me(
    state: &AppState,
    app_to_ui_tx: &AsyncSender<DisplayEvent>,
) -> anyhow::Result<()> {
    let session = state.session.snapshot().await;
    let event = match session.user {
        Some(user) => DisplayEvent::List {
            title: user.display_name(),
            items: vec![
                format!("email: {}", user.email),
                format!(
                    "google: {}",
                    if session.google_tokens_valid {
                        "connected"
                    } else {
                        "not connected"
                    }
                ),
            ],
        },
        None => DisplayEvent::Status(match session.error {
            Some(error) => format!("Not signed in ({error})"),
            None => "Not signed in".into(),
        }),
    };
    app_to_ui_tx.send(event).await?;

    Ok(())
}

pub async fn handle_oauth(
    state: &AppState,
    app_to_ui_tx: &AsyncSender<DisplayEvent>,
    intent: OAuthIntent,
) -> anyhow::Result<()> {
    let url = state.backend.google_login_url(intent);
    tracing::info!("Google {} URL: {}", intent.as_str(), url);
    app_to_ui_tx
        .send(DisplayEvent::Status(format!(
            "Open this URL in a browser to continue with Google: {url}"
        )))
        .await?;

    Ok(())
}
