use std::sync::Arc;

use kanal::{AsyncReceiver, AsyncSender};
use lexi_types::{AppEvent, DisplayEvent};
use tokio_util::sync::CancellationToken;

use crate::command::{self, Command};
use crate::state::AppState;

pub mod auth;
pub mod lookup;
pub mod playback;
pub mod videos;
pub mod vocabulary;

/// Whether the loop keeps running after an event
#[derive(Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// App's main loop
pub async fn event_loop(
    state: Arc<AppState>,
    input_rx: AsyncReceiver<AppEvent>,
    app_to_ui_tx: AsyncSender<DisplayEvent>,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    if state.session.initialize().await
        && let Some(user) = state.session.user().await
    {
        app_to_ui_tx
            .send(DisplayEvent::Status(format!(
                "Signed in as {}",
                user.display_name()
            )))
            .await?;
    }

    tracing::info!("[EVENT_LOOP] Starting main loop, waiting for events");
    loop {
        let event = tokio::select! {
            _ = cancel.cancelled() => break,
            event = input_rx.recv() => event?,
        };

        if handle_events(&state, &app_to_ui_tx, event).await? == Flow::Quit {
            tracing::info!("Quit requested");
            cancel.cancel();
            break;
        }
    }

    Ok(())
}

pub async fn handle_events(
    state: &AppState,
    app_to_ui_tx: &AsyncSender<DisplayEvent>,
    event: AppEvent,
) -> anyhow::Result<Flow> {
    match event {
        AppEvent::TextInput(line) => {
            if line.trim().is_empty() {
                return Ok(Flow::Continue);
            }
            tracing::debug!("Input: {}", line);

            match command::parse(&line) {
                Ok(command) => return handle_command(state, app_to_ui_tx, command).await,
                Err(e) => {
                    let message = e.to_string().trim_end().to_string();
                    let event = match e.kind() {
                        clap::error::ErrorKind::DisplayHelp
                        | clap::error::ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => {
                            DisplayEvent::Status(message)
                        }
                        _ => DisplayEvent::Error(message),
                    };
                    app_to_ui_tx.send(event).await?;
                }
            }
        }
        AppEvent::PlaybackTick { time } => {
            playback::handle_tick(state, app_to_ui_tx, time).await?;
        }
        AppEvent::PlaybackEnded => {
            playback::handle_end(state, app_to_ui_tx).await?;
        }
        AppEvent::Shutdown => {
            tracing::info!("Input closed");
            return Ok(Flow::Quit);
        }
    }

    Ok(Flow::Continue)
}

async fn handle_command(
    state: &AppState,
    tx: &AsyncSender<DisplayEvent>,
    command: Command,
) -> anyhow::Result<Flow> {
    match command {
        Command::Lookup { word } => lookup::handle_lookup(state, tx, &word).await?,
        Command::Cache { action } => lookup::handle_cache(state, tx, action).await?,

        Command::Captions { video, lang } => {
            playback::handle_captions(state, tx, &video, lang.as_deref()).await?
        }
        Command::Play { video, from, lang } => {
            playback::handle_play(state, tx, &video, from, lang.as_deref()).await?
        }
        Command::Pause => playback::handle_pause(state, tx).await?,
        Command::Resume => playback::handle_resume(state, tx).await?,
        Command::Seek { seconds } => playback::handle_seek(state, tx, seconds).await?,
        Command::Words => playback::handle_words(state, tx).await?,

        Command::Click { word, index } => {
            vocabulary::handle_click(state, tx, &word, index).await?
        }
        Command::Save { word, video } => {
            vocabulary::handle_save(state, tx, &word, video).await?
        }
        Command::Saved {
            search,
            sort,
            skip,
            limit,
        } => vocabulary::handle_saved(state, tx, search, sort, skip, limit).await?,
        Command::Delete { word } => vocabulary::handle_delete(state, tx, &word).await?,
        Command::Check { word } => vocabulary::handle_check(state, tx, &word).await?,

        Command::Vocab { video, lang, top } => {
            videos::handle_vocab(state, tx, &video, lang.as_deref(), top).await?
        }
        Command::Trending { region, category } => {
            videos::handle_trending(state, tx, region, category).await?
        }
        Command::More => videos::handle_more(state, tx).await?,
        Command::LastLiked => videos::handle_last_liked(state, tx).await?,

        Command::Login { email, password } => {
            auth::handle_login(state, tx, &email, &password).await?
        }
        Command::Register {
            email,
            first_name,
            last_name,
            password,
        } => {
            let form = lexi_api::RegisterForm {
                email,
                first_name,
                last_name,
                password,
            };
            auth::handle_register(state, tx, form).await?
        }
        Command::Logout => auth::handle_logout(state, tx).await?,
        Command::Me => auth::handle_me(state, tx).await?,
        Command::Oauth { intent } => auth::handle_oauth(state, tx, intent.into()).await?,

        Command::Quit => return Ok(Flow::Quit),
    }

    Ok(Flow::Continue)
}
