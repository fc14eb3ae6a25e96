use std::fmt::Write;

use kanal::AsyncReceiver;
use lexi_core::captions::format_timestamp;
use lexi_types::{DisplayEvent, VocabularyRecord, WordLookupResult};
use tokio_util::sync::CancellationToken;

/// Print display events to stdout until cancelled
pub async fn ui_loop(
    app_to_ui_rx: AsyncReceiver<DisplayEvent>,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    println!("Type `help` for commands.");

    loop {
        let event = tokio::select! {
            _ = cancel.cancelled() => break,
            event = app_to_ui_rx.recv() => event?,
        };
        println!("{}", render(&event));
    }

    tracing::info!("UI loop stopping");
    Ok(())
}

pub fn render(event: &DisplayEvent) -> String {
    match event {
        DisplayEvent::Caption {
            index,
            total,
            start,
            text,
        } => format!("[{}] ({}/{}) {}", format_timestamp(*start), index + 1, total, text),
        DisplayEvent::Definition { word, result } => match result {
            Some(result) => render_definition(result),
            None => format!("No definition found for \"{word}\""),
        },
        DisplayEvent::Record(record) => render_record(record),
        DisplayEvent::List { title, items } => {
            let mut out = format!("{title}:");
            if items.is_empty() {
                out.push_str("\n  (none)");
            }
            for item in items {
                let _ = write!(out, "\n  {item}");
            }
            out
        }
        DisplayEvent::Status(message) => message.clone(),
        DisplayEvent::Error(message) => format!("error: {message}"),
    }
}

fn render_definition(result: &WordLookupResult) -> String {
    let mut out = result.word.clone();
    if !result.phonetic.is_empty() {
        let _ = write!(out, "  {}", result.phonetic);
    }

    for meaning in &result.meanings {
        let _ = write!(out, "\n  {}", meaning.part_of_speech);
        for (i, definition) in meaning.definitions.iter().enumerate() {
            let _ = write!(out, "\n    {}. {}", i + 1, definition.definition);
            if let Some(example) = &definition.example {
                let _ = write!(out, "\n       \"{example}\"");
            }
        }
    }

    if !result.global_synonyms.is_empty() {
        let _ = write!(out, "\n  synonyms: {}", result.global_synonyms.join(", "));
    }
    if !result.global_antonyms.is_empty() {
        let _ = write!(out, "\n  antonyms: {}", result.global_antonyms.join(", "));
    }

    out
}

fn render_record(record: &VocabularyRecord) -> String {
    let context = &record.context;
    let mut out = format!(
        "{} at {} (caption {}/{})",
        context.word,
        format_timestamp(context.timestamp),
        context.video_position.index + 1,
        context.video_position.total
    );
    if let Some(expansion) = &record.expansion {
        let _ = write!(out, "\n  = {expansion}");
    }

    for line in &context.context.previous {
        let _ = write!(out, "\n    {}", line.text);
    }
    if let Some(current) = &context.context.current {
        let _ = write!(out, "\n  > {}", current.text);
    }
    for line in &context.context.next {
        let _ = write!(out, "\n    {}", line.text);
    }

    let _ = write!(out, "\n{}", render_definition(&record.definition));
    out
}
