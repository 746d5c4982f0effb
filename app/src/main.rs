//! Death Clock command host
//!
//! Reads one JSON invocation per line on stdin and answers with one JSON
//! line on stdout: `{"ok": ...}` or `{"error": "..."}`. Logs go to stderr.

mod commands;
mod state;

use std::io::{self, BufRead, Write};

use serde::Serialize;
use state::AppState;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Serialize, Debug)]
#[serde(rename_all = "lowercase")]
enum Response {
    Ok(serde_json::Value),
    Error(String),
}

/// Answer one raw input line. Blank lines get no reply.
fn respond(state: &AppState, raw: &[u8]) -> Option<Response> {
    let line = match std::str::from_utf8(raw) {
        Ok(line) => line.trim(),
        Err(e) => {
            warn!("Invocation is not UTF-8: {}", e);
            return Some(Response::Error(format!("invalid invocation: {}", e)));
        }
    };
    if line.is_empty() {
        return None;
    }

    let response = match serde_json::from_str::<commands::Invocation>(line) {
        Ok(invocation) => match commands::invoke(state, invocation) {
            Ok(value) => Response::Ok(value),
            Err(message) => Response::Error(message),
        },
        Err(e) => {
            warn!("Unreadable invocation: {}", e);
            Response::Error(format!("invalid invocation: {}", e))
        }
    };
    Some(response)
}

/// Answer every line of `input` until it closes; returns the reply count
fn serve(state: &AppState, mut input: impl BufRead, mut output: impl Write) -> io::Result<u64> {
    let mut buf = Vec::new();
    let mut handled = 0u64;

    loop {
        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        let Some(response) = respond(state, &buf) else {
            continue;
        };

        serde_json::to_writer(&mut output, &response)?;
        writeln!(output)?;
        output.flush()?;
        handled += 1;
    }

    Ok(handled)
}

fn main() -> anyhow::Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let app_state = AppState::from_env()?;
    info!(seed = ?app_state.seed, "Death Clock ready for commands");

    let handled = serve(&app_state, io::stdin().lock(), io::stdout().lock())?;

    info!("Input closed after {} invocations, exiting", handled);
    Ok(())
}
