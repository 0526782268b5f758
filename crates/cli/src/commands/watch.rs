// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Live view of the poll list.
//!
//! Seeds the store over REST, then redraws the sorted view whenever a push
//! event lands or the connection state changes, until Ctrl-C.

use std::io::{self, IsTerminal, Write};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use crossterm::{cursor, terminal, QueueableCommand};
use qp_core::{Applied, SortKey};

use crate::api::PollApi;
use crate::app::App;
use crate::colors;
use crate::config::Settings;
use crate::display::{format_connection, format_polls};
use crate::error::Result;
use crate::sync::{ConnectionState, PushClient};

use super::open_app;

pub async fn run(settings: &Settings, sort: SortKey) -> Result<()> {
    let mut app = open_app(settings)?;
    app.load().await?;

    let mut push = PushClient::connect(settings.push_config());
    let updates = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&updates);
    push.subscribe(move |_| {
        counter.fetch_add(1, Ordering::Relaxed);
    });
    let mut states = push.states();
    let mut app = app.with_push(push);

    let color = colors::should_colorize();
    let mut stdout = io::stdout();
    let interactive = stdout.is_terminal();
    let mut state = *states.borrow_and_update();
    let result: Result<()> = loop {
        let frame = render(&app, sort, state, updates.load(Ordering::Relaxed), color);
        if let Err(e) = draw(&mut stdout, &frame, interactive) {
            break Err(e.into());
        }

        tokio::select! {
            _ = tokio::signal::ctrl_c() => break Ok(()),
            changed = states.changed() => {
                if changed.is_err() {
                    break Ok(());
                }
                state = *states.borrow_and_update();
            }
            applied = app.next_event() => match applied {
                Some(Applied::Removed(poll)) => {
                    tracing::debug!(poll = %poll.id, "poll removed");
                }
                Some(_) => {}
                None => break Ok(()),
            },
        }
    };

    app.shutdown().await;
    result
}

/// One screenful: a status line followed by the sorted polls.
pub(crate) fn render<A: PollApi>(
    app: &App<A>,
    sort: SortKey,
    state: ConnectionState,
    updates: usize,
    color: bool,
) -> String {
    let status = format!(
        "{} | sorted by {} | {} {} | Ctrl-C to quit",
        format_connection(state),
        sort,
        updates,
        if updates == 1 { "update" } else { "updates" },
    );
    let status = if color {
        colors::context(&status)
    } else {
        status
    };
    let polls = format_polls(app.view(sort), |p| app.session().mark(p.id), color);
    format!("{}\n\n{}\n", status, polls)
}

/// Writes a frame, replacing the previous one on a terminal.
fn draw(out: &mut impl Write, frame: &str, interactive: bool) -> io::Result<()> {
    if interactive {
        out.queue(terminal::Clear(terminal::ClearType::All))?;
        out.queue(cursor::MoveTo(0, 0))?;
    } else {
        writeln!(out, "---")?;
    }
    out.write_all(frame.as_bytes())?;
    out.flush()
}

#[cfg(test)]
#[path = "watch_tests.rs"]
mod tests;
