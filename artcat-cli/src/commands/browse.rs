//! Interactive catalog browsing
//!
//! `Browser` is the pagination controller: it owns the pagination state,
//! drives the fetcher, and turns every state transition into exactly one
//! view update. The interactive loop below feeds it navigation commands
//! and hands each update to the display surface.

use anyhow::Result;
use artcat_core::{PaginationState, RecordFetcher, PAGE_SIZE};

use crate::context::Context;
use crate::render::{render, PageView};

/// The pagination controller.
///
/// Requests run strictly one at a time: `request_page` borrows the browser
/// mutably for the whole fetch, so a stale response can never overwrite a
/// newer one.
pub struct Browser<F> {
    state: PaginationState,
    fetcher: F,
}

/// Outcome of a `request_page` call, consumed by one display update.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewUpdate {
    /// The request was out of range; nothing was fetched or changed.
    Ignored,
    /// A page loaded; the surface should replace its content with this view.
    Page(PageView),
    /// The fetch failed; state is untouched and the surface should show the
    /// carried description inline.
    Failed(String),
}

impl<F: RecordFetcher> Browser<F> {
    pub fn new(fetcher: F) -> Self {
        Self {
            state: PaginationState::new(PAGE_SIZE),
            fetcher,
        }
    }

    pub fn state(&self) -> &PaginationState {
        &self.state
    }

    /// Request one page of the collection.
    ///
    /// Out-of-range requests are ignored without a fetch. On success the
    /// pagination counters are replaced from the response and the new page
    /// is projected; on failure the last-known state is kept.
    pub async fn request_page(&mut self, page: u32) -> ViewUpdate {
        if !self.state.accepts(page) {
            return ViewUpdate::Ignored;
        }

        match self
            .fetcher
            .fetch_page(page, self.state.items_per_page())
            .await
        {
            Ok(fetched) => {
                self.state.apply(&fetched);
                ViewUpdate::Page(render(&fetched.items, &self.state))
            }
            Err(err) => ViewUpdate::Failed(err.to_string()),
        }
    }
}

/// A parsed navigation trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavCommand {
    Next,
    Previous,
    Goto(u32),
    Quit,
}

/// Parse one line of prompt input into a navigation command.
pub fn parse_command(input: &str) -> Option<NavCommand> {
    let input = input.trim().to_lowercase();
    match input.as_str() {
        "n" | "next" => Some(NavCommand::Next),
        "p" | "prev" | "previous" => Some(NavCommand::Previous),
        "q" | "quit" | "exit" => Some(NavCommand::Quit),
        other => {
            let page = other
                .strip_prefix("g ")
                .or_else(|| other.strip_prefix("goto "))
                .unwrap_or(other);
            page.trim().parse().ok().map(NavCommand::Goto)
        }
    }
}

/// Run the interactive browser
pub async fn execute(ctx: &Context) -> Result<()> {
    let client = ctx.create_client()?;
    let mut browser = Browser::new(client.artworks().clone());

    // The first page loads before any user trigger.
    show(ctx, &mut browser, 1).await;

    loop {
        let input: String = dialoguer::Input::new()
            .with_prompt("artcat [n]ext [p]rev [g]oto <page> [q]uit")
            .allow_empty(true)
            .interact_text()?;

        let Some(command) = parse_command(&input) else {
            ctx.output
                .info("Commands: n(ext), p(rev), g(oto) <page>, q(uit)");
            continue;
        };

        let target = match command {
            NavCommand::Quit => break,
            NavCommand::Next => browser.state().current_page() + 1,
            NavCommand::Previous => browser.state().current_page().saturating_sub(1),
            NavCommand::Goto(page) => page,
        };

        // Disabled controls are inert: out-of-range targets are dropped
        // without a fetch or a re-render.
        if !browser.state().accepts(target) {
            continue;
        }

        show(ctx, &mut browser, target).await;
    }

    Ok(())
}

async fn show<F: RecordFetcher>(ctx: &Context, browser: &mut Browser<F>, page: u32) {
    let spinner = ctx.output.spinner(&format!("Loading page {page}..."));
    let update = browser.request_page(page).await;
    if let Some(s) = spinner {
        s.finish_and_clear();
    }

    match update {
        ViewUpdate::Page(view) => ctx.output.page(&view),
        ViewUpdate::Failed(message) => ctx.output.page_error(&message),
        ViewUpdate::Ignored => {}
    }
}
