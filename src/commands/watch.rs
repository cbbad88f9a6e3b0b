//! Watch a view: poll its range and re-render on every new state.

use std::{sync::Arc, time::Duration};

use crate::{
    cli::ViewArgs,
    league::{
        fallback::{match_rows_or_fallback, player_rows_or_fallback},
        Pagination,
    },
    sheets::{SheetPoller, SheetState},
    Result, SheetView,
};

use super::{
    common::client_from_config,
    leaderboard, matches, players,
};

/// Render one poller snapshot as the chosen view.
pub fn render_state(state: &SheetState, args: &ViewArgs, view: SheetView) -> String {
    let pagination = Pagination::new(args.page, args.per_page);
    let search = args.search.as_deref().unwrap_or("");

    let mut out = String::new();
    if state.is_loading && state.data.is_none() {
        out.push_str("Loading...\n");
        return out;
    }
    if let Some(error) = &state.error {
        let fallback = if state.data.is_some() {
            "last good data"
        } else {
            "sample data"
        };
        out.push_str(&format!("⚠ {} (showing {})\n", error, fallback));
    }
    if let Some(at) = state.last_updated {
        out.push_str(&format!("Last updated: {}\n", at.format("%H:%M:%S")));
    }

    let body = match view {
        SheetView::Players => {
            let rows = player_rows_or_fallback(state.data.as_ref(), args.division);
            players::render(
                &players::build_report(&rows, args.division, search, pagination),
                pagination,
            )
        }
        SheetView::Leaderboard => {
            let rows = player_rows_or_fallback(state.data.as_ref(), args.division);
            leaderboard::render(
                &leaderboard::build_report(&rows, args.division, search, None, pagination),
                pagination,
            )
        }
        SheetView::Matches => {
            let rows = match_rows_or_fallback(state.data.as_ref(), args.division);
            matches::render(
                &matches::build_report(&rows, args.division, search, pagination),
                pagination,
            )
        }
    };
    out.push_str(&body);
    out
}

/// Handle the watch command; runs until Ctrl-C.
pub async fn handle_watch(args: ViewArgs, view: SheetView, interval_secs: u64) -> Result<()> {
    let client = Arc::new(client_from_config()?);
    let spreadsheet_id = client
        .config()
        .resolve_spreadsheet_id(args.spreadsheet_id.clone())?;
    let range = args.division.range_for(view);
    let period = Duration::from_secs(interval_secs.max(1));

    tracing::info!(%spreadsheet_id, %range, ?period, "watching range");
    println!(
        "Watching {} {:?} every {}s (Ctrl-C to stop)",
        args.division.label(),
        view,
        period.as_secs()
    );

    let poller = SheetPoller::spawn(client, spreadsheet_id, range, period);
    let mut rx = poller.subscribe();

    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => break,
            changed = rx.changed() => {
                if changed.is_err() {
                    break;
                }
                let state = rx.borrow_and_update().clone();
                if state.is_loading && state.data.is_some() {
                    continue;
                }
                println!();
                print!("{}", render_state(&state, &args, view));
            }
        }
    }

    poller.stop().await;
    println!("Stopped watching.");
    Ok(())
}
