//! Fixed-interval polling of one sheet range.
//!
//! The poller fetches as soon as it is spawned and then on every tick,
//! publishing a `SheetState` snapshot on a watch channel. Fetches go through
//! the client's cache, so ticks inside the cache TTL are served from memory.
//! Stopping or dropping the poller cancels the task, including an in-flight
//! fetch.

use chrono::{DateTime, Local};
use std::{sync::Arc, time::Duration};
use tokio::{
    sync::watch,
    task::JoinHandle,
    time::{interval, MissedTickBehavior},
};
use tokio_util::sync::CancellationToken;

use crate::sheets::client::{error_banner, SheetsClient};
use crate::sheets::types::ValueRange;
use crate::{SheetRange, SpreadsheetId};

#[cfg(test)]
mod tests;

/// Default poll period (30 seconds).
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(30);

/// What a view needs to render: data, loading flag, and the last error.
#[derive(Debug, Clone, Default)]
pub struct SheetState {
    pub data: Option<ValueRange>,
    pub is_loading: bool,
    pub error: Option<String>,
    pub last_updated: Option<DateTime<Local>>,
}

pub struct SheetPoller {
    state: watch::Receiver<SheetState>,
    cancel: CancellationToken,
    handle: Option<JoinHandle<()>>,
}

impl SheetPoller {
    /// Start polling `range` every `period`.
    pub fn spawn(
        client: Arc<SheetsClient>,
        spreadsheet_id: SpreadsheetId,
        range: SheetRange,
        period: Duration,
    ) -> Self {
        let (tx, rx) = watch::channel(SheetState::default());
        let cancel = CancellationToken::new();
        let token = cancel.clone();

        let handle = tokio::spawn(async move {
            let mut ticker = interval(period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                tokio::select! {
                    _ = token.cancelled() => break,
                    _ = ticker.tick() => {}
                }

                tx.send_modify(|s| s.is_loading = true);

                let result = tokio::select! {
                    _ = token.cancelled() => break,
                    result = client.fetch_sheet_data(&spreadsheet_id, &range) => result,
                };

                match result {
                    Ok((data, status)) => {
                        tracing::debug!(%range, ?status, "poll complete");
                        tx.send_modify(|s| {
                            s.data = Some(data);
                            s.is_loading = false;
                            s.error = None;
                            s.last_updated = Some(Local::now());
                        });
                    }
                    Err(e) => {
                        tracing::warn!(%range, error = %e, "poll failed");
                        let banner = error_banner(&e);
                        tx.send_modify(|s| {
                            s.is_loading = false;
                            s.error = Some(banner);
                        });
                    }
                }
            }

            tracing::debug!(%range, "poller stopped");
        });

        Self {
            state: rx,
            cancel,
            handle: Some(handle),
        }
    }

    /// A receiver that is notified on every state change.
    pub fn subscribe(&self) -> watch::Receiver<SheetState> {
        self.state.clone()
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> SheetState {
        self.state.borrow().clone()
    }

    /// Cancel the timer and wait for the task to finish.
    pub async fn stop(mut self) {
        self.cancel.cancel();
        if let Some(handle) = self.handle.take() {
            let _ = handle.await;
        }
    }
}

impl Drop for SheetPoller {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}
