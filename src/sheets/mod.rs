//! Google Sheets access: the upstream API, service-account auth, the
//! proxy-backed client with its TTL cache, and the range poller.

pub mod auth;
pub mod client;
pub mod http;
pub mod poll;
pub mod types;

pub use client::{error_banner, CacheStatus, SheetsClient};
pub use http::{GoogleSheetsApi, SheetsAuth, SheetsUpstream};
pub use poll::{SheetPoller, SheetState};
pub use types::ValueRange;
