//! Core utilities for the tennis league tools
//!
//! This module consolidates common utilities that are used across
//! the application:
//! - `cache`: In-memory TTL cache for fetched sheet ranges
//! - `files`: Config file locations and small read/write helpers
//! - `http`: Request header construction
//! - `logging`: tracing subscriber setup

pub mod cache;
pub mod files;
pub mod http;
pub mod logging;

// Re-export commonly used items for convenience
pub use cache::{SheetCacheKey, TtlCache};
pub use files::{config_path, try_read_to_string, write_string};
