//! Type-safe wrappers and enums for tennis league sheet data.

pub mod division;
pub mod ids;

pub use division::{Division, SheetView};
pub use ids::{SheetRange, SpreadsheetId};
