//! Card containers built on `Deck`: tableau columns and foundations.
//!
//! Each container exclusively owns its decks. Transfers between containers
//! are always "take from one, append to the other"; nothing holds a
//! reference into another container's storage.

pub mod column;
pub mod foundation;

pub use column::TableauColumn;
pub use foundation::Foundation;
