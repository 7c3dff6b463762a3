// tests/support/mocks/mod.rs
pub mod table;
pub mod time;

pub use table::InMemoryTable;
pub use time::{FixedClock, fixed_now};
