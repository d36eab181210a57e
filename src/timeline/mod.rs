//! Measurement history over time: ordering, trends and the dashboard snapshot.

pub mod history;
pub mod snapshot;
pub mod trend;

pub use history::*;
pub use snapshot::*;
pub use trend::*;
