//! Clinical classification: reference ranges and tiering.

pub mod classify;
pub mod reference;

pub use classify::*;
pub use reference::*;
