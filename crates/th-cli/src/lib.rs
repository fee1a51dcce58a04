//! Text menu front end for Treasure Hunter
//!
//! The driver reads commands from any `BufRead`, writes to any `Write`,
//! and leaves every rule to `th_core`.

pub mod driver;
pub mod theme;

pub use driver::{Driver, SessionEnd};
pub use theme::Theme;
