//! Shared view state for the SmartERP BI front-ends.
//!
//! Every page is a reducer: it owns a plain state struct, accepts events and
//! answers with an [`Update`] describing the side effect to run and the
//! notice to place in the banner slot. Nothing here performs I/O, so the same
//! state drives the terminal shell and the browser shell.

pub mod effect;
pub mod error;
pub mod model;
pub mod notice;
pub mod pages;
pub mod wire;

pub use effect::{DashboardForm, Effect, Outcome, Request, Update};
pub use error::ApiError;
pub use model::{ModelChoice, Phase};
pub use notice::{BannerSlot, Notice, Severity};
