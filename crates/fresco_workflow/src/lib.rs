//! Workflow orchestration for the Fresco story workflow library.
//!
//! This crate holds the orchestrator core: character roster reconciliation,
//! the asset invalidation cache, and the `WorkflowController` that drives a
//! story from background premise through narrative and image generation.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod asset_cache;
mod controller;
mod roster;

pub use asset_cache::AssetCache;
pub use controller::{AttemptTicket, Progress, WorkflowController};
pub use roster::CharacterRoster;
