//! Fresco - Illustrated Story Workflow Orchestration
//!
//! Fresco drives an AI-assisted story from a background premise through a
//! cast of characters to a generated narrative and a set of per-scene
//! illustrations. It owns the ordering, validation, and failure handling of
//! the workflow; the generation models and the rendering surface live
//! elsewhere, behind trait seams.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use fresco::{ApiConfig, Author, StoryApiClient, StoryId, WorkflowController};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     fresco::init_console_telemetry()?;
//!
//!     let client = Arc::new(StoryApiClient::new(ApiConfig::from_env()));
//!     let author = Author::new("author@example.com", "user-1");
//!     let mut controller = WorkflowController::new(client.clone(), client, author);
//!
//!     controller.load(&StoryId::from("abc123")).await?;
//!     controller.set_background("A mystical realm where magic flows.")?;
//!     controller.request_narrative().await?;
//!     controller.request_images().await?;
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! Fresco is organized as a workspace with focused crates:
//!
//! - `fresco_core` - Domain types (Story, CharacterSlot, StoryStatus, ...)
//! - `fresco_error` - Error types
//! - `fresco_interface` - Gateway trait definitions
//! - `fresco_client` - HTTP gateway implementations
//! - `fresco_workflow` - Roster reconciliation, asset cache, and the
//!   workflow controller
//!
//! This crate (`fresco`) re-exports everything for convenience.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod telemetry;

pub use fresco_client::{ApiConfig, StoryApiClient};
pub use fresco_core::{
    split_cover_marker, with_cover_marker, Author, CharacterSlot, Scene, SlotId, Story,
    StoryBuilder, StoryId, StoryStatus, SUGGESTED_MODES,
};
pub use fresco_error::{
    ConfigError, ConfigErrorKind, FrescoError, FrescoErrorKind, FrescoResult, GenerationError,
    GenerationErrorKind,
    PersistenceError, PersistenceErrorKind, UploadError, UploadErrorKind, ValidationError,
    ValidationErrorKind,
};
pub use fresco_interface::{
    AssetUploader, CharacterRecord, CharacterWrite, DraftParams, DraftUpdate, GenerationGateway,
    NarrativeOutput, PersistenceGateway, SceneSet, StoryListing, StorySnapshot,
};
pub use fresco_workflow::{
    AssetCache, AttemptTicket, CharacterRoster, Progress, WorkflowController,
};
pub use telemetry::init_console_telemetry;
