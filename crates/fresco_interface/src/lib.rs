//! Trait definitions for the Fresco story workflow library.
//!
//! This crate defines the seams between the workflow orchestrator and its
//! external collaborators: the persistence backend, the generation backend,
//! and the image upload service. Implementations live in `fresco_client`;
//! tests substitute scripted mocks.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod traits;
mod types;

pub use traits::{AssetUploader, GenerationGateway, PersistenceGateway};
pub use types::{
    CharacterRecord, CharacterWrite, DraftParams, DraftUpdate, NarrativeOutput, SceneSet,
    StoryListing, StorySnapshot,
};
