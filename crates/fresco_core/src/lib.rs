//! Core data types for the Fresco story workflow library.
//!
//! This crate provides the domain model shared across the Fresco workspace:
//! the story aggregate, character slots, scenes, the workflow status machine,
//! and the author identity reference.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod author;
mod character;
mod cover;
mod id;
mod mode;
mod scene;
mod status;
mod story;

pub use author::Author;
pub use character::{CharacterSlot, SlotId};
pub use cover::{split_cover_marker, with_cover_marker};
pub use id::StoryId;
pub use mode::SUGGESTED_MODES;
pub use scene::Scene;
pub use status::StoryStatus;
pub use story::{Story, StoryBuilder, StoryBuilderError};
