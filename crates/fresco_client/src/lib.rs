//! HTTP gateway implementations for the Fresco story workflow library.
//!
//! `StoryApiClient` implements the `fresco_interface` traits against the
//! backend's JSON envelope API. Wire DTOs carry the exact field names the
//! backend speaks (`nb_scenes`, `nb_chars`, `background_story`, ...) and are
//! converted to and from the domain types at the crate boundary.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod client;
mod config;
mod convert;
mod dto;

pub use client::StoryApiClient;
pub use config::ApiConfig;
