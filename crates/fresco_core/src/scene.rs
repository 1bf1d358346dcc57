//! Generated scenes.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// One generated image with its sequence number and title within a story's
/// image set.
///
/// # Examples
///
/// ```
/// use fresco_core::Scene;
///
/// let scene = Scene::new(1, "The Crossroads", "/assets/scene_1.png");
/// assert_eq!(*scene.number(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct Scene {
    /// 1-based position within the image set
    number: u32,
    /// Scene title from the generation backend
    title: String,
    /// Image asset URL; path is stable across regeneration
    image_ref: String,
}

impl Scene {
    /// Create a new scene.
    pub fn new(number: u32, title: impl Into<String>, image_ref: impl Into<String>) -> Self {
        Self {
            number,
            title: title.into(),
            image_ref: image_ref.into(),
        }
    }
}
