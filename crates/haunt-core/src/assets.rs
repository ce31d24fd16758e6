//! Texture manifest and the readiness gate.
//!
//! The scene cannot paint until every texture listed in the manifest has been
//! fetched. Frontends fetch raw bytes however their platform allows (HTTP on
//! web, filesystem on desktop) and hand them to an [`AssetBundle`]; the
//! renderer only ever sees a bundle that passed [`AssetBundle::ensure_ready`].

use crate::error::SceneError;
use std::collections::HashMap;

/// Which map of a standard material a texture feeds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TextureSlot {
    Color,
    Alpha,
    AmbientOcclusion,
    Height,
    Normal,
    Metalness,
    Roughness,
}

impl TextureSlot {
    pub const ALL: [TextureSlot; 7] = [
        TextureSlot::Color,
        TextureSlot::Alpha,
        TextureSlot::AmbientOcclusion,
        TextureSlot::Height,
        TextureSlot::Normal,
        TextureSlot::Metalness,
        TextureSlot::Roughness,
    ];

    pub fn file_stem(self) -> &'static str {
        match self {
            TextureSlot::Color => "color",
            TextureSlot::Alpha => "alpha",
            TextureSlot::AmbientOcclusion => "ambientOcclusion",
            TextureSlot::Height => "height",
            TextureSlot::Normal => "normal",
            TextureSlot::Metalness => "metalness",
            TextureSlot::Roughness => "roughness",
        }
    }

    /// Only the color map holds sRGB-encoded color; the rest are raw data.
    pub fn is_srgb(self) -> bool {
        matches!(self, TextureSlot::Color)
    }

    /// Binding order inside a material bind group.
    pub fn index(self) -> usize {
        self as usize
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TextureSet {
    Door,
    Bricks,
    Grass,
}

impl TextureSet {
    pub fn dir(self) -> &'static str {
        match self {
            TextureSet::Door => "door",
            TextureSet::Bricks => "bricks",
            TextureSet::Grass => "grass",
        }
    }

    pub fn slots(self) -> &'static [TextureSlot] {
        match self {
            TextureSet::Door => &TextureSlot::ALL,
            TextureSet::Bricks | TextureSet::Grass => &[
                TextureSlot::Color,
                TextureSlot::AmbientOcclusion,
                TextureSlot::Normal,
                TextureSlot::Roughness,
            ],
        }
    }

    /// Path relative to the asset root, e.g. `textures/door/color.jpg`.
    pub fn path(self, slot: TextureSlot) -> String {
        format!("textures/{}/{}.jpg", self.dir(), slot.file_stem())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextureRequest {
    pub set: TextureSet,
    pub slot: TextureSlot,
    pub path: String,
}

/// Every texture the scene needs, in load order.
pub fn texture_manifest(sets: &[TextureSet]) -> Vec<TextureRequest> {
    sets.iter()
        .flat_map(|&set| {
            set.slots().iter().map(move |&slot| TextureRequest {
                set,
                slot,
                path: set.path(slot),
            })
        })
        .collect()
}

/// Encoded image bytes keyed by manifest path.
#[derive(Default)]
pub struct AssetBundle {
    files: HashMap<String, Vec<u8>>,
}

impl AssetBundle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, path: impl Into<String>, bytes: Vec<u8>) {
        self.files.insert(path.into(), bytes);
    }

    pub fn get(&self, path: &str) -> Option<&[u8]> {
        self.files.get(path).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn bytes_for(&self, set: TextureSet, slot: TextureSlot) -> Option<&[u8]> {
        self.get(&set.path(slot))
    }

    /// Fail unless every requested texture is present and non-empty.
    pub fn ensure_ready(&self, manifest: &[TextureRequest]) -> Result<(), SceneError> {
        let missing: Vec<&str> = manifest
            .iter()
            .filter(|r| self.get(&r.path).map_or(true, <[u8]>::is_empty))
            .map(|r| r.path.as_str())
            .collect();
        match missing.as_slice() {
            [] => Ok(()),
            [one] => Err(SceneError::MissingAsset(one.to_string())),
            _ => Err(SceneError::MissingAssets(
                missing.iter().map(|p| p.to_string()).collect(),
            )),
        }
    }
}
