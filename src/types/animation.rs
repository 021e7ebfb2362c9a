//! Data model for parsed packed animations.
//!
//! Entities are transient: built during a single pass over one conf file,
//! serialized to Lua, then discarded. No state is shared across units.

use serde::Serialize;

/// One rectangular sub-image of a packed sprite sheet plus its per-frame
/// pixel offsets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Region {
    /// `{x, y, w, h}` in sheet pixels.
    pub rectangle: [i32; 4],
    /// Per-frame `(x, y)` offsets. May be empty when every offset pair in
    /// the descriptor was malformed.
    pub offsets: Vec<(i32, i32)>,
}

/// A packed animation parsed from one `[section]` with `packed=true`.
///
/// Every field other than the name is optional: the conf format never
/// required them, and an empty packed section is still emitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Animation {
    /// Section name from the conf header.
    pub name: String,
    /// Sprite-sheet image name (`pics=` in the conf).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spritemap: Option<String>,
    /// Base offset in pixels (`base_offset=`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<(i32, i32)>,
    /// Frame dimensions in pixels (`dimensions=`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<(i32, i32)>,
    /// Hotspot in pixels (`hotspot=`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hotspot: Option<(i32, i32)>,
    /// Playback speed (`fps=`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fps: Option<u32>,
    /// Valid regions, in conf order.
    pub regions: Vec<Region>,
}

impl Animation {
    /// Create an empty animation for a section name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// True when no recognized field was present in the section.
    pub fn is_empty(&self) -> bool {
        self.spritemap.is_none()
            && self.offset.is_none()
            && self.size.is_none()
            && self.hotspot.is_none()
            && self.fps.is_none()
            && self.regions.is_empty()
    }
}

/// All packed animations parsed from one unit's conf file.
#[derive(Debug, Clone, Default, Serialize)]
pub struct AnimationSet {
    /// Unit directory name, used for the output header comment.
    pub unit: String,
    /// Packed animations in conf order. Non-packed sections never land here.
    pub animations: Vec<Animation>,
}

impl AnimationSet {
    /// Create an empty set for a unit.
    pub fn new(unit: impl Into<String>) -> Self {
        Self {
            unit: unit.into(),
            animations: Vec::new(),
        }
    }

    /// True when no section in the conf had `packed=true`.
    ///
    /// An empty set produces no output file.
    pub fn is_empty(&self) -> bool {
        self.animations.is_empty()
    }
}
