//! Scene labels and label filtering.

use serde::{Deserialize, Serialize};

/// Semantic label attached to a scanned anchor.
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SceneLabel {
    Floor = 1 << 0,
    Ceiling = 1 << 1,
    WallFace = 1 << 2,
    Table = 1 << 3,
    Couch = 1 << 4,
    Bed = 1 << 5,
    Storage = 1 << 6,
    Screen = 1 << 7,
    Lamp = 1 << 8,
    Plant = 1 << 9,
    Other = 1 << 10,
}

impl SceneLabel {
    pub fn bit(self) -> u32 {
        self as u32
    }
}

/// Selects anchors by label, either allowing only the listed labels or
/// allowing everything except them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelFilter {
    Included(u32),
    Excluded(u32),
}

impl LabelFilter {
    /// Accept every label.
    pub fn all() -> Self {
        LabelFilter::Excluded(0)
    }

    pub fn included(labels: &[SceneLabel]) -> Self {
        LabelFilter::Included(mask_of(labels))
    }

    pub fn excluded(labels: &[SceneLabel]) -> Self {
        LabelFilter::Excluded(mask_of(labels))
    }

    pub fn allows(&self, label: SceneLabel) -> bool {
        match *self {
            LabelFilter::Included(mask) => mask & label.bit() != 0,
            LabelFilter::Excluded(mask) => mask & label.bit() == 0,
        }
    }
}

impl Default for LabelFilter {
    fn default() -> Self {
        Self::all()
    }
}

fn mask_of(labels: &[SceneLabel]) -> u32 {
    labels.iter().fold(0, |mask, label| mask | label.bit())
}
