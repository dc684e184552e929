use serde::{Deserialize, Serialize};
use trisplit_core::PaneSlot;

// ──────────────────────────────────────────────
// PaneExtents: percentages of the viewport width
// ──────────────────────────────────────────────

/// Width of each pane as a percentage of the total viewport width.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PaneExtents {
    pub left: f64,
    pub middle: f64,
    pub right: f64,
}

impl PaneExtents {
    /// Proportions the layout starts with and returns to on reset.
    pub const DEFAULT: PaneExtents = PaneExtents::new(28.0, 44.0, 28.0);

    pub const fn new(left: f64, middle: f64, right: f64) -> Self {
        Self { left, middle, right }
    }

    pub fn as_array(&self) -> [f64; 3] {
        [self.left, self.middle, self.right]
    }

    pub fn get(&self, slot: PaneSlot) -> f64 {
        self.as_array()[slot.index()]
    }

    pub fn sum(&self) -> f64 {
        self.left + self.middle + self.right
    }

    /// Convert to pixel widths for a container `total` pixels wide.
    pub fn to_px(&self, total: f64) -> [f64; 3] {
        self.as_array().map(|p| p / 100.0 * total)
    }
}

impl Default for PaneExtents {
    fn default() -> Self {
        Self::DEFAULT
    }
}
