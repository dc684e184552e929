use serde::{Deserialize, Serialize};

use crate::extents::PaneExtents;
use crate::redistribute::Solver;

/// Minimum pixel width a drag may leave a pane with.
pub const MIN_PX: f64 = 240.0;

/// Width of each drag handle strip between two panes.
pub const HANDLE_WIDTH: f64 = 6.0;

/// Intrinsic width of the first pane while it is collapsed (toggle button only).
pub const COLLAPSED_WIDTH: f64 = 40.0;

/// Handle hit-test slack in pixels on each side of the strip.
pub const HANDLE_HIT_THRESHOLD: f64 = 4.0;

/// What the first pane gets back when it is shown again after being hidden.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShowPolicy {
    /// Restore the percentage the first pane had when it was hidden and
    /// rescale middle/right into the remainder.
    #[default]
    RestoreLast,
    /// Reset the whole triple to the configured defaults.
    Defaults,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    pub min_px: f64,
    pub default_extents: PaneExtents,
    pub show_policy: ShowPolicy,
    pub solver: Solver,
    pub handle_width: f64,
    pub collapsed_width: f64,
    pub handle_hit_threshold: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            min_px: MIN_PX,
            default_extents: PaneExtents::DEFAULT,
            show_policy: ShowPolicy::default(),
            solver: Solver::default(),
            handle_width: HANDLE_WIDTH,
            collapsed_width: COLLAPSED_WIDTH,
            handle_hit_threshold: HANDLE_HIT_THRESHOLD,
        }
    }
}
