// Pane-sizing engine: extent model, layout commands and boundary redistribution
// for a fixed left/middle/right workspace with a collapsible first pane.

mod config;
mod extents;
mod frame;
mod redistribute;

pub use config::{
    LayoutConfig, ShowPolicy, COLLAPSED_WIDTH, HANDLE_HIT_THRESHOLD, HANDLE_WIDTH, MIN_PX,
};
pub use extents::PaneExtents;
pub use frame::{HandleFrame, LayoutFrame, PaneBasis, PaneFrame, BASIS_TRANSITION_MS};
pub use redistribute::{redistribute, Solver};

use trisplit_core::Boundary;

// ──────────────────────────────────────────────
// PaneModel
// ──────────────────────────────────────────────

/// Single source of truth for pane sizes and first-pane visibility.
pub struct PaneModel {
    extents: PaneExtents,
    first_pane_visible: bool,
    /// Extents at the moment the first pane was last hidden.
    hidden_at: Option<PaneExtents>,
    config: LayoutConfig,
}

impl PaneModel {
    pub fn new() -> Self {
        Self::with_config(LayoutConfig::default())
    }

    pub fn with_config(config: LayoutConfig) -> Self {
        Self {
            extents: config.default_extents,
            first_pane_visible: true,
            hidden_at: None,
            config,
        }
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    pub fn extents(&self) -> PaneExtents {
        self.extents
    }

    /// Replace the extents as-is. Callers are trusted to pass a triple that
    /// already satisfies the sum-to-100 invariant.
    pub fn set_extents(&mut self, extents: PaneExtents) {
        self.extents = extents;
    }

    pub fn is_first_pane_visible(&self) -> bool {
        self.first_pane_visible
    }

    /// Show or hide the first pane. Hiding keeps the current extents untouched;
    /// showing re-derives them according to the configured [`ShowPolicy`].
    pub fn set_first_pane_visible(&mut self, visible: bool) {
        if visible == self.first_pane_visible {
            return;
        }
        if visible {
            self.extents = self.extents_on_show();
            self.hidden_at = None;
        } else {
            self.hidden_at = Some(self.extents);
        }
        self.first_pane_visible = visible;
        log::debug!(
            "first pane {} -> {:?}",
            if visible { "shown" } else { "hidden" },
            self.extents
        );
    }

    /// Restore the default proportions. Visibility is left as it is; a pane
    /// hidden at the time comes back at its default width.
    pub fn reset(&mut self) {
        self.extents = self.config.default_extents;
        self.hidden_at = None;
    }

    pub fn toggle_first_pane_visibility(&mut self) {
        self.set_first_pane_visible(!self.first_pane_visible);
    }

    pub fn reset_layout(&mut self) {
        self.reset();
        log::debug!("layout reset to {:?}", self.extents);
    }

    /// Boundaries that currently carry a drag handle.
    pub fn handles(&self) -> Vec<Boundary> {
        if self.first_pane_visible {
            Boundary::ALL.to_vec()
        } else {
            vec![Boundary::MiddleRight]
        }
    }

    pub fn has_handle(&self, boundary: Boundary) -> bool {
        boundary == Boundary::MiddleRight || self.first_pane_visible
    }

    fn extents_on_show(&self) -> PaneExtents {
        match (self.config.show_policy, self.hidden_at) {
            (ShowPolicy::RestoreLast, Some(snapshot)) => restore_left(snapshot.left, self.extents),
            _ => self.config.default_extents,
        }
    }
}

impl Default for PaneModel {
    fn default() -> Self {
        Self::new()
    }
}

/// Give the first pane `left` percent and rescale middle/right into the rest.
fn restore_left(left: f64, current: PaneExtents) -> PaneExtents {
    let remainder = (100.0 - left).max(0.0);
    let rest = current.middle + current.right;
    if rest > 0.0 {
        let scale = remainder / rest;
        PaneExtents::new(left, current.middle * scale, current.right * scale)
    } else {
        PaneExtents::new(left, remainder / 2.0, remainder / 2.0)
    }
}
