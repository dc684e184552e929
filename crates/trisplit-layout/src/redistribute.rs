use serde::{Deserialize, Serialize};
use trisplit_core::Boundary;

use crate::extents::PaneExtents;

// ──────────────────────────────────────────────
// Boundary redistribution
// ──────────────────────────────────────────────

/// Constraint solve applied to the two panes adjacent to a dragged boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Solver {
    /// Single-pass borrow/give-back: the leading pane borrows from the
    /// trailing one to reach its minimum, then gives back whatever the
    /// trailing pane needs. In a span narrower than two minima the leading
    /// pane ends up below its minimum.
    #[default]
    BorrowGiveBack,
    /// The boundary is clamped so both adjacent panes keep their minimum.
    /// A span narrower than two minima does not move at all.
    Clamped,
}

impl Solver {
    /// Compute the extents produced by dragging `boundary` by `dx` pixels
    /// from a session that started with pixel widths `cur_px` in a container
    /// `total` pixels wide.
    ///
    /// The pane not adjacent to the boundary keeps its pixel width. With the
    /// left/middle boundary the right percentage is the residual of the other
    /// two; with the middle/right boundary the left percentage comes straight
    /// from `cur_px`. The right percentage is clamped at zero.
    ///
    /// Returns `None` when `total` is not a positive finite width.
    pub fn redistribute(
        self,
        cur_px: [f64; 3],
        total: f64,
        boundary: Boundary,
        dx: f64,
        min_px: f64,
    ) -> Option<PaneExtents> {
        if !(total.is_finite() && total > 0.0) || !dx.is_finite() {
            return None;
        }

        let (first, second) = boundary.panes();
        let lead = cur_px[first.index()];
        let trail = cur_px[second.index()];

        let (lead, trail) = match self {
            Solver::BorrowGiveBack => borrow_give_back(lead, trail, dx, min_px),
            Solver::Clamped => clamp_within_span(lead, trail, dx, min_px),
        };

        let pct = |px: f64| px / total * 100.0;
        let extents = match boundary {
            Boundary::LeftMiddle => {
                let s0 = pct(lead);
                let s1 = pct(trail);
                PaneExtents::new(s0, s1, (100.0 - s0 - s1).max(0.0))
            }
            Boundary::MiddleRight => {
                PaneExtents::new(pct(cur_px[0]), pct(lead), pct(trail).max(0.0))
            }
        };
        Some(extents)
    }
}

/// Redistribute with the default borrow/give-back solver.
pub fn redistribute(
    cur_px: [f64; 3],
    total: f64,
    boundary: Boundary,
    dx: f64,
    min_px: f64,
) -> Option<PaneExtents> {
    Solver::BorrowGiveBack.redistribute(cur_px, total, boundary, dx, min_px)
}

/// Move the boundary between `lead` and `trail` by `dx`, then fix up minima
/// in one pass. The pair's pixel sum is preserved throughout.
fn borrow_give_back(lead: f64, trail: f64, dx: f64, min_px: f64) -> (f64, f64) {
    let mut lead = lead + dx;
    let mut trail = trail - dx;

    if lead < min_px {
        trail -= min_px - lead;
        lead = min_px;
    }
    if trail < min_px {
        lead -= min_px - trail;
        trail = min_px;
    }

    // Give-back may overshoot past zero when the span is smaller than one minimum.
    if lead < 0.0 {
        trail += lead;
        lead = 0.0;
    }

    (lead, trail)
}

fn clamp_within_span(lead: f64, trail: f64, dx: f64, min_px: f64) -> (f64, f64) {
    let span = lead + trail;
    if span < 2.0 * min_px {
        return (lead, trail);
    }
    let lead = (lead + dx).clamp(min_px, span - min_px);
    (lead, span - lead)
}
