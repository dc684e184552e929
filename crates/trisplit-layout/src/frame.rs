use trisplit_core::{Boundary, PaneSlot, Rect, Size};

use crate::PaneModel;

/// Duration of the first pane's basis transition when it collapses or expands.
pub const BASIS_TRANSITION_MS: u32 = 200;

// ──────────────────────────────────────────────
// Render output
// ──────────────────────────────────────────────

/// How the host should size a pane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PaneBasis {
    /// Flex basis as a percentage of the container.
    Percent(f64),
    /// Intrinsic width (collapsed first pane).
    Auto,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaneFrame {
    pub slot: PaneSlot,
    pub basis: PaneBasis,
    pub rect: Rect,
    /// Whether the pane's content region is rendered (false only for a
    /// collapsed first pane, which shows just its toggle).
    pub content_visible: bool,
    pub transition_ms: Option<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandleFrame {
    pub boundary: Boundary,
    pub rect: Rect,
    pub label: &'static str,
}

/// Everything the host needs to draw one layout state.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutFrame {
    pub panes: [PaneFrame; 3],
    pub handles: Vec<HandleFrame>,
    /// Title of the collapse/expand toggle on the first pane.
    pub toggle_title: &'static str,
}

impl LayoutFrame {
    pub fn pane(&self, slot: PaneSlot) -> &PaneFrame {
        &self.panes[slot.index()]
    }

    pub fn handle(&self, boundary: Boundary) -> Option<&HandleFrame> {
        self.handles.iter().find(|h| h.boundary == boundary)
    }
}

impl PaneModel {
    /// Lay the three panes and their handles out across `viewport`.
    ///
    /// Handle strips are carved out first; visible panes share the rest by
    /// percentage. A collapsed first pane takes `collapsed_width` and the
    /// middle and right panes split the remainder in proportion to their
    /// percentages.
    pub fn frame(&self, viewport: Size) -> LayoutFrame {
        let config = self.config();
        let extents = self.extents();
        let visible = self.is_first_pane_visible();
        let handles = self.handles();

        let handle_w = config.handle_width.max(0.0);
        let content_w = (viewport.width - handle_w * handles.len() as f64).max(0.0);

        let widths = if visible {
            extents.to_px(content_w)
        } else {
            let left = config.collapsed_width.clamp(0.0, content_w);
            let rest = content_w - left;
            let share = extents.middle + extents.right;
            if share > 0.0 {
                [left, rest * extents.middle / share, rest * extents.right / share]
            } else {
                [left, rest / 2.0, rest / 2.0]
            }
        };

        let mut x = 0.0;
        let mut handle_frames = Vec::with_capacity(handles.len());
        let panes = PaneSlot::ALL.map(|slot| {
            let width = widths[slot.index()];
            let rect = Rect::new(x, 0.0, width, viewport.height);
            x += width;

            let trailing = match slot {
                PaneSlot::Left => Some(Boundary::LeftMiddle),
                PaneSlot::Middle => Some(Boundary::MiddleRight),
                PaneSlot::Right => None,
            };
            if let Some(boundary) = trailing.filter(|b| handles.contains(b)) {
                handle_frames.push(HandleFrame {
                    boundary,
                    rect: Rect::new(x, 0.0, handle_w, viewport.height),
                    label: boundary.label(),
                });
                x += handle_w;
            }

            let is_first = slot == PaneSlot::Left;
            PaneFrame {
                slot,
                basis: if is_first && !visible {
                    PaneBasis::Auto
                } else {
                    PaneBasis::Percent(extents.get(slot))
                },
                rect,
                content_visible: !is_first || visible,
                transition_ms: is_first.then_some(BASIS_TRANSITION_MS),
            }
        });

        LayoutFrame {
            panes,
            handles: handle_frames,
            toggle_title: if visible { "Collapse" } else { "Expand" },
        }
    }
}
