use trisplit_core::{Boundary, PointerCapture, ViewportMeasure};
use trisplit_layout::{LayoutConfig, PaneModel, Solver};

use crate::Action;

// ──────────────────────────────────────────────
// Drag session state machine
// ──────────────────────────────────────────────

/// Snapshot taken when the pointer goes down on a handle. Never updated
/// while the session lasts: every move is measured from here.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    pub boundary: Boundary,
    pub start_x: f64,
    /// Pixel widths of the three panes at session start.
    pub cur_px: [f64; 3],
    /// Viewport width sampled at session start.
    pub total: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragState {
    Idle,
    Dragging(DragSession),
}

/// Converts pointer motion on a handle into extent updates on a [`PaneModel`].
///
/// The viewport is measured once per session through the injected
/// [`ViewportMeasure`]. The global [`PointerCapture`] is held from session
/// start until pointer-up, [`dispose`](Self::dispose) or drop.
pub struct DragController {
    state: DragState,
    measure: Box<dyn ViewportMeasure>,
    capture: Box<dyn PointerCapture>,
    min_px: f64,
    solver: Solver,
}

impl DragController {
    pub fn new(
        measure: Box<dyn ViewportMeasure>,
        capture: Box<dyn PointerCapture>,
        config: &LayoutConfig,
    ) -> Self {
        Self {
            state: DragState::Idle,
            measure,
            capture,
            min_px: config.min_px,
            solver: config.solver,
        }
    }

    pub fn state(&self) -> DragState {
        self.state
    }

    pub fn session(&self) -> Option<&DragSession> {
        match &self.state {
            DragState::Dragging(session) => Some(session),
            DragState::Idle => None,
        }
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging(_))
    }

    /// Start a session on `boundary` with the pointer at `x`.
    /// Returns false (and stays idle) when a session is already running, the
    /// boundary has no handle, or the viewport has no usable width.
    pub fn begin(&mut self, boundary: Boundary, x: f64, model: &PaneModel) -> bool {
        if self.is_dragging() {
            log::debug!("ignoring drag start on {:?}: session already active", boundary);
            return false;
        }
        if !model.has_handle(boundary) {
            log::debug!("ignoring drag start on {:?}: handle not shown", boundary);
            return false;
        }

        let total = self.measure.viewport_width();
        if !(total.is_finite() && total > 0.0) {
            log::warn!("viewport width {} is not measurable; drag ignored", total);
            return false;
        }

        let session = DragSession {
            boundary,
            start_x: x,
            cur_px: model.extents().to_px(total),
            total,
        };
        self.capture.acquire();
        self.state = DragState::Dragging(session);
        log::debug!("drag start {:?} at x={} total={}", boundary, x, total);
        true
    }

    /// Apply the pointer at `x` to the running session.
    /// Returns true if the model was updated. A session whose handle has
    /// disappeared (first pane hidden mid-drag) is ended instead.
    pub fn update(&mut self, x: f64, model: &mut PaneModel) -> bool {
        let DragState::Dragging(session) = self.state else {
            return false;
        };
        if !model.has_handle(session.boundary) {
            log::debug!("handle {:?} gone mid-drag; ending session", session.boundary);
            self.end();
            return false;
        }
        let dx = x - session.start_x;
        match self.solver.redistribute(session.cur_px, session.total, session.boundary, dx, self.min_px) {
            Some(extents) => {
                model.set_extents(extents);
                true
            }
            None => false,
        }
    }

    /// End the running session and release the pointer capture.
    /// Returns false if there was no session.
    pub fn end(&mut self) -> bool {
        match std::mem::replace(&mut self.state, DragState::Idle) {
            DragState::Dragging(session) => {
                self.capture.release();
                log::debug!("drag end {:?}", session.boundary);
                true
            }
            DragState::Idle => false,
        }
    }

    /// Teardown hook for the host: ends any session left running, e.g. when
    /// the surface goes away before pointer-up is delivered.
    pub fn dispose(&mut self) {
        if self.end() {
            log::debug!("drag session disposed before pointer-up");
        }
    }

    /// Apply a routed [`Action`]. Returns true if the model changed.
    pub fn handle(&mut self, action: Action, model: &mut PaneModel) -> bool {
        match action {
            Action::BeginDrag { boundary, x } => {
                self.begin(boundary, x, model);
                false
            }
            Action::Drag { x } => self.update(x, model),
            Action::EndDrag => {
                self.end();
                false
            }
            Action::None => false,
        }
    }
}

impl Drop for DragController {
    fn drop(&mut self) {
        self.dispose();
    }
}
