// Input routing for the pane engine: hit-tests pointer events against the
// drag handles and drives the drag session controller.

mod controller;

pub use controller::{DragController, DragSession, DragState};

use trisplit_core::{Boundary, MouseButton, PointerEvent, Rect, Vec2};
use trisplit_layout::{LayoutFrame, HANDLE_HIT_THRESHOLD};

// ──────────────────────────────────────────────
// Action types
// ──────────────────────────────────────────────

/// What the host should do in response to a pointer event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    /// Pointer went down on a handle: start a drag session.
    BeginDrag { boundary: Boundary, x: f64 },
    /// Pointer moved while a drag is in progress.
    Drag { x: f64 },
    /// Pointer released after a drag.
    EndDrag,
    /// No action to take.
    None,
}

// ──────────────────────────────────────────────
// Router
// ──────────────────────────────────────────────

/// Decides whether a pointer event starts, continues or ends a handle drag.
pub struct Router {
    hovered_handle: Option<Boundary>,
    dragging: bool,
    handle_threshold: f64,
}

impl Router {
    pub fn new() -> Self {
        Self::with_handle_threshold(HANDLE_HIT_THRESHOLD)
    }

    /// Create a Router with custom hit-test slack around each handle strip.
    pub fn with_handle_threshold(threshold: f64) -> Self {
        Self {
            hovered_handle: None,
            dragging: false,
            handle_threshold: threshold,
        }
    }

    /// Handle under the pointer while no drag is in progress.
    pub fn hovered_handle(&self) -> Option<Boundary> {
        self.hovered_handle
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Forget an in-progress drag (host teardown).
    pub fn end_drag(&mut self) {
        self.dragging = false;
    }

    pub fn process(&mut self, event: PointerEvent, frame: &LayoutFrame) -> Action {
        match event {
            PointerEvent::Down { position, button } => self.process_down(position, button, frame),
            PointerEvent::Move { position } => {
                if self.dragging {
                    Action::Drag { x: position.x }
                } else {
                    self.hovered_handle = self.handle_at(position, frame);
                    Action::None
                }
            }
            PointerEvent::Up { .. } => {
                if self.dragging {
                    self.dragging = false;
                    Action::EndDrag
                } else {
                    Action::None
                }
            }
        }
    }

    fn process_down(&mut self, position: Vec2, button: MouseButton, frame: &LayoutFrame) -> Action {
        if button != MouseButton::Left || self.dragging {
            return Action::None;
        }
        match self.handle_at(position, frame) {
            Some(boundary) => {
                self.dragging = true;
                self.hovered_handle = None;
                Action::BeginDrag {
                    boundary,
                    x: position.x,
                }
            }
            None => Action::None,
        }
    }

    // ── Hit testing ─────────────────────────────

    /// Find the handle closest to `position`, within `handle_threshold`
    /// pixels of its strip and inside its vertical extent.
    pub fn handle_at(&self, position: Vec2, frame: &LayoutFrame) -> Option<Boundary> {
        let t = self.handle_threshold;
        let mut best: Option<(f64, Boundary)> = None;

        for handle in &frame.handles {
            let rect = handle.rect;
            let hit_rect = Rect::new(rect.x - t, rect.y, rect.width + 2.0 * t, rect.height);
            if !hit_rect.contains(position) {
                continue;
            }
            let dist = (position.x - (rect.x + rect.width / 2.0)).abs();
            if best.map_or(true, |(best_dist, _)| dist < best_dist) {
                best = Some((dist, handle.boundary));
            }
        }

        best.map(|(_, boundary)| boundary)
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}
