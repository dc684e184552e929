// Headless host surface: owns the measured container, the global pointer
// capture and the engine, and applies script steps to them in order.

use std::cell::Cell;
use std::rc::Rc;

use trisplit_core::{MouseButton, PointerCapture, PointerEvent, Size, ViewportMeasure};
use trisplit_input::{DragController, Router};
use trisplit_layout::{LayoutConfig, LayoutFrame, PaneModel};

use crate::script::Step;

// ──────────────────────────────────────────────
// Host collaborators
// ──────────────────────────────────────────────

/// The measured container element.
struct MeasuredViewport(Rc<Cell<Size>>);

impl ViewportMeasure for MeasuredViewport {
    fn viewport_width(&self) -> f64 {
        self.0.get().width
    }
}

/// Window-level pointer subscription.
struct WindowCapture(Rc<Cell<bool>>);

impl PointerCapture for WindowCapture {
    fn acquire(&mut self) {
        log::trace!("pointer capture acquired");
        self.0.set(true);
    }

    fn release(&mut self) {
        log::trace!("pointer capture released");
        self.0.set(false);
    }
}

// ──────────────────────────────────────────────
// Host
// ──────────────────────────────────────────────

pub struct Host {
    model: PaneModel,
    router: Router,
    controller: DragController,
    viewport: Rc<Cell<Size>>,
    captured: Rc<Cell<bool>>,
}

impl Host {
    pub fn new(config: LayoutConfig, viewport: Size) -> Self {
        let viewport = Rc::new(Cell::new(viewport));
        let captured = Rc::new(Cell::new(false));
        let controller = DragController::new(
            Box::new(MeasuredViewport(viewport.clone())),
            Box::new(WindowCapture(captured.clone())),
            &config,
        );
        Self {
            router: Router::with_handle_threshold(config.handle_hit_threshold),
            model: PaneModel::with_config(config),
            controller,
            viewport,
            captured,
        }
    }

    pub fn model(&self) -> &PaneModel {
        &self.model
    }

    pub fn is_captured(&self) -> bool {
        self.captured.get()
    }

    pub fn frame(&self) -> LayoutFrame {
        self.model.frame(self.viewport.get())
    }

    pub fn apply(&mut self, step: Step) {
        match step {
            Step::Down(p) => self.pointer(PointerEvent::Down {
                position: p.into(),
                button: MouseButton::Left,
            }),
            Step::Move(p) => self.pointer(PointerEvent::Move { position: p.into() }),
            Step::Up(p) => self.pointer(PointerEvent::Up { position: p.into() }),
            Step::Toggle => self.model.toggle_first_pane_visibility(),
            Step::Reset => self.model.reset_layout(),
            Step::Dispose => {
                self.controller.dispose();
                self.router.end_drag();
            }
            Step::Resize(v) => self.viewport.set(v.into()),
        }
    }

    fn pointer(&mut self, event: PointerEvent) {
        let frame = self.frame();
        let action = self.router.process(event, &frame);
        self.controller.handle(action, &mut self.model);

        // Keep the router in step when the controller refused or ended the session.
        if self.router.is_dragging() && !self.controller.is_dragging() {
            self.router.end_drag();
        }
    }

    /// One-line summary of the current layout state.
    pub fn status_line(&self) -> String {
        let e = self.model.extents();
        let frame = self.frame();
        let widths: Vec<String> = frame
            .panes
            .iter()
            .map(|p| format!("{:.1}", p.rect.width))
            .collect();
        let drag = match self.controller.session() {
            Some(session) => format!("dragging {:?}", session.boundary),
            None => "idle".to_string(),
        };
        format!(
            "L {:6.2}% M {:6.2}% R {:6.2}% | px {} | first pane {} | {} | capture {}",
            e.left,
            e.middle,
            e.right,
            widths.join("/"),
            if self.model.is_first_pane_visible() { "shown" } else { "hidden" },
            drag,
            if self.captured.get() { "held" } else { "free" },
        )
    }
}
