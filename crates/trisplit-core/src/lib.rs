// ──────────────────────────────────────────────
// Geometry
// ──────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.x
            && point.x <= self.x + self.width
            && point.y >= self.y
            && point.y <= self.y + self.height
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

// ──────────────────────────────────────────────
// Panes and boundaries
// ──────────────────────────────────────────────

/// One of the three fixed content regions, in left-to-right order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaneSlot {
    Left,
    Middle,
    Right,
}

impl PaneSlot {
    pub const ALL: [PaneSlot; 3] = [PaneSlot::Left, PaneSlot::Middle, PaneSlot::Right];

    pub fn index(self) -> usize {
        match self {
            PaneSlot::Left => 0,
            PaneSlot::Middle => 1,
            PaneSlot::Right => 2,
        }
    }
}

/// A draggable line between two adjacent panes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Boundary {
    /// Between the left and middle panes (index 0).
    LeftMiddle,
    /// Between the middle and right panes (index 1).
    MiddleRight,
}

impl Boundary {
    pub const ALL: [Boundary; 2] = [Boundary::LeftMiddle, Boundary::MiddleRight];

    /// The two panes this boundary separates, leading pane first.
    pub fn panes(self) -> (PaneSlot, PaneSlot) {
        match self {
            Boundary::LeftMiddle => (PaneSlot::Left, PaneSlot::Middle),
            Boundary::MiddleRight => (PaneSlot::Middle, PaneSlot::Right),
        }
    }

    /// Accessible label of the handle sitting on this boundary.
    pub fn label(self) -> &'static str {
        match self {
            Boundary::LeftMiddle => "Resize left/middle",
            Boundary::MiddleRight => "Resize middle/right",
        }
    }
}

// ──────────────────────────────────────────────
// Input
// ──────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Down { position: Vec2, button: MouseButton },
    Move { position: Vec2 },
    Up { position: Vec2 },
}

// ──────────────────────────────────────────────
// Trait: ViewportMeasure
// ──────────────────────────────────────────────

/// Reports the pixel width of the container the panes are laid out in.
/// Queried once when a drag session starts. A host that has not laid out
/// its container yet should report 0.
pub trait ViewportMeasure {
    fn viewport_width(&self) -> f64;
}

// ──────────────────────────────────────────────
// Trait: PointerCapture
// ──────────────────────────────────────────────

/// Global pointer subscription held for the duration of a drag session.
/// While acquired, the host delivers move/up events regardless of which
/// element is under the pointer.
pub trait PointerCapture {
    fn acquire(&mut self);
    fn release(&mut self);
}
