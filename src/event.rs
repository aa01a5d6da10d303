/// Phase of a pointer gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TouchPhase {
    Down,
    Move,
    Up,
    Cancel,
}

/// A pointer event in picker-local pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TouchEvent {
    pub phase: TouchPhase,
    pub x: i32,
    pub y: i32,
}

impl TouchEvent {
    pub const fn new(phase: TouchPhase, x: i32, y: i32) -> Self {
        Self { phase, x, y }
    }

    pub const fn down(x: i32, y: i32) -> Self {
        Self::new(TouchPhase::Down, x, y)
    }

    pub const fn moved(x: i32, y: i32) -> Self {
        Self::new(TouchPhase::Move, x, y)
    }

    pub const fn up(x: i32, y: i32) -> Self {
        Self::new(TouchPhase::Up, x, y)
    }

    pub const fn cancel(x: i32, y: i32) -> Self {
        Self::new(TouchPhase::Cancel, x, y)
    }

    /// Map a crossterm mouse event to a touch event for terminal hosts.
    /// Only the left button drives the picker; other events are ignored.
    pub fn from_mouse(event: &crossterm::event::MouseEvent) -> Option<Self> {
        use crossterm::event::{MouseButton, MouseEventKind};
        let x = i32::from(event.column);
        let y = i32::from(event.row);
        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => Some(Self::down(x, y)),
            MouseEventKind::Drag(MouseButton::Left) => Some(Self::moved(x, y)),
            MouseEventKind::Up(MouseButton::Left) => Some(Self::up(x, y)),
            _ => None,
        }
    }
}
