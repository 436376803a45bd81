//! Pointer input events.
//!
//! These are the widget-level events the notification center consumes. The
//! host is responsible for translating its platform's raw input (DOM events,
//! winit, ...) into these types; driftnote only cares about page-coordinate
//! positions.
//!
//! Press events target a specific panel (the press surface). Move and
//! release events are scoped to the panel's scroll-ancestor while a swipe
//! session is active, so they carry no target of their own.

/// A position in page coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    /// Horizontal position.
    pub x: f32,
    /// Vertical position.
    pub y: f32,
}

impl Point {
    /// Creates a new point.
    #[inline]
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// A pointer went down on a panel's press surface.
#[derive(Debug, Clone, Copy)]
pub struct PointerPressEvent {
    /// Pointer position in page coordinates.
    pub page_pos: Point,
}

impl PointerPressEvent {
    /// Creates a new press event.
    pub fn new(page_pos: Point) -> Self {
        Self { page_pos }
    }
}

/// The pointer moved while a button is held.
#[derive(Debug, Clone, Copy)]
pub struct PointerMoveEvent {
    /// Pointer position in page coordinates.
    pub page_pos: Point,
}

impl PointerMoveEvent {
    /// Creates a new move event.
    pub fn new(page_pos: Point) -> Self {
        Self { page_pos }
    }
}

/// The pointer was released.
#[derive(Debug, Clone, Copy)]
pub struct PointerReleaseEvent {
    /// Pointer position in page coordinates.
    pub page_pos: Point,
}

impl PointerReleaseEvent {
    /// Creates a new release event.
    pub fn new(page_pos: Point) -> Self {
        Self { page_pos }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_construction() {
        let p = Point::new(100.0, 50.0);
        assert_eq!(p.x, 100.0);
        assert_eq!(p.y, 50.0);
    }

    #[test]
    fn test_event_positions() {
        let press = PointerPressEvent::new(Point::new(1.0, 2.0));
        let moved = PointerMoveEvent::new(Point::new(3.0, 4.0));
        let release = PointerReleaseEvent::new(Point::new(5.0, 6.0));

        assert_eq!(press.page_pos, Point::new(1.0, 2.0));
        assert_eq!(moved.page_pos, Point::new(3.0, 4.0));
        assert_eq!(release.page_pos, Point::new(5.0, 6.0));
    }
}
