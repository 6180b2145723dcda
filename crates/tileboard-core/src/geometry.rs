#![forbid(unsafe_code)]

//! Geometric primitives.
//!
//! All coordinates are real-valued board units (pixels in a typical host),
//! origin at the top-left, `y` growing downwards.

use serde::{Deserialize, Serialize};

/// Spacing of the snapping grid, in board units.
pub const GRID_STEP: f64 = 20.0;

/// Round `value` to the nearest multiple of [`GRID_STEP`].
///
/// Exact half steps round towards positive infinity, so `snap(70.0) == 80.0`
/// and `snap(-30.0) == -20.0`.
#[inline]
#[must_use]
pub fn snap(value: f64) -> f64 {
    snap_to(value, GRID_STEP)
}

/// Round `value` to the nearest multiple of `step`.
///
/// `step` must be positive; a non-positive step returns `value` unchanged.
#[inline]
#[must_use]
pub fn snap_to(value: f64, step: f64) -> f64 {
    if step <= 0.0 {
        return value;
    }
    (value / step + 0.5).floor() * step
}

/// Top-left corner of a panel.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Component-wise offset by `(dx, dy)`.
    #[inline]
    #[must_use]
    pub fn offset(self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    /// Component-wise difference `self - origin`.
    #[inline]
    #[must_use]
    pub fn delta_from(self, origin: Position) -> (f64, f64) {
        (self.x - origin.x, self.y - origin.y)
    }

    /// Snap both coordinates to the grid.
    #[inline]
    #[must_use]
    pub fn snapped(self, step: f64) -> Self {
        Self::new(snap_to(self.x, step), snap_to(self.y, step))
    }
}

/// Extent of a panel.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    #[inline]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Area in square units.
    #[inline]
    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    /// Grow (or shrink, for negative deltas) by `(dw, dh)`.
    #[inline]
    #[must_use]
    pub fn grown(self, dw: f64, dh: f64) -> Self {
        Self::new(self.width + dw, self.height + dh)
    }

    /// Snap both dimensions to the grid.
    #[inline]
    #[must_use]
    pub fn snapped(self, step: f64) -> Self {
        Self::new(snap_to(self.width, step), snap_to(self.height, step))
    }
}

/// An axis-aligned rectangle: a read-only projection of a position and size.
///
/// `right` and `bottom` are derived, so a `Rect` is always internally
/// consistent.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    /// Left edge (inclusive).
    pub left: f64,
    /// Top edge (inclusive).
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    /// Create a new rectangle.
    #[inline]
    pub const fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Project a position and size into a rectangle.
    #[inline]
    pub const fn of(position: Position, size: Size) -> Self {
        Self::new(position.x, position.y, size.width, size.height)
    }

    /// Right edge (exclusive).
    #[inline]
    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    /// Bottom edge (exclusive).
    #[inline]
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    #[inline]
    pub fn center_x(&self) -> f64 {
        self.left + self.width / 2.0
    }

    #[inline]
    pub fn center_y(&self) -> f64 {
        self.top + self.height / 2.0
    }

    #[inline]
    pub const fn position(&self) -> Position {
        Position::new(self.left, self.top)
    }

    #[inline]
    pub const fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Strict overlap test: rectangles that merely touch do not intersect.
    #[inline]
    pub fn intersects(&self, other: &Rect) -> bool {
        intersects(self, other)
    }

    /// Horizontal and vertical penetration depth against `other`.
    ///
    /// Each axis reports the smaller of the two ways the rectangles could be
    /// separated along it. Only meaningful when the rectangles intersect.
    #[inline]
    pub fn overlap_extents(&self, other: &Rect) -> (f64, f64) {
        let overlap_x = (self.right() - other.left).min(other.right() - self.left);
        let overlap_y = (self.bottom() - other.top).min(other.bottom() - self.top);
        (overlap_x, overlap_y)
    }
}

/// Returns `true` iff `a` and `b` overlap with positive area.
///
/// Symmetric. A rectangle with positive area intersects itself, so callers
/// comparing panels must skip self-comparison explicitly.
#[inline]
pub fn intersects(a: &Rect, b: &Rect) -> bool {
    a.left < b.right() && a.right() > b.left && a.top < b.bottom() && a.bottom() > b.top
}

/// The safe area every settled panel must stay within.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Viewport {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    #[inline]
    pub const fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// A viewport anchored at the origin, as reported by a host window.
    #[inline]
    pub const fn from_size(width: f64, height: f64) -> Self {
        Self::new(0.0, 0.0, width, height)
    }

    #[inline]
    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    #[inline]
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    #[inline]
    pub const fn rect(&self) -> Rect {
        Rect::new(self.left, self.top, self.width, self.height)
    }

    /// Whether `rect` lies entirely inside the viewport (edges inclusive).
    #[inline]
    pub fn contains_rect(&self, rect: &Rect) -> bool {
        rect.left >= self.left
            && rect.top >= self.top
            && rect.right() <= self.right()
            && rect.bottom() <= self.bottom()
    }
}

/// Supplies the current viewport.
///
/// Implementations are queried once at the start of every board operation and
/// never cached across operations, so a host can report window resizes by
/// returning a different value on the next call.
pub trait ViewportSource {
    fn viewport(&self) -> Viewport;
}

impl ViewportSource for Viewport {
    fn viewport(&self) -> Viewport {
        *self
    }
}

impl<F> ViewportSource for F
where
    F: Fn() -> Viewport,
{
    fn viewport(&self) -> Viewport {
        self()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn snap_rounds_to_nearest_step() {
        assert_eq!(snap(23.0), 20.0);
        assert_eq!(snap(31.0), 40.0);
        assert_eq!(snap(0.0), 0.0);
        assert_eq!(snap(9.9), 0.0);
        assert_eq!(snap(-11.0), -20.0);
    }

    #[test]
    fn snap_ties_round_up() {
        assert_eq!(snap(10.0), 20.0);
        assert_eq!(snap(70.0), 80.0);
        assert_eq!(snap(-30.0), -20.0);
    }

    #[test]
    fn snap_to_non_positive_step_is_identity() {
        assert_eq!(snap_to(13.0, 0.0), 13.0);
        assert_eq!(snap_to(13.0, -5.0), 13.0);
    }

    #[test]
    fn rect_derives_edges() {
        let rect = Rect::of(Position::new(20.0, 30.0), Size::new(300.0, 200.0));
        assert_eq!(rect.right(), 320.0);
        assert_eq!(rect.bottom(), 230.0);
        assert_eq!(rect.center_x(), 170.0);
        assert_eq!(rect.center_y(), 130.0);
    }

    #[test]
    fn touching_edges_do_not_intersect() {
        let a = Rect::new(0.0, 0.0, 100.0, 100.0);
        let right = Rect::new(100.0, 0.0, 100.0, 100.0);
        let below = Rect::new(0.0, 100.0, 100.0, 100.0);
        assert!(!a.intersects(&right));
        assert!(!a.intersects(&below));
        assert!(a.intersects(&Rect::new(99.0, 99.0, 10.0, 10.0)));
    }

    #[test]
    fn overlap_extents_picks_shallow_side() {
        let mover = Rect::new(70.0, 70.0, 300.0, 200.0);
        let other = Rect::new(340.0, 20.0, 280.0, 150.0);
        assert_eq!(mover.overlap_extents(&other), (30.0, 100.0));
    }

    #[test]
    fn viewport_contains_rect_edges_inclusive() {
        let vp = Viewport::from_size(1000.0, 800.0);
        assert!(vp.contains_rect(&Rect::new(0.0, 0.0, 1000.0, 800.0)));
        assert!(!vp.contains_rect(&Rect::new(-1.0, 0.0, 10.0, 10.0)));
        assert!(!vp.contains_rect(&Rect::new(900.0, 0.0, 101.0, 10.0)));
    }

    #[test]
    fn closure_viewport_source_is_queried_every_time() {
        let calls = Cell::new(0u32);
        let source = || {
            calls.set(calls.get() + 1);
            Viewport::from_size(f64::from(calls.get()) * 100.0, 50.0)
        };
        assert_eq!(source.viewport().width, 100.0);
        assert_eq!(source.viewport().width, 200.0);
    }
}
