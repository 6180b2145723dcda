#![forbid(unsafe_code)]

//! Placement constraints: keep panels inside the viewport and above the
//! minimum size.
//!
//! Both clamps are best-effort. A panel larger than the viewport cannot fit,
//! so the result may still spill past an edge; callers accept that rather
//! than treating it as an error.

use tileboard_core::{Position, Size, Viewport};

use crate::config::MIN_PANEL_SIZE;

/// Move `position` so a panel of `size` stays inside `viewport`.
///
/// Per axis: a coordinate before the leading edge is pulled to it; otherwise a
/// panel sticking past the trailing edge is pulled back flush against it.
/// Already-valid positions are returned unchanged.
#[must_use]
pub fn clamp_position(position: Position, size: Size, viewport: &Viewport) -> Position {
    let mut x = position.x;
    let mut y = position.y;

    if x < viewport.left {
        x = viewport.left;
    } else if x + size.width > viewport.right() {
        x = viewport.right() - size.width;
    }

    if y < viewport.top {
        y = viewport.top;
    } else if y + size.height > viewport.bottom() {
        y = viewport.bottom() - size.height;
    }

    Position::new(x, y)
}

/// Shrink `size` to fit between `position` and the viewport's far edges,
/// then raise it to [`MIN_PANEL_SIZE`].
#[must_use]
pub fn clamp_size(size: Size, position: Position, viewport: &Viewport) -> Size {
    clamp_size_with_floor(size, position, viewport, MIN_PANEL_SIZE)
}

/// [`clamp_size`] with an explicit floor.
///
/// The floor is applied last and wins, so a tiny viewport can leave the panel
/// overflowing.
#[must_use]
pub fn clamp_size_with_floor(
    size: Size,
    position: Position,
    viewport: &Viewport,
    floor: Size,
) -> Size {
    let mut width = size.width;
    let mut height = size.height;

    let max_width = viewport.right() - position.x;
    if width > max_width {
        width = max_width;
    }

    let max_height = viewport.bottom() - position.y;
    if height > max_height {
        height = max_height;
    }

    Size::new(width.max(floor.width), height.max(floor.height))
}
