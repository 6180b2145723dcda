#![forbid(unsafe_code)]

//! Free-slot search for newly added panels.

use tileboard_core::{Position, Rect, Size, Viewport};

use crate::collision::is_valid_position;
use crate::config::BoardConfig;
use crate::panel::Panel;

/// First grid position where a panel of `size` fits, with the default
/// configuration.
#[must_use]
pub fn find_empty_space(size: Size, panels: &[Panel], viewport: &Viewport) -> Position {
    find_empty_space_with(size, panels, viewport, &BoardConfig::default())
}

/// Scan the viewport row-major in grid steps for the first position where a
/// panel of `size` lies inside the viewport and overlaps no panel.
///
/// Rows run from `viewport.top` to `viewport.bottom() - size.height` and
/// columns from `viewport.left` to `viewport.right() - size.width`, both
/// inclusive. When nothing fits, returns the fixed fallback offset from the
/// viewport origin even though it may overlap.
#[must_use]
pub fn find_empty_space_with(
    size: Size,
    panels: &[Panel],
    viewport: &Viewport,
    config: &BoardConfig,
) -> Position {
    let fallback = Position::new(
        viewport.left + config.fallback_offset,
        viewport.top + config.fallback_offset,
    );
    let step = config.grid_step;
    if !(step > 0.0) {
        return fallback;
    }

    let last_y = viewport.bottom() - size.height;
    let last_x = viewport.right() - size.width;

    let mut y = viewport.top;
    while y <= last_y {
        let mut x = viewport.left;
        while x <= last_x {
            let position = Position::new(x, y);
            if is_valid_position(&Rect::of(position, size), panels, None, viewport) {
                return position;
            }
            x += step;
        }
        y += step;
    }

    fallback
}
