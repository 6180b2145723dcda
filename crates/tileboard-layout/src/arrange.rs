#![forbid(unsafe_code)]

//! One-shot auto-arrange: repack every panel into rows by descending area.
//!
//! Panels flow left to right from the padded top-left corner. A panel that
//! would cross the right padding starts a new row below the tallest panel of
//! the row just completed. A panel that would cross the bottom padding sends
//! the flow back to the top-left corner, overlapping what is already there;
//! a viewport too small for its content is not managed any further. The pass
//! never runs the collision resolver.

use tileboard_core::{Position, Viewport};
use tracing::debug;

use crate::config::BoardConfig;
use crate::constraints::clamp_position;
use crate::panel::Panel;

/// Arrange with the default configuration.
#[must_use]
pub fn auto_arrange(panels: &[Panel], viewport: &Viewport) -> Vec<Panel> {
    auto_arrange_with(panels, viewport, &BoardConfig::default())
}

/// Return the panels sorted by descending area (stable) with new positions.
#[must_use]
pub fn auto_arrange_with(
    panels: &[Panel],
    viewport: &Viewport,
    config: &BoardConfig,
) -> Vec<Panel> {
    let padding = config.arrange_padding;
    let start = Position::new(viewport.left + padding, viewport.top + padding);

    let mut arranged = panels.to_vec();
    arranged.sort_by(|a, b| b.area().total_cmp(&a.area()));

    let mut cursor = start;
    let mut row_height = 0.0_f64;
    let mut row_len = 0usize;

    for panel in &mut arranged {
        if row_len > 0 && cursor.x + panel.size.width > viewport.right() - padding {
            cursor = Position::new(start.x, cursor.y + row_height + padding);
            row_height = 0.0;
            row_len = 0;
        }

        if cursor.y + panel.size.height > viewport.bottom() - padding {
            debug!(panel = %panel.id, "arrange flow restarted at top");
            cursor = start;
            row_height = 0.0;
            row_len = 0;
        }

        let snapped = cursor.snapped(config.grid_step);
        panel.position = clamp_position(snapped, panel.size, viewport);

        cursor.x += panel.size.width + padding;
        row_height = row_height.max(panel.size.height);
        row_len += 1;
    }

    arranged
}
