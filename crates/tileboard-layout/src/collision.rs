#![forbid(unsafe_code)]

//! Collision resolution: push neighbours out of the way of a moved panel.
//!
//! # Algorithm
//!
//! Given the panel that just moved or resized (the *mover*), every other
//! panel whose rectangle strictly intersects the mover's is pushed:
//!
//! 1. Compute the overlap depth on both axes and push along the shallower one
//!    (ties push vertically).
//! 2. Place the pushed panel flush against the side of the mover it is
//!    already centred towards, snapped to the grid, keeping its other
//!    coordinate.
//! 3. Clamp into the viewport.
//! 4. Reject the push if the result overlaps a third panel or still leaves
//!    the viewport; otherwise commit it and cascade with the pushed panel as
//!    the new mover.
//!
//! # Invariants
//!
//! - Panels are visited in slice order; the same input always produces the
//!   same output.
//! - The mover's rectangle is captured once per cascade level, before any
//!   neighbour is pushed.
//! - Recursion stops once the depth exceeds
//!   [`BoardConfig::max_cascade_depth`]; deeper overlaps are left in place and
//!   reported as [`ResolveReport::truncated`].
//!
//! # Failure Modes
//!
//! After resolution the layout is overlap-free unless the cascade was
//! truncated or at least one push was rejected. Both are reported, never
//! raised.

use serde::{Deserialize, Serialize};
use tileboard_core::{PanelId, Position, Rect, Viewport, intersects, snap_to};
use tracing::{debug, trace, warn};

use crate::config::BoardConfig;
use crate::constraints::clamp_position;
use crate::panel::Panel;

/// Axis a neighbour was pushed along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PushAxis {
    Horizontal,
    Vertical,
}

/// One committed push.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Displacement {
    pub panel: PanelId,
    pub pushed_by: PanelId,
    /// Cascade level of the mover that caused the push (root mover is 0).
    pub depth: u32,
    pub axis: PushAxis,
    pub from: Position,
    pub to: Position,
}

/// One push that was computed but not applied.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RejectedPush {
    pub panel: PanelId,
    pub pushed_by: PanelId,
    pub depth: u32,
    pub candidate: Position,
}

/// Outcome of one resolver run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResolveReport {
    /// Committed pushes in commit order.
    pub displaced: Vec<Displacement>,
    pub rejected: Vec<RejectedPush>,
    /// Deepest cascade level that was processed.
    pub max_depth: u32,
    /// The depth cap cut the cascade short.
    pub truncated: bool,
}

impl ResolveReport {
    /// Ids of displaced panels, first push first, without duplicates.
    #[must_use]
    pub fn displaced_ids(&self) -> Vec<PanelId> {
        let mut ids: Vec<PanelId> = Vec::with_capacity(self.displaced.len());
        for push in &self.displaced {
            if !ids.contains(&push.panel) {
                ids.push(push.panel);
            }
        }
        ids
    }

    /// No push was rejected and the cascade ran to completion.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.rejected.is_empty() && !self.truncated
    }

    /// Fold a later run into this one.
    pub fn absorb(&mut self, other: ResolveReport) {
        self.displaced.extend(other.displaced);
        self.rejected.extend(other.rejected);
        self.max_depth = self.max_depth.max(other.max_depth);
        self.truncated |= other.truncated;
    }
}

/// Resolve overlaps caused by `panels[mover]` with the default configuration.
///
/// # Panics
///
/// Panics if `mover` is out of bounds.
pub fn resolve_collisions(
    panels: &mut [Panel],
    mover: usize,
    viewport: &Viewport,
) -> ResolveReport {
    resolve_collisions_with(panels, mover, viewport, &BoardConfig::default())
}

/// Resolve overlaps caused by `panels[mover]`, mutating neighbours in place.
///
/// # Panics
///
/// Panics if `mover` is out of bounds.
pub fn resolve_collisions_with(
    panels: &mut [Panel],
    mover: usize,
    viewport: &Viewport,
    config: &BoardConfig,
) -> ResolveReport {
    let mut report = ResolveReport::default();
    cascade(panels, mover, 0, viewport, config, &mut report);
    report
}

fn cascade(
    panels: &mut [Panel],
    mover: usize,
    depth: u32,
    viewport: &Viewport,
    config: &BoardConfig,
    report: &mut ResolveReport,
) {
    if depth > config.max_cascade_depth {
        if !report.truncated {
            warn!(
                panel = %panels[mover].id,
                depth,
                cap = config.max_cascade_depth,
                "collision cascade truncated"
            );
        }
        report.truncated = true;
        return;
    }
    report.max_depth = report.max_depth.max(depth);

    let moving = panels[mover].rect();
    let mover_id = panels[mover].id;

    for index in 0..panels.len() {
        if index == mover {
            continue;
        }
        let other = panels[index].rect();
        if !intersects(&moving, &other) {
            continue;
        }

        let (axis, target) = push_target(&moving, &other, config.grid_step);
        let size = panels[index].size;
        let candidate = clamp_position(target, size, viewport);
        let landing = Rect::of(candidate, size);

        let blocked = panels
            .iter()
            .enumerate()
            .any(|(i, p)| i != index && i != mover && intersects(&landing, &p.rect()));

        if blocked || !viewport.contains_rect(&landing) {
            trace!(
                panel = %panels[index].id,
                pushed_by = %mover_id,
                depth,
                x = candidate.x,
                y = candidate.y,
                blocked,
                "push rejected"
            );
            report.rejected.push(RejectedPush {
                panel: panels[index].id,
                pushed_by: mover_id,
                depth,
                candidate,
            });
            continue;
        }

        let from = panels[index].position;
        panels[index].position = candidate;
        debug!(
            panel = %panels[index].id,
            pushed_by = %mover_id,
            depth,
            ?axis,
            x = candidate.x,
            y = candidate.y,
            "panel displaced"
        );
        report.displaced.push(Displacement {
            panel: panels[index].id,
            pushed_by: mover_id,
            depth,
            axis,
            from,
            to: candidate,
        });

        cascade(panels, index, depth + 1, viewport, config, report);
    }
}

/// Unclamped landing spot for `other` when pushed clear of `moving`.
fn push_target(moving: &Rect, other: &Rect, step: f64) -> (PushAxis, Position) {
    let (overlap_x, overlap_y) = moving.overlap_extents(other);

    if overlap_x < overlap_y {
        let x = if moving.center_x() < other.center_x() {
            snap_to(moving.right(), step)
        } else {
            snap_to(moving.left - other.width, step)
        };
        (PushAxis::Horizontal, Position::new(x, other.top))
    } else {
        let y = if moving.center_y() < other.center_y() {
            snap_to(moving.bottom(), step)
        } else {
            snap_to(moving.top - other.height, step)
        };
        (PushAxis::Vertical, Position::new(other.left, y))
    }
}

/// Whether `rect` fits inside `viewport` without overlapping any panel other
/// than `exclude`.
#[must_use]
pub fn is_valid_position(
    rect: &Rect,
    panels: &[Panel],
    exclude: Option<PanelId>,
    viewport: &Viewport,
) -> bool {
    viewport.contains_rect(rect)
        && panels
            .iter()
            .filter(|p| Some(p.id) != exclude)
            .all(|p| !intersects(rect, &p.rect()))
}

/// Every intersecting pair, in slice order.
#[must_use]
pub fn overlapping_pairs(panels: &[Panel]) -> Vec<(PanelId, PanelId)> {
    let mut pairs = Vec::new();
    for (i, a) in panels.iter().enumerate() {
        let rect = a.rect();
        for b in &panels[i + 1..] {
            if intersects(&rect, &b.rect()) {
                pairs.push((a.id, b.id));
            }
        }
    }
    pairs
}

#[cfg(test)]
mod tests {
    use super::*;
    use tileboard_core::Size;
    use tracing_test::traced_test;

    use crate::config::MAX_CASCADE_DEPTH as MAX_DEPTH;

    fn panel(id: u64, x: f64, y: f64, w: f64, h: f64) -> Panel {
        Panel::new(
            PanelId::new(id),
            Position::new(x, y),
            Size::new(w, h),
            "test",
            "",
        )
    }

    fn viewport() -> Viewport {
        Viewport::from_size(1000.0, 800.0)
    }

    #[test]
    fn no_overlap_is_a_noop() {
        let mut panels = vec![
            panel(0, 0.0, 0.0, 200.0, 100.0),
            panel(1, 200.0, 0.0, 200.0, 100.0),
        ];
        let before = panels.clone();
        let report = resolve_collisions(&mut panels, 0, &viewport());
        assert_eq!(panels, before);
        assert!(report.displaced.is_empty());
        assert!(report.is_clean());
        assert_eq!(report.max_depth, 0);
    }

    #[test]
    fn shallow_horizontal_overlap_pushes_right() {
        let mut panels = vec![
            panel(0, 70.0, 70.0, 300.0, 200.0),
            panel(1, 340.0, 20.0, 280.0, 150.0),
        ];
        let report = resolve_collisions(&mut panels, 0, &viewport());
        assert_eq!(panels[1].position, Position::new(380.0, 20.0));
        assert_eq!(report.displaced[0].axis, PushAxis::Horizontal);
        assert_eq!(report.displaced_ids(), vec![PanelId::new(1)]);
    }

    #[test]
    fn shallow_vertical_overlap_pushes_up_when_centred_above() {
        let mut panels = vec![
            panel(0, 100.0, 300.0, 300.0, 200.0),
            panel(1, 120.0, 200.0, 200.0, 120.0),
        ];
        resolve_collisions(&mut panels, 0, &viewport());
        // flush above: 300 - 120 = 180
        assert_eq!(panels[1].position, Position::new(120.0, 180.0));
    }

    #[test]
    fn equal_overlap_pushes_vertically() {
        let mut panels = vec![
            panel(0, 0.0, 0.0, 200.0, 200.0),
            panel(1, 160.0, 160.0, 200.0, 200.0),
        ];
        let report = resolve_collisions(&mut panels, 0, &viewport());
        assert_eq!(report.displaced[0].axis, PushAxis::Vertical);
        assert_eq!(panels[1].position, Position::new(160.0, 200.0));
    }

    #[test]
    fn push_into_third_panel_is_rejected() {
        let mut panels = vec![
            panel(0, 0.0, 0.0, 300.0, 200.0),
            panel(1, 280.0, 0.0, 200.0, 300.0),
            panel(2, 480.0, 0.0, 200.0, 200.0),
        ];
        let report = resolve_collisions(&mut panels, 0, &viewport());
        assert_eq!(panels[1].position, Position::new(280.0, 0.0));
        assert_eq!(report.rejected.len(), 1);
        assert_eq!(report.rejected[0].panel, PanelId::new(1));
        assert_eq!(report.rejected[0].candidate, Position::new(300.0, 0.0));
        assert!(!report.is_clean());
        assert_eq!(
            overlapping_pairs(&panels),
            vec![(PanelId::new(0), PanelId::new(1))]
        );
    }

    #[test]
    fn push_that_cannot_fit_the_viewport_is_rejected() {
        // Wider than the viewport: the clamp pulls it past the left edge.
        let mut panels = vec![
            panel(0, 0.0, 0.0, 300.0, 200.0),
            panel(1, 250.0, 100.0, 1200.0, 200.0),
        ];
        let report = resolve_collisions(&mut panels, 0, &viewport());
        assert_eq!(panels[1].position, Position::new(250.0, 100.0));
        assert!(report.displaced.is_empty());
        assert_eq!(
            report.rejected,
            vec![RejectedPush {
                panel: PanelId::new(1),
                pushed_by: PanelId::new(0),
                depth: 0,
                candidate: Position::new(-200.0, 100.0),
            }]
        );
    }

    #[traced_test]
    #[test]
    fn clamped_push_bounces_until_depth_cap() {
        // Pushing panel 1 right is clamped back at the viewport edge, so it
        // keeps overlapping the mover and the two push each other in turn.
        let mut panels = vec![
            panel(0, 600.0, 0.0, 300.0, 200.0),
            panel(1, 860.0, 40.0, 150.0, 300.0),
        ];
        let report = resolve_collisions(&mut panels, 0, &viewport());
        assert_eq!(panels[1].position, Position::new(850.0, 40.0));
        assert_eq!(panels[0].position, Position::new(560.0, 0.0));
        assert!(report.truncated);
        assert_eq!(report.max_depth, MAX_DEPTH);
        assert_eq!(report.displaced.len(), (MAX_DEPTH + 1) as usize);
        assert!(logs_contain("collision cascade truncated"));
    }

    #[test]
    fn zero_depth_cap_stops_after_first_push() {
        let mut panels = vec![
            panel(0, 600.0, 0.0, 300.0, 200.0),
            panel(1, 860.0, 40.0, 150.0, 300.0),
        ];
        let config = BoardConfig::default().with_max_cascade_depth(0);
        let report = resolve_collisions_with(&mut panels, 0, &viewport(), &config);
        assert!(report.truncated);
        assert_eq!(panels[0].position, Position::new(600.0, 0.0));
        assert_eq!(panels[1].position, Position::new(850.0, 40.0));
        assert_eq!(
            overlapping_pairs(&panels),
            vec![(PanelId::new(0), PanelId::new(1))]
        );
    }

    #[test]
    fn valid_position_excludes_self() {
        let panels = vec![panel(0, 0.0, 0.0, 200.0, 100.0)];
        let rect = panels[0].rect();
        assert!(is_valid_position(&rect, &panels, Some(PanelId::new(0)), &viewport()));
        assert!(!is_valid_position(&rect, &panels, None, &viewport()));
        let outside = Rect::new(900.0, 0.0, 200.0, 100.0);
        assert!(!is_valid_position(&outside, &panels, None, &viewport()));
    }
}
