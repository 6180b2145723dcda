#![forbid(unsafe_code)]

//! Interaction session: the drag/resize lifecycle of a single pointer gesture.
//!
//! ```text
//! Idle --down(header)--> Dragging --move--> Dragging --up--> Idle
//! Idle --down(resize)--> Resizing --move--> Resizing --up--> Idle
//! ```
//!
//! # Invariants
//!
//! 1. At most one gesture is active; a press during a gesture is a no-op.
//! 2. Moves never snap. Only the release snaps, so motion follows the pointer
//!    while the settled layout stays on the grid.
//! 3. A drag is absolute (origin position plus the total pointer delta); a
//!    resize is incremental (current size plus the delta since the previous
//!    event).
//! 4. Every committed change is followed by a collision-resolver run with the
//!    manipulated panel as the mover.
//!
//! # Failure Modes
//!
//! - Release is the only way out of a gesture; a pointer leaving the window
//!   must be delivered as an `Up` by the host.
//! - If the manipulated panel disappears mid-gesture the step fails with
//!   [`BoardError::UnknownPanel`] and the session returns to `Idle`.

use serde::{Deserialize, Serialize};
use tileboard_core::{PanelHandle, PanelId, PointerEvent, Position, Size, ViewportSource};
use tracing::{debug, debug_span, trace};

use crate::board::Board;
use crate::collision::ResolveReport;
use crate::constraints::{clamp_position, clamp_size_with_floor};
use crate::error::BoardError;

/// Gesture lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum SessionState {
    #[default]
    Idle,
    Dragging {
        panel: PanelId,
        pointer_origin: Position,
        panel_origin: Position,
    },
    Resizing {
        panel: PanelId,
        last_pointer: Position,
    },
}

impl SessionState {
    /// Panel under manipulation, if any.
    #[must_use]
    pub const fn panel(&self) -> Option<PanelId> {
        match self {
            Self::Idle => None,
            Self::Dragging { panel, .. } | Self::Resizing { panel, .. } => Some(*panel),
        }
    }
}

/// Why an event was ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionNoopReason {
    IdleWithoutGesture,
    GestureAlreadyInProgress,
}

/// What one session step did.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "effect", rename_all = "snake_case")]
pub enum SessionEffect {
    DragStarted {
        panel: PanelId,
        origin: Position,
    },
    ResizeStarted {
        panel: PanelId,
        origin: Position,
    },
    Moved {
        panel: PanelId,
        position: Position,
        report: ResolveReport,
    },
    Resized {
        panel: PanelId,
        size: Size,
        report: ResolveReport,
    },
    /// Gesture released; the panel was snapped, re-clamped and resolved.
    Settled {
        panel: PanelId,
        position: Position,
        size: Size,
        report: ResolveReport,
    },
    Noop {
        reason: SessionNoopReason,
    },
}

impl SessionEffect {
    /// Resolver outcome carried by the step, if it ran the resolver.
    #[must_use]
    pub fn report(&self) -> Option<&ResolveReport> {
        match self {
            Self::Moved { report, .. }
            | Self::Resized { report, .. }
            | Self::Settled { report, .. } => Some(report),
            _ => None,
        }
    }
}

/// One state-machine step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionTransition {
    pub transition_id: u64,
    pub from: SessionState,
    pub to: SessionState,
    pub effect: SessionEffect,
}

/// Tracks the gesture in progress, if any.
///
/// The session holds no panel data: every step borrows the board mutably for
/// its duration, so no other writer can move panels while a step runs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InteractionSession {
    state: SessionState,
    transition_counter: u64,
}

impl InteractionSession {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn state(&self) -> SessionState {
        self.state
    }

    #[must_use]
    pub const fn is_active(&self) -> bool {
        !matches!(self.state, SessionState::Idle)
    }

    /// Where drag guide lines should be drawn: the dragged panel's current
    /// position. `None` unless a drag is in progress.
    #[must_use]
    pub fn guide_position(&self, board: &Board) -> Option<Position> {
        match self.state {
            SessionState::Dragging { panel, .. } => board.get(panel).map(|p| p.position),
            _ => None,
        }
    }

    /// Feed one pointer event.
    ///
    /// The viewport is queried once per call.
    pub fn handle(
        &mut self,
        event: &PointerEvent,
        board: &mut Board,
        viewport: &impl ViewportSource,
    ) -> Result<SessionTransition, BoardError> {
        let from = self.state;
        let effect = match (*event, from) {
            (
                PointerEvent::Down {
                    panel,
                    handle,
                    position,
                },
                SessionState::Idle,
            ) => self.begin(panel, handle, position, board)?,
            (PointerEvent::Down { panel, .. }, _) => {
                trace!(panel = %panel, "press ignored during active gesture");
                SessionEffect::Noop {
                    reason: SessionNoopReason::GestureAlreadyInProgress,
                }
            }
            (PointerEvent::Move { .. } | PointerEvent::Up { .. }, SessionState::Idle) => {
                SessionEffect::Noop {
                    reason: SessionNoopReason::IdleWithoutGesture,
                }
            }
            (PointerEvent::Move { position }, SessionState::Dragging { .. }) => {
                self.guard(|s| s.drag_to(position, board, viewport))?
            }
            (PointerEvent::Move { position }, SessionState::Resizing { .. }) => {
                self.guard(|s| s.resize_to(position, board, viewport))?
            }
            (PointerEvent::Up { .. }, _) => self.guard(|s| s.release(board, viewport))?,
        };

        self.transition_counter = self.transition_counter.saturating_add(1);
        Ok(SessionTransition {
            transition_id: self.transition_counter,
            from,
            to: self.state,
            effect,
        })
    }

    /// Drop to `Idle` if a gesture step fails.
    fn guard<F>(&mut self, step: F) -> Result<SessionEffect, BoardError>
    where
        F: FnOnce(&mut Self) -> Result<SessionEffect, BoardError>,
    {
        step(self).inspect_err(|_| self.state = SessionState::Idle)
    }

    fn begin(
        &mut self,
        panel: PanelId,
        handle: PanelHandle,
        pointer: Position,
        board: &Board,
    ) -> Result<SessionEffect, BoardError> {
        let current = board.panel(panel)?;
        debug!(panel = %panel, ?handle, x = pointer.x, y = pointer.y, "gesture started");
        Ok(match handle {
            PanelHandle::Header => {
                self.state = SessionState::Dragging {
                    panel,
                    pointer_origin: pointer,
                    panel_origin: current.position,
                };
                SessionEffect::DragStarted {
                    panel,
                    origin: pointer,
                }
            }
            PanelHandle::Resize => {
                self.state = SessionState::Resizing {
                    panel,
                    last_pointer: pointer,
                };
                SessionEffect::ResizeStarted {
                    panel,
                    origin: pointer,
                }
            }
        })
    }

    fn drag_to(
        &mut self,
        pointer: Position,
        board: &mut Board,
        viewport: &impl ViewportSource,
    ) -> Result<SessionEffect, BoardError> {
        let SessionState::Dragging {
            panel,
            pointer_origin,
            panel_origin,
        } = self.state
        else {
            return Ok(SessionEffect::Noop {
                reason: SessionNoopReason::IdleWithoutGesture,
            });
        };
        let _span = debug_span!("session.drag", panel = %panel).entered();

        let viewport = viewport.viewport();
        let index = board.index_of(panel)?;
        let (dx, dy) = pointer.delta_from(pointer_origin);
        let target = board.panel_at_mut(index);
        let position = clamp_position(panel_origin.offset(dx, dy), target.size, &viewport);
        target.position = position;

        let report = board.resolve_at(index, &viewport);
        Ok(SessionEffect::Moved {
            panel,
            position,
            report,
        })
    }

    fn resize_to(
        &mut self,
        pointer: Position,
        board: &mut Board,
        viewport: &impl ViewportSource,
    ) -> Result<SessionEffect, BoardError> {
        let SessionState::Resizing {
            panel,
            last_pointer,
        } = self.state
        else {
            return Ok(SessionEffect::Noop {
                reason: SessionNoopReason::IdleWithoutGesture,
            });
        };
        let _span = debug_span!("session.resize", panel = %panel).entered();

        let viewport = viewport.viewport();
        let floor = board.config().min_size;
        let index = board.index_of(panel)?;
        let (dw, dh) = pointer.delta_from(last_pointer);
        let target = board.panel_at_mut(index);
        let grown = target.size.grown(dw, dh);
        let size = clamp_size_with_floor(grown, target.position, &viewport, floor);
        target.size = size;

        let report = board.resolve_at(index, &viewport);
        self.state = SessionState::Resizing {
            panel,
            last_pointer: pointer,
        };
        Ok(SessionEffect::Resized {
            panel,
            size,
            report,
        })
    }

    fn release(
        &mut self,
        board: &mut Board,
        viewport: &impl ViewportSource,
    ) -> Result<SessionEffect, BoardError> {
        let state = std::mem::take(&mut self.state);
        let Some(panel) = state.panel() else {
            return Ok(SessionEffect::Noop {
                reason: SessionNoopReason::IdleWithoutGesture,
            });
        };
        let _span = debug_span!("session.release", panel = %panel).entered();

        let viewport = viewport.viewport();
        let config = *board.config();
        let index = board.index_of(panel)?;
        let target = board.panel_at_mut(index);
        match state {
            SessionState::Dragging { .. } => {
                let snapped = target.position.snapped(config.grid_step);
                target.position = clamp_position(snapped, target.size, &viewport);
            }
            SessionState::Resizing { .. } => {
                let snapped = target.size.snapped(config.grid_step);
                target.size =
                    clamp_size_with_floor(snapped, target.position, &viewport, config.min_size);
            }
            SessionState::Idle => {}
        }
        let (position, size) = (target.position, target.size);

        let report = board.resolve_at(index, &viewport);
        debug!(
            panel = %panel,
            x = position.x,
            y = position.y,
            width = size.width,
            height = size.height,
            "gesture settled"
        );
        Ok(SessionEffect::Settled {
            panel,
            position,
            size,
            report,
        })
    }
}
