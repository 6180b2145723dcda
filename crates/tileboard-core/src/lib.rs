#![forbid(unsafe_code)]

//! Core: geometry primitives, viewport bounds, and pointer events.
//!
//! # Role in Tileboard
//! `tileboard-core` holds the leaf types every other crate speaks in:
//!
//! - **Geometry**: [`Position`], [`Size`], [`Rect`], grid [`snap`]ping and the
//!   strict [`intersects`] test.
//! - **Viewport**: the [`Viewport`] safe area and the [`ViewportSource`] seam a
//!   host implements to report its current window size.
//! - **Events**: [`PointerEvent`]s the interaction session consumes.
//!
//! Nothing here mutates state; the layout engine lives in `tileboard-layout`.

pub mod event;
pub mod geometry;
pub mod id;

pub use event::{PanelHandle, PointerEvent};
pub use geometry::{
    GRID_STEP, Position, Rect, Size, Viewport, ViewportSource, intersects, snap, snap_to,
};
pub use id::PanelId;
