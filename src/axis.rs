//! Per-zone axis tracking
//!
//! One [`AxisTracker`] handles one control zone: which contact owns it, the
//! press-time origin coordinate on its axis, and the last force delivered.
//! The left and right zones of [`crate::SplitJoystick`] are two instances of
//! this type; only the [`Axis`] (coordinate selection and displacement sign)
//! differs between them.

use std::fmt;

use tracing::trace;

use crate::events::ContactId;
use crate::geometry::{Point, Rect};

/// The control axis a zone reports on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Vertical,
    Horizontal,
}

impl Axis {
    /// The coordinate this axis reads from a surface point.
    pub fn coordinate(self, point: Point) -> i32 {
        match self {
            Axis::Vertical => point.y,
            Axis::Horizontal => point.x,
        }
    }

    /// Signed displacement from `origin` to `coord`: up is positive on the
    /// vertical axis (screen y grows downward), right is positive on the
    /// horizontal axis.
    pub fn displacement(self, origin: i32, coord: i32) -> i32 {
        match self {
            Axis::Vertical => origin - coord,
            Axis::Horizontal => coord - origin,
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Vertical => write!(f, "vertical"),
            Axis::Horizontal => write!(f, "horizontal"),
        }
    }
}

/// Tracking state for one control zone.
#[derive(Debug, Clone)]
pub struct AxisTracker {
    axis: Axis,
    contact: Option<ContactId>,
    origin: i32,
    last: i32,
    force: f32,
}

impl AxisTracker {
    pub fn new(axis: Axis) -> Self {
        Self { axis, contact: None, origin: 0, last: 0, force: 0.0 }
    }

    pub fn axis(&self) -> Axis {
        self.axis
    }

    /// The contact currently owning this zone, if any.
    pub fn contact(&self) -> Option<ContactId> {
        self.contact
    }

    pub fn is_armed(&self) -> bool {
        self.contact.is_some()
    }

    /// Last force delivered to the listener.
    pub fn force(&self) -> f32 {
        self.force
    }

    /// Arm the zone for `id` if it is idle and the press lands inside
    /// `rect`. The press coordinate becomes the force origin.
    pub fn try_arm(&mut self, id: ContactId, point: Point, rect: &Rect) -> bool {
        if self.contact.is_some() || !rect.contains(point) {
            return false;
        }
        let coord = self.axis.coordinate(point);
        self.contact = Some(id);
        self.origin = coord;
        self.last = coord;
        true
    }

    /// Process a move of contact `id`. Returns the new force when it
    /// changed.
    ///
    /// Moves from other contacts and moves that leave the axis coordinate
    /// unchanged are no-ops. Force is the origin displacement over `radius`
    /// clamped to [-1, 1]; exact comparison against the previous force
    /// suppresses duplicate notifications.
    pub fn update(&mut self, id: ContactId, point: Point, radius: i32) -> Option<f32> {
        if self.contact != Some(id) {
            return None;
        }
        let coord = self.axis.coordinate(point);
        if coord == self.last {
            return None;
        }
        let delta = self.axis.displacement(self.origin, coord);
        let force = (delta as f32 / radius as f32).clamp(-1.0, 1.0);
        self.last = coord;
        if force == self.force {
            return None;
        }
        trace!(axis = %self.axis, id, force, "force changed");
        self.force = force;
        Some(force)
    }

    /// Release the zone if `id` owns it. Disarming always returns the 0.0
    /// reset notification, even when the force was already zero.
    pub fn release(&mut self, id: ContactId) -> Option<f32> {
        if self.contact != Some(id) {
            return None;
        }
        self.disarm()
    }

    /// Drop the owning contact, if any, and reset the force. Same reset
    /// semantics as [`release`](Self::release).
    pub fn disarm(&mut self) -> Option<f32> {
        self.contact.take()?;
        self.force = 0.0;
        Some(0.0)
    }
}
