//! Pointer trace replay
//!
//! A trace is a JSON document holding an optional surface header and the
//! ordered pointer events of a recorded session. Replaying drives the events
//! through a fresh [`SplitJoystick`] and reports what the listener saw -
//! useful for regression-testing recorded sessions and for driving the
//! tracker from the command line.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::axis::Axis;
use crate::config::SurfaceConfig;
use crate::error::{GeometryError, TraceError};
use crate::events::PointerEvent;
use crate::joystick::{JoystickListener, SplitJoystick};

/// A recorded pointer session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Trace {
    /// Surface dimensions the session was recorded on; a replay may
    /// override them.
    #[serde(default)]
    pub surface: Option<SurfaceConfig>,
    pub events: Vec<PointerEvent>,
}

impl Trace {
    /// Load a trace from a JSON file.
    pub fn load(path: &Path) -> Result<Self, TraceError> {
        let raw = fs::read_to_string(path)?;
        Self::parse(&raw)
    }

    /// Parse a trace from a JSON string.
    pub fn parse(raw: &str) -> Result<Self, TraceError> {
        Ok(serde_json::from_str(raw)?)
    }
}

/// Listener that records every notification in delivery order.
#[derive(Debug, Default)]
pub struct RecordingListener {
    pub changes: Vec<(Axis, f32)>,
}

impl JoystickListener for RecordingListener {
    fn on_vertical_change(&mut self, force: f32) {
        self.changes.push((Axis::Vertical, force));
    }

    fn on_horizontal_change(&mut self, force: f32) {
        self.changes.push((Axis::Horizontal, force));
    }
}

/// Outcome of replaying a trace.
#[derive(Debug, Clone, PartialEq)]
pub struct ReplayReport {
    /// Events fed to the tracker.
    pub dispatched: usize,
    /// Events the tracker did not consume.
    pub unhandled: usize,
    /// Every axis notification in delivery order.
    pub changes: Vec<(Axis, f32)>,
    pub final_vertical: f32,
    pub final_horizontal: f32,
}

/// Replay `trace` on a surface of the given dimensions.
pub fn replay(trace: &Trace, surface: SurfaceConfig) -> Result<ReplayReport, GeometryError> {
    let mut joystick =
        SplitJoystick::with_metrics(RecordingListener::default(), surface.width, surface.height)?;

    let mut unhandled = 0;
    for event in &trace.events {
        if !joystick.dispatch(event) {
            unhandled += 1;
        }
    }

    let final_vertical = joystick.force(Axis::Vertical);
    let final_horizontal = joystick.force(Axis::Horizontal);
    let changes = std::mem::take(&mut joystick.listener_mut().changes);
    debug!(
        dispatched = trace.events.len(),
        unhandled,
        changes = changes.len(),
        "trace replayed"
    );

    Ok(ReplayReport {
        dispatched: trace.events.len(),
        unhandled,
        changes,
        final_vertical,
        final_horizontal,
    })
}
