//! splitstick - dual-zone touch tracker emulating two joystick axes
//!
//! Splits a rectangular touch surface into two control zones and maps raw
//! multi-touch pointer events to two independent analog control signals:
//! - left zone: vertical axis, up is positive
//! - right zone: horizontal axis, right is positive
//!
//! The core is [`SplitJoystick`]: feed it decoded [`PointerEvent`]s through
//! [`SplitJoystick::dispatch`] and it notifies a [`JoystickListener`]
//! whenever an axis force changes. Surface geometry is injected through
//! [`SplitJoystick::set_metrics`] - there is no ambient platform state, no
//! timers, and no threads; every notification happens synchronously inside
//! `dispatch`.

pub mod axis;
pub mod config;
pub mod error;
pub mod events;
pub mod geometry;
pub mod joystick;
pub mod replay;

pub use axis::{Axis, AxisTracker};
pub use config::{ReplayConfig, SurfaceConfig};
pub use error::{ConfigError, GeometryError, TraceError};
pub use events::{Contact, ContactId, PointerEvent};
pub use geometry::{Point, Rect, SurfaceGeometry};
pub use joystick::{JoystickListener, SplitJoystick};
pub use replay::{replay, RecordingListener, ReplayReport, Trace};
