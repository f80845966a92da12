//! Dual-zone virtual joystick
//!
//! Splits a touch surface at the middle into two control zones and maps each
//! to one analog axis:
//! - left zone: vertical axis, up is positive
//! - right zone: horizontal axis, right is positive
//!
//! A press inside an idle zone arms it for that contact. While armed, the
//! contact's displacement from its press origin, scaled by the stick radius,
//! is the axis force in [-1, 1]. Releasing (or cancelling) the contact
//! disarms the zone and always reports a 0.0 reset. Everything is
//! synchronous: listener notifications happen inside [`SplitJoystick::dispatch`].

use tracing::{debug, trace};

use crate::axis::{Axis, AxisTracker};
use crate::error::GeometryError;
use crate::events::{ContactId, PointerEvent};
use crate::geometry::{Point, SurfaceGeometry};

/// Consumer of axis changes.
///
/// Notified whenever a force value changes, from within the caller's own
/// event-delivery stack. A release always notifies 0.0 for its axis, even if
/// the force was already zero - consumers rely on that deterministic reset.
pub trait JoystickListener {
    fn on_vertical_change(&mut self, force: f32);
    fn on_horizontal_change(&mut self, force: f32);
}

/// Two-zone touch tracker emulating a pair of one-axis joysticks.
pub struct SplitJoystick<L: JoystickListener> {
    listener: L,
    geometry: Option<SurfaceGeometry>,
    left: AxisTracker,
    right: AxisTracker,
}

impl<L: JoystickListener> SplitJoystick<L> {
    /// Create a tracker with no surface metrics yet. Every press is ignored
    /// until [`set_metrics`](Self::set_metrics) succeeds.
    pub fn new(listener: L) -> Self {
        Self {
            listener,
            geometry: None,
            left: AxisTracker::new(Axis::Vertical),
            right: AxisTracker::new(Axis::Horizontal),
        }
    }

    /// Create a tracker and configure the surface in one step.
    pub fn with_metrics(listener: L, width: i32, height: i32) -> Result<Self, GeometryError> {
        let mut joystick = Self::new(listener);
        joystick.set_metrics(width, height)?;
        Ok(joystick)
    }

    /// Configure (or reconfigure) the surface dimensions.
    ///
    /// Pure geometry update: armed zones carry over. They keep their contact
    /// and press origin, and the new radius and rectangles apply from the
    /// next event on. Dimensions that cannot derive a positive radius are
    /// rejected and leave the previous geometry in place.
    pub fn set_metrics(&mut self, width: i32, height: i32) -> Result<(), GeometryError> {
        self.geometry = Some(SurfaceGeometry::new(width, height)?);
        Ok(())
    }

    /// Surface geometry, if metrics have been set.
    pub fn geometry(&self) -> Option<&SurfaceGeometry> {
        self.geometry.as_ref()
    }

    pub fn listener(&self) -> &L {
        &self.listener
    }

    pub fn listener_mut(&mut self) -> &mut L {
        &mut self.listener
    }

    fn tracker(&self, axis: Axis) -> &AxisTracker {
        match axis {
            Axis::Vertical => &self.left,
            Axis::Horizontal => &self.right,
        }
    }

    /// Whether the zone reporting on `axis` is currently armed.
    pub fn is_armed(&self, axis: Axis) -> bool {
        self.tracker(axis).is_armed()
    }

    /// Last force delivered for `axis`.
    pub fn force(&self, axis: Axis) -> f32 {
        self.tracker(axis).force()
    }

    /// Number of contacts currently tracked (0 to 2).
    pub fn contact_count(&self) -> usize {
        usize::from(self.left.is_armed()) + usize::from(self.right.is_armed())
    }

    /// Feed one platform event.
    ///
    /// Returns whether the event was consumed; unconsumed events should fall
    /// through to whatever default handling the caller has.
    pub fn dispatch(&mut self, event: &PointerEvent) -> bool {
        match event {
            PointerEvent::Down { contact } => {
                self.press(contact.id, contact.position);
                true
            }
            PointerEvent::Up { id } | PointerEvent::Cancel { id } => {
                self.release(*id);
                true
            }
            PointerEvent::Move { contacts } => {
                // Coalesced motion: flush the latest coordinate of every
                // live contact, not just the one that physically moved.
                for contact in contacts {
                    self.motion(contact.id, contact.position);
                }
                true
            }
            other => {
                trace!(event = ?other, "unhandled pointer event");
                false
            }
        }
    }

    /// A contact pressed at `point`. Arms the left zone, else the right
    /// zone, else ignores the press (occupied zone, outside both
    /// rectangles, or a third simultaneous contact).
    pub fn press(&mut self, id: ContactId, point: Point) {
        let Some(geometry) = &self.geometry else {
            trace!(id, "press before metrics are set, ignored");
            return;
        };
        if self.left.try_arm(id, point, &geometry.left_zone) {
            debug!(id, x = point.x, y = point.y, "left zone armed");
        } else if self.right.try_arm(id, point, &geometry.right_zone) {
            debug!(id, x = point.x, y = point.y, "right zone armed");
        }
    }

    /// A contact lifted or its gesture was cancelled. Disarms the zone it
    /// owned with the unconditional 0.0 reset; unknown contacts are a no-op.
    pub fn release(&mut self, id: ContactId) {
        if let Some(force) = self.left.release(id) {
            debug!(id, "left zone released");
            self.listener.on_vertical_change(force);
        } else if let Some(force) = self.right.release(id) {
            debug!(id, "right zone released");
            self.listener.on_horizontal_change(force);
        }
    }

    /// A contact moved. Updates the zone the contact owns; moves from
    /// untracked contacts are ignored.
    pub fn motion(&mut self, id: ContactId, point: Point) {
        let Some(geometry) = &self.geometry else { return };
        let radius = geometry.radius;
        if let Some(force) = self.left.update(id, point, radius) {
            self.listener.on_vertical_change(force);
        } else if let Some(force) = self.right.update(id, point, radius) {
            self.listener.on_horizontal_change(force);
        }
    }

    /// Drop all tracking, as if every tracked contact had been released.
    /// Armed zones report their 0.0 reset.
    pub fn reset(&mut self) {
        if let Some(force) = self.left.disarm() {
            self.listener.on_vertical_change(force);
        }
        if let Some(force) = self.right.disarm() {
            self.listener.on_horizontal_change(force);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::Contact;
    use crate::replay::RecordingListener;

    fn joystick() -> SplitJoystick<RecordingListener> {
        // 800x600: radius 150, middle 400, left zone (75,75)-(325,525),
        // right zone (475,75)-(725,525).
        SplitJoystick::with_metrics(RecordingListener::default(), 800, 600).unwrap()
    }

    fn changes(joystick: &SplitJoystick<RecordingListener>) -> &[(Axis, f32)] {
        &joystick.listener().changes
    }

    #[test]
    fn test_press_move_release_walkthrough() {
        let mut joystick = joystick();

        joystick.press(1, Point { x: 100, y: 300 });
        assert!(joystick.is_armed(Axis::Vertical));
        assert!(!joystick.is_armed(Axis::Horizontal));
        assert!(changes(&joystick).is_empty());

        joystick.motion(1, Point { x: 100, y: 200 });
        assert_eq!(changes(&joystick).len(), 1);
        let (axis, force) = changes(&joystick)[0];
        assert_eq!(axis, Axis::Vertical);
        assert!((force - 100.0 / 150.0).abs() < 1e-3);

        // Same coordinate again: no-op.
        joystick.motion(1, Point { x: 100, y: 200 });
        assert_eq!(changes(&joystick).len(), 1);

        joystick.release(1);
        assert_eq!(changes(&joystick).len(), 2);
        assert_eq!(changes(&joystick)[1], (Axis::Vertical, 0.0));
        assert!(!joystick.is_armed(Axis::Vertical));
    }

    #[test]
    fn test_zones_track_independently() {
        let mut joystick = joystick();

        joystick.press(1, Point { x: 100, y: 300 });
        joystick.press(2, Point { x: 600, y: 300 });
        assert_eq!(joystick.contact_count(), 2);

        joystick.motion(1, Point { x: 100, y: 150 });
        joystick.motion(2, Point { x: 750, y: 300 });
        assert_eq!(
            changes(&joystick),
            &[(Axis::Vertical, 1.0), (Axis::Horizontal, 1.0)]
        );

        joystick.release(2);
        assert!(joystick.is_armed(Axis::Vertical));
        assert_eq!(changes(&joystick)[2], (Axis::Horizontal, 0.0));
    }

    #[test]
    fn test_saturation_in_both_directions() {
        let mut joystick = joystick();
        joystick.press(1, Point { x: 100, y: 300 });

        // Origin minus radius saturates at +1, origin plus radius at -1.
        joystick.motion(1, Point { x: 100, y: 150 });
        joystick.motion(1, Point { x: 100, y: 450 });
        assert_eq!(
            changes(&joystick),
            &[(Axis::Vertical, 1.0), (Axis::Vertical, -1.0)]
        );
    }

    #[test]
    fn test_clamped_force_not_renotified() {
        let mut joystick = joystick();
        joystick.press(1, Point { x: 100, y: 300 });

        joystick.motion(1, Point { x: 100, y: 150 });
        // Still saturated: the coordinate changed but the force did not.
        joystick.motion(1, Point { x: 100, y: 100 });
        assert_eq!(changes(&joystick), &[(Axis::Vertical, 1.0)]);
    }

    #[test]
    fn test_press_outside_zones_ignored() {
        let mut joystick = joystick();
        joystick.press(1, Point { x: 400, y: 300 }); // boundary column
        joystick.press(2, Point { x: 10, y: 10 }); // inside the inset margin
        assert_eq!(joystick.contact_count(), 0);
        assert!(changes(&joystick).is_empty());
    }

    #[test]
    fn test_second_press_in_armed_zone_ignored() {
        let mut joystick = joystick();
        joystick.press(1, Point { x: 100, y: 300 });
        joystick.press(2, Point { x: 110, y: 310 });

        assert_eq!(joystick.contact_count(), 1);
        // The zone stays owned by the first contact.
        joystick.motion(2, Point { x: 110, y: 100 });
        assert!(changes(&joystick).is_empty());
        joystick.release(2);
        assert!(joystick.is_armed(Axis::Vertical));
        assert!(changes(&joystick).is_empty());
    }

    #[test]
    fn test_third_contact_ignored() {
        let mut joystick = joystick();
        joystick.press(1, Point { x: 100, y: 300 });
        joystick.press(2, Point { x: 600, y: 300 });
        joystick.press(3, Point { x: 200, y: 200 });

        assert_eq!(joystick.contact_count(), 2);
        joystick.motion(3, Point { x: 200, y: 100 });
        assert!(changes(&joystick).is_empty());
    }

    #[test]
    fn test_release_unknown_contact_is_noop() {
        let mut joystick = joystick();
        joystick.press(1, Point { x: 100, y: 300 });
        joystick.release(7);
        assert!(joystick.is_armed(Axis::Vertical));
        assert!(changes(&joystick).is_empty());
    }

    #[test]
    fn test_release_fires_zero_without_prior_motion() {
        let mut joystick = joystick();
        joystick.press(1, Point { x: 100, y: 300 });
        joystick.release(1);
        assert_eq!(changes(&joystick), &[(Axis::Vertical, 0.0)]);
    }

    #[test]
    fn test_dispatch_decodes_event_families() {
        let mut joystick = joystick();

        assert!(joystick.dispatch(&PointerEvent::Down { contact: Contact::new(1, 100, 300) }));
        assert!(joystick.dispatch(&PointerEvent::Down { contact: Contact::new(2, 600, 300) }));

        // One move event flushes every live contact.
        assert!(joystick.dispatch(&PointerEvent::Move {
            contacts: vec![Contact::new(1, 100, 225), Contact::new(2, 675, 300)],
        }));
        assert_eq!(
            changes(&joystick),
            &[(Axis::Vertical, 0.5), (Axis::Horizontal, 0.5)]
        );

        // Cancel is handled exactly like a release.
        assert!(joystick.dispatch(&PointerEvent::Cancel { id: 1 }));
        assert_eq!(changes(&joystick)[2], (Axis::Vertical, 0.0));
        assert!(joystick.dispatch(&PointerEvent::Up { id: 2 }));
        assert_eq!(changes(&joystick)[3], (Axis::Horizontal, 0.0));
    }

    #[test]
    fn test_dispatch_reports_unhandled_kinds() {
        let mut joystick = joystick();
        assert!(!joystick.dispatch(&PointerEvent::Frame));
        assert!(!joystick.dispatch(&PointerEvent::Hover { position: Point { x: 100, y: 300 } }));
        assert!(changes(&joystick).is_empty());
    }

    #[test]
    fn test_press_before_metrics_ignored() {
        let mut joystick = SplitJoystick::new(RecordingListener::default());
        joystick.press(1, Point { x: 100, y: 300 });
        assert_eq!(joystick.contact_count(), 0);
    }

    #[test]
    fn test_reconfigure_carries_armed_zone_over() {
        let mut joystick = joystick();
        joystick.press(1, Point { x: 100, y: 300 });

        // New geometry under the armed zone: radius becomes 250.
        joystick.set_metrics(1000, 1000).unwrap();
        assert!(joystick.is_armed(Axis::Vertical));

        joystick.motion(1, Point { x: 100, y: 175 });
        let (axis, force) = changes(&joystick)[0];
        assert_eq!(axis, Axis::Vertical);
        assert!((force - 0.5).abs() < 1e-3);
    }

    #[test]
    fn test_invalid_metrics_keep_previous_geometry() {
        let mut joystick = joystick();
        assert!(joystick.set_metrics(0, 600).is_err());
        assert_eq!(joystick.geometry().unwrap().radius, 150);
    }

    #[test]
    fn test_reset_reports_zero_for_armed_zones() {
        let mut joystick = joystick();
        joystick.press(1, Point { x: 100, y: 300 });
        joystick.press(2, Point { x: 600, y: 300 });
        joystick.motion(1, Point { x: 100, y: 200 });

        joystick.reset();
        assert_eq!(joystick.contact_count(), 0);
        let recorded = changes(&joystick);
        assert_eq!(recorded[recorded.len() - 2..], [(Axis::Vertical, 0.0), (Axis::Horizontal, 0.0)]);

        // Idle tracker: reset stays silent.
        let before = changes(&joystick).len();
        joystick.reset();
        assert_eq!(changes(&joystick).len(), before);
    }
}
