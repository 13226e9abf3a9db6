/// View state and the rotate/scale transforms
use nalgebra::{Point3, Rotation3, Vector3};

/// Exclusive bounds for interactive rotation, in degrees.
const YAW_MIN: f32 = 5.0;
const YAW_MAX: f32 = 85.0;
const PITCH_MIN: f32 = -60.0;
const PITCH_MAX: f32 = 60.0;

/// Zoom clamp window and the per-notch wheel factor.
const ZOOM_MIN: f32 = 0.5;
const ZOOM_MAX: f32 = 1.5;
const ZOOM_FACTOR: f32 = 1.1;

const INITIAL_YAW: f32 = 15.0;
const INITIAL_PITCH: f32 = 25.0;
const INITIAL_ZOOM: f32 = 1.0 / 1.28;

/// Orientation and zoom of the view.
///
/// Angles are stored in degrees. The bounds above are enforced by the
/// interactive operations, not by construction, so tests and hosts may build
/// arbitrary states directly.
#[derive(Debug, Clone, Copy)]
pub struct ViewState {
    /// Rotation about the vertical axis, degrees.
    pub yaw: f32,
    /// Rotation about the horizontal axis, degrees.
    pub pitch: f32,
    /// Uniform scale applied after rotation.
    pub zoom: f32,
}

impl ViewState {
    pub fn new() -> Self {
        Self {
            yaw: INITIAL_YAW,
            pitch: INITIAL_PITCH,
            zoom: INITIAL_ZOOM,
        }
    }

    /// Restore the initial orientation and zoom exactly.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Combined view rotation: yaw about the vertical axis, then pitch about
    /// the horizontal axis. The negated angles give the row forms
    /// xx = cos·x − sin·z, zz = sin·x + cos·z and yy = sin·zz + cos·y.
    pub fn rotation(&self) -> Rotation3<f32> {
        let yaw = Rotation3::from_axis_angle(&Vector3::y_axis(), -self.yaw.to_radians());
        let pitch = Rotation3::from_axis_angle(&Vector3::x_axis(), -self.pitch.to_radians());
        pitch * yaw
    }

    /// Rotate a point and keep the two view axes; depth is discarded.
    pub fn project(&self, point: &Point3<f32>) -> (f32, f32) {
        let q = self.rotation() * point;
        (q.x, q.y)
    }

    /// Apply the zoom factor to a projected coordinate pair.
    pub fn scale(&self, x: f32, y: f32) -> (f32, f32) {
        (x * self.zoom, y * self.zoom)
    }

    /// Apply drag deltas in degrees. Each axis moves independently and only
    /// while the result stays strictly inside its bounds.
    pub fn rotate_by(&mut self, dyaw: f32, dpitch: f32) {
        if self.yaw + dyaw > YAW_MIN && self.yaw + dyaw < YAW_MAX {
            self.yaw += dyaw;
        }
        if self.pitch + dpitch > PITCH_MIN && self.pitch + dpitch < PITCH_MAX {
            self.pitch += dpitch;
        }
    }

    /// One wheel notch in. The clamp check precedes the multiplication.
    pub fn zoom_in(&mut self) {
        if self.zoom < ZOOM_MAX {
            self.zoom *= ZOOM_FACTOR;
        }
    }

    /// One wheel notch out.
    pub fn zoom_out(&mut self) {
        if self.zoom > ZOOM_MIN {
            self.zoom /= ZOOM_FACTOR;
        }
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_projection() {
        let view = ViewState {
            yaw: 0.0,
            pitch: 0.0,
            zoom: 1.0,
        };
        let (x, y) = view.project(&Point3::new(0.3, -0.7, 0.9));
        assert!((x - 0.3).abs() < 1e-6);
        assert!((y + 0.7).abs() < 1e-6);
    }

    #[test]
    fn test_quarter_yaw_maps_depth_to_x() {
        let view = ViewState {
            yaw: 90.0,
            pitch: 0.0,
            zoom: 1.0,
        };
        // xx = -z, independent of x
        for x in [-0.8, 0.0, 0.3] {
            let (xx, _) = view.project(&Point3::new(x, 0.5, 0.4));
            assert!((xx + 0.4).abs() < 1e-5);
        }
    }

    #[test]
    fn test_quarter_pitch_maps_depth_to_y() {
        let view = ViewState {
            yaw: 0.0,
            pitch: 90.0,
            zoom: 1.0,
        };
        let (x, y) = view.project(&Point3::new(0.2, 0.7, 0.4));
        assert!((x - 0.2).abs() < 1e-5);
        assert!((y - 0.4).abs() < 1e-5);
    }

    #[test]
    fn test_scale_applies_zoom() {
        let view = ViewState {
            yaw: 0.0,
            pitch: 0.0,
            zoom: 1.25,
        };
        let (x, y) = view.scale(0.4, -0.8);
        assert!((x - 0.5).abs() < 1e-6);
        assert!((y + 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_rotation_stays_inside_bounds() {
        let mut view = ViewState::new();

        // A single oversized delta is rejected outright
        view.rotate_by(200.0, 0.0);
        assert_eq!(view.yaw, 15.0);
        view.rotate_by(0.0, -200.0);
        assert_eq!(view.pitch, 25.0);

        // Repeated drags approach the bounds without ever reaching them
        for _ in 0..100 {
            view.rotate_by(7.0, 8.0);
        }
        assert!(view.yaw > 5.0 && view.yaw < 85.0);
        assert!(view.pitch > -60.0 && view.pitch < 60.0);
        for _ in 0..100 {
            view.rotate_by(-7.0, -8.0);
        }
        assert!(view.yaw > 5.0 && view.yaw < 85.0);
        assert!(view.pitch > -60.0 && view.pitch < 60.0);
    }

    #[test]
    fn test_axes_clamp_independently() {
        let mut view = ViewState::new();
        // Yaw delta overshoots, pitch delta is fine: only pitch moves
        view.rotate_by(100.0, 10.0);
        assert_eq!(view.yaw, 15.0);
        assert!((view.pitch - 35.0).abs() < 1e-6);
    }

    #[test]
    fn test_zoom_window() {
        let mut view = ViewState::new();
        for _ in 0..100 {
            view.zoom_in();
        }
        // The check precedes the multiplication, so the last step may
        // overshoot by at most one factor
        assert!(view.zoom <= ZOOM_MAX * ZOOM_FACTOR);
        let ceiling = view.zoom;
        view.zoom_in();
        assert_eq!(view.zoom, ceiling);

        for _ in 0..100 {
            view.zoom_out();
        }
        assert!(view.zoom >= ZOOM_MIN / ZOOM_FACTOR);
        let floor = view.zoom;
        view.zoom_out();
        assert_eq!(view.zoom, floor);
    }

    #[test]
    fn test_reset_is_exact() {
        let mut view = ViewState::new();
        for _ in 0..17 {
            view.rotate_by(3.0, -2.0);
            view.zoom_in();
        }
        view.zoom_out();
        view.reset();
        assert_eq!(view.yaw, 15.0);
        assert_eq!(view.pitch, 25.0);
        assert_eq!(view.zoom, 1.0 / 1.28);
    }
}
