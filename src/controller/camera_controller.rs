use glam::{Mat4, Vec3};

use crate::controller::gesture::GestureTracker;
use crate::model::ViewState;

/// Converts frame-over-frame changes in the tracker's aggregate signals
/// into rotation, zoom and twist applied to the shared matrices. The
/// sensitivity constants are tuned by feel; they set the "speed" of the
/// gesture-to-transform mapping.
pub struct CameraController {
    /// Divisor on the transformed rotation axis magnitude; drag distance in
    /// page pixels maps linearly to radians through this.
    pub rotate_sensitivity: f32,
    /// Multiplier turning a per-frame spread change into a synthetic wheel
    /// delta for the shared zoom path.
    pub pinch_sensitivity: f32,
    /// z scale applied when projecting the end-to-end rotation onto the
    /// screen axis.
    pub twist_scale: f32,
}

impl CameraController {
    pub fn new() -> Self {
        Self {
            rotate_sensitivity: 150.0,
            pinch_sensitivity: 2.4,
            twist_scale: 1.4,
        }
    }

    /// Apply one frame of gesture deltas to the matrices. Assumes the
    /// tracker's aggregates were recomputed this frame and the last-frame
    /// values are still from the previous one.
    pub fn apply_gesture(&self, tracker: &GestureTracker, view: &mut ViewState) {
        // the model matrix is rotation-only, so its transpose inverts it;
        // taken once up front, before this frame's rotations land
        let inv_model = view.model_matrix.transpose();

        // pan the pointers moved as a rotation about the screen-space axis
        // perpendicular to the drag
        let mean_move = tracker.centroid - tracker.last_centroid;
        let axis = inv_model.transform_vector3(Vec3::Z.cross(mean_move));
        if axis.length_squared() > f32::EPSILON {
            let angle = axis.length() / self.rotate_sensitivity;
            view.model_matrix *= Mat4::from_axis_angle(axis.normalize(), angle);
        }

        // pointers moving apart zoom in (negative synthetic delta)
        view.zoom_by((tracker.last_spread - tracker.spread) * self.pinch_sensitivity);

        // twist about the view axis, driven by the rotation of the
        // end-to-end vector between frames
        let spin = tracker
            .last_end_to_end
            .cross(tracker.end_to_end)
            .dot(Vec3::new(0.0, 0.0, self.twist_scale));
        let z_axis = inv_model.transform_vector3(Vec3::Z);
        if z_axis.length_squared() > f32::EPSILON {
            view.model_matrix *= Mat4::from_axis_angle(z_axis.normalize(), spin);
        }

        view.needs_redraw = true;
    }
}

impl Default for CameraController {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tracker_with(points: &[(i32, Vec3)]) -> GestureTracker {
        let mut tracker = GestureTracker::new();
        for &(id, pos) in points {
            tracker.add_pointer(id, pos);
        }
        tracker.commit_frame();
        tracker
    }

    #[test]
    fn test_drag_rotates_about_perpendicular_axis() {
        let controller = CameraController::new();
        let mut view = ViewState::new(Vec3::new(0.0, 0.0, 10.0));
        let mut tracker = tracker_with(&[(1, Vec3::ZERO)]);

        tracker.update_pointer(1, Vec3::new(15.0, 0.0, 0.0));
        tracker.recompute_aggregates();
        controller.apply_gesture(&tracker, &mut view);

        // Z x (15,0,0) = (0,15,0): a 15px drag right is a 0.1 rad yaw
        assert!(view.model_matrix.abs_diff_eq(Mat4::from_rotation_y(0.1), 1e-5));
        assert!(view.needs_redraw);
    }

    #[test]
    fn test_stationary_pointer_leaves_orientation_alone() {
        let controller = CameraController::new();
        let mut view = ViewState::new(Vec3::new(0.0, 0.0, 10.0));
        let mut tracker = tracker_with(&[(1, Vec3::new(3.0, -7.0, 0.0))]);

        tracker.recompute_aggregates();
        controller.apply_gesture(&tracker, &mut view);

        assert!(view.model_matrix.abs_diff_eq(Mat4::IDENTITY, 1e-6));
        assert_eq!(view.view_pos, Vec3::new(0.0, 0.0, 10.0));
        // redraw is still requested while a gesture is live
        assert!(view.needs_redraw);
    }

    #[test]
    fn test_pinch_apart_zooms_in() {
        let controller = CameraController::new();
        let mut view = ViewState::new(Vec3::new(0.0, 0.0, 10.0));
        let mut tracker = tracker_with(&[
            (1, Vec3::new(0.0, 0.0, 0.0)),
            (2, Vec3::new(10.0, 0.0, 0.0)),
        ]);

        // spread grows 10 -> 20: synthetic delta (10-20)*2.4 = -24
        tracker.update_pointer(2, Vec3::new(20.0, 0.0, 0.0));
        tracker.recompute_aggregates();
        controller.apply_gesture(&tracker, &mut view);

        assert!(view.view_pos.abs_diff_eq(Vec3::new(0.0, 0.0, 9.6), 1e-5));
    }

    #[test]
    fn test_two_finger_rotation_twists_about_z() {
        let controller = CameraController::new();
        let mut view = ViewState::new(Vec3::new(0.0, 0.0, 10.0));
        let mut tracker = tracker_with(&[
            (1, Vec3::new(-5.0, 0.0, 0.0)),
            (2, Vec3::new(5.0, 0.0, 0.0)),
        ]);

        // rotate both pointers 90 degrees about their fixed centroid; the
        // end-to-end vector swings (1,0,0) -> (0,1,0) with no pan or pinch
        tracker.update_pointer(1, Vec3::new(0.0, -5.0, 0.0));
        tracker.update_pointer(2, Vec3::new(0.0, 5.0, 0.0));
        tracker.recompute_aggregates();
        controller.apply_gesture(&tracker, &mut view);

        // spin = ((1,0,0) x (0,1,0)) . (0,0,1.4) = 1.4 rad
        assert!(view.model_matrix.abs_diff_eq(Mat4::from_rotation_z(1.4), 1e-5));
        assert!(view.view_pos.abs_diff_eq(Vec3::new(0.0, 0.0, 10.0), 1e-5));
    }
}
