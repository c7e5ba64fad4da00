use glam::{Mat4, Vec3};

/// Wheel deltaY is divided by this before being applied as a zoom step.
pub const ZOOM_DELTA_DIVISOR: f32 = 600.0;

/// Lower bound on a single zoom step; keeps one event from moving the
/// camera more than 20% of the way to the origin (no bound on zooming out).
pub const ZOOM_STEP_FLOOR: f32 = -0.2;

/// Camera/orientation state shared with the render loop.
///
/// `model_matrix` is the object orientation (rotation-only), `view_matrix`
/// the camera transform derived from `view_pos` looking at the origin.
/// Only the gesture controller writes these; the render loop reads them and
/// consumes `needs_redraw` once per frame via [`ViewState::take_redraw`].
pub struct ViewState {
    pub model_matrix: Mat4,
    pub view_matrix: Mat4,
    pub view_pos: Vec3,
    pub needs_redraw: bool,
}

impl ViewState {
    pub fn new(view_pos: Vec3) -> Self {
        Self {
            model_matrix: Mat4::IDENTITY,
            view_matrix: Mat4::look_at_rh(view_pos, Vec3::ZERO, Vec3::Y),
            view_pos,
            needs_redraw: false,
        }
    }

    /// Move the camera towards or away from the origin. `delta_y` follows
    /// wheel conventions: positive zooms out, negative zooms in. Called both
    /// by the wheel handler and by the per-frame pinch logic with a
    /// synthetic delta.
    pub fn zoom_by(&mut self, delta_y: f32) {
        let amount = (delta_y / ZOOM_DELTA_DIVISOR).max(ZOOM_STEP_FLOOR);
        self.view_pos *= 1.0 + amount;
        self.view_matrix = Mat4::look_at_rh(self.view_pos, Vec3::ZERO, Vec3::Y);
        self.needs_redraw = true;
    }

    /// Read and clear the redraw flag. The render loop calls this once per
    /// frame and redraws when it returns true.
    pub fn take_redraw(&mut self) -> bool {
        std::mem::take(&mut self.needs_redraw)
    }
}
