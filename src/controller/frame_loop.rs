use std::cell::RefCell;
use std::rc::Rc;

use glam::Vec3;
use tracing::debug;

use crate::controller::camera_controller::CameraController;
use crate::controller::gesture::GestureTracker;
use crate::controller::hit_test::{AlphaSampler, Viewport};
use crate::controller::input::{Disposition, GestureEvent, TargetKind};
use crate::model::ViewState;

/// The gesture system: routes input events into the tracker (with UI
/// gating) and converts the tracked gesture into camera transforms once per
/// rendered frame.
///
/// The view state is shared with the render loop, which reads the matrices
/// and consumes the redraw flag after each [`GestureSystem::update`].
pub struct GestureSystem {
    pub tracker: GestureTracker,
    pub camera_controller: CameraController,
    pub view: Rc<RefCell<ViewState>>,
    viewport: Viewport,
}

impl GestureSystem {
    pub fn new(view: Rc<RefCell<ViewState>>, viewport: Viewport) -> Self {
        Self {
            tracker: GestureTracker::new(),
            camera_controller: CameraController::new(),
            view,
            viewport,
        }
    }

    /// Called by the render loop on resize or device-pixel-ratio change.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    /// The viewport currently used for hit-testing.
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Feed one input event through the gating policy and into the tracker.
    /// The returned [`Disposition`] tells the platform layer whether to
    /// suppress the event's default behavior.
    pub fn process_event(&mut self, event: &GestureEvent, sampler: &dyn AlphaSampler) -> Disposition {
        match *event {
            GestureEvent::PointerDown { id, page, client, target } => {
                // taps on UI stay with the UI unless the user is already
                // dragging or the tap lands on rendered geometry
                if target.is_ui()
                    && !self.viewport.over_geometry(sampler, client)
                    && self.tracker.is_idle()
                {
                    return Disposition::PassThrough;
                }

                self.tracker.add_pointer(id, Vec3::new(page.x, -page.y, 0.0));
                debug!(id, pointers = self.tracker.active_count(), "pointer engaged");
                Disposition::Consume
            }

            GestureEvent::PointerMove { id, page } => {
                self.tracker.update_pointer(id, Vec3::new(page.x, -page.y, 0.0));
                Disposition::PassThrough
            }

            GestureEvent::PointerUp { id } => {
                self.tracker.remove_pointer(id);
                debug!(id, pointers = self.tracker.active_count(), "pointer released");
                Disposition::PassThrough
            }

            GestureEvent::Wheel { delta_y, client, target } => {
                // inside the scrollable UI the wheel only zooms when the
                // cursor sits over geometry; everywhere else it always zooms
                if target == TargetKind::ScrollableUi
                    && !self.viewport.over_geometry(sampler, client)
                {
                    return Disposition::PassThrough;
                }

                self.view.borrow_mut().zoom_by(delta_y);
                Disposition::Consume
            }

            GestureEvent::TouchStart { client, target } => {
                // mirror of the pointer-down gate; suppressing touch-start
                // keeps the browser from scrolling mid-gesture
                if target.is_ui()
                    && !self.viewport.over_geometry(sampler, client)
                    && self.tracker.is_idle()
                {
                    return Disposition::PassThrough;
                }
                Disposition::Consume
            }
        }
    }

    /// Per-frame tick. Recomputes the aggregate signals and applies one
    /// frame of transform deltas, except on the first frame after the
    /// pointer count changed (the skip frame absorbs the discontinuity).
    pub fn update(&mut self) {
        if self.tracker.is_idle() {
            return;
        }

        self.tracker.recompute_aggregates();

        if !self.tracker.skip_frame {
            let mut view = self.view.borrow_mut();
            self.camera_controller.apply_gesture(&self.tracker, &mut view);
        }

        self.tracker.commit_frame();
    }
}
