use std::collections::HashMap;

use glam::Vec3;

use crate::math;

/// Tracks the set of active pointers and the aggregate signals derived from
/// them each frame: centroid (pan), spread (pinch) and end-to-end vector
/// (twist). Each signal keeps a current and a last-frame value; the last
/// values are only overwritten by [`GestureTracker::commit_frame`] at the
/// end of a processed frame.
pub struct GestureTracker {
    positions: HashMap<i32, Vec3>,
    active: Vec<i32>,

    pub centroid: Vec3,
    pub spread: f32,
    pub end_to_end: Vec3,

    pub last_centroid: Vec3,
    pub last_spread: f32,
    pub last_end_to_end: Vec3,

    /// Set whenever the pointer count changes; the next frame update skips
    /// matrix mutation so the discontinuity in the aggregates does not show
    /// up as a jump in the view.
    pub skip_frame: bool,
}

impl GestureTracker {
    pub fn new() -> Self {
        Self {
            positions: HashMap::new(),
            active: Vec::new(),
            centroid: Vec3::ZERO,
            spread: 0.0,
            end_to_end: Vec3::ZERO,
            last_centroid: Vec3::ZERO,
            last_spread: 0.0,
            last_end_to_end: Vec3::ZERO,
            skip_frame: false,
        }
    }

    /// Register a pointer and recompute the aggregates immediately so the
    /// new centroid is available without waiting for the next frame tick.
    pub fn add_pointer(&mut self, id: i32, position: Vec3) {
        self.positions.insert(id, position);
        if !self.active.contains(&id) {
            self.active.push(id);
        }
        self.recompute_aggregates();
        self.skip_frame = true;
    }

    /// Overwrite a tracked pointer's position. Ignored for ids that are not
    /// active (the initiating pointer-down was gated out). Deliberately does
    /// not recompute aggregates; that happens once per frame.
    pub fn update_pointer(&mut self, id: i32, position: Vec3) {
        if self.active.contains(&id) {
            self.positions.insert(id, position);
        }
    }

    /// Drop a pointer. Idempotent for ids that were never tracked.
    pub fn remove_pointer(&mut self, id: i32) {
        self.active.retain(|&p| p != id);
        self.positions.remove(&id);
        self.skip_frame = true;
    }

    /// Recompute centroid, spread and normalized end-to-end vector from the
    /// current positions, in pointer registration order.
    pub fn recompute_aggregates(&mut self) {
        let points: Vec<Vec3> = self
            .active
            .iter()
            .filter_map(|id| self.positions.get(id).copied())
            .collect();

        self.centroid = math::mean(&points);
        self.spread = math::spread(&points, self.centroid);
        self.end_to_end = math::end_to_end(&points).normalize_or_zero();
    }

    /// Roll the current aggregates into the last-frame slots and clear the
    /// skip flag, preparing for the next frame.
    pub fn commit_frame(&mut self) {
        self.last_centroid = self.centroid;
        self.last_spread = self.spread;
        self.last_end_to_end = self.end_to_end;
        self.skip_frame = false;
    }

    pub fn active_count(&self) -> usize {
        self.active.len()
    }

    pub fn is_idle(&self) -> bool {
        self.active.is_empty()
    }

    pub fn is_active(&self, id: i32) -> bool {
        self.active.contains(&id)
    }

    pub fn position_of(&self, id: i32) -> Option<Vec3> {
        self.positions.get(&id).copied()
    }
}

impl Default for GestureTracker {
    fn default() -> Self {
        Self::new()
    }
}
