use glam::Vec3;

/// Arithmetic mean of a set of pointer positions. Empty input yields the
/// zero vector rather than NaN so downstream deltas stay well-defined.
pub fn mean(points: &[Vec3]) -> Vec3 {
    if points.is_empty() {
        return Vec3::ZERO;
    }
    points.iter().sum::<Vec3>() / points.len() as f32
}

/// Sum of planar (x, y) distances of each point from `mean`. The z component
/// carries no pointer information and is ignored. Proxy for pinch distance.
pub fn spread(points: &[Vec3], mean: Vec3) -> f32 {
    points
        .iter()
        .map(|p| ((p.x - mean.x).powi(2) + (p.y - mean.y).powi(2)).sqrt())
        .sum()
}

/// Sum of consecutive differences between ordered pointer positions.
/// Callers normalize the result; a single point (or none) yields zero.
pub fn end_to_end(points: &[Vec3]) -> Vec3 {
    points
        .windows(2)
        .fold(Vec3::ZERO, |acc, pair| acc + (pair[1] - pair[0]))
}
