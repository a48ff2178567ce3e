use super::Point2;

/// Returns the Euclidean length of the vector `(x, y)`.
#[must_use]
pub fn distance(x: f64, y: f64) -> f64 {
    (x * x + y * y).sqrt()
}

/// Returns the distance between two points.
#[must_use]
pub fn point_distance(a: &Point2, b: &Point2) -> f64 {
    distance(b.x - a.x, b.y - a.y)
}
