use crate::geometry::{Contour, Path};
use crate::math::distance_2d::point_distance;
use crate::math::{Point2, Vector2};
use crate::tessellation::{TessellateContour, TessellationParams};

/// Arc-length measurement of a single contour.
///
/// The contour is flattened once; lengths and positions are then read off the
/// polyline. Positions at distance `0` and at the full length are the exact
/// contour start and end points.
#[derive(Debug, Clone)]
pub struct ContourMeasure {
    points: Vec<Point2>,
    /// `distances[i]` is the arc length from the start to `points[i]`.
    distances: Vec<f64>,
}

impl ContourMeasure {
    /// Measures `contour`, flattening curves with `params`.
    #[must_use]
    pub fn new(contour: &Contour, params: TessellationParams) -> Self {
        let points = TessellateContour::new(contour, params).execute().points;
        let mut distances = Vec::with_capacity(points.len());
        let mut total = 0.0;
        distances.push(total);
        for pair in points.windows(2) {
            total += point_distance(&pair[0], &pair[1]);
            distances.push(total);
        }
        Self { points, distances }
    }

    /// Measures the first contour of `path` with a non-zero length.
    ///
    /// Zero-length contours, such as a lone move-to, are skipped. Returns `None`
    /// if the path has no measurable contour.
    #[must_use]
    pub fn first_of(path: &Path, params: TessellationParams) -> Option<Self> {
        path.contours()
            .iter()
            .map(|c| Self::new(c, params))
            .find(|m| m.length() > 0.0)
    }

    /// Returns the total arc length.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.distances.last().copied().unwrap_or(0.0)
    }

    /// Returns the position and unit tangent at `distance` along the contour.
    ///
    /// `distance` is clamped to `[0, length]`. The tangent is zero only when the
    /// contour itself has zero length.
    #[must_use]
    pub fn pos_tan(&self, distance: f64) -> (Point2, Vector2) {
        let Some(&first) = self.points.first() else {
            return (Point2::origin(), Vector2::zeros());
        };
        let distance = distance.max(0.0).min(self.length());
        let idx = self.distances.partition_point(|&d| d < distance);

        if idx == 0 {
            return (first, self.tangent_from(0));
        }
        let (p0, p1) = (self.points[idx - 1], self.points[idx]);
        let (d0, d1) = (self.distances[idx - 1], self.distances[idx]);
        let tangent = (p1 - p0).normalize();
        if distance >= d1 {
            return (p1, tangent);
        }
        let t = (distance - d0) / (d1 - d0);
        (p0 + (p1 - p0) * t, tangent)
    }

    /// Unit direction of the first non-degenerate polyline leg at or after `index`.
    fn tangent_from(&self, index: usize) -> Vector2 {
        self.points[index..]
            .windows(2)
            .map(|pair| pair[1] - pair[0])
            .find(|v| v.norm() > 0.0)
            .map_or_else(Vector2::zeros, |v| v.normalize())
    }
}
