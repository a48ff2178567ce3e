use crate::geometry::Path;
use crate::math::{Point2, Vector2};
use crate::tessellation::TessellationParams;

use super::ContourMeasure;

/// Evaluates the position and tangent at an arc-length distance along a path.
pub struct PointOnCurve<'a> {
    path: &'a Path,
    distance: f64,
    params: TessellationParams,
}

impl<'a> PointOnCurve<'a> {
    /// Creates a new `PointOnCurve` query.
    #[must_use]
    pub fn new(path: &'a Path, distance: f64) -> Self {
        Self {
            path,
            distance,
            params: TessellationParams::default(),
        }
    }

    /// Overrides the flattening parameters used for curved segments.
    #[must_use]
    pub fn with_params(mut self, params: TessellationParams) -> Self {
        self.params = params;
        self
    }

    /// Executes the query, returning `(position, unit tangent)`.
    ///
    /// The distance is clamped to the measured length. Returns `None` when the
    /// path has no contour of non-zero length.
    #[must_use]
    pub fn execute(&self) -> Option<(Point2, Vector2)> {
        ContourMeasure::first_of(self.path, self.params).map(|m| m.pos_tan(self.distance))
    }
}
