use crate::geometry::Path;
use crate::math::{AffineMap, Point2};
use crate::operations::query::{Length, PointOnCurve};
use crate::operations::transform::GeneralTransform;

/// The curve capabilities pattern motion relies on.
///
/// Any curve type that can be measured along its arc length and mapped through
/// an affine transform can serve as a motion pattern.
pub trait MotionCurve: Clone {
    /// Returns the straight segment from `(0, 0)` to `(1, 0)`.
    fn unit_segment() -> Self;

    /// Returns the total arc length.
    fn arc_length(&self) -> f64;

    /// Returns the position at `distance` along the curve, or `None` if the
    /// curve has nothing to measure.
    fn position_at(&self, distance: f64) -> Option<Point2>;

    /// Returns a new curve with every point mapped through `map`.
    #[must_use]
    fn transformed(&self, map: &AffineMap) -> Self;
}

impl MotionCurve for Path {
    fn unit_segment() -> Self {
        Path::line(Point2::origin(), Point2::new(1.0, 0.0))
    }

    fn arc_length(&self) -> f64 {
        Length::new(self).execute()
    }

    fn position_at(&self, distance: f64) -> Option<Point2> {
        PointOnCurve::new(self, distance)
            .execute()
            .map(|(pos, _)| pos)
    }

    fn transformed(&self, map: &AffineMap) -> Self {
        GeneralTransform::new(self, *map).execute()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_segment_spans_origin_to_x_axis() {
        let unit = Path::unit_segment();
        assert!((unit.arc_length() - 1.0).abs() < 1e-12);
        assert_eq!(unit.position_at(0.0), Some(Point2::origin()));
        assert_eq!(unit.position_at(1.0), Some(Point2::new(1.0, 0.0)));
    }

    #[test]
    fn empty_path_has_no_positions() {
        assert!(Path::new().position_at(0.0).is_none());
    }
}
