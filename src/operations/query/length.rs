use crate::geometry::Path;
use crate::tessellation::TessellationParams;

use super::ContourMeasure;

/// Computes the arc length of a path.
///
/// Only the first contour of non-zero length is measured, as with a path
/// measure that is not force-closed.
pub struct Length<'a> {
    path: &'a Path,
    params: TessellationParams,
}

impl<'a> Length<'a> {
    /// Creates a new `Length` query with default flattening parameters.
    #[must_use]
    pub fn new(path: &'a Path) -> Self {
        Self {
            path,
            params: TessellationParams::default(),
        }
    }

    /// Overrides the flattening parameters used for curved segments.
    #[must_use]
    pub fn with_params(mut self, params: TessellationParams) -> Self {
        self.params = params;
        self
    }

    /// Executes the query, returning the length (`0.0` for an empty path).
    #[must_use]
    pub fn execute(&self) -> f64 {
        ContourMeasure::first_of(self.path, self.params).map_or(0.0, |m| m.length())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Point2;

    #[test]
    fn line_length_3_4_5() {
        let path = Path::line(Point2::new(0.0, 0.0), Point2::new(3.0, 4.0));
        let len = Length::new(&path).execute();
        assert!((len - 5.0).abs() < 1e-10);
    }

    #[test]
    fn only_first_contour_counts() {
        let mut path = Path::line(Point2::new(0.0, 0.0), Point2::new(1.0, 0.0));
        path.move_to(Point2::new(10.0, 0.0))
            .line_to(Point2::new(20.0, 0.0));
        let len = Length::new(&path).execute();
        assert!((len - 1.0).abs() < 1e-10);
    }

    #[test]
    fn empty_path_has_zero_length() {
        assert!(Length::new(&Path::new()).execute().abs() < f64::EPSILON);
    }

    #[test]
    fn coarse_params_shorten_curves() {
        let mut path = Path::new();
        path.move_to(Point2::new(0.0, 0.0))
            .quad_to(Point2::new(1.0, 2.0), Point2::new(2.0, 0.0));
        let coarse = TessellationParams {
            tolerance: 10.0,
            min_segments: 1,
            max_segments: 1,
        };
        let chord = Length::new(&path).with_params(coarse).execute();
        let fine = Length::new(&path).execute();
        assert!((chord - 2.0).abs() < 1e-10);
        assert!(fine > chord);
    }
}
