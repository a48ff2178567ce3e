use crate::geometry::Path;
use crate::math::AffineMap;

/// Applies an affine map to every contour of a path.
pub struct GeneralTransform<'a> {
    path: &'a Path,
    map: AffineMap,
}

impl<'a> GeneralTransform<'a> {
    /// Creates a new `GeneralTransform` operation.
    #[must_use]
    pub fn new(path: &'a Path, map: AffineMap) -> Self {
        Self { path, map }
    }

    /// Executes the transformation, returning a new path.
    ///
    /// Start points, control points and end points are all mapped. Bézier
    /// segments are closed under affine maps, so the result is exact; the
    /// source path is left untouched.
    #[must_use]
    pub fn execute(&self) -> Path {
        Path::from_contours(
            self.path
                .contours()
                .iter()
                .map(|c| c.transformed(&self.map))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Segment;
    use crate::math::Point2;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    #[test]
    fn rotate_90_around_origin() {
        let mut path = Path::new();
        path.move_to(p(1.0, 0.0))
            .line_to(p(2.0, 0.0))
            .cubic_to(p(2.0, 1.0), p(1.0, 1.0), p(1.0, 2.0));

        let quarter_turn = AffineMap::rotation_degrees(90.0);
        let rotated = GeneralTransform::new(&path, quarter_turn).execute();
        let contour = &rotated.contours()[0];
        assert!((contour.start() - p(0.0, 1.0)).norm() < 1e-12);

        let Segment::Cubic { ctrl1, to, .. } = contour.segments()[1] else {
            panic!("expected cubic, got {:?}", contour.segments()[1]);
        };
        assert!((ctrl1 - p(-1.0, 2.0)).norm() < 1e-12);
        assert!((to - p(-2.0, 1.0)).norm() < 1e-12);
    }

    #[test]
    fn source_path_is_unchanged() {
        let path = Path::line(p(0.0, 0.0), p(1.0, 0.0));
        let before = path.clone();
        let shift = AffineMap::translation(5.0, 5.0);
        let _moved = GeneralTransform::new(&path, shift).execute();
        assert_eq!(path, before);
    }

    #[test]
    fn every_contour_is_mapped() {
        let mut path = Path::line(p(0.0, 0.0), p(1.0, 0.0));
        path.move_to(p(4.0, 4.0));
        let double = AffineMap::scaling(2.0, 2.0);
        let scaled = GeneralTransform::new(&path, double).execute();
        assert_eq!(scaled.contours().len(), 2);
        assert!((scaled.contours()[1].start() - p(8.0, 8.0)).norm() < 1e-12);
    }
}
