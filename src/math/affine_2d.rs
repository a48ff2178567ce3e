use super::{Matrix3, Point2, Vector2};

/// A 2D affine map stored as a homogeneous 3x3 matrix.
///
/// Maps are composed with the `then_*` builders, each of which applies its
/// operation *after* everything already in the map:
///
/// ```
/// use pattern_motion::math::{AffineMap, Point2};
///
/// // Scale by 2, then rotate 90 degrees, then move right by 10.
/// let map = AffineMap::scaling(2.0, 2.0)
///     .then_rotate_degrees(90.0)
///     .then_translate(10.0, 0.0);
///
/// let p = map.apply_point(&Point2::new(1.0, 0.0));
/// assert!((p.x - 10.0).abs() < 1e-12);
/// assert!((p.y - 2.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AffineMap {
    matrix: Matrix3,
}

impl AffineMap {
    /// Creates the identity map.
    #[must_use]
    pub fn identity() -> Self {
        Self {
            matrix: Matrix3::identity(),
        }
    }

    /// Creates a translation by `(dx, dy)`.
    #[must_use]
    pub fn translation(dx: f64, dy: f64) -> Self {
        Self {
            matrix: Matrix3::new_translation(&Vector2::new(dx, dy)),
        }
    }

    /// Creates a scaling about the origin.
    #[must_use]
    pub fn scaling(sx: f64, sy: f64) -> Self {
        Self {
            matrix: Matrix3::new_nonuniform_scaling(&Vector2::new(sx, sy)),
        }
    }

    /// Creates a counter-clockwise rotation about the origin.
    ///
    /// * `degrees` - Rotation angle in degrees.
    #[must_use]
    pub fn rotation_degrees(degrees: f64) -> Self {
        Self {
            matrix: Matrix3::new_rotation(degrees.to_radians()),
        }
    }

    /// Returns the map that applies `self` first and `next` second.
    #[must_use]
    pub fn then(self, next: Self) -> Self {
        Self {
            matrix: next.matrix * self.matrix,
        }
    }

    /// Appends a translation.
    #[must_use]
    pub fn then_translate(self, dx: f64, dy: f64) -> Self {
        self.then(Self::translation(dx, dy))
    }

    /// Appends a scaling about the origin.
    #[must_use]
    pub fn then_scale(self, sx: f64, sy: f64) -> Self {
        self.then(Self::scaling(sx, sy))
    }

    /// Appends a rotation about the origin, in degrees.
    #[must_use]
    pub fn then_rotate_degrees(self, degrees: f64) -> Self {
        self.then(Self::rotation_degrees(degrees))
    }

    /// Maps a point.
    #[must_use]
    pub fn apply_point(&self, point: &Point2) -> Point2 {
        self.matrix.transform_point(point)
    }
}

impl Default for AffineMap {
    fn default() -> Self {
        Self::identity()
    }
}
