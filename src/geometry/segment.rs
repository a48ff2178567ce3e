use crate::math::bezier_2d::{
    cubic_point_at, cubic_subdivision_count, quad_point_at, quad_subdivision_count,
};
use crate::math::{AffineMap, Point2};

/// A single drawing segment of a contour.
///
/// Every variant stores its own start point so segments can be evaluated,
/// flattened and transformed without looking at their neighbours.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Segment {
    /// Straight line.
    Line { from: Point2, to: Point2 },
    /// Quadratic Bézier with one control point.
    Quad {
        from: Point2,
        ctrl: Point2,
        to: Point2,
    },
    /// Cubic Bézier with two control points.
    Cubic {
        from: Point2,
        ctrl1: Point2,
        ctrl2: Point2,
        to: Point2,
    },
}

impl Segment {
    /// Returns the start point.
    #[must_use]
    pub fn from(&self) -> Point2 {
        match *self {
            Self::Line { from, .. } | Self::Quad { from, .. } | Self::Cubic { from, .. } => from,
        }
    }

    /// Returns the end point.
    #[must_use]
    pub fn to(&self) -> Point2 {
        match *self {
            Self::Line { to, .. } | Self::Quad { to, .. } | Self::Cubic { to, .. } => to,
        }
    }

    /// Evaluates the segment at parameter `t` in `[0, 1]`.
    #[must_use]
    pub fn evaluate(&self, t: f64) -> Point2 {
        match self {
            Self::Line { from, to } => from + (to - from) * t,
            Self::Quad { from, ctrl, to } => quad_point_at(from, ctrl, to, t),
            Self::Cubic {
                from,
                ctrl1,
                ctrl2,
                to,
            } => cubic_point_at(from, ctrl1, ctrl2, to, t),
        }
    }

    /// Returns how many line segments approximate this segment within `tolerance`.
    ///
    /// Lines always need exactly one.
    #[must_use]
    pub fn subdivision_count(&self, tolerance: f64) -> usize {
        match self {
            Self::Line { .. } => 1,
            Self::Quad { from, ctrl, to } => quad_subdivision_count(from, ctrl, to, tolerance),
            Self::Cubic {
                from,
                ctrl1,
                ctrl2,
                to,
            } => cubic_subdivision_count(from, ctrl1, ctrl2, to, tolerance),
        }
    }

    /// Returns whether this segment is a straight line.
    #[must_use]
    pub fn is_line(&self) -> bool {
        matches!(self, Self::Line { .. })
    }

    /// Returns the segment with every point mapped through `map`.
    #[must_use]
    pub fn transformed(&self, map: &AffineMap) -> Self {
        match self {
            Self::Line { from, to } => Self::Line {
                from: map.apply_point(from),
                to: map.apply_point(to),
            },
            Self::Quad { from, ctrl, to } => Self::Quad {
                from: map.apply_point(from),
                ctrl: map.apply_point(ctrl),
                to: map.apply_point(to),
            },
            Self::Cubic {
                from,
                ctrl1,
                ctrl2,
                to,
            } => Self::Cubic {
                from: map.apply_point(from),
                ctrl1: map.apply_point(ctrl1),
                ctrl2: map.apply_point(ctrl2),
                to: map.apply_point(to),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    #[test]
    fn line_evaluates_linearly() {
        let seg = Segment::Line {
            from: p(0.0, 0.0),
            to: p(4.0, 2.0),
        };
        let mid = seg.evaluate(0.5);
        assert!((mid - p(2.0, 1.0)).norm() < 1e-12);
        assert_eq!(seg.subdivision_count(1e-6), 1);
        assert!(seg.is_line());
    }

    #[test]
    fn endpoints_of_each_variant() {
        let quad = Segment::Quad {
            from: p(0.0, 0.0),
            ctrl: p(1.0, 1.0),
            to: p(2.0, 0.0),
        };
        let cubic = Segment::Cubic {
            from: p(1.0, 1.0),
            ctrl1: p(2.0, 2.0),
            ctrl2: p(3.0, 2.0),
            to: p(4.0, 1.0),
        };
        assert_eq!(quad.from(), p(0.0, 0.0));
        assert_eq!(quad.to(), p(2.0, 0.0));
        assert_eq!(cubic.from(), p(1.0, 1.0));
        assert_eq!(cubic.to(), p(4.0, 1.0));
        assert!(!cubic.is_line());
    }

    #[test]
    fn transform_maps_control_points() {
        let seg = Segment::Quad {
            from: p(0.0, 0.0),
            ctrl: p(1.0, 1.0),
            to: p(2.0, 0.0),
        };
        let moved = seg.transformed(&AffineMap::translation(10.0, -1.0));
        let Segment::Quad { from, ctrl, to } = moved else {
            panic!("variant changed: {moved:?}");
        };
        assert!((from - p(10.0, -1.0)).norm() < 1e-12);
        assert!((ctrl - p(11.0, 0.0)).norm() < 1e-12);
        assert!((to - p(12.0, -1.0)).norm() < 1e-12);
    }

}
