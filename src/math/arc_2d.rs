/// 2D elliptical-arc utilities.
///
/// Arcs arrive in SVG endpoint form (two end points, radii, x-axis rotation and
/// the two arc flags) and are converted to center form, then approximated with
/// cubic Béziers of at most a quarter turn each.
use std::f64::consts::{FRAC_PI_2, TAU};

use super::{Point2, Vector2, TOLERANCE};

/// An elliptical arc in center-angle form.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EllipticalArc {
    pub center: Point2,
    pub rx: f64,
    pub ry: f64,
    /// Rotation of the ellipse's x-axis, in radians.
    pub rotation: f64,
    /// Start angle in radians, measured on the unit circle before scaling.
    pub start_angle: f64,
    /// Signed sweep in radians; positive sweeps counter-clockwise in a y-up frame.
    pub sweep: f64,
}

impl EllipticalArc {
    /// Converts an SVG endpoint arc to center form.
    ///
    /// Returns `None` when the arc is degenerate: coincident end points, or a zero
    /// radius (which SVG renders as a straight line). Radii too small to span the
    /// end points are scaled up uniformly.
    #[must_use]
    #[allow(clippy::similar_names, clippy::fn_params_excessive_bools)]
    pub fn from_endpoints(
        from: &Point2,
        to: &Point2,
        rx: f64,
        ry: f64,
        x_axis_rotation_degrees: f64,
        large_arc: bool,
        sweep: bool,
    ) -> Option<Self> {
        if (to - from).norm() < TOLERANCE {
            return None;
        }
        let mut rx = rx.abs();
        let mut ry = ry.abs();
        if rx < TOLERANCE || ry < TOLERANCE {
            return None;
        }

        let rotation = x_axis_rotation_degrees.to_radians();
        let (sin_phi, cos_phi) = rotation.sin_cos();

        // Move the chord midpoint to the origin and undo the ellipse rotation.
        let half = (from - to) * 0.5;
        let x1p = cos_phi * half.x + sin_phi * half.y;
        let y1p = -sin_phi * half.x + cos_phi * half.y;

        let lambda = (x1p * x1p) / (rx * rx) + (y1p * y1p) / (ry * ry);
        if lambda > 1.0 {
            let s = lambda.sqrt();
            rx *= s;
            ry *= s;
        }

        let rx2 = rx * rx;
        let ry2 = ry * ry;
        let num = rx2 * ry2 - rx2 * y1p * y1p - ry2 * x1p * x1p;
        let den = rx2 * y1p * y1p + ry2 * x1p * x1p;
        let mut coef = if den > 0.0 {
            (num / den).max(0.0).sqrt()
        } else {
            0.0
        };
        if large_arc == sweep {
            coef = -coef;
        }
        let cxp = coef * rx * y1p / ry;
        let cyp = -coef * ry * x1p / rx;

        let mid = nalgebra::center(from, to);
        let center = Point2::new(
            cos_phi * cxp - sin_phi * cyp + mid.x,
            sin_phi * cxp + cos_phi * cyp + mid.y,
        );

        let u = Vector2::new((x1p - cxp) / rx, (y1p - cyp) / ry);
        let v = Vector2::new((-x1p - cxp) / rx, (-y1p - cyp) / ry);
        let start_angle = signed_angle(&Vector2::x(), &u);
        let mut delta = signed_angle(&u, &v);
        if !sweep && delta > 0.0 {
            delta -= TAU;
        } else if sweep && delta < 0.0 {
            delta += TAU;
        }

        Some(Self {
            center,
            rx,
            ry,
            rotation,
            start_angle,
            sweep: delta,
        })
    }

    /// Approximates the arc with cubic Béziers.
    ///
    /// Each element is `[control1, control2, end]`; the first curve starts at the
    /// arc's start point. The final end point is the exact ellipse point, callers
    /// that need bit-exact continuity should replace it with their own target.
    #[must_use]
    pub fn to_cubics(&self) -> Vec<[Point2; 3]> {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let count = ((self.sweep.abs() / FRAC_PI_2) - TOLERANCE).ceil().max(1.0) as usize;
        #[allow(clippy::cast_precision_loss)]
        let step = self.sweep / count as f64;
        let k = 4.0 / 3.0 * (step / 4.0).tan();

        let mut curves = Vec::with_capacity(count);
        let mut angle = self.start_angle;
        for _ in 0..count {
            let next = angle + step;
            let (s0, c0) = angle.sin_cos();
            let (s1, c1) = next.sin_cos();
            curves.push([
                self.map_unit(c0 - k * s0, s0 + k * c0),
                self.map_unit(c1 + k * s1, s1 - k * c1),
                self.map_unit(c1, s1),
            ]);
            angle = next;
        }
        curves
    }

    /// Maps a point of the unit circle onto the (scaled, rotated, centered) ellipse.
    fn map_unit(&self, ux: f64, uy: f64) -> Point2 {
        let (sin_phi, cos_phi) = self.rotation.sin_cos();
        let x = self.rx * ux;
        let y = self.ry * uy;
        Point2::new(
            self.center.x + cos_phi * x - sin_phi * y,
            self.center.y + sin_phi * x + cos_phi * y,
        )
    }
}

/// Signed angle from `u` to `v`, in `(-PI, PI]`.
fn signed_angle(u: &Vector2, v: &Vector2) -> f64 {
    let cross = u.x * v.y - u.y * v.x;
    cross.atan2(u.dot(v))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::f64::consts::PI;

    use super::*;
    use crate::math::bezier_2d::cubic_point_at;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    fn assert_near(a: &Point2, b: &Point2) {
        assert!((a - b).norm() < 1e-9, "{a:?} != {b:?}");
    }

    /// Unrotated arc with equal radii.
    fn circle(a: Point2, b: Point2, r: f64, large: bool, sweep: bool) -> Option<EllipticalArc> {
        EllipticalArc::from_endpoints(&a, &b, r, r, 0.0, large, sweep)
    }

    #[test]
    fn semicircle_center_and_sweep() {
        let arc = circle(p(0.0, 0.0), p(2.0, 0.0), 1.0, false, true).unwrap();
        assert_near(&arc.center, &p(1.0, 0.0));
        assert!((arc.sweep.abs() - PI).abs() < 1e-9);
        assert!((arc.rx - 1.0).abs() < 1e-12);
    }

    #[test]
    fn radii_scaled_up_when_too_small() {
        let arc = circle(p(0.0, 0.0), p(10.0, 0.0), 1.0, false, true).unwrap();
        assert!((arc.rx - 5.0).abs() < 1e-9);
        assert!((arc.ry - 5.0).abs() < 1e-9);
    }

    #[test]
    fn degenerate_arcs_are_rejected() {
        assert!(circle(p(1.0, 1.0), p(1.0, 1.0), 1.0, false, true).is_none());
        let (a, b) = (p(0.0, 0.0), p(1.0, 0.0));
        assert!(EllipticalArc::from_endpoints(&a, &b, 0.0, 1.0, 0.0, false, true).is_none());
    }

    #[test]
    fn sweep_flag_selects_direction() {
        let cw = circle(p(0.0, 0.0), p(2.0, 0.0), 1.0, false, false).unwrap();
        let ccw = circle(p(0.0, 0.0), p(2.0, 0.0), 1.0, false, true).unwrap();
        assert!(cw.sweep < 0.0);
        assert!(ccw.sweep > 0.0);
    }

    #[test]
    fn cubics_follow_the_circle() {
        let from = p(0.0, 0.0);
        let arc = circle(from, p(2.0, 0.0), 1.0, false, true).unwrap();
        let curves = arc.to_cubics();
        assert_eq!(curves.len(), 2);

        let mut start = from;
        for [c1, c2, end] in &curves {
            let mid = cubic_point_at(&start, c1, c2, end, 0.5);
            let r = (mid - arc.center).norm();
            assert!((r - 1.0).abs() < 1e-3, "radius drift {r}");
            start = *end;
        }
        assert_near(&start, &p(2.0, 0.0));
    }

    #[test]
    fn large_arc_flag_picks_long_way_round() {
        let small = circle(p(0.0, 0.0), p(1.0, 1.0), 1.0, false, true).unwrap();
        let large = circle(p(0.0, 0.0), p(1.0, 1.0), 1.0, true, true).unwrap();
        assert!((small.sweep - FRAC_PI_2).abs() < 1e-9);
        assert!((large.sweep - 3.0 * FRAC_PI_2).abs() < 1e-9);

        let curves = large.to_cubics();
        assert_eq!(curves.len(), 3);
        let [_, _, end] = curves[curves.len() - 1];
        assert_near(&end, &p(1.0, 1.0));
    }
}
