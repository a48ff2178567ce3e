/// 2D Bézier evaluation and flattening utilities.
///
/// All curves are parameterized over `t` in `[0, 1]`.
use super::Point2;

/// Evaluates a quadratic Bézier at parameter `t`.
#[must_use]
pub fn quad_point_at(p0: &Point2, p1: &Point2, p2: &Point2, t: f64) -> Point2 {
    let mt = 1.0 - t;
    let coords = p0.coords * (mt * mt) + p1.coords * (2.0 * mt * t) + p2.coords * (t * t);
    Point2::from(coords)
}

/// Evaluates a cubic Bézier at parameter `t`.
#[must_use]
pub fn cubic_point_at(p0: &Point2, p1: &Point2, p2: &Point2, p3: &Point2, t: f64) -> Point2 {
    let mt = 1.0 - t;
    let mt2 = mt * mt;
    let t2 = t * t;
    let coords = p0.coords * (mt2 * mt)
        + p1.coords * (3.0 * mt2 * t)
        + p2.coords * (3.0 * mt * t2)
        + p3.coords * (t2 * t);
    Point2::from(coords)
}

/// Number of line segments needed to flatten a quadratic Bézier within `tolerance`.
///
/// Wang's formula for degree 2: `n = sqrt(M / (4 * tolerance))` where `M` is the
/// length of the control polygon's second difference.
#[must_use]
pub fn quad_subdivision_count(p0: &Point2, p1: &Point2, p2: &Point2, tolerance: f64) -> usize {
    let dd = (p0.coords - p1.coords * 2.0 + p2.coords).norm();
    wang_count(0.25 * dd, tolerance)
}

/// Number of line segments needed to flatten a cubic Bézier within `tolerance`.
///
/// Wang's formula for degree 3: `n = sqrt(3 * M / (4 * tolerance))` where `M` is the
/// largest second difference of the control polygon.
#[must_use]
pub fn cubic_subdivision_count(
    p0: &Point2,
    p1: &Point2,
    p2: &Point2,
    p3: &Point2,
    tolerance: f64,
) -> usize {
    let dd0 = (p0.coords - p1.coords * 2.0 + p2.coords).norm();
    let dd1 = (p1.coords - p2.coords * 2.0 + p3.coords).norm();
    wang_count(0.75 * dd0.max(dd1), tolerance)
}

fn wang_count(weighted: f64, tolerance: f64) -> usize {
    if tolerance <= 0.0 || !weighted.is_finite() || weighted <= 0.0 {
        return 1;
    }
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let n = (weighted / tolerance).sqrt().ceil() as usize;
    n.max(1)
}
