mod config;
mod curve;
mod pattern;

pub use config::PatternMotionConfig;
pub use curve::MotionCurve;
pub use pattern::PatternMotion;

/// A strategy that produces the curve an object follows between two points.
///
/// Hosts ask for a fresh path per motion request; implementations must not
/// depend on earlier requests.
pub trait PathMotion {
    /// The curve type produced.
    type Curve;

    /// Returns the path from `(start_x, start_y)` to `(end_x, end_y)`.
    fn path(&self, start_x: f64, start_y: f64, end_x: f64, end_y: f64) -> Self::Curve;
}
