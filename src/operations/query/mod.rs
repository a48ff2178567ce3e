mod contour_measure;
mod length;
mod point_on_curve;

pub use contour_measure::ContourMeasure;
pub use length::Length;
pub use point_on_curve::PointOnCurve;
