pub mod affine_2d;
pub mod arc_2d;
pub mod bezier_2d;
pub mod distance_2d;

pub use affine_2d::AffineMap;
pub use distance_2d::distance;

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// 3x3 homogeneous transformation matrix for 2D geometry.
pub type Matrix3 = nalgebra::Matrix3<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;
