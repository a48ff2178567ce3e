//! Template-shaped motion paths.
//!
//! A [`PatternMotion`] takes a pattern curve, normalizes it once so that it runs
//! from `(0, 0)` to `(1, 0)`, and then fits that shape between any two points:
//!
//! ```
//! use pattern_motion::PatternMotion;
//! use pattern_motion::math::Point2;
//! use pattern_motion::motion::MotionCurve;
//!
//! let motion = PatternMotion::from_path_data("M0 0 L0 100 L100 100")?;
//! let path = motion.instantiate(10.0, 10.0, 10.0, 50.0);
//!
//! let end = path.position_at(path.arc_length()).unwrap_or_else(Point2::origin);
//! assert!((end.x - 10.0).abs() < 1e-9 && (end.y - 50.0).abs() < 1e-9);
//! # Ok::<(), pattern_motion::MotionError>(())
//! ```

pub mod error;
pub mod geometry;
pub mod math;
pub mod motion;
pub mod operations;
pub mod path_data;
pub mod tessellation;

pub use error::{MotionError, Result};
pub use geometry::Path;
pub use motion::{PathMotion, PatternMotion, PatternMotionConfig};
pub use path_data::parse_path_data;
