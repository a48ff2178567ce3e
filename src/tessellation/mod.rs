mod tessellate_contour;

pub use tessellate_contour::TessellateContour;

use crate::error::{Result, TessellationError};
use crate::math::Point2;

/// Parameters controlling how curved segments are flattened.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TessellationParams {
    /// Maximum allowed deviation from the true geometry.
    pub tolerance: f64,
    /// Minimum number of line segments per curved segment.
    pub min_segments: usize,
    /// Maximum number of line segments per curved segment.
    pub max_segments: usize,
}

impl TessellationParams {
    /// Creates validated tessellation parameters.
    ///
    /// # Errors
    ///
    /// Returns an error if `tolerance` is not a positive finite number, if
    /// `min_segments` is zero, or if `min_segments > max_segments`.
    pub fn new(tolerance: f64, min_segments: usize, max_segments: usize) -> Result<Self> {
        if !(tolerance.is_finite() && tolerance > 0.0) {
            return Err(TessellationError::InvalidParameters(format!(
                "tolerance must be positive, got {tolerance}"
            ))
            .into());
        }
        if min_segments == 0 {
            return Err(TessellationError::InvalidParameters(
                "min_segments must be at least 1".to_owned(),
            )
            .into());
        }
        if min_segments > max_segments {
            return Err(TessellationError::InvalidParameters(format!(
                "min_segments ({min_segments}) exceeds max_segments ({max_segments})"
            ))
            .into());
        }
        Ok(Self {
            tolerance,
            min_segments,
            max_segments,
        })
    }
}

impl Default for TessellationParams {
    fn default() -> Self {
        Self {
            tolerance: 1e-3,
            min_segments: 1,
            max_segments: 256,
        }
    }
}

/// A polyline approximation of a contour.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Polyline {
    /// The ordered vertices of the polyline.
    pub points: Vec<Point2>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn new_with_valid_params() {
        let params = TessellationParams::new(0.5, 2, 8).unwrap();
        assert!((params.tolerance - 0.5).abs() < f64::EPSILON);
        assert_eq!(params.min_segments, 2);
        assert_eq!(params.max_segments, 8);
    }

    #[test]
    fn non_positive_tolerance_fails() {
        assert!(TessellationParams::new(0.0, 1, 8).is_err());
        assert!(TessellationParams::new(-1.0, 1, 8).is_err());
        assert!(TessellationParams::new(f64::NAN, 1, 8).is_err());
    }

    #[test]
    fn zero_min_segments_fails() {
        assert!(TessellationParams::new(0.1, 0, 8).is_err());
    }

    #[test]
    fn inverted_segment_range_fails() {
        assert!(TessellationParams::new(0.1, 9, 8).is_err());
    }
}
