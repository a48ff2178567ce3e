use tracing::{debug, trace};

use crate::error::{PatternError, Result, TemplateDefect};
use crate::geometry::Path;
use crate::math::{distance, AffineMap, Point2};
use crate::path_data::parse_path_data;

use super::{MotionCurve, PathMotion, PatternMotionConfig};

/// Motion that follows a pattern curve between two points.
///
/// The pattern's start point is moved to the origin and its end point is
/// scaled and rotated onto `(1, 0)`. Each request then scales, rotates and
/// translates that canonical curve so it runs from the requested start to the
/// requested end, keeping the pattern's shape.
///
/// The pattern must not end where it starts, otherwise there is no direction
/// to normalize against.
#[derive(Debug, Clone)]
pub struct PatternMotion<C: MotionCurve = Path> {
    /// The pattern exactly as supplied.
    pattern: C,
    /// The pattern normalized to run from `(0, 0)` to `(1, 0)`.
    canonical: C,
}

impl<C: MotionCurve> PatternMotion<C> {
    /// Creates a pattern motion with a straight-line pattern.
    #[must_use]
    pub fn new() -> Self {
        let canonical = C::unit_segment();
        Self {
            pattern: canonical.clone(),
            canonical,
        }
    }

    /// Creates a pattern motion from a pattern curve.
    ///
    /// # Errors
    ///
    /// Returns [`PatternError::InvalidTemplate`] if the pattern ends at its
    /// starting point, has nothing to measure, or has non-finite geometry.
    pub fn with_pattern(pattern: C) -> Result<Self> {
        let canonical = normalize(&pattern)?;
        Ok(Self { pattern, canonical })
    }

    /// Returns the pattern as it was supplied, not its normalized form.
    #[must_use]
    pub fn pattern(&self) -> &C {
        &self.pattern
    }

    /// Returns the normalized pattern running from `(0, 0)` to `(1, 0)`.
    #[must_use]
    pub fn canonical(&self) -> &C {
        &self.canonical
    }

    /// Replaces the pattern.
    ///
    /// Both the stored pattern and its normalized form change together; on
    /// error neither is touched.
    ///
    /// # Errors
    ///
    /// Returns [`PatternError::InvalidTemplate`] if the pattern ends at its
    /// starting point, has nothing to measure, or has non-finite geometry.
    pub fn set_pattern(&mut self, pattern: C) -> Result<()> {
        let canonical = normalize(&pattern)?;
        self.pattern = pattern;
        self.canonical = canonical;
        Ok(())
    }

    /// Returns the pattern fitted between `(start_x, start_y)` and `(end_x, end_y)`.
    ///
    /// Coincident end points are accepted and collapse the curve onto the start.
    #[must_use]
    pub fn instantiate(&self, start_x: f64, start_y: f64, end_x: f64, end_y: f64) -> C {
        let dx = end_x - start_x;
        let dy = end_y - start_y;
        let length = distance(dx, dy);
        let angle = dy.atan2(dx).to_degrees();
        trace!(length, angle, "instantiating motion pattern");

        let map = AffineMap::scaling(length, length)
            .then_rotate_degrees(angle)
            .then_translate(start_x, start_y);
        self.canonical.transformed(&map)
    }
}

impl PatternMotion<Path> {
    /// Creates a pattern motion from path data such as `"M0 0 L0 100 L100 100"`.
    ///
    /// # Errors
    ///
    /// Returns an error if the path data cannot be parsed, or
    /// [`PatternError::InvalidTemplate`] if the parsed pattern cannot be
    /// normalized.
    pub fn from_path_data(path_data: &str) -> Result<Self> {
        Self::with_pattern(parse_path_data(path_data)?)
    }

    /// Creates a pattern motion from declarative configuration.
    ///
    /// # Errors
    ///
    /// Returns [`PatternError::MissingTemplateData`] if the config has no path
    /// data, otherwise any error of [`PatternMotion::from_path_data`].
    pub fn from_config(config: &PatternMotionConfig) -> Result<Self> {
        let path_data = config
            .path_data
            .as_deref()
            .ok_or(PatternError::MissingTemplateData)?;
        Self::from_path_data(path_data)
    }
}

impl<C: MotionCurve> Default for PatternMotion<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: MotionCurve> PathMotion for PatternMotion<C> {
    type Curve = C;

    fn path(&self, start_x: f64, start_y: f64, end_x: f64, end_y: f64) -> C {
        self.instantiate(start_x, start_y, end_x, end_y)
    }
}

/// Maps `pattern` so that it starts at `(0, 0)` and ends at `(1, 0)`.
#[allow(clippy::float_cmp)]
fn normalize<C: MotionCurve>(pattern: &C) -> Result<C> {
    let length = pattern.arc_length();
    let (Some(start), Some(end)) = (pattern.position_at(0.0), pattern.position_at(length)) else {
        return Err(PatternError::InvalidTemplate(TemplateDefect::Unmeasurable).into());
    };
    if !(is_finite(&start) && is_finite(&end)) {
        return Err(PatternError::InvalidTemplate(TemplateDefect::NonFinite).into());
    }
    if start == end {
        return Err(PatternError::InvalidTemplate(TemplateDefect::EndsAtStart {
            x: start.x,
            y: start.y,
        })
        .into());
    }

    let dx = end.x - start.x;
    let dy = end.y - start.y;
    let scale = 1.0 / distance(dx, dy);
    // A span that overflows gives a zero scale.
    if !scale.is_finite() || scale == 0.0 {
        return Err(PatternError::InvalidTemplate(TemplateDefect::NonFinite).into());
    }
    let angle = dy.atan2(dx);
    let map = AffineMap::translation(-start.x, -start.y)
        .then_scale(scale, scale)
        .then_rotate_degrees(-angle.to_degrees());

    debug!(
        start = ?(start.x, start.y),
        end = ?(end.x, end.y),
        length,
        "normalized motion pattern"
    );
    Ok(pattern.transformed(&map))
}

fn is_finite(point: &Point2) -> bool {
    point.x.is_finite() && point.y.is_finite()
}
