use crate::geometry::Contour;

use super::{Polyline, TessellationParams};

/// Flattens a contour into a polyline.
///
/// The first point is the contour start and every segment end point is
/// emitted exactly, so the polyline passes through all on-curve points.
/// The closing line of a closed contour is included.
pub struct TessellateContour<'a> {
    contour: &'a Contour,
    params: TessellationParams,
}

impl<'a> TessellateContour<'a> {
    /// Creates a new `TessellateContour` operation.
    #[must_use]
    pub fn new(contour: &'a Contour, params: TessellationParams) -> Self {
        Self { contour, params }
    }

    /// Executes the tessellation, returning a polyline.
    #[must_use]
    pub fn execute(&self) -> Polyline {
        let mut points = Vec::with_capacity(self.contour.segments().len() + 2);
        points.push(self.contour.start());

        for segment in self.contour.all_segments() {
            let n_sub = if segment.is_line() {
                1
            } else {
                segment
                    .subdivision_count(self.params.tolerance)
                    .max(self.params.min_segments)
                    .min(self.params.max_segments)
            };
            for j in 1..n_sub {
                #[allow(clippy::cast_precision_loss)]
                let t = j as f64 / n_sub as f64;
                points.push(segment.evaluate(t));
            }
            points.push(segment.to());
        }

        Polyline { points }
    }
}
