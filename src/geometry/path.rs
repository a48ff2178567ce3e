use crate::math::{AffineMap, Point2};

use super::Segment;

/// One connected run of segments, begun by a move-to.
///
/// A closed contour implicitly ends with a straight line back to its start.
#[derive(Debug, Clone, PartialEq)]
pub struct Contour {
    start: Point2,
    segments: Vec<Segment>,
    closed: bool,
}

impl Contour {
    /// Creates an empty open contour starting at `start`.
    #[must_use]
    pub fn new(start: Point2) -> Self {
        Self {
            start,
            segments: Vec::new(),
            closed: false,
        }
    }

    /// Returns the start point.
    #[must_use]
    pub fn start(&self) -> Point2 {
        self.start
    }

    /// Returns the explicit segments (without the implicit closing line).
    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Returns whether the contour is closed.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Returns the last point reached by the explicit segments.
    #[must_use]
    pub fn last_point(&self) -> Point2 {
        self.segments.last().map_or(self.start, Segment::to)
    }

    /// Returns the implicit line from the last point back to the start, if any.
    #[must_use]
    pub fn closing_segment(&self) -> Option<Segment> {
        let last = self.last_point();
        (self.closed && last != self.start).then_some(Segment::Line {
            from: last,
            to: self.start,
        })
    }

    /// Iterates over every segment, including the closing line.
    pub fn all_segments(&self) -> impl Iterator<Item = Segment> + '_ {
        self.segments.iter().copied().chain(self.closing_segment())
    }

    /// Returns the contour with every point mapped through `map`.
    #[must_use]
    pub fn transformed(&self, map: &AffineMap) -> Self {
        Self {
            start: map.apply_point(&self.start),
            segments: self.segments.iter().map(|s| s.transformed(map)).collect(),
            closed: self.closed,
        }
    }
}

/// An ordered sequence of contours, built with move/line/curve/close commands.
///
/// Drawing without a preceding move-to continues from the last point of the
/// previous contour, or from the origin for an empty path. After [`Path::close`],
/// the next drawing command opens a new contour at the closed contour's start.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Path {
    contours: Vec<Contour>,
}

impl Path {
    /// Creates an empty path.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a path holding a single straight line.
    #[must_use]
    pub fn line(from: Point2, to: Point2) -> Self {
        let mut path = Self::new();
        path.move_to(from).line_to(to);
        path
    }

    /// Creates a path from already-built contours.
    #[must_use]
    pub fn from_contours(contours: Vec<Contour>) -> Self {
        Self { contours }
    }

    /// Returns the contours of this path.
    #[must_use]
    pub fn contours(&self) -> &[Contour] {
        &self.contours
    }

    /// Returns whether the path has no segments at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.contours.iter().all(|c| c.segments.is_empty())
    }

    /// Returns the point the next drawing command continues from.
    #[must_use]
    pub fn current_point(&self) -> Point2 {
        match self.contours.last() {
            Some(c) if c.closed => c.start,
            Some(c) => c.last_point(),
            None => Point2::origin(),
        }
    }

    /// Starts a new contour at `point`.
    pub fn move_to(&mut self, point: Point2) -> &mut Self {
        match self.contours.last_mut() {
            Some(c) if c.segments.is_empty() && !c.closed => c.start = point,
            _ => self.contours.push(Contour::new(point)),
        }
        self
    }

    /// Adds a straight line to `to`.
    pub fn line_to(&mut self, to: Point2) -> &mut Self {
        let from = self.current_point();
        self.open_contour()
            .segments
            .push(Segment::Line { from, to });
        self
    }

    /// Adds a quadratic Bézier through `ctrl` to `to`.
    pub fn quad_to(&mut self, ctrl: Point2, to: Point2) -> &mut Self {
        let from = self.current_point();
        self.open_contour()
            .segments
            .push(Segment::Quad { from, ctrl, to });
        self
    }

    /// Adds a cubic Bézier through `ctrl1` and `ctrl2` to `to`.
    pub fn cubic_to(&mut self, ctrl1: Point2, ctrl2: Point2, to: Point2) -> &mut Self {
        let from = self.current_point();
        self.open_contour().segments.push(Segment::Cubic {
            from,
            ctrl1,
            ctrl2,
            to,
        });
        self
    }

    /// Closes the current contour. Does nothing if no contour is open.
    pub fn close(&mut self) -> &mut Self {
        if let Some(c) = self.contours.last_mut() {
            if !c.segments.is_empty() {
                c.closed = true;
            }
        }
        self
    }

    /// Returns the contour that accepts the next segment, opening one if needed.
    fn open_contour(&mut self) -> &mut Contour {
        let start = self.current_point();
        if self.contours.last().map_or(true, |c| c.closed) {
            self.contours.push(Contour::new(start));
        }
        let last = self.contours.len() - 1;
        &mut self.contours[last]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    #[test]
    fn drawing_without_move_starts_at_origin() {
        let mut path = Path::new();
        path.line_to(p(1.0, 0.0));
        assert_eq!(path.contours().len(), 1);
        assert_eq!(path.contours()[0].start(), p(0.0, 0.0));
        assert_eq!(path.current_point(), p(1.0, 0.0));
    }

    #[test]
    fn consecutive_moves_collapse() {
        let mut path = Path::new();
        path.move_to(p(1.0, 1.0))
            .move_to(p(2.0, 2.0))
            .line_to(p(3.0, 3.0));
        assert_eq!(path.contours().len(), 1);
        assert_eq!(path.contours()[0].start(), p(2.0, 2.0));
    }

    #[test]
    fn close_returns_to_contour_start() {
        let mut path = Path::new();
        path.move_to(p(1.0, 0.0))
            .line_to(p(2.0, 0.0))
            .line_to(p(2.0, 1.0))
            .close();
        let contour = &path.contours()[0];
        assert!(contour.is_closed());
        assert_eq!(path.current_point(), p(1.0, 0.0));
        assert_eq!(
            contour.closing_segment(),
            Some(Segment::Line {
                from: p(2.0, 1.0),
                to: p(1.0, 0.0)
            })
        );
        assert_eq!(contour.all_segments().count(), 3);
    }

    #[test]
    fn drawing_after_close_opens_new_contour() {
        let mut path = Path::new();
        path.move_to(p(1.0, 1.0)).line_to(p(2.0, 1.0)).close();
        path.line_to(p(5.0, 5.0));
        assert_eq!(path.contours().len(), 2);
        assert_eq!(path.contours()[1].start(), p(1.0, 1.0));
    }

    #[test]
    fn close_on_empty_path_is_ignored() {
        let mut path = Path::new();
        path.close();
        assert!(path.contours().is_empty());
        assert!(path.is_empty());
    }

    #[test]
    fn lone_move_is_empty() {
        let mut path = Path::new();
        path.move_to(p(3.0, 3.0));
        assert!(path.is_empty());
        assert_eq!(path.current_point(), p(3.0, 3.0));
    }

    #[test]
    fn closed_contour_ending_at_start_has_no_closing_line() {
        let mut path = Path::new();
        path.line_to(p(1.0, 0.0)).line_to(p(0.0, 0.0)).close();
        assert_eq!(path.contours()[0].closing_segment(), None);
    }

    #[test]
    fn contour_transform_keeps_closed_flag() {
        let mut path = Path::new();
        path.line_to(p(1.0, 0.0)).line_to(p(1.0, 1.0)).close();
        let moved = path.contours()[0].transformed(&AffineMap::translation(1.0, 1.0));
        assert!(moved.is_closed());
        assert_eq!(moved.start(), p(1.0, 1.0));
    }
}
