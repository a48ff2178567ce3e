//! SVG-style path data parsing.
//!
//! Turns text such as `"M0 0 L0 100 L100 100"` into a [`Path`]. Supported
//! commands are `M L H V C S Q T A Z`, each with a lowercase relative form.

use pest::error::LineColLocation;
use pest::Parser;
use pest_derive::Parser;
use tracing::debug;

use crate::error::{PathDataError, Result};
use crate::geometry::Path;
use crate::math::arc_2d::EllipticalArc;
use crate::math::{Point2, Vector2, TOLERANCE};

#[derive(Parser)]
#[grammar = "path_data/grammar.pest"]
struct PathDataParser;

/// Parses path data into a [`Path`].
///
/// # Errors
///
/// Returns [`PathDataError::Syntax`] if the text does not follow the path-data
/// grammar, and [`PathDataError::ArgumentCount`] if a command is given a number
/// of arguments that is not a whole number of groups.
pub fn parse_path_data(source: &str) -> Result<Path> {
    let mut pairs = PathDataParser::parse(Rule::path_data, source).map_err(syntax_error)?;
    let mut builder = PathBuilder::default();
    let mut count = 0usize;

    let Some(root) = pairs.next() else {
        return Ok(builder.path);
    };
    for command in root.into_inner().filter(|p| p.as_rule() == Rule::command) {
        let mut inner = command.into_inner();
        let Some(letter) = inner.next().and_then(|l| l.as_str().chars().next()) else {
            continue;
        };
        let args = inner
            .map(|n| {
                n.as_str()
                    .parse::<f64>()
                    .ok()
                    .filter(|v| v.is_finite())
                    .ok_or_else(|| PathDataError::InvalidNumber(n.as_str().to_owned()))
            })
            .collect::<std::result::Result<Vec<_>, _>>()?;
        builder.apply(letter, &args)?;
        count += 1;
    }

    debug!(
        commands = count,
        contours = builder.path.contours().len(),
        "parsed path data"
    );
    Ok(builder.path)
}

fn syntax_error(err: pest::error::Error<Rule>) -> PathDataError {
    let (line, column) = match err.line_col {
        LineColLocation::Pos(pos) | LineColLocation::Span(pos, _) => pos,
    };
    PathDataError::Syntax {
        line,
        column,
        message: err.variant.message().into_owned(),
    }
}

/// Number of arguments in one repetition of a command.
fn arity(command: char) -> usize {
    match command {
        'H' | 'V' => 1,
        'M' | 'L' | 'T' => 2,
        'S' | 'Q' => 4,
        'C' => 6,
        'A' => 7,
        _ => 0,
    }
}

/// Command interpreter that tracks the state needed by relative and smooth commands.
#[derive(Default)]
struct PathBuilder {
    path: Path,
    /// Second control point of the previous `C`/`S` command.
    last_cubic_ctrl: Option<Point2>,
    /// Control point of the previous `Q`/`T` command.
    last_quad_ctrl: Option<Point2>,
}

impl PathBuilder {
    fn apply(&mut self, letter: char, args: &[f64]) -> std::result::Result<(), PathDataError> {
        let command = letter.to_ascii_uppercase();
        let relative = letter.is_ascii_lowercase();
        let expected = arity(command);

        if expected == 0 {
            if !args.is_empty() {
                return Err(PathDataError::ArgumentCount {
                    command: letter,
                    expected,
                    found: args.len(),
                });
            }
            self.path.close();
            self.last_cubic_ctrl = None;
            self.last_quad_ctrl = None;
            return Ok(());
        }
        if args.is_empty() || args.len() % expected != 0 {
            return Err(PathDataError::ArgumentCount {
                command: letter,
                expected,
                found: args.len(),
            });
        }

        for (i, group) in args.chunks_exact(expected).enumerate() {
            let current = self.path.current_point();
            let base = if relative {
                current.coords
            } else {
                Vector2::zeros()
            };
            let at = |x: f64, y: f64| Point2::new(x, y) + base;

            let mut cubic_ctrl = None;
            let mut quad_ctrl = None;
            match command {
                'M' if i == 0 => {
                    self.path.move_to(at(group[0], group[1]));
                }
                'M' | 'L' => {
                    self.path.line_to(at(group[0], group[1]));
                }
                'H' => {
                    self.path.line_to(Point2::new(group[0] + base.x, current.y));
                }
                'V' => {
                    self.path.line_to(Point2::new(current.x, group[0] + base.y));
                }
                'C' => {
                    let ctrl2 = at(group[2], group[3]);
                    self.path
                        .cubic_to(at(group[0], group[1]), ctrl2, at(group[4], group[5]));
                    cubic_ctrl = Some(ctrl2);
                }
                'S' => {
                    let ctrl1 = reflect(self.last_cubic_ctrl, current);
                    let ctrl2 = at(group[0], group[1]);
                    self.path.cubic_to(ctrl1, ctrl2, at(group[2], group[3]));
                    cubic_ctrl = Some(ctrl2);
                }
                'Q' => {
                    let ctrl = at(group[0], group[1]);
                    self.path.quad_to(ctrl, at(group[2], group[3]));
                    quad_ctrl = Some(ctrl);
                }
                'T' => {
                    let ctrl = reflect(self.last_quad_ctrl, current);
                    self.path.quad_to(ctrl, at(group[0], group[1]));
                    quad_ctrl = Some(ctrl);
                }
                'A' => {
                    self.arc_to(current, group, at(group[5], group[6]));
                }
                _ => {}
            }
            self.last_cubic_ctrl = cubic_ctrl;
            self.last_quad_ctrl = quad_ctrl;
        }
        Ok(())
    }

    /// Appends an elliptical arc as cubic Béziers.
    ///
    /// `group` is `[rx, ry, x_axis_rotation, large_arc_flag, sweep_flag, x, y]`.
    #[allow(clippy::float_cmp)]
    fn arc_to(&mut self, from: Point2, group: &[f64], to: Point2) {
        if (to - from).norm() < TOLERANCE {
            return;
        }
        let arc = EllipticalArc::from_endpoints(
            &from,
            &to,
            group[0],
            group[1],
            group[2],
            group[3] != 0.0,
            group[4] != 0.0,
        );
        let Some(arc) = arc else {
            self.path.line_to(to);
            return;
        };

        let cubics = arc.to_cubics();
        let last = cubics.len().saturating_sub(1);
        for (i, [ctrl1, ctrl2, end]) in cubics.into_iter().enumerate() {
            let end = if i == last { to } else { end };
            self.path.cubic_to(ctrl1, ctrl2, end);
        }
    }
}

/// Reflects the previous control point about `current`, or returns `current`
/// when the previous command left no control point.
fn reflect(previous: Option<Point2>, current: Point2) -> Point2 {
    previous.map_or(current, |ctrl| current + (current - ctrl))
}
