mod path;
mod segment;

pub use path::{Contour, Path};
pub use segment::Segment;
