//! Fits a motion pattern between two points and prints samples along the result.
//!
//! Usage:
//! ```text
//! cargo run --example trace_pattern
//! cargo run --example trace_pattern -- "M0 0 C0 50 100 50 100 0" 0 0 30 40
//! RUST_LOG=pattern_motion=trace cargo run --example trace_pattern
//! ```

use pattern_motion::math::Point2;
use pattern_motion::motion::MotionCurve;
use pattern_motion::{MotionError, PatternMotion, PatternMotionConfig};

const DEFAULT_CONFIG: &str = r#"path_data = "M0 0 L0 100 L100 100""#;
const SAMPLES: u32 = 10;

fn main() -> Result<(), MotionError> {
    // Default: WARN for everything, INFO for pattern_motion.
    // Override with RUST_LOG env var (e.g. RUST_LOG=pattern_motion=debug).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("pattern_motion=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let mut args = std::env::args().skip(1);
    let config = match args.next() {
        Some(path_data) => PatternMotionConfig::with_path_data(path_data),
        None => PatternMotionConfig::from_toml_str(DEFAULT_CONFIG)?,
    };
    let coords: Vec<f64> = args.filter_map(|a| a.parse().ok()).collect();
    let [sx, sy, ex, ey] = match coords.as_slice() {
        &[sx, sy, ex, ey] => [sx, sy, ex, ey],
        _ => [0.0, 0.0, 0.0, 10.0],
    };

    let motion = PatternMotion::from_config(&config)?;
    let path = motion.instantiate(sx, sy, ex, ey);
    let length = path.arc_length();

    println!("({sx}, {sy}) -> ({ex}, {ey}), length {length:.4}");
    for i in 0..=SAMPLES {
        let d = length * f64::from(i) / f64::from(SAMPLES);
        let p = path.position_at(d).unwrap_or_else(Point2::origin);
        println!("{d:>10.4}  ({:.4}, {:.4})", p.x, p.y);
    }
    Ok(())
}
