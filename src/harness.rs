//! Timing harness for algorithm evaluation.
//!
//! Wraps a single rasterizer call with a wall-clock measurement and a
//! pixel-count summary, the two metrics a presentation layer displays next
//! to the rendered overlay.

use std::time::{Duration, Instant};

use crate::error::Result;
use crate::geometry::{Circle, Segment};
use crate::raster::{self, Algorithm, RasterResult};

/// Result of a timed rasterization call.
#[derive(Debug, Clone, PartialEq)]
pub struct RasterReport {
    /// The produced pixels or samples.
    pub result: RasterResult,
    /// Wall-clock time of the single rasterizer call.
    pub elapsed: Duration,
}

impl RasterReport {
    /// Number of emitted pixels or samples.
    #[must_use]
    pub fn pixel_count(&self) -> usize {
        self.result.len()
    }

    /// Elapsed time in fractional milliseconds.
    #[must_use]
    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed.as_secs_f64() * 1_000.0
    }
}

/// Time a single line rasterization.
#[must_use]
pub fn time_line(algorithm: Algorithm, segment: Segment) -> RasterReport {
    let start = Instant::now();
    let result = raster::rasterize_line(algorithm, segment);
    let elapsed = start.elapsed();
    log::debug!(
        "{algorithm}: {count} pixels in {ms:.4} ms",
        count = result.len(),
        ms = elapsed.as_secs_f64() * 1_000.0
    );
    RasterReport { result, elapsed }
}

/// Time a single circle rasterization.
///
/// # Errors
///
/// Returns [`Error::InvalidRadius`](crate::Error::InvalidRadius) if the
/// radius is below 1.
pub fn time_circle(circle: Circle) -> Result<RasterReport> {
    let start = Instant::now();
    let pixels = raster::rasterize_circle(circle)?;
    let elapsed = start.elapsed();
    log::debug!(
        "circle r={r}: {count} pixels in {ms:.4} ms",
        r = circle.radius,
        count = pixels.len(),
        ms = elapsed.as_secs_f64() * 1_000.0
    );
    Ok(RasterReport {
        result: RasterResult::Points(pixels),
        elapsed,
    })
}
