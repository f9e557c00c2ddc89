//! Rasterization algorithms and dispatch.
//!
//! Each rasterizer is a pure function from a geometric primitive to a
//! sequence of pixels (or coverage samples, for Wu antialiasing). The
//! functions share no state and are bounded-iteration: a line call runs in
//! `O(max(|dx|, |dy|))`, a circle call in `O(r)`, so any number of calls
//! may run concurrently without synchronization.

mod bresenham;
mod castle;
mod circle;
mod dda;
mod naive;
mod wu;

pub use bresenham::bresenham_line;
pub use castle::castle_pitteway_line;
pub use circle::bresenham_circle;
pub use dda::dda_line;
pub use naive::naive_line;
pub use wu::wu_line;

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::geometry::{Circle, IntPoint, PixelSample, Segment};

// ============================================================================
// Algorithm Selection
// ============================================================================

/// Line rasterization algorithm selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// Naive stepping along the dominant axis with rounding.
    Naive,
    /// Digital differential analyzer with uniform float increments.
    Dda,
    /// Integer-only midpoint line.
    Bresenham,
    /// Run-length move-string digital line.
    CastlePitteway,
    /// Antialiased coverage samples.
    Wu,
}

impl Algorithm {
    /// All line algorithms, in presentation order.
    pub const ALL: [Self; 5] = [
        Self::Naive,
        Self::Dda,
        Self::Bresenham,
        Self::CastlePitteway,
        Self::Wu,
    ];

    /// Stable lowercase identifier, parseable back via [`FromStr`].
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Naive => "naive",
            Self::Dda => "dda",
            Self::Bresenham => "bresenham",
            Self::CastlePitteway => "castle-pitteway",
            Self::Wu => "wu",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "naive" => Ok(Self::Naive),
            "dda" => Ok(Self::Dda),
            "bresenham" => Ok(Self::Bresenham),
            "castle-pitteway" => Ok(Self::CastlePitteway),
            "wu" => Ok(Self::Wu),
            other => Err(Error::UnknownAlgorithm(other.to_string())),
        }
    }
}

// ============================================================================
// Results
// ============================================================================

/// Output of a rasterization call.
///
/// Line algorithms produce pixels in traversal order; the circle algorithm
/// produces a sorted, deduplicated set. Wu antialiasing produces coverage
/// samples instead of bare coordinates.
#[derive(Debug, Clone, PartialEq)]
pub enum RasterResult {
    /// Ordered pixel coordinates.
    Points(Vec<IntPoint>),
    /// Coverage samples from antialiased rasterization.
    Samples(Vec<PixelSample>),
}

impl RasterResult {
    /// Number of emitted pixels or samples.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Points(points) => points.len(),
            Self::Samples(samples) => samples.len(),
        }
    }

    /// Whether nothing was emitted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Bounding box of the emitted coordinates as `(min, max)` corners.
    ///
    /// `None` for an empty result. Useful for sizing a viewport around the
    /// output before overlaying it on the ideal primitive.
    #[must_use]
    pub fn bounds(&self) -> Option<(IntPoint, IntPoint)> {
        match self {
            Self::Points(points) => bounds_of(points.iter().map(|p| (p.x, p.y))),
            Self::Samples(samples) => bounds_of(samples.iter().map(|s| (s.x, s.y))),
        }
    }

    /// The emitted points, if this is a point result.
    #[must_use]
    pub fn as_points(&self) -> Option<&[IntPoint]> {
        match self {
            Self::Points(points) => Some(points),
            Self::Samples(_) => None,
        }
    }

    /// The emitted samples, if this is a sample result.
    #[must_use]
    pub fn as_samples(&self) -> Option<&[PixelSample]> {
        match self {
            Self::Points(_) => None,
            Self::Samples(samples) => Some(samples),
        }
    }
}

// ============================================================================
// Dispatch
// ============================================================================

/// Rasterize a line segment with the selected algorithm.
///
/// Infallible: every integer segment, including the degenerate single-point
/// one, produces at least one pixel. All algorithms except
/// [`Algorithm::Wu`] return [`RasterResult::Points`]; Wu returns
/// [`RasterResult::Samples`].
///
/// # Example
///
/// ```
/// use pixeltrace::{rasterize_line, Algorithm};
/// use pixeltrace::geometry::Segment;
///
/// let path = rasterize_line(Algorithm::Bresenham, Segment::new(2, 3, 15, 10));
/// assert_eq!(path.len(), 14);
/// ```
#[must_use]
pub fn rasterize_line(algorithm: Algorithm, segment: Segment) -> RasterResult {
    log::trace!("rasterize_line {algorithm}: {segment:?}");
    match algorithm {
        Algorithm::Naive => RasterResult::Points(naive_line(segment)),
        Algorithm::Dda => RasterResult::Points(dda_line(segment)),
        Algorithm::Bresenham => RasterResult::Points(bresenham_line(segment)),
        Algorithm::CastlePitteway => RasterResult::Points(castle_pitteway_line(segment)),
        Algorithm::Wu => RasterResult::Samples(wu_line(segment)),
    }
}

/// Rasterize a circle outline with the midpoint algorithm.
///
/// Returns a sorted, deduplicated pixel set closed under the circle's
/// 8-fold symmetry.
///
/// # Errors
///
/// Returns [`Error::InvalidRadius`] if the radius is below 1.
///
/// # Example
///
/// ```
/// use pixeltrace::rasterize_circle;
/// use pixeltrace::geometry::{Circle, IntPoint};
///
/// let ring = rasterize_circle(Circle::new(10, 10, 8))?;
/// assert!(ring.contains(&IntPoint::new(18, 10)));
/// # Ok::<(), pixeltrace::Error>(())
/// ```
pub fn rasterize_circle(circle: Circle) -> Result<Vec<IntPoint>> {
    if circle.radius < 1 {
        return Err(Error::InvalidRadius {
            radius: circle.radius,
        });
    }
    log::trace!("rasterize_circle: {circle:?}");
    Ok(bresenham_circle(circle))
}

/// Fold a coordinate stream into `(min, max)` corners.
fn bounds_of(mut coords: impl Iterator<Item = (i32, i32)>) -> Option<(IntPoint, IntPoint)> {
    let (x0, y0) = coords.next()?;
    let (mut min, mut max) = (IntPoint::new(x0, y0), IntPoint::new(x0, y0));
    for (x, y) in coords {
        min = IntPoint::new(min.x.min(x), min.y.min(y));
        max = IntPoint::new(max.x.max(x), max.y.max(y));
    }
    Some((min, max))
}
