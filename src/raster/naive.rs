//! Naive stepping line rasterizer.

use crate::geometry::{IntPoint, Segment};

/// Rasterize a segment by stepping along the dominant axis and rounding
/// the dependent coordinate at each step.
///
/// When `x1 > x2` (or `y1 > y2` for steep segments) the endpoints are
/// swapped before stepping, so the output always runs in increasing order
/// along the dominant axis regardless of the segment's direction. Callers
/// that need the emission order to follow the segment should use
/// [`bresenham_line`](super::bresenham_line) instead.
#[must_use]
pub fn naive_line(segment: Segment) -> Vec<IntPoint> {
    let Segment { x1, y1, x2, y2 } = segment;

    // Vertical guard: the slope below would divide by zero.
    if x1 == x2 {
        return (y1.min(y2)..=y1.max(y2))
            .map(|y| IntPoint::new(x1, y))
            .collect();
    }

    let (x1, y1, x2, y2) = if x1 > x2 {
        (x2, y2, x1, y1)
    } else {
        (x1, y1, x2, y2)
    };

    let dx = x2 - x1;
    let dy = y2 - y1;

    if dx.abs() >= dy.abs() {
        let m = f64::from(dy) / f64::from(dx);
        (x1..=x2)
            .map(|x| {
                let y = f64::from(y1) + m * f64::from(x - x1);
                IntPoint::new(x, y.round() as i32)
            })
            .collect()
    } else {
        // Steep: step y with the inverse slope. Swapping both endpoints
        // leaves the dx/dy ratio unchanged.
        let (x1, y1, y2) = if y1 > y2 { (x2, y2, y1) } else { (x1, y1, y2) };
        let m_inv = f64::from(dx) / f64::from(dy);
        (y1..=y2)
            .map(|y| {
                let x = f64::from(x1) + m_inv * f64::from(y - y1);
                IntPoint::new(x.round() as i32, y)
            })
            .collect()
    }
}
