//! Bresenham line rasterizer.

use crate::geometry::{IntPoint, Segment};

/// Rasterize a segment with the integer-only midpoint algorithm.
///
/// Emits exactly `max(|dx|, |dy|) + 1` pixels from the first endpoint to
/// the second, in traversal order. Consecutive pixels differ by at most one
/// unit in each axis, so the path is 8-connected. No floating point is
/// involved: a single integer error term decides each step for every
/// octant.
#[must_use]
pub fn bresenham_line(segment: Segment) -> Vec<IntPoint> {
    let Segment { x1, y1, x2, y2 } = segment;

    let dx = (x2 - x1).abs();
    // dy is kept negative so one error update covers all octants.
    let dy = -(y2 - y1).abs();
    let sx = if x1 < x2 { 1 } else { -1 };
    let sy = if y1 < y2 { 1 } else { -1 };
    let mut err = dx + dy;

    let mut x = x1;
    let mut y = y1;
    let mut pixels = Vec::with_capacity(dx.max(-dy) as usize + 1);

    loop {
        pixels.push(IntPoint::new(x, y));

        if x == x2 && y == y2 {
            break;
        }

        let e2 = 2 * err;
        // Both branches may fire in one iteration (diagonal step); the
        // equality guards stop either axis from overshooting its target.
        if e2 >= dy {
            if x == x2 {
                break;
            }
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            if y == y2 {
                break;
            }
            err += dx;
            y += sy;
        }
    }

    pixels
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_horizontal() {
        let pixels = bresenham_line(Segment::new(0, 2, 4, 2));
        let expected: Vec<IntPoint> = (0..=4).map(|x| IntPoint::new(x, 2)).collect();
        assert_eq!(pixels, expected);
    }

    #[test]
    fn test_vertical_downward() {
        let pixels = bresenham_line(Segment::new(1, 3, 1, 0));
        let expected: Vec<IntPoint> = (0..=3).rev().map(|y| IntPoint::new(1, y)).collect();
        assert_eq!(pixels, expected);
    }

    #[test]
    fn test_diagonal() {
        let pixels = bresenham_line(Segment::new(0, 0, 3, 3));
        let expected: Vec<IntPoint> = (0..=3).map(|i| IntPoint::new(i, i)).collect();
        assert_eq!(pixels, expected);
    }

    #[test]
    fn test_preserves_traversal_direction() {
        let pixels = bresenham_line(Segment::new(15, 10, 2, 3));
        assert_eq!(pixels.first(), Some(&IntPoint::new(15, 10)));
        assert_eq!(pixels.last(), Some(&IntPoint::new(2, 3)));
        assert_eq!(pixels.len(), 14);
    }

    #[test]
    fn test_pixel_count() {
        let pixels = bresenham_line(Segment::new(-3, -7, 6, 1));
        assert_eq!(pixels.len(), 10);
    }

    #[test]
    fn test_degenerate() {
        let pixels = bresenham_line(Segment::new(-1, -1, -1, -1));
        assert_eq!(pixels, vec![IntPoint::new(-1, -1)]);
    }

    #[test]
    fn test_eight_connectivity() {
        let pixels = bresenham_line(Segment::new(2, 3, 15, 10));
        for pair in pixels.windows(2) {
            assert_eq!(pair[0].chebyshev_distance(pair[1]), 1);
        }
    }
}
