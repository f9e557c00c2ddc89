//! Castle–Pitteway line rasterizer.

use crate::geometry::{IntPoint, Segment};

/// A single move in the generated path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Move {
    /// Advance along the dominant axis only.
    Straight,
    /// Advance along both axes.
    Diagonal,
}

/// Rasterize a segment by deriving its move sequence with a subtractive
/// Euclidean reduction of the axis deltas, then walking the moves from the
/// first endpoint.
///
/// The reduction yields the run-length structure of the digital line
/// directly instead of re-deciding at every pixel: two move fragments are
/// repeatedly joined, mirroring the subtractive gcd of the deltas, until a
/// terminal fragment remains whose repetition is the whole path. Every move
/// advances the dominant axis by one, so the path has exactly
/// `max(|dx|, |dy|) + 1` pixels and never revisits one.
#[must_use]
pub fn castle_pitteway_line(segment: Segment) -> Vec<IntPoint> {
    let dx_total = segment.dx().abs();
    let dy_total = segment.dy().abs();

    let swapped = dy_total > dx_total;
    let (a, b) = if swapped {
        (dy_total, dx_total)
    } else {
        (dx_total, dy_total)
    };

    let moves = build_moves(a, b);

    let sx = if segment.x1 < segment.x2 { 1 } else { -1 };
    let sy = if segment.y1 < segment.y2 { 1 } else { -1 };

    let mut x = segment.x1;
    let mut y = segment.y1;
    let mut pixels = Vec::with_capacity(moves.len() + 1);
    pixels.push(IntPoint::new(x, y));

    for mv in moves {
        match mv {
            Move::Diagonal => {
                x += sx;
                y += sy;
            }
            // A straight move follows the dominant axis: y when the axes
            // were swapped, x otherwise.
            Move::Straight if swapped => y += sy,
            Move::Straight => x += sx,
        }
        pixels.push(IntPoint::new(x, y));
    }

    pixels
}

/// Derive the move sequence for delta magnitudes `a >= b >= 0`.
fn build_moves(a: i32, b: i32) -> Vec<Move> {
    if b == 0 {
        return vec![Move::Straight; a as usize];
    }
    if a == b {
        return vec![Move::Diagonal; a as usize];
    }

    let mut x = a - b;
    let mut y = b;
    let mut m1 = vec![Move::Straight];
    let mut m2 = vec![Move::Diagonal];

    while x != y {
        if x > y {
            x -= y;
            m2 = concat(&m1, &m2);
        } else {
            y -= x;
            m1 = concat(&m2, &m1);
        }
    }

    // Terminal fragment m2 ++ m1, repeated x times, is the whole path.
    let period = concat(&m2, &m1);
    let mut moves = Vec::with_capacity(period.len() * x as usize);
    for _ in 0..x {
        moves.extend_from_slice(&period);
    }
    moves
}

/// Join two move fragments into a fresh builder.
fn concat(head: &[Move], tail: &[Move]) -> Vec<Move> {
    let mut joined = Vec::with_capacity(head.len() + tail.len());
    joined.extend_from_slice(head);
    joined.extend_from_slice(tail);
    joined
}

#[cfg(test)]
mod tests {
    use super::*;

    fn points(raw: &[(i32, i32)]) -> Vec<IntPoint> {
        raw.iter().map(|&(x, y)| IntPoint::new(x, y)).collect()
    }

    #[test]
    fn test_perfect_diagonal() {
        let pixels = castle_pitteway_line(Segment::new(0, 0, 5, 5));
        let expected: Vec<IntPoint> = (0..=5).map(|i| IntPoint::new(i, i)).collect();
        assert_eq!(pixels, expected);
    }

    #[test]
    fn test_horizontal() {
        let pixels = castle_pitteway_line(Segment::new(0, 3, 4, 3));
        let expected: Vec<IntPoint> = (0..=4).map(|x| IntPoint::new(x, 3)).collect();
        assert_eq!(pixels, expected);
    }

    #[test]
    fn test_vertical() {
        let pixels = castle_pitteway_line(Segment::new(2, 0, 2, 4));
        let expected: Vec<IntPoint> = (0..=4).map(|y| IntPoint::new(2, y)).collect();
        assert_eq!(pixels, expected);
    }

    #[test]
    fn test_general_case() {
        let pixels = castle_pitteway_line(Segment::new(0, 0, 5, 2));
        assert_eq!(
            pixels,
            points(&[(0, 0), (1, 0), (2, 1), (3, 1), (4, 2), (5, 2)])
        );
    }

    #[test]
    fn test_negative_direction() {
        let pixels = castle_pitteway_line(Segment::new(5, 2, 0, 0));
        assert_eq!(pixels.first(), Some(&IntPoint::new(5, 2)));
        assert_eq!(pixels.last(), Some(&IntPoint::new(0, 0)));
        assert_eq!(pixels.len(), 6);
    }

    #[test]
    fn test_degenerate() {
        let pixels = castle_pitteway_line(Segment::new(1, 1, 1, 1));
        assert_eq!(pixels, points(&[(1, 1)]));
    }

    #[test]
    fn test_monotonic_no_repeats() {
        let pixels = castle_pitteway_line(Segment::new(0, 0, 13, 8));
        assert_eq!(pixels.len(), 14);
        for pair in pixels.windows(2) {
            assert_eq!(pair[1].x - pair[0].x, 1);
            assert!(pair[1].y - pair[0].y <= 1);
        }
    }
}
