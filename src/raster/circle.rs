//! Midpoint circle rasterizer.

use crate::geometry::{Circle, IntPoint};

/// Rasterize a circle outline using integer decision arithmetic and 8-way
/// symmetry.
///
/// One octant is traced with the decision variable `d = 3 - 2r`; the other
/// seven octants are filled in by reflecting each traced point across the
/// axes and diagonals, so the result is symmetric by construction. The
/// returned set is sorted and deduplicated; callers must not rely on any
/// particular emission order.
///
/// The radius is assumed validated (at least 1); see
/// [`rasterize_circle`](super::rasterize_circle) for the checked entry
/// point.
#[must_use]
pub fn bresenham_circle(circle: Circle) -> Vec<IntPoint> {
    debug_assert!(circle.radius >= 1);

    let Circle { xc, yc, radius } = circle;
    let mut x = 0;
    let mut y = radius;
    let mut d = 3 - 2 * radius;

    let mut pixels = Vec::with_capacity(8 * (radius as usize + 1));

    while x <= y {
        push_symmetric(&mut pixels, xc, yc, x, y);
        if d < 0 {
            d += 4 * x + 6;
        } else {
            d += 4 * (x - y) + 10;
            y -= 1;
        }
        x += 1;
    }

    // Reflections coincide on the axes (x = 0) and at the octant
    // boundary (x = y).
    pixels.sort_unstable();
    pixels.dedup();
    pixels
}

/// Emit the 8 symmetric reflections of the octant offset (dx, dy) around
/// the center.
#[inline]
fn push_symmetric(pixels: &mut Vec<IntPoint>, xc: i32, yc: i32, dx: i32, dy: i32) {
    pixels.push(IntPoint::new(xc + dx, yc + dy));
    pixels.push(IntPoint::new(xc - dx, yc + dy));
    pixels.push(IntPoint::new(xc + dx, yc - dy));
    pixels.push(IntPoint::new(xc - dx, yc - dy));
    pixels.push(IntPoint::new(xc + dy, yc + dx));
    pixels.push(IntPoint::new(xc - dy, yc + dx));
    pixels.push(IntPoint::new(xc + dy, yc - dx));
    pixels.push(IntPoint::new(xc - dy, yc - dx));
}
