//! Bresenham line rasterization

use crate::Position;

/// Bresenham's line algorithm - returns the cells along the line
///
/// Integer only. Both endpoints are included and consecutive points are
/// 8-connected for every slope. `from == to` yields the single point.
/// The work is proportional to the length of the line, use [`clipped_line`]
/// when the endpoints may lie far outside the canvas.
pub fn bresenham_line(from: Position, to: Position) -> Vec<Position> {
    let (x1, y1) = (i64::from(to.x), i64::from(to.y));
    let dx = (x1 - i64::from(from.x)).abs();
    let dy = -(y1 - i64::from(from.y)).abs();
    let sx = if from.x < to.x { 1 } else { -1 };
    let sy = if from.y < to.y { 1 } else { -1 };
    let mut err = dx + dy;

    let mut points = Vec::new();
    let mut x = i64::from(from.x);
    let mut y = i64::from(from.y);

    loop {
        // x and y never leave the box spanned by the endpoints
        points.push(Position::new(x as i32, y as i32));

        if x == x1 && y == y1 {
            break;
        }

        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            err += dx;
            y += sy;
        }
    }

    points
}

/// The part of the line from `from` to `to` that can touch a `size` canvas
///
/// Along the major axis the line is cut to the canvas plus one cell on each
/// side, so the work is bounded by the canvas size however far away the
/// endpoints are. Lines whose endpoints are both within that band are
/// rasterized unchanged. Cells outside the canvas may still be returned.
pub fn clipped_line(from: Position, to: Position, size: i32) -> Vec<Position> {
    let (x0, y0) = (i64::from(from.x), i64::from(from.y));
    let (x1, y1) = (i64::from(to.x), i64::from(to.y));
    let x_major = (x1 - x0).abs() >= (y1 - y0).abs();

    // (major, minor) coordinates of both endpoints
    let (m0, n0, m1, n1) = if x_major { (x0, y0, x1, y1) } else { (y0, x0, y1, x1) };
    if m0 == m1 {
        return bresenham_line(from, to);
    }

    let lo = m0.min(m1).max(-1);
    let hi = m0.max(m1).min(i64::from(size));
    if lo > hi {
        return Vec::new();
    }

    let minor_at = |m: i64| n0 + div_round(i128::from(m - m0) * i128::from(n1 - n0), i128::from(m1 - m0)) as i64;
    let (a, b) = (m0.clamp(lo, hi), m1.clamp(lo, hi));
    let (na, nb) = (minor_at(a), minor_at(b));

    // clamped values stay between the original endpoints
    let point = |m: i64, n: i64| {
        if x_major {
            Position::new(m as i32, n as i32)
        } else {
            Position::new(n as i32, m as i32)
        }
    };
    bresenham_line(point(a, na), point(b, nb))
}

/// `num / den` rounded to the nearest integer, halves round up
fn div_round(num: i128, den: i128) -> i128 {
    let (num, den) = if den < 0 { (-num, -den) } else { (num, den) };
    (2 * num + den).div_euclid(2 * den)
}
