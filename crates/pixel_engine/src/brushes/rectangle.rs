//! Rectangle outline and fill

use crate::Position;

/// Cells of the rectangle spanned by two opposite corners, cut to a `size` canvas
///
/// Corner order doesn't matter. The outline variant yields every on-canvas cell
/// with `x ∈ {min_x, max_x}` or `y ∈ {min_y, max_y}` exactly once. Edges that lie
/// off the canvas contribute nothing, so the work is bounded by the canvas.
pub fn rectangle_points(a: Position, b: Position, size: i32, filled: bool) -> Vec<Position> {
    let (min_x, max_x) = (i64::from(a.x.min(b.x)), i64::from(a.x.max(b.x)));
    let (min_y, max_y) = (i64::from(a.y.min(b.y)), i64::from(a.y.max(b.y)));
    let last = i64::from(size) - 1;

    let (lo_x, hi_x) = (min_x.max(0), max_x.min(last));
    let (lo_y, hi_y) = (min_y.max(0), max_y.min(last));
    let mut points = Vec::new();
    if lo_x > hi_x || lo_y > hi_y {
        return points;
    }

    // every coordinate pushed below is within 0..size
    let cell = |x: i64, y: i64| Position::new(x as i32, y as i32);

    if filled {
        for y in lo_y..=hi_y {
            for x in lo_x..=hi_x {
                points.push(cell(x, y));
            }
        }
        return points;
    }

    let on_canvas = |v: i64| (0..=last).contains(&v);
    let mut rows = vec![min_y, max_y];
    rows.dedup();
    for y in rows.into_iter().filter(|&y| on_canvas(y)) {
        points.extend((lo_x..=hi_x).map(|x| cell(x, y)));
    }
    let (side_lo, side_hi) = ((min_y + 1).max(lo_y), (max_y - 1).min(hi_y));
    let mut columns = vec![min_x, max_x];
    columns.dedup();
    for x in columns.into_iter().filter(|&x| on_canvas(x)) {
        points.extend((side_lo..=side_hi).map(|y| cell(x, y)));
    }

    points
}

/// Move `end` so that `start`..`end` spans a square.
///
/// The square keeps the direction of the drag and takes the shorter side, so it
/// never extends past the point the pointer actually reached.
pub fn constrain_square(start: Position, end: Position) -> Position {
    let dx = i64::from(end.x) - i64::from(start.x);
    let dy = i64::from(end.y) - i64::from(start.y);
    let side = dx.abs().min(dy.abs());
    // the result lies between start and end on both axes
    Position::new(
        (i64::from(start.x) + side * dx.signum()) as i32,
        (i64::from(start.y) + side * dy.signum()) as i32,
    )
}
