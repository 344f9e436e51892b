//! Flood fill (4-connected)

use std::collections::{HashSet, VecDeque};

use crate::Position;

/// Compute the cells reached by a 4-connected flood fill from `start`.
///
/// `get_pixel` is evaluated against the unmodified source, the caller applies the
/// result afterwards. Each cell is visited at most once and the traversal stays in
/// `0..size` on both axes. A start outside the canvas yields an empty set.
pub fn flood_fill_points<T, F>(start: Position, size: i32, get_pixel: F) -> HashSet<Position>
where
    T: PartialEq,
    F: Fn(Position) -> T,
{
    let mut result = HashSet::new();
    if !start.is_inside(size) {
        return result;
    }

    let target = get_pixel(start);

    let mut queue = VecDeque::new();
    queue.push_back(start);
    result.insert(start);

    while let Some(pos) = queue.pop_front() {
        for (dx, dy) in [(-1, 0), (1, 0), (0, -1), (0, 1)] {
            let next = Position::new(pos.x + dx, pos.y + dy);
            if !next.is_inside(size) || result.contains(&next) {
                continue;
            }
            if get_pixel(next) == target {
                result.insert(next);
                queue.push_back(next);
            }
        }
    }

    result
}
