//! Collision detection between the bird and the world.
//!
//! Two independent checks:
//!  1. **Bounds**: the bird left the playable band (above the ceiling or into
//!     the floor), regardless of horizontal position.
//!  2. **Pipes**: the bird overlaps a pipe horizontally and is not fully inside
//!     that pipe's gap.

use crate::bird::Bird;
use crate::floor::Floor;
use crate::pipe::PipePair;

/// Bird above the screen top or touching the floor's top edge.
pub fn hits_bounds(bird: &Bird, floor: &Floor) -> bool {
    bird.top() < 0.0 || bird.bottom() > floor.y()
}

/// Bird overlapping `pipe` outside its gap.
pub fn hits_pipe(bird: &Bird, pipe: &PipePair) -> bool {
    let overlaps_x = bird.left() < pipe.right() && bird.right() > pipe.left();
    if !overlaps_x {
        return false;
    }

    let inside_gap =
        bird.top() >= pipe.gap_start() as f64 && bird.bottom() <= pipe.gap_end() as f64;
    !inside_gap
}

/// Full per-tick check against the bounds and every live pipe.
pub fn collides<'a>(
    bird: &Bird,
    floor: &Floor,
    pipes: impl IntoIterator<Item = &'a PipePair>,
) -> bool {
    hits_bounds(bird, floor) || pipes.into_iter().any(|p| hits_pipe(bird, p))
}
