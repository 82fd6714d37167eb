/// Axis-aligned box used for collision tests, in canvas pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Hitbox {
    pub(crate) x: i32,
    pub(crate) y: i32,
    pub(crate) w: i32,
    pub(crate) h: i32,
}

/// Overlap predicate: boxes are separated only when one box's min edge lies
/// strictly beyond the other's max edge on some axis, so edge-touching boxes
/// still count as overlapping.
pub(crate) fn overlaps(a: Hitbox, b: Hitbox) -> bool {
    !(b.x > a.x + a.w || a.x > b.x + b.w || b.y > a.y + a.h || a.y > b.y + b.h)
}
