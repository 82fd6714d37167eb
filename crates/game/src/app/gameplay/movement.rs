use super::collision::{overlaps, Hitbox};
use super::grid::{TileCode, TileGrid};
use super::{
    GOAL_CELL_INSET_PX, GOAL_PROBE_GROWTH_PX, OBSTACLE_INSET_PX, SPRITE_HEIGHT_PX,
    SPRITE_WIDTH_PX, TILE_SIZE_PX,
};

/// Facing direction, encoded as the character sheet row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Facing {
    Down,
    Left,
    Right,
    Up,
}

impl Facing {
    pub(crate) fn sheet_row(self) -> u32 {
        match self {
            Self::Down => 0,
            Self::Left => 1,
            Self::Right => 2,
            Self::Up => 3,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Player {
    pub(crate) x: i32,
    pub(crate) y: i32,
    pub(crate) facing: Facing,
}

/// Which cell, if any, the player is currently pressed against. Only tree
/// cells are recorded; they gate the chop action.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct ContactState {
    pub(crate) touching_tree: bool,
    pub(crate) tree_cell: Option<usize>,
}

impl ContactState {
    pub(crate) fn clear(&mut self) {
        *self = Self::default();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct GoalState {
    pub(crate) x: i32,
    pub(crate) y: i32,
    pub(crate) reached: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct CanvasBounds {
    pub(crate) width: i32,
    pub(crate) height: i32,
}

fn sprite_hitbox(x: i32, y: i32) -> Hitbox {
    Hitbox {
        x: x + OBSTACLE_INSET_PX,
        y: y + OBSTACLE_INSET_PX,
        w: SPRITE_WIDTH_PX - OBSTACLE_INSET_PX,
        h: SPRITE_HEIGHT_PX - OBSTACLE_INSET_PX,
    }
}

fn obstacle_hitbox(x: i32, y: i32) -> Hitbox {
    Hitbox {
        x: x + OBSTACLE_INSET_PX,
        y: y + OBSTACLE_INSET_PX,
        w: TILE_SIZE_PX - OBSTACLE_INSET_PX,
        h: TILE_SIZE_PX - OBSTACLE_INSET_PX,
    }
}

// The goal probe is wider and taller than the sprite; paired with the goal
// cell's deep inset this is historical tuning, kept as-is.
fn goal_probe_hitbox(x: i32, y: i32) -> Hitbox {
    Hitbox {
        x: x + OBSTACLE_INSET_PX,
        y: y + OBSTACLE_INSET_PX,
        w: SPRITE_WIDTH_PX + GOAL_PROBE_GROWTH_PX,
        h: SPRITE_HEIGHT_PX + GOAL_PROBE_GROWTH_PX,
    }
}

fn goal_cell_hitbox(x: i32, y: i32) -> Hitbox {
    Hitbox {
        x: x + GOAL_CELL_INSET_PX,
        y: y + GOAL_CELL_INSET_PX,
        w: TILE_SIZE_PX - GOAL_CELL_INSET_PX,
        h: TILE_SIZE_PX - GOAL_CELL_INSET_PX,
    }
}

/// One movement attempt: apply the delta per axis (each axis gated on the
/// canvas border independently), roll the whole delta back on any obstacle
/// overlap, refresh tree contact, and probe the goal. Facing always updates,
/// even when the move was rolled back. Returns true when this attempt
/// entered the goal for the first time.
///
/// The obstacle scan runs in row-major order against the evolving position;
/// a later colliding cell overwrites earlier contact, so a tree hit earlier
/// in the scan can be forgotten. Deliberately preserved (see DESIGN.md).
pub(crate) fn resolve_move(
    player: &mut Player,
    grid: &TileGrid,
    goal: &mut GoalState,
    contact: &mut ContactState,
    delta: (i32, i32),
    facing: Facing,
    bounds: CanvasBounds,
) -> bool {
    let (dx, dy) = delta;
    contact.clear();

    if player.x + dx > 0 && player.x + SPRITE_WIDTH_PX + dx < bounds.width {
        player.x += dx;
    }
    if player.y + dy > 0 && player.y + SPRITE_HEIGHT_PX + dy < bounds.height {
        player.y += dy;
    }

    for (index, cell) in grid.cells().iter().enumerate() {
        if !cell.frame.blocks_movement() {
            continue;
        }
        if overlaps(
            sprite_hitbox(player.x, player.y),
            obstacle_hitbox(cell.x, cell.y),
        ) {
            player.x -= dx;
            player.y -= dy;
            if cell.frame == TileCode::Tree {
                contact.touching_tree = true;
                contact.tree_cell = Some(index);
            } else {
                contact.clear();
            }
        }
    }

    let goal_entered = !goal.reached
        && overlaps(
            goal_probe_hitbox(player.x, player.y),
            goal_cell_hitbox(goal.x, goal.y),
        );
    if goal_entered {
        goal.reached = true;
    }

    player.facing = facing;
    goal_entered
}
