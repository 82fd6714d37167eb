mod animation;
mod collision;
mod events;
mod grid;
mod level;
mod movement;
mod scene;

pub(crate) use events::GameEvent;
pub(crate) use grid::LayoutError;
pub(crate) use level::builtin_layout;
pub(crate) use scene::QuestScene;

pub(crate) const CANVAS_WIDTH_PX: i32 = 640;
pub(crate) const CANVAS_HEIGHT_PX: i32 = 480;
pub(crate) const TILE_SIZE_PX: i32 = 32;
pub(crate) const SPRITE_WIDTH_PX: i32 = 32;
pub(crate) const SPRITE_HEIGHT_PX: i32 = 32;
pub(crate) const WALK_SPEED_PX_PER_TICK: i32 = 1;
pub(crate) const WALK_CYCLE: [u32; 4] = [1, 2, 1, 0];
pub(crate) const WALK_FRAME_TICKS: u32 = 12;

// Historical collision tuning, kept bit-for-bit: obstacle boxes pull in only
// their min edges, and the goal probe is wider than the sprite itself.
pub(crate) const OBSTACLE_INSET_PX: i32 = 4;
pub(crate) const GOAL_PROBE_GROWTH_PX: i32 = 4;
pub(crate) const GOAL_CELL_INSET_PX: i32 = 8;

pub(crate) const BACKGROUND_COLOR: [u8; 4] = [20, 22, 28, 255];
pub(crate) const WIN_BACKGROUND_COLOR: [u8; 4] = [0x0f, 0x60, 0x00, 255];
