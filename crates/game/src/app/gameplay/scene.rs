use std::path::Path;

use engine::{
    AppPaths, Canvas, Game, GameLoadError, InputAction, InputSnapshot, SpriteSheet, TickCommand,
};
use tracing::{info, warn};

use super::animation::WalkAnimation;
use super::events::{EventBus, GameEvent};
use super::grid::{BuiltGrid, LayoutError, TileCode, TileGrid};
use super::level;
use super::movement::{resolve_move, CanvasBounds, ContactState, Facing, GoalState, Player};
use super::{
    BACKGROUND_COLOR, CANVAS_HEIGHT_PX, CANVAS_WIDTH_PX, SPRITE_HEIGHT_PX, SPRITE_WIDTH_PX,
    TILE_SIZE_PX, WALK_SPEED_PX_PER_TICK, WIN_BACKGROUND_COLOR,
};

const CHARACTER_SHEET_FILE: &str = "character.png";
const FEATURES_SHEET_FILE: &str = "features.png";

const PLAYER_PLACEHOLDER_COLOR: [u8; 4] = [220, 220, 240, 255];
const WALL_PLACEHOLDER_COLOR: [u8; 4] = [112, 83, 58, 255];
const TREE_PLACEHOLDER_COLOR: [u8; 4] = [74, 112, 56, 255];
const GOAL_PLACEHOLDER_COLOR: [u8; 4] = [255, 210, 70, 255];

struct QuestSheets {
    character: SpriteSheet,
    features: SpriteSheet,
}

impl QuestSheets {
    fn load(assets_dir: &Path) -> Result<Self, engine::SheetError> {
        let character = SpriteSheet::load(&assets_dir.join(CHARACTER_SHEET_FILE))?;
        let features = SpriteSheet::load(&assets_dir.join(FEATURES_SHEET_FILE))?;
        Ok(Self {
            character,
            features,
        })
    }
}

/// The whole game state: grid, player, goal progress, tree contact, and the
/// walk animation, owned by one struct and driven once per tick.
pub(crate) struct QuestScene {
    grid: TileGrid,
    player: Player,
    goal: GoalState,
    contact: ContactState,
    animation: WalkAnimation,
    events: EventBus,
    event_hook: Option<Box<dyn FnMut(GameEvent)>>,
    sheets: Option<QuestSheets>,
    bounds: CanvasBounds,
}

impl QuestScene {
    pub(crate) fn from_layout(layout: &[Vec<i8>]) -> Result<Self, LayoutError> {
        let BuiltGrid {
            grid,
            start_px,
            goal_px,
        } = TileGrid::from_layout(layout)?;
        Ok(Self {
            grid,
            player: Player {
                x: start_px.0,
                y: start_px.1,
                facing: Facing::Down,
            },
            goal: GoalState {
                x: goal_px.0,
                y: goal_px.1,
                reached: false,
            },
            contact: ContactState::default(),
            animation: WalkAnimation::default(),
            events: EventBus::default(),
            event_hook: None,
            sheets: None,
            bounds: CanvasBounds {
                width: CANVAS_WIDTH_PX,
                height: CANVAS_HEIGHT_PX,
            },
        })
    }

    /// Registers the host callback that observes gameplay events; events are
    /// also logged either way.
    pub(crate) fn set_event_hook(&mut self, hook: impl FnMut(GameEvent) + 'static) {
        self.event_hook = Some(Box::new(hook));
    }

    fn reset_from_layout(&mut self, layout: &[Vec<i8>]) -> Result<(), LayoutError> {
        let rebuilt = Self::from_layout(layout)?;
        self.grid = rebuilt.grid;
        self.player = rebuilt.player;
        self.goal = rebuilt.goal;
        self.contact = rebuilt.contact;
        self.animation = rebuilt.animation;
        Ok(())
    }

    fn update_tick(&mut self, input: &InputSnapshot) -> TickCommand {
        if input.quit_requested() {
            return TickCommand::Exit;
        }

        let moved = match held_move(input) {
            Some((delta, facing)) => {
                let entered_goal = resolve_move(
                    &mut self.player,
                    &self.grid,
                    &mut self.goal,
                    &mut self.contact,
                    delta,
                    facing,
                    self.bounds,
                );
                if entered_goal {
                    self.events.emit(GameEvent::GoalReached);
                }
                true
            }
            None => false,
        };

        if input.is_down(InputAction::Interact) && self.contact.touching_tree {
            if let Some(index) = self.contact.tree_cell {
                if self.grid.remove_tree(index) {
                    let (col, row) = self.grid.col_row_of(index);
                    self.events.emit(GameEvent::TreeRemoved { col, row });
                }
                self.contact.clear();
            }
        }

        self.animation.tick(moved);
        self.dispatch_events();
        TickCommand::Continue
    }

    fn dispatch_events(&mut self) {
        for event in self.events.drain_current_tick() {
            match event {
                GameEvent::GoalReached => info!("goal_reached"),
                GameEvent::TreeRemoved { col, row } => info!(col, row, "tree_removed"),
            }
            if let Some(hook) = self.event_hook.as_mut() {
                hook(event);
            }
        }
    }

    // The sprite is drawn before the grid pass, so decorations sharing its
    // pixels occlude it. Swapping the passes changes the visible z-order.
    fn draw_world(&mut self, canvas: &mut Canvas<'_>) {
        let background = if self.goal.reached {
            WIN_BACKGROUND_COLOR
        } else {
            BACKGROUND_COLOR
        };
        canvas.clear(background);

        match &self.sheets {
            Some(sheets) => {
                if let Some(src) = sheets.character.cell(
                    self.animation.frame_column(),
                    self.player.facing.sheet_row(),
                    TILE_SIZE_PX as u32,
                ) {
                    canvas.blit(&sheets.character, src, self.player.x, self.player.y);
                }
                for cell in self.grid.cells() {
                    if cell.frame == TileCode::Empty {
                        continue;
                    }
                    if let Some(src) =
                        sheets
                            .features
                            .cell(cell.frame.sheet_column(), 0, TILE_SIZE_PX as u32)
                    {
                        canvas.blit(&sheets.features, src, cell.x, cell.y);
                    }
                }
            }
            None => {
                canvas.fill_rect(
                    self.player.x,
                    self.player.y,
                    SPRITE_WIDTH_PX as u32,
                    SPRITE_HEIGHT_PX as u32,
                    PLAYER_PLACEHOLDER_COLOR,
                );
                for cell in self.grid.cells() {
                    if cell.frame == TileCode::Empty {
                        continue;
                    }
                    canvas.fill_rect(
                        cell.x,
                        cell.y,
                        TILE_SIZE_PX as u32,
                        TILE_SIZE_PX as u32,
                        placeholder_color(cell.frame),
                    );
                }
            }
        }
    }
}

fn placeholder_color(frame: TileCode) -> [u8; 4] {
    match frame {
        TileCode::Empty => BACKGROUND_COLOR,
        TileCode::Wall => WALL_PLACEHOLDER_COLOR,
        TileCode::Tree => TREE_PLACEHOLDER_COLOR,
        TileCode::Goal => GOAL_PLACEHOLDER_COLOR,
    }
}

/// Movement keys are mutually exclusive: the first held key in the fixed
/// priority order Up, Down, Left, Right drives this tick.
fn held_move(input: &InputSnapshot) -> Option<((i32, i32), Facing)> {
    if input.is_down(InputAction::MoveUp) {
        Some(((0, -WALK_SPEED_PX_PER_TICK), Facing::Up))
    } else if input.is_down(InputAction::MoveDown) {
        Some(((0, WALK_SPEED_PX_PER_TICK), Facing::Down))
    } else if input.is_down(InputAction::MoveLeft) {
        Some(((-WALK_SPEED_PX_PER_TICK, 0), Facing::Left))
    } else if input.is_down(InputAction::MoveRight) {
        Some(((WALK_SPEED_PX_PER_TICK, 0), Facing::Right))
    } else {
        None
    }
}

impl Game for QuestScene {
    fn load(&mut self, paths: &AppPaths) -> Result<(), GameLoadError> {
        if let Some(level) = level::load_override(&paths.assets_dir)? {
            self.reset_from_layout(&level.rows)?;
            info!(source = level::LEVEL_OVERRIDE_FILE, "level_override_loaded");
        }

        self.sheets = match QuestSheets::load(&paths.assets_dir) {
            Ok(sheets) => Some(sheets),
            Err(error) => {
                warn!(error = %error, "sheet_load_failed_using_placeholders");
                None
            }
        };

        info!(
            rows = self.grid.rows(),
            cols = self.grid.cols(),
            start_x = self.player.x,
            start_y = self.player.y,
            "world_loaded"
        );
        Ok(())
    }

    fn update(&mut self, input: &InputSnapshot) -> TickCommand {
        self.update_tick(input)
    }

    fn draw(&mut self, canvas: &mut Canvas<'_>) {
        self.draw_world(canvas);
    }
}
