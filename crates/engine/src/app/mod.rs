mod game;
mod input;
mod loop_runner;
mod metrics;
mod rendering;

pub use game::{Game, GameLoadError, InputSnapshot, TickCommand};
pub use input::InputAction;
pub use loop_runner::{run_app, AppError, LoopConfig};
pub use metrics::LoopMetricsSnapshot;
pub use rendering::{Canvas, Renderer, SheetError, SheetRect, SpriteSheet};
