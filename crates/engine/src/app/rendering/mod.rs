mod canvas;
mod renderer;
mod sheet;

pub use canvas::Canvas;
pub use renderer::Renderer;
pub use sheet::{SheetError, SheetRect, SpriteSheet};
