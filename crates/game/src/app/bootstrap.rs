use engine::{Game, LoopConfig};
use tracing::info;
use tracing_subscriber::EnvFilter;

use super::gameplay::{
    builtin_layout, GameEvent, LayoutError, QuestScene, CANVAS_HEIGHT_PX, CANVAS_WIDTH_PX,
};

pub(crate) struct AppWiring {
    pub(crate) config: LoopConfig,
    pub(crate) game: Box<dyn Game>,
}

pub(crate) fn build_app() -> Result<AppWiring, LayoutError> {
    init_tracing();
    info!("=== Orb Hunt Startup ===");

    let mut scene = QuestScene::from_layout(&builtin_layout())?;
    scene.set_event_hook(|event| {
        if matches!(event, GameEvent::GoalReached) {
            info!("You found the Orb!");
        }
    });
    let config = LoopConfig {
        window_title: "Orb Hunt".to_string(),
        canvas_width: CANVAS_WIDTH_PX as u32,
        canvas_height: CANVAS_HEIGHT_PX as u32,
        ..LoopConfig::default()
    };

    Ok(AppWiring {
        config,
        game: Box::new(scene),
    })
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_names(true)
        .compact()
        .init();
}
