use crate::AppPaths;

use super::input::{ActionStates, InputAction};
use super::rendering::Canvas;

/// Errors a game may surface while building its world during startup.
pub type GameLoadError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickCommand {
    Continue,
    Exit,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct InputSnapshot {
    quit_requested: bool,
    actions: ActionStates,
}

impl InputSnapshot {
    pub fn empty() -> Self {
        Self::default()
    }

    pub(crate) fn new(quit_requested: bool, actions: ActionStates) -> Self {
        Self {
            quit_requested,
            actions,
        }
    }

    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }

    pub fn is_down(&self, action: InputAction) -> bool {
        self.actions.is_down(action)
    }

    pub fn with_action_down(mut self, action: InputAction, is_down: bool) -> Self {
        self.actions.set(action, is_down);
        self
    }

    pub fn with_quit_requested(mut self, quit_requested: bool) -> Self {
        self.quit_requested = quit_requested;
        self
    }
}

/// A game hosted by the loop driver. `load` runs once after startup paths
/// resolve and before the window opens; `update` runs once per fixed tick;
/// `draw` fills the frame the renderer presents.
pub trait Game {
    fn load(&mut self, paths: &AppPaths) -> Result<(), GameLoadError>;
    fn update(&mut self, input: &InputSnapshot) -> TickCommand;
    fn draw(&mut self, canvas: &mut Canvas<'_>);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_snapshot_has_nothing_held() {
        let snapshot = InputSnapshot::empty();
        assert!(!snapshot.quit_requested());
        assert!(!snapshot.is_down(InputAction::MoveLeft));
    }

    #[test]
    fn with_action_down_builds_test_snapshots() {
        let snapshot = InputSnapshot::empty()
            .with_action_down(InputAction::MoveRight, true)
            .with_action_down(InputAction::Interact, true)
            .with_action_down(InputAction::Interact, false);

        assert!(snapshot.is_down(InputAction::MoveRight));
        assert!(!snapshot.is_down(InputAction::Interact));
    }
}
