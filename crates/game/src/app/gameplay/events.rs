/// Observable gameplay moments, surfaced to the host instead of ad-hoc side
/// effects inside the tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum GameEvent {
    GoalReached,
    TreeRemoved { col: u32, row: u32 },
}

#[derive(Debug, Default)]
pub(crate) struct EventBus {
    current_tick_events: Vec<GameEvent>,
}

impl EventBus {
    pub(crate) fn emit(&mut self, event: GameEvent) {
        self.current_tick_events.push(event);
    }

    pub(crate) fn drain_current_tick(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.current_tick_events)
    }
}
