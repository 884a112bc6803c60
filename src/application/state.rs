/// Whether clock ticks advance the grid
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum RunState {
    #[default]
    Stopped,
    Running,
}

/// Requested change of [`RunState`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    Start,
    Stop,
    Toggle,
}

impl RunState {
    /// Transition table. Start and Stop are idempotent.
    pub const fn next(self, transition: Transition) -> Self {
        match (self, transition) {
            (_, Transition::Start) => RunState::Running,
            (_, Transition::Stop) => RunState::Stopped,
            (RunState::Stopped, Transition::Toggle) => RunState::Running,
            (RunState::Running, Transition::Toggle) => RunState::Stopped,
        }
    }

    pub const fn is_running(self) -> bool {
        matches!(self, RunState::Running)
    }
}
