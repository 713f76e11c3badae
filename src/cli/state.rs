//! Session control flow.
//!
//! The state is a single owned value and transitions are a pure function of
//! `(state, event)`; handlers perform I/O and emit events, nothing else
//! mutates control flow.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    MainMenu,
    HelpMenu,
    QueryResult { selection: usize },
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    ReportChosen(usize),
    HelpOpened,
    HelpClosed,
    ReturnedToMenu,
    QuitRequested,
}

impl SessionState {
    pub fn apply(self, event: SessionEvent) -> SessionState {
        match (self, event) {
            (_, SessionEvent::QuitRequested) => SessionState::Quit,
            (SessionState::MainMenu, SessionEvent::ReportChosen(selection)) => {
                SessionState::QueryResult { selection }
            }
            (SessionState::MainMenu, SessionEvent::HelpOpened) => SessionState::HelpMenu,
            (SessionState::HelpMenu, SessionEvent::HelpClosed) => SessionState::MainMenu,
            (SessionState::QueryResult { .. }, SessionEvent::ReturnedToMenu) => {
                SessionState::MainMenu
            }
            // Events that do not apply to the current state leave it unchanged
            (state, _) => state,
        }
    }
}
