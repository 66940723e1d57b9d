//! Mobile navigation menu state.

/// Events the menu reacts to
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuEvent {
    TriggerClicked,
    LinkClicked,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum MenuState {
    Open,
    #[default]
    Closed,
}

impl MenuState {
    pub fn is_open(&self) -> bool {
        matches!(self, MenuState::Open)
    }

    pub fn apply(self, event: MenuEvent) -> MenuState {
        match event {
            MenuEvent::TriggerClicked => match self {
                MenuState::Open => MenuState::Closed,
                MenuState::Closed => MenuState::Open,
            },
            // Navigating always collapses the menu
            MenuEvent::LinkClicked => MenuState::Closed,
        }
    }
}
