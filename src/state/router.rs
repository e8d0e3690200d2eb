//! Top-level tab switch between the generate and history views.

/// The two top-level views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Generate,
    History,
}

impl Tab {
    pub const ALL: [Tab; 2] = [Tab::Generate, Tab::History];

    pub fn label(&self) -> &'static str {
        match self {
            Tab::Generate => "Generate Quiz",
            Tab::History => "Past Quizzes",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            Tab::Generate => 0,
            Tab::History => 1,
        }
    }

    pub fn next(self) -> Self {
        match self {
            Tab::Generate => Tab::History,
            Tab::History => Tab::Generate,
        }
    }
}

/// Holds only the active tab. Controller state lives elsewhere and is never
/// touched by a switch.
#[derive(Debug, Default)]
pub struct ViewRouter {
    active: Tab,
}

impl ViewRouter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> Tab {
        self.active
    }

    /// Switch tabs. Returns whether the active tab changed.
    pub fn switch_to(&mut self, tab: Tab) -> bool {
        if self.active == tab {
            return false;
        }
        tracing::debug!(from = ?self.active, to = ?tab, "tab switched");
        self.active = tab;
        true
    }

    pub fn cycle(&mut self) -> Tab {
        self.switch_to(self.active.next());
        self.active
    }
}
