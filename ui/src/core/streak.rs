//! Streak badge projection.

use crate::t;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Streak(pub u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreakState {
    Idle,
    Active,
}

impl Streak {
    pub fn count(self) -> u32 {
        self.0
    }

    pub fn state(self) -> StreakState {
        if self.0 > 0 {
            StreakState::Active
        } else {
            StreakState::Idle
        }
    }

    /// The numeral is hidden while idle.
    pub fn numeral(self) -> Option<u32> {
        match self.state() {
            StreakState::Active => Some(self.0),
            StreakState::Idle => None,
        }
    }

    /// Tooltip text, pluralized by the active locale.
    pub fn title(self) -> String {
        t!("streak-title", count = self.0)
    }

    pub fn css_class(self) -> &'static str {
        match self.state() {
            StreakState::Active => "navbar__streak navbar__streak--active",
            StreakState::Idle => "navbar__streak navbar__streak--idle",
        }
    }
}
