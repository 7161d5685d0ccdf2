//! Toggle policy for viewport-entry animations.
//!
//! A [`TriggerTracker`] turns successive phase observations into crossing
//! events; [`ToggleActions`] maps each event to what the tween should do.
//! The common policy `"play none none reverse"` plays on the way down,
//! reverses when scrolled back above the start, and ignores repeats.

use std::fmt;
use std::str::FromStr;

use super::position::Phase;
use crate::error::ParseTriggerError;

/// Crossing of a range boundary.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Crossing {
    /// Start passed while scrolling down.
    Enter,
    /// End passed while scrolling down.
    Leave,
    /// End passed while scrolling up.
    EnterBack,
    /// Start passed while scrolling up.
    LeaveBack,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct TriggerTracker {
    phase: Phase,
}

impl TriggerTracker {
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Move to `next`, returning every boundary crossed on the way.
    /// A jump over the whole range reports both crossings in order.
    pub fn advance(&mut self, next: Phase) -> &'static [Crossing] {
        use Crossing::*;
        use Phase::*;

        let crossed: &'static [Crossing] = match (self.phase, next) {
            (Before, Active) => &[Enter],
            (Before, After) => &[Enter, Leave],
            (Active, After) => &[Leave],
            (After, Active) => &[EnterBack],
            (After, Before) => &[EnterBack, LeaveBack],
            (Active, Before) => &[LeaveBack],
            _ => &[],
        };
        self.phase = next;
        crossed
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ToggleAction {
    Play,
    Pause,
    Resume,
    Reverse,
    Restart,
    Reset,
    Complete,
    #[default]
    None,
}

impl FromStr for ToggleAction {
    type Err = ParseTriggerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "play" => ToggleAction::Play,
            "pause" => ToggleAction::Pause,
            "resume" => ToggleAction::Resume,
            "reverse" => ToggleAction::Reverse,
            "restart" => ToggleAction::Restart,
            "reset" => ToggleAction::Reset,
            "complete" => ToggleAction::Complete,
            "none" => ToggleAction::None,
            other => return Err(ParseTriggerError::UnknownAction(other.to_string())),
        })
    }
}

impl fmt::Display for ToggleAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ToggleAction::Play => "play",
            ToggleAction::Pause => "pause",
            ToggleAction::Resume => "resume",
            ToggleAction::Reverse => "reverse",
            ToggleAction::Restart => "restart",
            ToggleAction::Reset => "reset",
            ToggleAction::Complete => "complete",
            ToggleAction::None => "none",
        })
    }
}

/// Actions for enter, leave, enter-back and leave-back, in that order.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct ToggleActions {
    pub on_enter: ToggleAction,
    pub on_leave: ToggleAction,
    pub on_enter_back: ToggleAction,
    pub on_leave_back: ToggleAction,
}

impl Default for ToggleActions {
    fn default() -> Self {
        Self {
            on_enter: ToggleAction::Play,
            on_leave: ToggleAction::None,
            on_enter_back: ToggleAction::None,
            on_leave_back: ToggleAction::None,
        }
    }
}

impl ToggleActions {
    pub const PLAY_THEN_REVERSE: ToggleActions = ToggleActions {
        on_enter: ToggleAction::Play,
        on_leave: ToggleAction::None,
        on_enter_back: ToggleAction::None,
        on_leave_back: ToggleAction::Reverse,
    };

    pub fn action_for(&self, crossing: Crossing) -> ToggleAction {
        match crossing {
            Crossing::Enter => self.on_enter,
            Crossing::Leave => self.on_leave,
            Crossing::EnterBack => self.on_enter_back,
            Crossing::LeaveBack => self.on_leave_back,
        }
    }

    /// The last non-`none` action among `crossings`.
    pub fn resolve(&self, crossings: &[Crossing]) -> Option<ToggleAction> {
        crossings
            .iter()
            .rev()
            .map(|c| self.action_for(*c))
            .find(|a| *a != ToggleAction::None)
    }
}

impl FromStr for ToggleActions {
    type Err = ParseTriggerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parsed = s
            .split_whitespace()
            .map(str::parse)
            .collect::<Result<Vec<ToggleAction>, _>>()?;
        if parsed.is_empty() || parsed.len() > 4 {
            return Err(ParseTriggerError::ActionCount(parsed.len()));
        }
        let slot = |i: usize| parsed.get(i).copied().unwrap_or_default();
        Ok(Self {
            on_enter: slot(0),
            on_leave: slot(1),
            on_enter_back: slot(2),
            on_leave_back: slot(3),
        })
    }
}

impl fmt::Display for ToggleActions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.on_enter, self.on_leave, self.on_enter_back, self.on_leave_back
        )
    }
}
