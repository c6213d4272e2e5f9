//! Appointment lifecycle.
//!
//! | from          | allowed to                        |
//! |---------------|-----------------------------------|
//! | `scheduled`   | `confirmed`, `cancelled`          |
//! | `confirmed`   | `in-progress`, `cancelled`, `no-show` |
//! | `in-progress` | `completed`                       |
//! | `completed`, `cancelled`, `no-show` | terminal    |

mod appointment;
mod manager;

pub use appointment::*;
pub use manager::*;

use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error as ThisError;

///
/// AppointmentStatus
///

#[derive(
    Clone, Copy, Debug, Default, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum AppointmentStatus {
    #[default]
    Scheduled,
    Confirmed,
    InProgress,
    Completed,
    Cancelled,
    NoShow,
}

impl AppointmentStatus {
    pub const ALL: [Self; 6] = [
        Self::Scheduled,
        Self::Confirmed,
        Self::InProgress,
        Self::Completed,
        Self::Cancelled,
        Self::NoShow,
    ];

    /// Wire literal (`in-progress`, `no-show`, ...).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Scheduled => "scheduled",
            Self::Confirmed => "confirmed",
            Self::InProgress => "in-progress",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
            Self::NoShow => "no-show",
        }
    }

    /// Human label for menus and badges.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Scheduled => "Scheduled",
            Self::Confirmed => "Confirmed",
            Self::InProgress => "In Progress",
            Self::Completed => "Completed",
            Self::Cancelled => "Cancelled",
            Self::NoShow => "No Show",
        }
    }

    #[must_use]
    pub const fn allowed_transitions(self) -> &'static [Self] {
        match self {
            Self::Scheduled => &[Self::Confirmed, Self::Cancelled],
            Self::Confirmed => &[Self::InProgress, Self::Cancelled, Self::NoShow],
            Self::InProgress => &[Self::Completed],
            Self::Completed | Self::Cancelled | Self::NoShow => &[],
        }
    }

    #[must_use]
    pub fn can_transition(self, target: Self) -> bool {
        self.allowed_transitions().contains(&target)
    }

    #[must_use]
    pub const fn is_terminal(self) -> bool {
        self.allowed_transitions().is_empty()
    }

    /// Moving *to* this status asks the user to confirm and offers a reason
    /// field. Presentation policy only; `can_transition` ignores it.
    #[must_use]
    pub const fn requires_confirmation(self) -> bool {
        matches!(self, Self::Cancelled | Self::NoShow)
    }
}

impl fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AppointmentStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| UnknownStatus(s.to_string()))
    }
}

/// Legal next states from `current`.
#[must_use]
pub const fn allowed_transitions(current: AppointmentStatus) -> &'static [AppointmentStatus] {
    current.allowed_transitions()
}

/// Whether `target` is a legal next state from `current`.
#[must_use]
pub fn can_transition(current: AppointmentStatus, target: AppointmentStatus) -> bool {
    current.can_transition(target)
}

///
/// UnknownStatus
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
#[error("unknown appointment status '{0}'")]
pub struct UnknownStatus(pub String);

///
/// TransitionError
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum TransitionError {
    #[error("appointment is already {from}; no further status changes are allowed")]
    Terminal { from: AppointmentStatus },

    #[error("cannot move appointment from {from} to {to}")]
    Illegal {
        from: AppointmentStatus,
        to: AppointmentStatus,
    },
}

impl TransitionError {
    /// Check a move, failing closed on anything outside the table.
    pub fn check(from: AppointmentStatus, to: AppointmentStatus) -> Result<(), Self> {
        if from.is_terminal() {
            Err(Self::Terminal { from })
        } else if from.can_transition(to) {
            Ok(())
        } else {
            Err(Self::Illegal { from, to })
        }
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use AppointmentStatus::*;

    #[test]
    fn transition_table_matches_lifecycle() {
        assert_eq!(allowed_transitions(Scheduled), &[Confirmed, Cancelled]);
        assert_eq!(allowed_transitions(Confirmed), &[InProgress, Cancelled, NoShow]);
        assert_eq!(allowed_transitions(InProgress), &[Completed]);

        assert!(can_transition(Scheduled, Confirmed));
        assert!(!can_transition(Scheduled, Completed));
        assert!(!can_transition(Scheduled, InProgress));
        assert!(!can_transition(InProgress, Cancelled));
    }

    #[test]
    fn terminal_states_have_no_exits() {
        for from in [Completed, Cancelled, NoShow] {
            assert!(from.is_terminal());
            for to in AppointmentStatus::ALL {
                assert!(!can_transition(from, to), "{from} -> {to}");
            }
        }
    }

    #[test]
    fn no_state_transitions_to_itself() {
        for status in AppointmentStatus::ALL {
            assert!(!status.can_transition(status));
        }
    }

    #[test]
    fn only_cancel_and_no_show_need_confirmation() {
        let confirm: Vec<_> = AppointmentStatus::ALL
            .into_iter()
            .filter(|s| s.requires_confirmation())
            .collect();

        assert_eq!(confirm, [Cancelled, NoShow]);
    }

    #[test]
    fn literals_parse_and_serialize_in_kebab_case() {
        assert_eq!("in-progress".parse::<AppointmentStatus>(), Ok(InProgress));
        assert_eq!("no-show".parse::<AppointmentStatus>(), Ok(NoShow));
        assert_eq!(
            "InProgress".parse::<AppointmentStatus>(),
            Err(UnknownStatus("InProgress".to_string()))
        );

        assert_eq!(serde_json::to_string(&NoShow).unwrap(), "\"no-show\"");
        assert_eq!(
            serde_json::from_str::<AppointmentStatus>("\"in-progress\"").unwrap(),
            InProgress
        );
    }

    #[test]
    fn check_distinguishes_terminal_from_illegal() {
        assert_eq!(TransitionError::check(Scheduled, Confirmed), Ok(()));
        assert_eq!(
            TransitionError::check(Completed, Scheduled),
            Err(TransitionError::Terminal { from: Completed })
        );
        assert_eq!(
            TransitionError::check(Scheduled, Completed),
            Err(TransitionError::Illegal {
                from: Scheduled,
                to: Completed
            })
        );
    }
}
