use super::{AppointmentStatus, TransitionError};
use serde::{Deserialize, Serialize};
use tracing::debug;

///
/// StatusChange
///
/// One accepted transition. `reason` is only ever set for targets that
/// require confirmation.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct StatusChange {
    pub from: AppointmentStatus,
    pub to: AppointmentStatus,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

///
/// Appointment
///
/// The slice of an appointment record the lifecycle cares about. Status is
/// only changed through `transition`.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    pub id: String,
    status: AppointmentStatus,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    status_reason: Option<String>,
}

impl Appointment {
    /// New appointments start out `scheduled`.
    pub fn new(id: impl Into<String>) -> Self {
        Self::with_status(id, AppointmentStatus::default())
    }

    pub fn with_status(id: impl Into<String>, status: AppointmentStatus) -> Self {
        Self {
            id: id.into(),
            status,
            status_reason: None,
        }
    }

    #[must_use]
    pub const fn status(&self) -> AppointmentStatus {
        self.status
    }

    #[must_use]
    pub fn status_reason(&self) -> Option<&str> {
        self.status_reason.as_deref()
    }

    /// Statuses offered in a transition menu.
    #[must_use]
    pub const fn next_statuses(&self) -> &'static [AppointmentStatus] {
        self.status.allowed_transitions()
    }

    /// Apply a transition. Illegal moves are rejected before anything is
    /// touched; the appointment is unchanged on error.
    pub fn transition(
        &mut self,
        target: AppointmentStatus,
        reason: Option<&str>,
    ) -> Result<StatusChange, TransitionError> {
        TransitionError::check(self.status, target)?;

        let reason = if target.requires_confirmation() {
            reason
                .map(str::trim)
                .filter(|r| !r.is_empty())
                .map(ToString::to_string)
        } else {
            None
        };

        let change = StatusChange {
            from: self.status,
            to: target,
            reason: reason.clone(),
        };

        debug!(appointment = %self.id, from = %change.from, to = %change.to, "appointment status changed");
        self.status = target;
        self.status_reason = reason;

        Ok(change)
    }

    // restore a snapshot taken before an optimistic change
    pub(crate) fn restore(&mut self, status: AppointmentStatus, reason: Option<String>) {
        self.status = status;
        self.status_reason = reason;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use AppointmentStatus::*;

    #[test]
    fn new_appointments_are_scheduled() {
        let appt = Appointment::new("appt-1");

        assert_eq!(appt.status(), Scheduled);
        assert_eq!(appt.next_statuses(), &[Confirmed, Cancelled]);
    }

    #[test]
    fn illegal_transition_leaves_appointment_untouched() {
        let mut appt = Appointment::new("appt-1");
        let before = appt.clone();

        let err = appt.transition(Completed, None).expect_err("no skipping");
        assert!(matches!(err, TransitionError::Illegal { .. }));
        assert_eq!(appt, before);
    }

    #[test]
    fn reasons_are_kept_only_for_confirmation_targets() {
        let mut appt = Appointment::new("appt-1");

        let change = appt.transition(Confirmed, Some("ignored")).unwrap();
        assert_eq!(change.reason, None);

        let change = appt.transition(NoShow, Some("  patient never arrived ")).unwrap();
        assert_eq!(change.reason.as_deref(), Some("patient never arrived"));
        assert_eq!(appt.status_reason(), Some("patient never arrived"));
        assert!(appt.next_statuses().is_empty());
    }

    #[test]
    fn blank_reason_is_dropped() {
        let mut appt = Appointment::new("appt-1");
        let change = appt.transition(Cancelled, Some("   ")).unwrap();

        assert_eq!(change.reason, None);
    }

    #[test]
    fn full_happy_path() {
        let mut appt = Appointment::new("appt-1");

        for to in [Confirmed, InProgress, Completed] {
            appt.transition(to, None).unwrap();
        }
        assert_eq!(appt.status(), Completed);
        assert!(matches!(
            appt.transition(Cancelled, None),
            Err(TransitionError::Terminal { from: Completed })
        ));
    }
}
