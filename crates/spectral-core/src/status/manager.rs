use super::{Appointment, AppointmentStatus, StatusChange, TransitionError};
use thiserror::Error as ThisError;
use tracing::warn;

///
/// StatusUpdateError
///

#[derive(Debug, ThisError)]
pub enum StatusUpdateError<E> {
    #[error(transparent)]
    Transition(#[from] TransitionError),

    #[error("status change was rolled back: {0}")]
    Persist(E),
}

///
/// StatusManager
///
/// Local copy of an appointment plus optimistic status updates: the change
/// is applied locally first, then persisted; if persisting fails the local
/// copy is reverted. Illegal transitions never reach the persist step.
///

#[derive(Clone, Debug)]
pub struct StatusManager {
    appointment: Appointment,
}

impl StatusManager {
    #[must_use]
    pub const fn new(appointment: Appointment) -> Self {
        Self { appointment }
    }

    #[must_use]
    pub const fn appointment(&self) -> &Appointment {
        &self.appointment
    }

    #[must_use]
    pub fn into_appointment(self) -> Appointment {
        self.appointment
    }

    /// Transition menu for the current status.
    #[must_use]
    pub const fn options(&self) -> &'static [AppointmentStatus] {
        self.appointment.next_statuses()
    }

    /// Apply `target` locally, then hand the updated appointment to `persist`.
    pub fn apply<E, F>(
        &mut self,
        target: AppointmentStatus,
        reason: Option<&str>,
        persist: F,
    ) -> Result<StatusChange, StatusUpdateError<E>>
    where
        F: FnOnce(&Appointment, &StatusChange) -> Result<(), E>,
    {
        let previous_status = self.appointment.status();
        let previous_reason = self.appointment.status_reason().map(ToString::to_string);

        let change = self.appointment.transition(target, reason)?;

        match persist(&self.appointment, &change) {
            Ok(()) => Ok(change),
            Err(e) => {
                warn!(
                    appointment = %self.appointment.id,
                    from = %change.from,
                    to = %change.to,
                    "status update failed to persist; reverting"
                );
                self.appointment.restore(previous_status, previous_reason);

                Err(StatusUpdateError::Persist(e))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use AppointmentStatus::*;
    use std::cell::Cell;

    #[test]
    fn successful_persist_keeps_the_change() {
        let mut manager = StatusManager::new(Appointment::new("appt-1"));

        let change = manager
            .apply(Confirmed, None, |appt, change| {
                assert_eq!(appt.status(), Confirmed);
                assert_eq!(change.from, Scheduled);
                Ok::<_, String>(())
            })
            .unwrap();

        assert_eq!(change.to, Confirmed);
        assert_eq!(manager.options(), &[InProgress, Cancelled, NoShow]);
    }

    #[test]
    fn failed_persist_rolls_back() {
        let mut manager =
            StatusManager::new(Appointment::with_status("appt-1", Confirmed));

        let err = manager
            .apply(Cancelled, Some("storm"), |_, _| Err("network down"))
            .expect_err("persist fails");

        assert!(matches!(err, StatusUpdateError::Persist("network down")));
        assert_eq!(manager.appointment().status(), Confirmed);
        assert_eq!(manager.appointment().status_reason(), None);
    }

    #[test]
    fn illegal_transition_never_calls_persist() {
        let mut manager = StatusManager::new(Appointment::new("appt-1"));
        let called = Cell::new(false);

        let err = manager
            .apply(Completed, None, |_, _| {
                called.set(true);
                Ok::<_, String>(())
            })
            .expect_err("illegal");

        assert!(matches!(err, StatusUpdateError::Transition(_)));
        assert!(!called.get());
        assert_eq!(manager.appointment().status(), Scheduled);
    }
}
