//! Form lifecycle status.

use crate::domain::foundation::StateMachine;

/// Where a form controller is in its submit cycle.
///
/// ```text
/// Loading ─► Idle ─► Submitting ─┬─► Succeeded ─► (Idle when nothing navigates away)
///             ▲                  └─► Failed ──┐
///             └───────────────────────────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormStatus {
    /// Edit mode only: the record is being read.
    Loading,
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

impl FormStatus {
    pub fn is_idle(&self) -> bool {
        matches!(self, FormStatus::Idle)
    }
}

impl StateMachine for FormStatus {
    fn can_transition_to(&self, target: &Self) -> bool {
        use FormStatus::*;
        matches!(
            (self, target),
            (Loading, Idle)
                | (Idle, Submitting)
                | (Submitting, Succeeded)
                | (Submitting, Failed)
                | (Failed, Idle)
                | (Succeeded, Idle)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use FormStatus::*;
        match self {
            Loading => vec![Idle],
            Idle => vec![Submitting],
            Submitting => vec![Succeeded, Failed],
            Failed => vec![Idle],
            Succeeded => vec![Idle],
        }
    }
}
