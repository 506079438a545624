//! Submission gate for approve/reject/update actions.

use std::future::Future;

use contracts::shared::review::ReviewDecision;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::error::AppError;
use crate::shared::notifications::{use_notifications, Notifications};

#[derive(Debug, Clone, Default, PartialEq)]
pub enum MutationState {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed(String),
}

/// `Idle -> Submitting -> Succeeded | Failed`. While submitting, further
/// submissions are refused without reaching the network.
#[derive(Debug, Clone, Default)]
pub struct MutationGate {
    state: MutationState,
}

impl MutationGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &MutationState {
        &self.state
    }

    pub fn is_processing(&self) -> bool {
        self.state == MutationState::Submitting
    }

    /// Runs `call` and enters `Submitting` unless a submission is already in
    /// flight, in which case `call` is not invoked.
    pub fn admit<R>(&mut self, call: impl FnOnce() -> R) -> Option<R> {
        if self.is_processing() {
            return None;
        }
        self.state = MutationState::Submitting;
        Some(call())
    }

    pub fn finish<T>(&mut self, result: &Result<T, AppError>) {
        self.state = match result {
            Ok(_) => MutationState::Succeeded,
            Err(err) => MutationState::Failed(err.user_message()),
        };
    }

    pub fn reset(&mut self) {
        if !self.is_processing() {
            self.state = MutationState::Idle;
        }
    }
}

/// Notes sent with a review decision. Rejecting requires a reason.
pub fn review_notes(decision: ReviewDecision, notes: &str) -> Result<String, AppError> {
    let notes = notes.trim();
    if decision == ReviewDecision::Reject && notes.is_empty() {
        return Err(AppError::Rule(
            "Veuillez indiquer le motif du rejet.".to_string(),
        ));
    }
    Ok(notes.to_string())
}

/// Validates the notes, then submits through the gate. A rule violation
/// returns before `call` could run.
pub fn guard_review<R>(
    gate: &mut MutationGate,
    decision: ReviewDecision,
    notes: &str,
    call: impl FnOnce(String) -> R,
) -> Result<Option<R>, AppError> {
    let notes = review_notes(decision, notes)?;
    Ok(gate.admit(|| call(notes)))
}

/// Reactive gate shared by a screen's action buttons.
#[derive(Clone, Copy)]
pub struct MutationHandle {
    pub gate: RwSignal<MutationGate>,
    notifications: Notifications,
}

pub fn use_mutation() -> MutationHandle {
    MutationHandle {
        gate: RwSignal::new(MutationGate::new()),
        notifications: use_notifications(),
    }
}

impl MutationHandle {
    pub fn is_processing(&self) -> bool {
        self.gate.with(|g| g.is_processing())
    }

    /// Starts `call` unless a submission is in flight. `on_success` runs with
    /// the response; failures become a single notification.
    pub fn run<T, Fut>(
        &self,
        context: &'static str,
        call: impl FnOnce() -> Fut,
        on_success: impl FnOnce(T) + 'static,
    ) where
        T: 'static,
        Fut: Future<Output = Result<T, AppError>> + 'static,
    {
        let Some(future) = self.gate.try_update(|g| g.admit(call)).flatten() else {
            log::debug!("{}: submission ignored, another one is in flight", context);
            return;
        };
        self.drive(context, future, on_success);
    }

    /// Review flavour of [`run`](Self::run): enforces the notes rule first.
    pub fn run_review<T, Fut>(
        &self,
        context: &'static str,
        decision: ReviewDecision,
        notes: &str,
        call: impl FnOnce(String) -> Fut,
        on_success: impl FnOnce(T) + 'static,
    ) where
        T: 'static,
        Fut: Future<Output = Result<T, AppError>> + 'static,
    {
        let admitted = self
            .gate
            .try_update(|g| guard_review(g, decision, notes, call));
        match admitted {
            Some(Ok(Some(future))) => self.drive(context, future, on_success),
            Some(Err(err)) => self.notifications.report(&err, context),
            _ => log::debug!("{}: submission ignored", context),
        }
    }

    fn drive<T, Fut>(&self, context: &'static str, future: Fut, on_success: impl FnOnce(T) + 'static)
    where
        T: 'static,
        Fut: Future<Output = Result<T, AppError>> + 'static,
    {
        let gate = self.gate;
        let notifications = self.notifications;
        spawn_local(async move {
            let result = future.await;
            gate.update(|g| g.finish(&result));
            match result {
                Ok(value) => on_success(value),
                Err(err) => notifications.report(&err, context),
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_double_submit_makes_one_call() {
        let mut gate = MutationGate::new();
        let mut calls = 0;
        for _ in 0..2 {
            gate.admit(|| calls += 1);
        }
        assert_eq!(calls, 1);
        assert!(gate.is_processing());

        gate.finish::<()>(&Ok(()));
        assert_eq!(gate.state(), &MutationState::Succeeded);
        gate.admit(|| calls += 1);
        assert_eq!(calls, 2);
    }

    #[test]
    fn test_reject_without_notes_never_calls() {
        let mut gate = MutationGate::new();
        let mut calls = 0;
        for notes in ["", "   ", "\n\t"] {
            let result = guard_review(&mut gate, ReviewDecision::Reject, notes, |_| calls += 1);
            assert!(matches!(result, Err(AppError::Rule(_))));
        }
        assert_eq!(calls, 0);
        assert_eq!(gate.state(), &MutationState::Idle);
    }

    #[test]
    fn test_approve_allows_empty_notes_and_trims() {
        let mut gate = MutationGate::new();
        let sent = guard_review(&mut gate, ReviewDecision::Approve, "  ", |notes| notes).unwrap();
        assert_eq!(sent, Some(String::new()));

        let mut gate = MutationGate::new();
        let sent = guard_review(&mut gate, ReviewDecision::Reject, "  preuve illisible ", |notes| notes)
            .unwrap();
        assert_eq!(sent.as_deref(), Some("preuve illisible"));
    }

    #[test]
    fn test_failure_returns_to_submittable_state() {
        let mut gate = MutationGate::new();
        gate.admit(|| ());
        gate.finish::<()>(&Err(AppError::Network("offline".into())));
        assert!(matches!(gate.state(), MutationState::Failed(_)));
        assert!(gate.admit(|| ()).is_some());
    }
}
