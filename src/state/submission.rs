//! Lifecycle of one form: edit, validate, submit, done.
//!
//! The controller is synchronous and owns no browser resources. Everything
//! that has to happen outside of it (arming a timer, scrolling, sending the
//! values somewhere) is returned as a [`FormEffect`] for the page component
//! to carry out.

use std::fmt::Display;

use log::{debug, error, info, warn};

use crate::config;
use crate::state::fields::{BookingFields, ContactFields, FieldStore, FormModel};
use crate::state::timers::{Ticket, TimerSlot};
use crate::state::validator::{validate, ValidationErrors};

pub const SUBMISSION_FAILED_MESSAGE: &str =
    "Si è verificato un errore durante l'invio della prenotazione. Riprova più tardi.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmissionState {
    Editing,
    /// Values were handed to the backend and we are waiting for the answer.
    Submitting,
    Submitted,
}

/// Per-form knobs that decide how a successful submission behaves.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FormPolicy {
    pub name: &'static str,
    /// Values go to an external collaborator and need an acknowledgement.
    pub remote: bool,
    pub retain_fields_on_success: bool,
    /// The success screen offers a way back to an empty form.
    pub restartable: bool,
}

impl FormPolicy {
    pub const BOOKING: FormPolicy = FormPolicy {
        name: "booking",
        remote: true,
        retain_fields_on_success: true,
        restartable: false,
    };

    pub const CONTACT: FormPolicy = FormPolicy {
        name: "contact",
        remote: false,
        retain_fields_on_success: false,
        restartable: true,
    };
}

#[derive(Clone, Debug, PartialEq)]
pub enum FormEffect<M: FormModel> {
    /// Call `banner_expired(ticket)` once `delay_ms` have passed.
    HideBannerAfter { ticket: Ticket, delay_ms: u32 },
    /// Bring the first invalid input into view.
    FocusField(M::Field),
    /// Hand these values to the submission collaborator, then `acknowledge`.
    Deliver(M),
    ScrollToTop,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verdict {
    /// Nothing happened: a submission is already in flight or done.
    Ignored,
    Rejected,
    Accepted,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Attempt<M: FormModel> {
    pub verdict: Verdict,
    pub effects: Vec<FormEffect<M>>,
}

impl<M: FormModel> Attempt<M> {
    fn ignored() -> Self {
        Self { verdict: Verdict::Ignored, effects: Vec::new() }
    }
}

#[derive(Debug)]
pub struct SubmissionController<M: FormModel> {
    store: FieldStore<M>,
    required: &'static [M::Field],
    policy: FormPolicy,
    errors: ValidationErrors<M::Field>,
    banner_visible: bool,
    banner_timer: TimerSlot,
    state: SubmissionState,
    failure: Option<&'static str>,
}

pub type BookingController = SubmissionController<BookingFields>;
pub type ContactController = SubmissionController<ContactFields>;

impl BookingController {
    pub fn booking() -> Self {
        Self::new(BookingFields::REQUIRED, FormPolicy::BOOKING)
    }
}

impl ContactController {
    pub fn contact() -> Self {
        Self::new(ContactFields::REQUIRED, FormPolicy::CONTACT)
    }
}

impl<M: FormModel> SubmissionController<M> {
    pub fn new(required: &'static [M::Field], policy: FormPolicy) -> Self {
        Self {
            store: FieldStore::new(),
            required,
            policy,
            errors: ValidationErrors::default(),
            banner_visible: false,
            banner_timer: TimerSlot::new(),
            state: SubmissionState::Editing,
            failure: None,
        }
    }

    pub fn values(&self) -> &M {
        self.store.values()
    }

    pub fn errors(&self) -> &ValidationErrors<M::Field> {
        &self.errors
    }

    pub fn has_error(&self, field: M::Field) -> bool {
        self.errors.contains(field)
    }

    pub fn banner_visible(&self) -> bool {
        self.banner_visible
    }

    pub fn state(&self) -> SubmissionState {
        self.state
    }

    pub fn is_submitting(&self) -> bool {
        self.state == SubmissionState::Submitting
    }

    pub fn is_submitted(&self) -> bool {
        self.state == SubmissionState::Submitted
    }

    /// User-facing message left by the last failed delivery.
    pub fn failure(&self) -> Option<&'static str> {
        self.failure
    }

    /// Applies one input change and clears that field's error marker.
    /// Returns false when the form is not editable.
    pub fn edit(&mut self, field: M::Field, value: impl Into<String>) -> bool {
        if self.state != SubmissionState::Editing {
            debug!("{} form: edit of {:?} ignored in {:?}", self.policy.name, field, self.state);
            return false;
        }
        self.store.update(field, value);
        self.errors.clear(field);
        true
    }

    pub fn attempt_submit(&mut self) -> Attempt<M> {
        if self.state != SubmissionState::Editing {
            return Attempt::ignored();
        }

        let errors = validate(self.store.values(), self.required);
        if let Some(first) = errors.first() {
            warn!("{} form rejected: {} required field(s) missing", self.policy.name, errors.len());
            self.errors = errors;
            self.banner_visible = true;
            let ticket = self.banner_timer.arm();
            return Attempt {
                verdict: Verdict::Rejected,
                effects: vec![
                    FormEffect::HideBannerAfter { ticket, delay_ms: config::BANNER_HIDE_MS },
                    FormEffect::FocusField(first),
                ],
            };
        }

        self.errors = ValidationErrors::default();
        self.banner_visible = false;
        self.banner_timer.cancel();
        self.failure = None;

        let effects = if self.policy.remote {
            info!("{} form valid, delivering", self.policy.name);
            self.state = SubmissionState::Submitting;
            vec![FormEffect::Deliver(self.store.values().clone())]
        } else {
            self.complete()
        };
        Attempt { verdict: Verdict::Accepted, effects }
    }

    /// Result of a `Deliver` effect.
    pub fn acknowledge<E: Display>(&mut self, result: Result<(), E>) -> Vec<FormEffect<M>> {
        if self.state != SubmissionState::Submitting {
            debug!("{} form: stray acknowledgement in {:?}", self.policy.name, self.state);
            return Vec::new();
        }
        match result {
            Ok(()) => self.complete(),
            Err(e) => {
                error!("{} form delivery failed: {}", self.policy.name, e);
                self.state = SubmissionState::Editing;
                self.failure = Some(SUBMISSION_FAILED_MESSAGE);
                Vec::new()
            }
        }
    }

    /// Timer callback for the banner. Stale tickets do nothing.
    pub fn banner_expired(&mut self, ticket: Ticket) -> bool {
        if self.banner_timer.fire(ticket) {
            self.banner_visible = false;
            true
        } else {
            false
        }
    }

    /// Leaves the success screen for a fresh form, where the policy allows it.
    pub fn start_over(&mut self) -> bool {
        if !self.policy.restartable || self.state != SubmissionState::Submitted {
            return false;
        }
        self.store.reset();
        self.errors = ValidationErrors::default();
        self.failure = None;
        self.state = SubmissionState::Editing;
        true
    }

    fn complete(&mut self) -> Vec<FormEffect<M>> {
        info!("{} form submitted", self.policy.name);
        self.state = SubmissionState::Submitted;
        if !self.policy.retain_fields_on_success {
            self.store.reset();
        }
        vec![FormEffect::ScrollToTop]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::fields::{BookingField, ContactField};
    use crate::state::timers::testing::ManualClock;

    fn fill_booking(form: &mut BookingController) {
        form.edit(BookingField::FullName, "Marco Bianchi");
        form.edit(BookingField::Email, "marco@example.it");
        form.edit(BookingField::Phone, "3331234567");
        form.edit(BookingField::Gender, "male");
        form.edit(BookingField::Location, "Verona");
        form.edit(BookingField::Referral, "friend");
    }

    fn fill_contact(form: &mut ContactController) {
        form.edit(ContactField::Name, "Anna");
        form.edit(ContactField::Email, "anna@example.it");
        form.edit(ContactField::Subject, "Prossima serata");
        form.edit(ContactField::Message, "Quando è la prossima data?");
    }

    fn schedule_banner<M: FormModel>(clock: &mut ManualClock, effects: &[FormEffect<M>]) {
        for effect in effects {
            if let FormEffect::HideBannerAfter { ticket, delay_ms } = effect {
                clock.schedule(*ticket, *delay_ms);
            }
        }
    }

    #[test]
    fn booking_success_keeps_field_values() {
        let mut form = BookingController::booking();
        fill_booking(&mut form);
        let before = form.values().clone();

        let attempt = form.attempt_submit();
        assert_eq!(attempt.verdict, Verdict::Accepted);
        assert_eq!(attempt.effects, vec![FormEffect::Deliver(before.clone())]);
        assert_eq!(form.state(), SubmissionState::Submitting);

        let effects = form.acknowledge::<String>(Ok(()));
        assert_eq!(effects, vec![FormEffect::ScrollToTop]);
        assert_eq!(form.state(), SubmissionState::Submitted);
        assert_eq!(form.values(), &before);
        assert_eq!(form.values().age, "25");
    }

    #[test]
    fn booking_is_terminal_after_success() {
        let mut form = BookingController::booking();
        fill_booking(&mut form);
        form.attempt_submit();
        form.acknowledge::<String>(Ok(()));

        assert!(!form.start_over());
        assert!(!form.edit(BookingField::FullName, "Altro Nome"));
        assert_eq!(form.attempt_submit().verdict, Verdict::Ignored);
        assert_eq!(form.state(), SubmissionState::Submitted);
    }

    #[test]
    fn contact_success_resets_fields_and_can_start_over() {
        let mut form = ContactController::contact();
        fill_contact(&mut form);

        let attempt = form.attempt_submit();
        assert_eq!(attempt.verdict, Verdict::Accepted);
        assert_eq!(attempt.effects, vec![FormEffect::ScrollToTop]);
        assert_eq!(form.state(), SubmissionState::Submitted);
        assert_eq!(form.values(), &ContactFields::default());

        assert!(form.start_over());
        assert_eq!(form.state(), SubmissionState::Editing);
        assert!(form.edit(ContactField::Name, "Luca"));
    }

    #[test]
    fn rejection_marks_every_missing_field_and_focuses_the_first() {
        let mut form = BookingController::booking();
        form.edit(BookingField::FullName, "Marco");
        form.edit(BookingField::Phone, "   ");

        let attempt = form.attempt_submit();
        assert_eq!(attempt.verdict, Verdict::Rejected);
        assert!(attempt.effects.contains(&FormEffect::FocusField(BookingField::Email)));
        assert!(form.banner_visible());
        assert_eq!(form.state(), SubmissionState::Editing);
        assert_eq!(
            form.errors().iter().collect::<Vec<_>>(),
            vec![
                BookingField::Email,
                BookingField::Phone,
                BookingField::Gender,
                BookingField::Location,
                BookingField::Referral,
            ]
        );
    }

    #[test]
    fn banner_hides_itself_after_five_seconds() {
        let mut clock = ManualClock::new();
        let mut form = ContactController::contact();

        let attempt = form.attempt_submit();
        schedule_banner(&mut clock, &attempt.effects);
        assert!(form.banner_visible());

        for ticket in clock.advance(4_999) {
            form.banner_expired(ticket);
        }
        assert!(form.banner_visible());

        for ticket in clock.advance(1) {
            assert!(form.banner_expired(ticket));
        }
        assert!(!form.banner_visible());
        // Hiding the banner does not touch the field markers.
        assert_eq!(form.errors().len(), 4);
    }

    #[test]
    fn resubmitting_inside_the_window_restarts_the_banner_timer() {
        let mut clock = ManualClock::new();
        let mut form = ContactController::contact();

        let first = form.attempt_submit();
        schedule_banner(&mut clock, &first.effects);
        clock.advance(3_000);
        let second = form.attempt_submit();
        schedule_banner(&mut clock, &second.effects);

        for ticket in clock.advance(2_000) {
            assert!(!form.banner_expired(ticket), "first timer is stale");
        }
        assert!(form.banner_visible());

        for ticket in clock.advance(3_000) {
            assert!(form.banner_expired(ticket));
        }
        assert!(!form.banner_visible());
    }

    #[test]
    fn editing_clears_only_that_fields_error() {
        let mut form = ContactController::contact();
        form.attempt_submit();
        assert_eq!(form.errors().len(), 4);

        form.edit(ContactField::Subject, "S");
        assert!(!form.has_error(ContactField::Subject));
        assert!(form.has_error(ContactField::Name));
        assert!(form.has_error(ContactField::Email));
        assert!(form.has_error(ContactField::Message));

        // Clearing is optimistic: blanking the field again does not re-mark it.
        form.edit(ContactField::Subject, "");
        assert!(!form.has_error(ContactField::Subject));
    }

    #[test]
    fn successful_submit_cancels_pending_banner() {
        let mut clock = ManualClock::new();
        let mut form = ContactController::contact();
        let rejected = form.attempt_submit();
        schedule_banner(&mut clock, &rejected.effects);

        fill_contact(&mut form);
        form.attempt_submit();
        assert!(!form.banner_visible());
        assert!(form.errors().is_empty());

        for ticket in clock.advance(5_000) {
            assert!(!form.banner_expired(ticket));
        }
    }

    #[test]
    fn failed_delivery_keeps_values_and_shows_retry_message() {
        let mut form = BookingController::booking();
        fill_booking(&mut form);
        let before = form.values().clone();

        form.attempt_submit();
        assert!(form.is_submitting());
        assert_eq!(form.attempt_submit().verdict, Verdict::Ignored);

        let effects = form.acknowledge(Err("HTTP 500"));
        assert!(effects.is_empty());
        assert_eq!(form.state(), SubmissionState::Editing);
        assert_eq!(form.values(), &before);
        assert_eq!(form.failure(), Some(SUBMISSION_FAILED_MESSAGE));

        form.attempt_submit();
        assert_eq!(form.failure(), None);
        form.acknowledge::<String>(Ok(()));
        assert!(form.is_submitted());
    }

    #[test]
    fn stray_acknowledgement_is_ignored() {
        let mut form = BookingController::booking();
        assert!(form.acknowledge::<String>(Ok(())).is_empty());
        assert_eq!(form.state(), SubmissionState::Editing);
    }
}
