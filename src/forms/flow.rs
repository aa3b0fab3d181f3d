use std::rc::Rc;

use yew::Reducible;

use super::fields::FormFields;
use crate::relay::RelayError;

pub const RELAY_FAILED: &str = "Échec de l'envoi, veuillez réessayer plus tard.";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Sending,
    Sent,
    Error,
}

/// State of one form instance: its values, where the last submission stands
/// and whether the success modal is up.
///
/// `cycle` counts successful submissions. Timers armed on `Sent` carry the
/// cycle they were armed for, so one that outlives its cycle changes nothing.
#[derive(Clone, Debug, PartialEq)]
pub struct SubmissionFlow<F> {
    pub form: F,
    pub status: SubmissionStatus,
    pub error: Option<String>,
    pub modal_visible: bool,
    with_modal: bool,
    cycle: u32,
}

impl<F: FormFields> SubmissionFlow<F> {
    pub fn new(with_modal: bool) -> Self {
        Self {
            form: F::default(),
            status: SubmissionStatus::Idle,
            error: None,
            modal_visible: false,
            with_modal,
            cycle: 0,
        }
    }

    pub fn cycle(&self) -> u32 {
        self.cycle
    }

    pub fn is_sending(&self) -> bool {
        self.status == SubmissionStatus::Sending
    }

    /// Inputs are locked while sending. Editing clears a pending error.
    pub fn edit(&mut self, field: F::Field, value: String) {
        if self.is_sending() {
            return;
        }
        self.form.set(field, value);
        if self.status == SubmissionStatus::Error {
            self.status = SubmissionStatus::Idle;
            self.error = None;
        }
    }

    /// Returns the payload to dispatch, or `None` when nothing should be sent:
    /// either a submission is already in flight or validation failed.
    pub fn begin(&mut self) -> Option<F> {
        if self.is_sending() {
            return None;
        }
        match self.form.validate() {
            Ok(()) => {
                self.status = SubmissionStatus::Sending;
                self.error = None;
                Some(self.form.clone())
            }
            Err(err) => {
                self.status = SubmissionStatus::Error;
                self.error = Some(err.to_string());
                None
            }
        }
    }

    /// Records the relay outcome. On success the form is cleared and the new
    /// cycle number is returned for the reset timers.
    pub fn finish(&mut self, outcome: Result<(), RelayError>) -> Option<u32> {
        if !self.is_sending() {
            return None;
        }
        match outcome {
            Ok(()) => {
                self.cycle = self.cycle.wrapping_add(1);
                self.status = SubmissionStatus::Sent;
                self.form = F::default();
                self.modal_visible = self.with_modal;
                Some(self.cycle)
            }
            Err(_) => {
                // the visitor keeps what they typed
                self.status = SubmissionStatus::Error;
                self.error = Some(RELAY_FAILED.to_string());
                None
            }
        }
    }

    pub fn expire_status(&mut self, cycle: u32) -> bool {
        if self.status == SubmissionStatus::Sent && self.cycle == cycle {
            self.status = SubmissionStatus::Idle;
            return true;
        }
        false
    }

    pub fn expire_modal(&mut self, cycle: u32) -> bool {
        if self.modal_visible && self.cycle == cycle {
            self.modal_visible = false;
            return true;
        }
        false
    }

    pub fn dismiss_modal(&mut self) -> bool {
        std::mem::replace(&mut self.modal_visible, false)
    }
}

pub enum FlowAction<F: FormFields> {
    Edit(F::Field, String),
    Submit,
    Finish(Result<(), RelayError>),
    ExpireStatus(u32),
    ExpireModal(u32),
    DismissModal,
}

impl<F: FormFields> Reducible for SubmissionFlow<F> {
    type Action = FlowAction<F>;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        let changed = match action {
            FlowAction::Edit(field, value) => {
                next.edit(field, value);
                true
            }
            FlowAction::Submit => {
                next.begin();
                true
            }
            FlowAction::Finish(outcome) => {
                next.finish(outcome);
                true
            }
            FlowAction::ExpireStatus(cycle) => next.expire_status(cycle),
            FlowAction::ExpireModal(cycle) => next.expire_modal(cycle),
            FlowAction::DismissModal => next.dismiss_modal(),
        };
        if changed {
            Rc::new(next)
        } else {
            self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::fields::{ContactField, ContactForm, NewsletterField, NewsletterForm};
    use crate::relay::{Relay, SimulatedRelay};
    use async_trait::async_trait;
    use futures::executor::block_on;
    use std::cell::{Cell, RefCell};

    /// Relay double that counts calls and answers with a canned outcome.
    struct FakeRelay {
        fail: bool,
        calls: Cell<usize>,
        seen: RefCell<Vec<ContactForm>>,
    }

    impl FakeRelay {
        fn new(fail: bool) -> Self {
            Self { fail, calls: Cell::new(0), seen: RefCell::new(Vec::new()) }
        }
    }

    #[async_trait(?Send)]
    impl Relay<ContactForm> for FakeRelay {
        async fn deliver(&self, payload: &ContactForm) -> Result<(), RelayError> {
            self.calls.set(self.calls.get() + 1);
            self.seen.borrow_mut().push(payload.clone());
            if self.fail {
                Err(RelayError::Rejected { status: 400, body: "The service ID is invalid".into() })
            } else {
                Ok(())
            }
        }
    }

    fn filled() -> SubmissionFlow<ContactForm> {
        let mut flow = SubmissionFlow::new(true);
        flow.edit(ContactField::Name, "Alice".into());
        flow.edit(ContactField::Email, "alice@example.com".into());
        flow.edit(ContactField::Phone, "0601020304".into());
        flow.edit(ContactField::Message, "Hello".into());
        flow
    }

    // What the form component does on submit, minus the browser
    fn submit(flow: &mut SubmissionFlow<ContactForm>, relay: &dyn Relay<ContactForm>) -> Option<u32> {
        let payload = flow.begin()?;
        let outcome = block_on(relay.deliver(&payload));
        flow.finish(outcome)
    }

    #[test]
    fn fallback_cycle_goes_through_every_status() {
        let mut flow = filled();
        let mut seen = vec![flow.status];

        let payload = flow.begin().expect("valid form");
        seen.push(flow.status);
        let cycle = flow.finish(block_on(SimulatedRelay { delay_ms: 0 }.deliver(&payload)));
        seen.push(flow.status);
        assert_eq!(flow.form, ContactForm::default());

        assert!(flow.expire_status(cycle.expect("sent")));
        seen.push(flow.status);

        use SubmissionStatus::*;
        assert_eq!(seen, vec![Idle, Sending, Sent, Idle]);
    }

    #[test]
    fn relay_rejection_keeps_input_and_reports_failure() {
        let relay = FakeRelay::new(true);
        let mut flow = filled();

        assert_eq!(submit(&mut flow, &relay), None);
        assert_eq!(flow.status, SubmissionStatus::Error);
        assert_eq!(flow.error.as_deref(), Some(RELAY_FAILED));
        assert_eq!(flow.form.name, "Alice");
        assert_eq!(flow.form.phone, "0601020304");
        assert!(!flow.modal_visible);
    }

    #[test]
    fn validation_failure_never_reaches_relay() {
        let relay = FakeRelay::new(false);
        let mut flow = SubmissionFlow::<ContactForm>::new(true);
        flow.edit(ContactField::Email, "alice@example".into());

        assert_eq!(submit(&mut flow, &relay), None);
        assert_eq!(relay.calls.get(), 0);
        assert_eq!(flow.status, SubmissionStatus::Error);
        assert_eq!(flow.error.as_deref(), Some("Tous les champs sont requis."));
    }

    #[test]
    fn second_submit_while_sending_is_ignored() {
        let mut flow = filled();
        assert!(flow.begin().is_some());
        let before = flow.clone();

        assert!(flow.begin().is_none());
        assert_eq!(flow, before);

        // edits are locked too
        flow.edit(ContactField::Name, "Bob".into());
        assert_eq!(flow, before);
    }

    #[test]
    fn dismissed_modal_is_not_hidden_again_by_its_timer() {
        let mut flow = filled();
        flow.begin();
        let cycle = flow.finish(Ok(())).expect("sent");
        assert!(flow.modal_visible);

        assert!(flow.dismiss_modal());
        assert!(!flow.modal_visible);
        assert!(!flow.expire_modal(cycle));
        assert!(!flow.dismiss_modal());
    }

    #[test]
    fn stale_timers_do_not_touch_a_later_cycle() {
        let mut flow = filled();
        flow.begin();
        let first = flow.finish(Ok(())).expect("sent");

        // resubmit before the first cycle's timers fire
        flow.edit(ContactField::Name, "Alice".into());
        flow.edit(ContactField::Email, "alice@example.com".into());
        flow.edit(ContactField::Message, "Encore".into());
        flow.begin();
        let second = flow.finish(Ok(())).expect("sent");
        assert_ne!(first, second);

        assert!(!flow.expire_status(first));
        assert!(!flow.expire_modal(first));
        assert_eq!(flow.status, SubmissionStatus::Sent);
        assert!(flow.modal_visible);

        assert!(flow.expire_modal(second));
        assert!(flow.expire_status(second));
        assert_eq!(flow.status, SubmissionStatus::Idle);
    }

    #[test]
    fn editing_clears_an_error_but_leaves_sent_alone() {
        let mut flow = SubmissionFlow::<ContactForm>::new(false);
        flow.begin();
        assert_eq!(flow.status, SubmissionStatus::Error);

        flow.edit(ContactField::Name, "A".into());
        assert_eq!(flow.status, SubmissionStatus::Idle);
        assert_eq!(flow.error, None);

        let mut flow = filled();
        flow.begin();
        flow.finish(Ok(()));
        flow.edit(ContactField::Name, "B".into());
        assert_eq!(flow.status, SubmissionStatus::Sent);
    }

    #[test]
    fn identical_submissions_run_independent_cycles() {
        let relay = FakeRelay::new(false);
        let mut flow = filled();

        let first = submit(&mut flow, &relay).expect("first cycle");
        assert!(flow.expire_status(first));
        assert!(flow.expire_modal(first));

        flow = SubmissionFlow { cycle: flow.cycle(), ..filled() };
        let second = submit(&mut flow, &relay).expect("second cycle");

        assert_eq!(relay.calls.get(), 2);
        let seen = relay.seen.borrow();
        assert_eq!(seen[0], seen[1]);
        assert_eq!(second, first + 1);
        assert!(flow.modal_visible);
        assert_eq!(flow.error, None);
    }

    #[test]
    fn newsletter_flow_has_no_modal() {
        let mut flow = SubmissionFlow::<NewsletterForm>::new(false);
        flow.edit(NewsletterField::Email, "bob@example.org".into());
        let payload = flow.begin().expect("valid address");
        assert_eq!(payload.address(), "bob@example.org");

        flow.finish(Ok(()));
        assert_eq!(flow.status, SubmissionStatus::Sent);
        assert!(!flow.modal_visible);
        assert_eq!(flow.form.email, "");
    }

    #[test]
    fn reducer_returns_same_state_for_noop_actions() {
        let state = Rc::new(SubmissionFlow::<ContactForm>::new(true));
        let next = state.clone().reduce(FlowAction::ExpireModal(7));
        assert!(Rc::ptr_eq(&state, &next));

        let next = state.clone().reduce(FlowAction::Submit);
        assert_eq!(next.status, SubmissionStatus::Error);
    }
}
