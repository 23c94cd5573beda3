//! Contact form state and its simulated submission.

use regex::Regex;
use std::{sync::LazyLock, time::Duration};
use thiserror::Error;

/// Stand-in for the network round trip of a real submission.
pub const SUBMIT_LATENCY: Duration = Duration::from_millis(900);

pub static SENT_MESSAGE: &str = "Message sent successfully (demo). I’ll get back to you soon.";

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\S+@\S+\.\S+").expect("email pattern should compile"));

const MIN_USERNAME_CHARS: usize = 2;
const MIN_MESSAGE_CHARS: usize = 5;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    #[error("Please fill all fields correctly (valid email, message 5+ chars).")]
    Validation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Username,
    Email,
    Message,
}

impl Field {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Username => "username",
            Self::Email => "email",
            Self::Message => "message",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields {
    pub username: String,
    pub email: String,
    pub message: String,
}

impl FormFields {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Username => &self.username,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    fn get_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Username => &mut self.username,
            Field::Email => &mut self.email,
            Field::Message => &mut self.message,
        }
    }

    pub fn is_field_valid(&self, field: Field) -> bool {
        match field {
            Field::Username => self.username.trim().chars().count() >= MIN_USERNAME_CHARS,
            Field::Email => EMAIL_RE.is_match(&self.email),
            Field::Message => self.message.trim().chars().count() >= MIN_MESSAGE_CHARS,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Started,
    /// A submission was already in flight; nothing new was started.
    AlreadySending,
}

/// Feedback shown under the form. Being an enum, it can never carry a success
/// and an error at the same time, and `Sending` carries neither.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Sending,
    Sent(String),
    Failed(ContactError),
}

impl SubmitStatus {
    pub fn is_sending(&self) -> bool {
        matches!(self, Self::Sending)
    }

    pub fn success(&self) -> Option<&str> {
        match self {
            Self::Sent(msg) => Some(msg),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<String> {
        match self {
            Self::Failed(err) => Some(err.to_string()),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    fields: FormFields,
    status: SubmitStatus,
    // what the pending submission is sending
    in_flight: Option<FormFields>,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fields(&self) -> &FormFields {
        &self.fields
    }

    pub fn status(&self) -> &SubmitStatus {
        &self.status
    }

    pub fn value(&self, field: Field) -> &str {
        self.fields.get(field)
    }

    /// Any edit invalidates the feedback of a previous submit.
    pub fn update_field(&mut self, field: Field, value: impl Into<String>) {
        *self.fields.get_mut(field) = value.into();
        self.status = SubmitStatus::Idle;
    }

    pub fn invalid_fields(&self) -> Vec<Field> {
        [Field::Username, Field::Email, Field::Message]
            .into_iter()
            .filter(|f| !self.fields.is_field_valid(*f))
            .collect()
    }

    pub fn validate(&self) -> bool {
        self.invalid_fields().is_empty()
    }

    /// True from `begin_submit` until the submission resolves or is abandoned,
    /// even if an edit in between reset the status.
    pub fn is_submitting(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Whether the send trigger should be enabled.
    pub fn can_submit(&self) -> bool {
        !self.is_submitting() && self.validate()
    }

    /// Starts a submission. On success the caller is expected to call
    /// [`ContactForm::resolve_submission`] once the latency has elapsed.
    pub fn begin_submit(&mut self) -> Result<SubmitOutcome, ContactError> {
        if self.in_flight.is_some() {
            log::debug!("contact form submission already in flight");
            return Ok(SubmitOutcome::AlreadySending);
        }
        if !self.validate() {
            log::debug!("contact form invalid: {:?}", self.invalid_fields());
            self.status = SubmitStatus::Failed(ContactError::Validation);
            return Err(ContactError::Validation);
        }
        self.status = SubmitStatus::Sending;
        self.in_flight = Some(self.fields.clone());
        Ok(SubmitOutcome::Started)
    }

    /// Completes the pending submission. Fields are cleared only if they still
    /// hold what was sent; edits made while sending are kept. Returns false if
    /// nothing was pending.
    pub fn resolve_submission(&mut self) -> bool {
        let Some(sent) = self.in_flight.take() else {
            return false;
        };
        log::debug!("contact form sent for {}", sent.email);
        if self.fields == sent {
            self.fields = FormFields::default();
        }
        self.status = SubmitStatus::Sent(SENT_MESSAGE.to_string());
        true
    }

    pub fn abandon_submission(&mut self) {
        if self.in_flight.take().is_some() {
            log::debug!("contact form submission abandoned");
            if self.status.is_sending() {
                self.status = SubmitStatus::Idle;
            }
        }
    }
}

/// A one-shot timer whose callback was fixed when it was created.
pub trait TimedTask {
    fn start(&self);
    fn cancel(&self);
    fn is_pending(&self) -> bool;
}

/// Couples a [`ContactForm`] with the timer that simulates the round trip.
/// The timer's callback must call [`ContactForm::resolve_submission`].
#[derive(Clone)]
pub struct Submission<T: TimedTask> {
    timer: T,
}

impl<T: TimedTask> Submission<T> {
    pub fn new(timer: T) -> Self {
        Self { timer }
    }

    pub fn submit(&self, form: &mut ContactForm) -> Result<SubmitOutcome, ContactError> {
        let outcome = form.begin_submit()?;
        if outcome == SubmitOutcome::Started {
            self.timer.start();
        }
        Ok(outcome)
    }

    pub fn cancel(&self, form: &mut ContactForm) {
        if self.timer.is_pending() {
            self.timer.cancel();
        }
        form.abandon_submission();
    }

    pub fn is_pending(&self) -> bool {
        self.timer.is_pending()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{cell::Cell, rc::Rc};

    #[derive(Clone, Default)]
    struct ManualTimer {
        pending: Rc<Cell<bool>>,
        starts: Rc<Cell<usize>>,
    }

    impl ManualTimer {
        /// Fires the timer if it is pending, the way the browser would after
        /// the delay elapsed.
        fn elapse(&self, form: &mut ContactForm) -> bool {
            if !self.pending.replace(false) {
                return false;
            }
            form.resolve_submission()
        }
    }

    impl TimedTask for ManualTimer {
        fn start(&self) {
            self.pending.set(true);
            self.starts.set(self.starts.get() + 1);
        }

        fn cancel(&self) {
            self.pending.set(false);
        }

        fn is_pending(&self) -> bool {
            self.pending.get()
        }
    }

    fn form_with(username: &str, email: &str, message: &str) -> ContactForm {
        let mut form = ContactForm::new();
        form.update_field(Field::Username, username);
        form.update_field(Field::Email, email);
        form.update_field(Field::Message, message);
        form
    }

    fn setup() -> (ManualTimer, Submission<ManualTimer>) {
        let timer = ManualTimer::default();
        (timer.clone(), Submission::new(timer))
    }

    #[test]
    fn test_validation_examples() {
        assert!(!form_with("a", "x@y.com", "hello").validate());
        assert!(form_with("Al", "a@b.co", "hi there").validate());
    }

    #[test]
    fn test_validation_rules() {
        let form = form_with("  A  ", "not-an-email", "hi   ");
        assert_eq!(
            form.invalid_fields(),
            vec![Field::Username, Field::Email, Field::Message]
        );

        // characters, not bytes
        assert!(form_with("Åö", "a@b.c", "héllo").validate());
        // unanchored, like the browser-side pattern it mirrors
        assert!(form_with("Jo", "reach me: jo@x.com", "hello").validate());
        assert!(!form_with("Jo", "a@b", "hello").validate());
    }

    #[test]
    fn test_invalid_submit() {
        let (timer, submission) = setup();
        let mut form = form_with("", "", "");

        assert_eq!(submission.submit(&mut form), Err(ContactError::Validation));
        assert!(form.status().error().is_some_and(|e| !e.is_empty()));
        assert!(form.status().success().is_none());
        assert!(!form.status().is_sending());
        assert_eq!(form.fields(), &FormFields::default());
        assert!(!timer.is_pending());
    }

    #[test]
    fn test_valid_submit() {
        let (timer, submission) = setup();
        let mut form = form_with("Jo", "jo@x.com", "hello!");

        assert_eq!(submission.submit(&mut form), Ok(SubmitOutcome::Started));
        assert!(form.status().is_sending());
        assert!(form.status().success().is_none());
        assert!(form.status().error().is_none());
        assert!(submission.is_pending());

        assert!(timer.elapse(&mut form));
        assert_eq!(form.status().success(), Some(
            "Message sent successfully (demo). I’ll get back to you soon."
        ));
        assert!(form.status().error().is_none());
        assert!(!form.status().is_sending());
        assert_eq!(form.fields(), &FormFields::default());
    }

    #[test]
    fn test_edit_clears_feedback() {
        let (timer, submission) = setup();
        let mut form = form_with("Jo", "jo@x.com", "hello!");
        submission.submit(&mut form).unwrap();
        timer.elapse(&mut form);
        assert!(form.status().success().is_some());

        form.update_field(Field::Username, "x");
        assert_eq!(form.status(), &SubmitStatus::Idle);
        assert_eq!(form.value(Field::Username), "x");

        let mut failed = form_with("", "", "");
        let _ = submission.submit(&mut failed);
        failed.update_field(Field::Message, "m");
        assert_eq!(failed.status(), &SubmitStatus::Idle);
    }

    #[test]
    fn test_second_submit_while_sending_is_ignored() {
        let (timer, submission) = setup();
        let mut form = form_with("Jo", "jo@x.com", "hello!");
        assert_eq!(submission.submit(&mut form), Ok(SubmitOutcome::Started));
        assert_eq!(
            submission.submit(&mut form),
            Ok(SubmitOutcome::AlreadySending)
        );
        assert_eq!(form.begin_submit(), Ok(SubmitOutcome::AlreadySending));
        assert_eq!(timer.starts.get(), 1);
    }

    #[test]
    fn test_edit_during_send_keeps_send_disabled() {
        let (timer, submission) = setup();
        let mut form = form_with("Jo", "jo@x.com", "hello!");
        assert!(form.can_submit());
        submission.submit(&mut form).unwrap();
        assert!(!form.can_submit());

        form.update_field(Field::Username, "Joe");
        assert!(form.validate());
        assert!(form.is_submitting());
        assert!(!form.can_submit());

        assert!(timer.elapse(&mut form));
        assert!(!form.is_submitting());
        assert!(form.can_submit());
    }

    #[test]
    fn test_edit_during_send_is_kept() {
        let (timer, submission) = setup();
        let mut form = form_with("Jo", "jo@x.com", "hello!");
        submission.submit(&mut form).unwrap();

        form.update_field(Field::Message, "hello again");
        assert!(!form.status().is_sending());

        assert!(timer.elapse(&mut form));
        assert_eq!(form.status().success(), Some(SENT_MESSAGE));
        assert_eq!(form.value(Field::Message), "hello again");
        assert_eq!(form.value(Field::Username), "Jo");
    }

    #[test]
    fn test_cancelled_submission_never_resolves() {
        let (timer, submission) = setup();
        let mut form = form_with("Jo", "jo@x.com", "hello!");
        submission.submit(&mut form).unwrap();

        submission.cancel(&mut form);
        assert!(!submission.is_pending());
        assert_eq!(form.status(), &SubmitStatus::Idle);
        assert!(!timer.elapse(&mut form));
        assert!(!form.resolve_submission());
        assert_eq!(form.value(Field::Username), "Jo");
    }
}
