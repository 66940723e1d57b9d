//! Contact form state machine and its rendering.

use thiserror::Error;

use crate::config::Messages;

pub const STATUS_CLASS: &str = "form-status";
pub const STATUS_SUCCESS_CLASS: &str = "form-status success";
pub const STATUS_ERROR_CLASS: &str = "form-status error";
pub const IDLE_ICON_CLASS: &str = "fas fa-paper-plane";
pub const PENDING_ICON_CLASS: &str = "fas fa-spinner fa-spin";

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    Pending,
    Succeeded,
    Failed(String),
}

/// Terminal result of one attempt
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Success,
    Failure(String),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SubmitError {
    #[error("a submission is already in flight")]
    AlreadyPending,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ButtonView {
    pub disabled: bool,
    pub label: String,
    pub icon_class: &'static str,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatusView {
    pub text: String,
    pub class: &'static str,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormView {
    pub button: ButtonView,
    pub status: StatusView,
}

#[derive(Debug, Clone)]
pub struct ContactForm {
    state: SubmissionState,
    messages: Messages,
}

impl ContactForm {
    pub fn new(messages: Messages) -> Self {
        Self {
            state: SubmissionState::Idle,
            messages,
        }
    }

    pub fn state(&self) -> &SubmissionState {
        &self.state
    }

    pub fn messages(&self) -> &Messages {
        &self.messages
    }

    pub fn is_pending(&self) -> bool {
        self.state == SubmissionState::Pending
    }

    /// Enter pending. Rejected while another attempt is in flight.
    pub fn begin(&mut self) -> Result<FormView, SubmitError> {
        if self.is_pending() {
            return Err(SubmitError::AlreadyPending);
        }
        self.state = SubmissionState::Pending;
        tracing::debug!("Contact form pending");
        Ok(self.view())
    }

    /// Record the outcome of the in-flight attempt.
    ///
    /// Outside of pending there is nothing to finish and the state is kept.
    pub fn finish(&mut self, outcome: Outcome) -> FormView {
        if !self.is_pending() {
            tracing::debug!("Ignoring outcome with no submission in flight");
            return self.view();
        }
        self.state = match outcome {
            Outcome::Success => SubmissionState::Succeeded,
            Outcome::Failure(message) => SubmissionState::Failed(message),
        };
        self.view()
    }

    /// Fields are cleared only after a successful submission
    pub fn should_reset_fields(&self) -> bool {
        self.state == SubmissionState::Succeeded
    }

    pub fn view(&self) -> FormView {
        let idle_button = ButtonView {
            disabled: false,
            label: self.messages.idle_label.clone(),
            icon_class: IDLE_ICON_CLASS,
        };
        match &self.state {
            SubmissionState::Idle => FormView {
                button: idle_button,
                status: StatusView {
                    text: String::new(),
                    class: STATUS_CLASS,
                },
            },
            SubmissionState::Pending => FormView {
                button: ButtonView {
                    disabled: true,
                    label: self.messages.pending_label.clone(),
                    icon_class: PENDING_ICON_CLASS,
                },
                status: StatusView {
                    text: String::new(),
                    class: STATUS_CLASS,
                },
            },
            SubmissionState::Succeeded => FormView {
                button: idle_button,
                status: StatusView {
                    text: self.messages.success.clone(),
                    class: STATUS_SUCCESS_CLASS,
                },
            },
            SubmissionState::Failed(message) => FormView {
                button: idle_button,
                status: StatusView {
                    text: message.clone(),
                    class: STATUS_ERROR_CLASS,
                },
            },
        }
    }
}
