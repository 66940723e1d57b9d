//! Contact form submission.
//!
//! Flow per attempt: [`ContactForm::begin`] (pending view), one request raced
//! against a deadline via [`run_submission`], then [`ContactForm::finish`]
//! with the classified [`Outcome`]. Every outcome leaves the form ready for
//! another attempt.

pub mod response;
pub mod state;
pub mod transport;

use futures::future::{select, Either};
use std::future::Future;
use std::pin::pin;
use std::time::Duration;

use crate::config::Messages;

pub use response::classify;
pub use state::{ContactForm, FormView, Outcome, SubmissionState, SubmitError};
pub use transport::{
    FormFields, FormTransport, Method, SubmitRequest, TransportError, TransportResponse,
    ACCEPT_JSON,
};

/// Race `fut` against `deadline`. The loser is dropped, which cancels it.
pub async fn with_deadline<F, D, R>(
    fut: F,
    deadline: D,
    timeout: Duration,
) -> Result<R, TransportError>
where
    F: Future<Output = Result<R, TransportError>>,
    D: Future<Output = ()>,
{
    match select(pin!(fut), pin!(deadline)).await {
        Either::Left((result, _)) => result,
        Either::Right(((), _)) => Err(TransportError::Timeout(timeout)),
    }
}

/// Send one submission and classify what came back.
///
/// `deadline` resolves when the attempt should be abandoned; `timeout` is the
/// duration it represents, used for reporting.
pub async fn run_submission<T, D>(
    transport: &T,
    request: &SubmitRequest,
    deadline: D,
    timeout: Duration,
    messages: &Messages,
) -> Outcome
where
    T: FormTransport + ?Sized,
    D: Future<Output = ()>,
{
    tracing::debug!(
        method = request.method().as_str(),
        action = %request.action(),
        fields = request.fields().len(),
        "Submitting contact form"
    );
    for name in request.dropped_files() {
        tracing::warn!("File field {:?} cannot be sent with GET, dropped", name);
    }

    let result = with_deadline(transport.send(request), deadline, timeout).await;
    match &result {
        Ok(response) => tracing::info!(status = response.status, "Contact form response"),
        Err(e) => tracing::warn!("Contact form submission failed: {}", e),
    }
    classify(result, messages)
}
