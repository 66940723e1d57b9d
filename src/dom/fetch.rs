//! `fetch`-based form transport.

use async_trait::async_trait;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{AbortController, FormData, Headers, HtmlFormElement, Request, RequestInit, Response};

use crate::contact::{
    FormTransport, SubmitRequest, TransportError, TransportResponse, ACCEPT_JSON,
};

/// Aborts the request if the send future is dropped before completing
struct AbortOnDrop {
    controller: AbortController,
    armed: bool,
}

impl Drop for AbortOnDrop {
    fn drop(&mut self) {
        if self.armed {
            tracing::debug!("Aborting in-flight submission");
            self.controller.abort();
        }
    }
}

/// Sends submissions of one form. POST bodies are read from the form itself so
/// file inputs travel with the text fields.
pub struct FetchTransport {
    form: HtmlFormElement,
}

impl FetchTransport {
    pub fn new(form: HtmlFormElement) -> Self {
        Self { form }
    }
}

fn js_err(e: JsValue) -> TransportError {
    TransportError::Network(format!("{:?}", e))
}

#[async_trait(?Send)]
impl FormTransport for FetchTransport {
    async fn send(&self, request: &SubmitRequest) -> Result<TransportResponse, TransportError> {
        let window =
            web_sys::window().ok_or_else(|| TransportError::Network("No window".into()))?;

        let mut guard = AbortOnDrop {
            controller: AbortController::new().map_err(js_err)?,
            armed: true,
        };

        let headers = Headers::new().map_err(js_err)?;
        headers.set("Accept", ACCEPT_JSON).map_err(js_err)?;

        let opts = RequestInit::new();
        opts.set_method(request.method().as_str());
        opts.set_headers(&headers);
        opts.set_signal(Some(&guard.controller.signal()));

        if request.has_body() {
            let body = FormData::new_with_form(&self.form)
                .map_err(|e| TransportError::FormData(format!("{:?}", e)))?;
            opts.set_body(&body);
        }

        let web_request = Request::new_with_str_and_init(request.target_url().as_str(), &opts)
            .map_err(js_err)?;

        let resp_value = JsFuture::from(window.fetch_with_request(&web_request))
            .await
            .map_err(js_err)?;

        let resp: Response = resp_value
            .dyn_into()
            .map_err(|_| TransportError::Network("Not a Response".into()))?;
        let status = resp.status();

        // An unreadable body is classified like an empty one
        let body = match resp.text() {
            Ok(promise) => JsFuture::from(promise)
                .await
                .ok()
                .and_then(|v| v.as_string())
                .unwrap_or_default(),
            Err(_) => String::new(),
        };

        guard.armed = false;
        Ok(TransportResponse { status, body })
    }
}
