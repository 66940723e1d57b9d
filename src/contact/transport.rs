//! Request model and transport seam for contact form submission.

use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;
use url::Url;

/// Every submission asks the backend for a JSON response
pub const ACCEPT_JSON: &str = "application/json";

#[derive(Debug, Error, Clone, PartialEq)]
pub enum TransportError {
    #[error("unsupported form method: {0:?}")]
    UnsupportedMethod(String),
    #[error("invalid form action {action:?}: {reason}")]
    InvalidAction { action: String, reason: String },
    #[error("form data unreadable: {0}")]
    FormData(String),
    #[error("network error: {0}")]
    Network(String),
    #[error("no response within {0:?}")]
    Timeout(Duration),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl Method {
    /// Form `method` attribute values are case-insensitive
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "get" => Some(Method::Get),
            "post" => Some(Method::Post),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
        }
    }
}

/// Form entries in document order.
///
/// Text entries are kept with their values. File entries are only named: the
/// browser binding sends them straight from the form, and a GET query cannot
/// carry them at all.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FormFields {
    text: Vec<(String, String)>,
    files: Vec<String>,
}

impl FormFields {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_text(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.text.push((name.into(), value.into()));
    }

    pub fn push_file(&mut self, name: impl Into<String>) {
        self.files.push(name.into());
    }

    pub fn text(&self) -> &[(String, String)] {
        &self.text
    }

    pub fn files(&self) -> &[String] {
        &self.files
    }

    pub fn len(&self) -> usize {
        self.text.len() + self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl FromIterator<(String, String)> for FormFields {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            text: iter.into_iter().collect(),
            files: Vec::new(),
        }
    }
}

/// One form submission: where to send it and what the fields hold.
#[derive(Clone, Debug, PartialEq)]
pub struct SubmitRequest {
    method: Method,
    action: Url,
    fields: FormFields,
}

impl SubmitRequest {
    pub fn new(method: &str, action: &str, fields: FormFields) -> Result<Self, TransportError> {
        let method = Method::parse(method)
            .ok_or_else(|| TransportError::UnsupportedMethod(method.to_string()))?;
        let action = Url::parse(action).map_err(|e| TransportError::InvalidAction {
            action: action.to_string(),
            reason: e.to_string(),
        })?;
        Ok(Self {
            method,
            action,
            fields,
        })
    }

    pub fn method(&self) -> Method {
        self.method
    }

    pub fn action(&self) -> &Url {
        &self.action
    }

    pub fn fields(&self) -> &FormFields {
        &self.fields
    }

    /// URL to request. GET carries the text fields in the query string.
    pub fn target_url(&self) -> Url {
        let mut url = self.action.clone();
        if self.method == Method::Get && !self.fields.text.is_empty() {
            let mut query = url.query_pairs_mut();
            for (name, value) in &self.fields.text {
                query.append_pair(name, value);
            }
        }
        url
    }

    /// POST sends the whole form as a multipart body
    pub fn has_body(&self) -> bool {
        self.method == Method::Post
    }

    /// File fields this request cannot deliver
    pub fn dropped_files(&self) -> &[String] {
        match self.method {
            Method::Post => &[],
            Method::Get => &self.fields.files,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: u16,
    pub body: String,
}

impl TransportResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends a submission and returns the raw response.
///
/// Not `Send`: browser futures are tied to the single UI thread.
#[async_trait(?Send)]
pub trait FormTransport {
    async fn send(&self, request: &SubmitRequest) -> Result<TransportResponse, TransportError>;
}
