use std::backtrace::Backtrace;
use std::error::Error as StdError;
use std::fmt;

/// HTTP method type, re-exported for use with error inspection.
pub use reqwest::Method;
/// HTTP status code type, re-exported for use with error inspection.
pub use reqwest::StatusCode;
use percent_encoding::percent_decode_str;
use reqwest::header;

/// Discriminant of an [`Error`]. Callers branch on this and then, if they need the payload,
/// [`Error::downcast_ref`] to the matching struct in this module.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    /// The API answered with a non-successful status other than 404. Payload: [`Status`]
    Status,
    /// The requested resource does not exist (404, empty slug lookup). Payload: [`NotFound`]
    NotFound,
    /// The response (or a caller-supplied value) did not have the expected shape.
    /// Payload: [`Validation`]
    Validation,
    /// Network-level failure: connection refused, DNS, timeout, truncated body.
    /// Payload: [`reqwest::Error`]
    Transport,
    /// The client session was closed before the call was issued. Payload: [`Closed`]
    Closed,
    /// Internal error from dependencies
    Internal,
}

#[derive(Debug)]
pub struct Error {
    kind: Kind,
    source: Option<Box<dyn StdError + Send + Sync + 'static>>,
    backtrace: Backtrace,
}

impl Error {
    pub fn with_source<S: StdError + Send + Sync + 'static>(kind: Kind, source: S) -> Self {
        Self {
            kind,
            source: Some(Box::new(source)),
            backtrace: Backtrace::capture(),
        }
    }

    pub fn kind(&self) -> Kind {
        self.kind
    }

    pub fn backtrace(&self) -> &Backtrace {
        &self.backtrace
    }

    pub fn inner(&self) -> Option<&(dyn StdError + Send + Sync + 'static)> {
        self.source.as_deref()
    }

    pub fn downcast_ref<E: StdError + 'static>(&self) -> Option<&E> {
        let e = self.source.as_deref()?;
        e.downcast_ref::<E>()
    }

    pub fn validation<S: Into<String>>(message: S) -> Self {
        Validation {
            field: None,
            reason: message.into(),
        }
        .into()
    }

    /// Validation failure located at `field`, a JSON path such as `[1].question`.
    pub fn validation_at<F: Into<String>, S: Into<String>>(field: F, message: S) -> Self {
        Validation {
            field: Some(field.into()),
            reason: message.into(),
        }
        .into()
    }

    pub fn status<S: Into<String>>(
        status_code: StatusCode,
        method: Method,
        path: String,
        message: S,
    ) -> Self {
        Status {
            status_code,
            method,
            path,
            message: message.into(),
        }
        .into()
    }

    /// The identifier defaults to the percent-decoded last segment of `path`.
    #[must_use]
    pub fn not_found(method: Method, path: String) -> Self {
        let identifier = path
            .rsplit('/')
            .next()
            .map(|segment| percent_decode_str(segment).decode_utf8_lossy().into_owned())
            .unwrap_or_default();

        NotFound {
            method,
            path,
            identifier,
        }
        .into()
    }

    /// Replaces the identifier of a not-found error, for endpoints nested below the looked-up
    /// item such as `/markets/{id}/tags`. Other kinds pass through unchanged.
    #[must_use]
    pub(crate) fn for_identifier(self, identifier: &str) -> Self {
        match self.downcast_ref::<NotFound>() {
            Some(not_found) => NotFound {
                method: not_found.method.clone(),
                path: not_found.path.clone(),
                identifier: identifier.to_owned(),
            }
            .into(),
            None => self,
        }
    }

    #[must_use]
    pub fn closed() -> Self {
        Closed.into()
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.source {
            Some(src) => write!(f, "{:?}: {}", self.kind, src),
            None => write!(f, "{:?}", self.kind),
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.source
            .as_deref()
            .map(|e| e as &(dyn StdError + 'static))
    }
}

#[non_exhaustive]
#[derive(Debug)]
pub struct Status {
    pub status_code: StatusCode,
    pub method: Method,
    pub path: String,
    pub message: String,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "error({}) making {} call to {} with {}",
            self.status_code, self.method, self.path, self.message
        )
    }
}

impl StdError for Status {}

/// `path` is the request path as sent, e.g. `/markets/slug/some%20slug`.
#[non_exhaustive]
#[derive(Debug)]
pub struct NotFound {
    pub method: Method,
    pub path: String,
    identifier: String,
}

impl NotFound {
    /// The id, slug or address that was looked up, percent-decoded.
    #[must_use]
    pub fn identifier(&self) -> &str {
        &self.identifier
    }
}

impl fmt::Display for NotFound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "resource not found: {} {}", self.method, self.path)
    }
}

impl StdError for NotFound {}

#[non_exhaustive]
#[derive(Debug)]
pub struct Validation {
    /// JSON path of the offending value, `.` for the document root. `None` when the failure
    /// is not tied to a response document.
    pub field: Option<String>,
    pub reason: String,
}

impl fmt::Display for Validation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.field {
            Some(field) => write!(f, "invalid value at `{field}`: {}", self.reason),
            None => write!(f, "invalid: {}", self.reason),
        }
    }
}

impl StdError for Validation {}

#[non_exhaustive]
#[derive(Debug, Clone, Copy)]
pub struct Closed;

impl fmt::Display for Closed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "client closed: the HTTP session has been released")
    }
}

impl StdError for Closed {}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        if e.is_builder() {
            Error::with_source(Kind::Internal, e)
        } else {
            Error::with_source(Kind::Transport, e)
        }
    }
}

impl From<header::InvalidHeaderValue> for Error {
    fn from(e: header::InvalidHeaderValue) -> Self {
        Error::with_source(Kind::Internal, e)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        let reason = e.to_string();
        Error::validation_at(".", reason)
    }
}

impl From<url::ParseError> for Error {
    fn from(e: url::ParseError) -> Self {
        Error::with_source(Kind::Internal, e)
    }
}

impl From<Validation> for Error {
    fn from(err: Validation) -> Self {
        Error::with_source(Kind::Validation, err)
    }
}

impl From<Status> for Error {
    fn from(err: Status) -> Self {
        Error::with_source(Kind::Status, err)
    }
}

impl From<NotFound> for Error {
    fn from(err: NotFound) -> Self {
        Error::with_source(Kind::NotFound, err)
    }
}

impl From<Closed> for Error {
    fn from(err: Closed) -> Self {
        Error::with_source(Kind::Closed, err)
    }
}
