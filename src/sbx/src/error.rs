// Copyright 2025 Searchbase Authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! The error types used by the Searchbase client libraries.

use http::HeaderMap;
use std::error::Error as StdError;

type BoxError = Box<dyn StdError + Send + Sync>;

/// The core error returned by all client operations.
///
/// Errors come from multiple sources: the operation arguments may fail local
/// validation, the request body may not serialize, the transport may be unable
/// to reach the service, the call may time out, or the service itself may
/// report a failure.
///
/// Most applications will just return or log the error. Applications that need
/// to interrogate the failure can use the predicates to determine the error
/// kind, the accessors to query common details, and the
/// [source][std::error::Error::source] chain for deeper information.
///
/// # Example
/// ```
/// use searchbase_sbx::error::Error;
/// match example_call() {
///     Err(e) if e.is_validation() => { println!("fix the arguments: {e}"); }
///     Err(e) if e.is_timeout() => { println!("not enough time: {e}"); }
///     Err(e) if matches!(e.api_error(), Some(_)) => {
///         println!("the service rejected the call: {:?}", e.api_error().unwrap());
///     }
///     Err(e) => { println!("some other error: {e}"); }
///     Ok(_) => { println!("success"); }
/// }
///
/// fn example_call() -> Result<(), Error> {
///     // ... details omitted ...
///     # use searchbase_sbx::error::ApiError;
///     # Err(Error::service(ApiError::with_reason(404, "no such index")))
/// }
/// ```
#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    source: Option<BoxError>,
}

impl Error {
    /// Creates an error for a request that failed local validation.
    ///
    /// These errors are always generated before any I/O: the request never
    /// leaves the process.
    ///
    /// # Example
    /// ```
    /// use std::error::Error as _;
    /// use searchbase_sbx::error::Error;
    /// let error = Error::validation("simulated problem");
    /// assert!(error.is_validation());
    /// assert!(error.source().is_some());
    /// ```
    pub fn validation<T: Into<BoxError>>(source: T) -> Self {
        Self {
            kind: ErrorKind::Validation,
            source: Some(source.into()),
        }
    }

    /// The request arguments did not pass local validation.
    ///
    /// Typical causes are an empty value for a required argument, an unknown
    /// query parameter in strict mode, or a malformed reserved option value.
    /// The error message names the offending input.
    pub fn is_validation(&self) -> bool {
        matches!(self.kind, ErrorKind::Validation)
    }

    /// Creates an error with the failure details reported by the service.
    ///
    /// # Example
    /// ```
    /// use searchbase_sbx::error::{ApiError, Error};
    /// let details = ApiError::with_reason(400, "unknown parameter");
    /// let error = Error::service(details.clone());
    /// assert_eq!(error.api_error(), Some(&details));
    /// ```
    pub fn service(details: ApiError) -> Self {
        let details = ServiceDetails {
            details,
            status_code: None,
            headers: None,
        };
        Self {
            kind: ErrorKind::Service(Box::new(details)),
            source: None,
        }
    }

    /// Not part of the public API, subject to change without notice.
    ///
    /// Creates a service error including the transport metadata.
    #[doc(hidden)]
    pub fn service_with_http_metadata(
        details: ApiError,
        status_code: Option<u16>,
        headers: Option<HeaderMap>,
    ) -> Self {
        let details = ServiceDetails {
            details,
            status_code,
            headers,
        };
        Self {
            kind: ErrorKind::Service(Box::new(details)),
            source: None,
        }
    }

    /// Creates an error representing a timeout.
    ///
    /// # Example
    /// ```
    /// use std::error::Error as _;
    /// use searchbase_sbx::error::Error;
    /// let error = Error::timeout("simulated timeout");
    /// assert!(error.is_timeout());
    /// assert!(error.source().is_some());
    /// ```
    pub fn timeout<T: Into<BoxError>>(source: T) -> Self {
        Self {
            kind: ErrorKind::Timeout,
            source: Some(source.into()),
        }
    }

    /// The request could not be completed before its deadline.
    ///
    /// This is always a client-side generated error. The request may or may
    /// not have started, and it may or may not complete in the service.
    pub fn is_timeout(&self) -> bool {
        matches!(self.kind, ErrorKind::Timeout)
    }

    /// Not part of the public API, subject to change without notice.
    ///
    /// Creates an error representing a serialization problem.
    #[doc(hidden)]
    pub fn ser<T: Into<BoxError>>(source: T) -> Self {
        Self {
            kind: ErrorKind::Serialization,
            source: Some(source.into()),
        }
    }

    /// The request body could not be serialized.
    ///
    /// This is a client-side generated error, raised before the request is
    /// sent. It is never transient: the same input will fail again.
    pub fn is_serialization(&self) -> bool {
        matches!(self.kind, ErrorKind::Serialization)
    }

    /// Not part of the public API, subject to change without notice.
    ///
    /// Creates an error representing a deserialization problem.
    #[doc(hidden)]
    pub fn deser<T: Into<BoxError>>(source: T) -> Self {
        Self {
            kind: ErrorKind::Deserialization,
            source: Some(source.into()),
        }
    }

    /// The response body could not be deserialized.
    pub fn is_deserialization(&self) -> bool {
        matches!(self.kind, ErrorKind::Deserialization)
    }

    /// Not part of the public API, subject to change without notice.
    ///
    /// Cannot create the authentication headers.
    #[doc(hidden)]
    pub fn authentication<T: Into<BoxError>>(source: T) -> Self {
        Self {
            kind: ErrorKind::Authentication,
            source: Some(source.into()),
        }
    }

    /// Could not render the configured credentials into request headers.
    ///
    /// Typically this indicates credentials containing bytes that are not
    /// valid in an HTTP header.
    pub fn is_authentication(&self) -> bool {
        matches!(self.kind, ErrorKind::Authentication)
    }

    /// Not part of the public API, subject to change without notice.
    ///
    /// An error status reported by the transport layer, with a payload the
    /// client could not interpret as a service error.
    #[doc(hidden)]
    pub fn http(status_code: u16, headers: HeaderMap, payload: bytes::Bytes) -> Self {
        let details = TransportDetails {
            status_code: Some(status_code),
            headers: Some(headers),
            payload: Some(payload),
        };
        Self {
            kind: ErrorKind::Transport(Box::new(details)),
            source: None,
        }
    }

    /// Not part of the public API, subject to change without notice.
    ///
    /// A problem in the transport layer without a full HTTP response.
    ///
    /// Examples include connection failures and broken connections after the
    /// request is sent.
    #[doc(hidden)]
    pub fn io<T: Into<BoxError>>(source: T) -> Self {
        let details = TransportDetails {
            status_code: None,
            headers: None,
            payload: None,
        };
        Self {
            kind: ErrorKind::Transport(Box::new(details)),
            source: Some(source.into()),
        }
    }

    /// The request failed in the transport layer without a service response.
    pub fn is_io(&self) -> bool {
        match &self.kind {
            ErrorKind::Transport(d) => {
                d.status_code.is_none() && d.headers.is_none() && d.payload.is_none()
            }
            _ => false,
        }
    }

    /// The request failed in the transport layer.
    ///
    /// This covers both I/O failures and error statuses whose payload did not
    /// contain a structured service error.
    pub fn is_transport(&self) -> bool {
        matches!(&self.kind, ErrorKind::Transport { .. })
    }

    /// Not part of the public API, subject to change without notice.
    #[doc(hidden)]
    pub fn other<T: Into<BoxError>>(source: T) -> Self {
        Self {
            kind: ErrorKind::Other,
            source: Some(source.into()),
        }
    }

    /// The parsed error body, if any, associated with this error.
    ///
    /// The service reports failures as a JSON body with a status and a cause,
    /// either structured or a bare string reason. When that body can be
    /// parsed, it is available here.
    ///
    /// # Example
    /// ```
    /// use searchbase_sbx::error::{ApiError, Error};
    /// let error = Error::service(ApiError::with_reason(404, "no such policy"));
    /// if let Some(details) = error.api_error() {
    ///     println!("rejected with status {}: {:?}", details.status, details.error);
    /// }
    /// ```
    pub fn api_error(&self) -> Option<&ApiError> {
        match &self.kind {
            ErrorKind::Service(d) => Some(&d.as_ref().details),
            _ => None,
        }
    }

    /// The HTTP status code, if any, associated with this error.
    ///
    /// Note that `http_status_code()`, `http_headers()`, `http_payload()`,
    /// and `api_error()` are represented as different accessors because they
    /// may be set in some errors but not others.
    pub fn http_status_code(&self) -> Option<u16> {
        match &self.kind {
            ErrorKind::Transport(d) => d.as_ref().status_code,
            ErrorKind::Service(d) => d.as_ref().status_code,
            _ => None,
        }
    }

    /// The response headers, if any, associated with this error.
    pub fn http_headers(&self) -> Option<&http::HeaderMap> {
        match &self.kind {
            ErrorKind::Transport(d) => d.as_ref().headers.as_ref(),
            ErrorKind::Service(d) => d.as_ref().headers.as_ref(),
            _ => None,
        }
    }

    /// The raw response payload, if any, associated with this error.
    pub fn http_payload(&self) -> Option<&bytes::Bytes> {
        match &self.kind {
            ErrorKind::Transport(d) => d.payload.as_ref(),
            _ => None,
        }
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (&self.kind, &self.source) {
            (ErrorKind::Validation, Some(e)) => {
                write!(f, "the request is invalid and was not sent: {e}")
            }
            (ErrorKind::Serialization, Some(e)) => write!(f, "cannot serialize the request {e}"),
            (ErrorKind::Deserialization, Some(e)) => {
                write!(f, "cannot deserialize the response {e}")
            }
            (ErrorKind::Authentication, Some(e)) => {
                write!(f, "cannot create the authentication headers {e}")
            }
            (ErrorKind::Timeout, Some(e)) => {
                write!(f, "the request exceeded the request deadline {e}")
            }
            (ErrorKind::Transport(details), _) => details.display(self.source(), f),
            (ErrorKind::Service(d), _) => {
                write!(f, "the service reports an error: {}", d.details)
            }
            (ErrorKind::Other, Some(e)) => {
                write!(f, "an unclassified problem making a request: {e}")
            }
            (_, None) => unreachable!("no constructor allows this"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn std::error::Error))
    }
}

/// The type of error held by an [Error] instance.
#[derive(Debug)]
enum ErrorKind {
    Validation,
    Serialization,
    Deserialization,
    Authentication,
    Timeout,
    Transport(Box<TransportDetails>),
    Service(Box<ServiceDetails>),
    /// An uncategorized error.
    Other,
}

#[derive(Debug)]
struct TransportDetails {
    status_code: Option<u16>,
    headers: Option<HeaderMap>,
    payload: Option<bytes::Bytes>,
}

impl TransportDetails {
    fn display(
        &self,
        source: Option<&(dyn StdError + 'static)>,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        match (source, &self) {
            (
                _,
                TransportDetails {
                    status_code: Some(code),
                    payload: Some(p),
                    ..
                },
            ) => {
                if let Ok(message) = std::str::from_utf8(p.as_ref()) {
                    write!(f, "the HTTP transport reports a [{code}] error: {message}")
                } else {
                    write!(f, "the HTTP transport reports a [{code}] error: {p:?}")
                }
            }
            (Some(source), _) => {
                write!(f, "the transport reports an error: {source}")
            }
            (None, _) => unreachable!("no Error constructor allows this"),
        }
    }
}

#[derive(Debug)]
struct ServiceDetails {
    status_code: Option<u16>,
    headers: Option<HeaderMap>,
    details: ApiError,
}

/// The error body reported by the Searchbase service.
///
/// Failed calls return a JSON document describing the failure:
///
/// ```json
/// {"error": {"type": "index_not_found_exception", "reason": "no such index"}, "status": 404}
/// ```
///
/// Some endpoints report a bare string cause instead:
///
/// ```json
/// {"error": "alias [x] missing", "status": 404}
/// ```
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[non_exhaustive]
pub struct ApiError {
    /// The status the service reports in the error body.
    #[serde(default)]
    pub status: u16,
    /// The cause of the failure.
    #[serde(default)]
    pub error: ErrorCause,
}

impl ApiError {
    /// Creates an error body with a structured cause.
    pub fn with_reason<S: Into<String>>(status: u16, reason: S) -> Self {
        Self {
            status,
            error: ErrorCause::Detailed(ErrorDetails {
                reason: Some(reason.into()),
                ..Default::default()
            }),
        }
    }

    /// The human-readable reason, if the service provided one.
    pub fn reason(&self) -> Option<&str> {
        match &self.error {
            ErrorCause::Detailed(d) => d.reason.as_deref(),
            ErrorCause::Message(m) => Some(m.as_str()),
        }
    }

    /// The error type tag, if the service provided one.
    pub fn error_type(&self) -> Option<&str> {
        match &self.error {
            ErrorCause::Detailed(d) => d.error_type.as_deref(),
            ErrorCause::Message(_) => None,
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (self.error_type(), self.reason()) {
            (Some(t), Some(r)) => write!(f, "[{}] {t}: {r}", self.status),
            (None, Some(r)) => write!(f, "[{}] {r}", self.status),
            (Some(t), None) => write!(f, "[{}] {t}", self.status),
            (None, None) => write!(f, "[{}] unspecified error", self.status),
        }
    }
}

/// The cause reported in an [ApiError], structured or bare.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(untagged)]
pub enum ErrorCause {
    /// A structured cause with a type tag and nested root causes.
    Detailed(ErrorDetails),
    /// A bare string reason.
    Message(String),
}

impl Default for ErrorCause {
    fn default() -> Self {
        ErrorCause::Detailed(ErrorDetails::default())
    }
}

/// The structured cause of an [ApiError].
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[non_exhaustive]
pub struct ErrorDetails {
    /// The error type tag, e.g. `index_not_found_exception`.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub error_type: Option<String>,
    /// The human-readable reason.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    /// The innermost causes, outermost first.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub root_cause: Vec<ErrorDetails>,
}
