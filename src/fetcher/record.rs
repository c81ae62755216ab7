//! Result records and failure classification
//!
//! Every fetch produces exactly one record per username: either a success
//! carrying the extracted profile fields plus the raw payload, or a failure
//! carrying a message and an optional status code. The two shapes are
//! variants of one enum, so a record can never be both or neither.

use serde::Serialize;
use serde_json::Value;

/// Classified failure for a single fetch
///
/// This is a closed set: the uncategorized transport case is an explicit
/// variant carrying the underlying message, not an open-ended fallback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchFailure {
    /// Connection was not established within the connect budget
    ConnectTimeout,

    /// Connection could not be established at all
    ConnectError,

    /// Request body could not be written within the budget
    WriteTimeout,

    /// Response was not read within the read budget
    ReadTimeout,

    /// Any other transport-level failure, with the underlying message
    Transport(String),

    /// HTTP 401 from the endpoint
    Unauthorized,

    /// Any other non-200 HTTP status
    BadStatus(u16),

    /// Response body did not parse as JSON
    InvalidPayload(String),

    /// The payload itself carried an error field
    Upstream { message: String, status_code: u16 },
}

impl FetchFailure {
    /// Human-readable message placed in the record's `error` field
    pub fn message(&self) -> String {
        match self {
            FetchFailure::ConnectTimeout => "Proxy connect timeout".to_string(),
            FetchFailure::ConnectError => "Proxy connect error".to_string(),
            FetchFailure::WriteTimeout => "Proxy write timeout".to_string(),
            FetchFailure::ReadTimeout => "Proxy read timeout".to_string(),
            FetchFailure::Transport(message) => message.clone(),
            FetchFailure::Unauthorized => "Unauthorized error".to_string(),
            FetchFailure::BadStatus(code) => {
                format!("Failed to fetch user details: {}", code)
            }
            FetchFailure::InvalidPayload(detail) => format!("Invalid JSON: {}", detail),
            FetchFailure::Upstream { message, .. } => {
                format!("Failed to fetch user details: {}", message)
            }
        }
    }

    /// Status code carried by the record, when the failure has one
    ///
    /// Transport and payload-parse failures carry none.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            FetchFailure::Unauthorized => Some(401),
            FetchFailure::BadStatus(code) => Some(*code),
            FetchFailure::Upstream { status_code, .. } => Some(*status_code),
            _ => None,
        }
    }

    /// Classifies a transport-level error from the HTTP client
    ///
    /// reqwest exposes no dedicated write-timeout predicate, so timeouts are
    /// split by phase: connect, request write, body read (the default when
    /// the phase is unknown).
    pub(crate) fn from_transport(err: &reqwest::Error) -> Self {
        if err.is_timeout() {
            if err.is_connect() {
                FetchFailure::ConnectTimeout
            } else if err.is_body() {
                FetchFailure::ReadTimeout
            } else if err.is_request() {
                FetchFailure::WriteTimeout
            } else {
                FetchFailure::ReadTimeout
            }
        } else if err.is_connect() {
            FetchFailure::ConnectError
        } else {
            FetchFailure::Transport(err.to_string())
        }
    }
}

/// One normalized result per username
///
/// Serializes as a flat object: the success shape carries `status: "ok"`
/// and the extracted fields, the failure shape carries `error` and an
/// optional `status_code`. `username` and `proxy` are present in both.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum ProfileRecord {
    Profile(ProfileSuccess),
    Failure(ProfileFailure),
}

/// Success shape of a [`ProfileRecord`]
///
/// Every extracted field is nullable: a payload missing any nesting level
/// yields nulls, never an error.
#[derive(Debug, Clone, Serialize)]
pub struct ProfileSuccess {
    pub username: String,
    pub user_id: Option<String>,
    pub followers_count: Option<u64>,
    pub following_count: Option<u64>,
    pub full_name: Option<String>,
    pub is_private: Option<bool>,
    pub is_verified: Option<bool>,
    pub profile_pic_url: Option<String>,
    /// The full parsed payload, retained for downstream use
    pub raw: Value,
    pub status: String,
    pub proxy: Option<String>,
}

/// Failure shape of a [`ProfileRecord`]
#[derive(Debug, Clone, Serialize)]
pub struct ProfileFailure {
    pub username: String,
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_code: Option<u16>,
    pub proxy: Option<String>,
}

impl ProfileRecord {
    /// Builds a success record by extracting profile fields from the payload
    pub fn success(username: String, payload: Value, proxy: Option<String>) -> Self {
        let user = payload.get("data").and_then(|data| data.get("user"));

        // Prefer the high-resolution picture, fall back to the standard one.
        // Empty strings count as absent.
        let profile_pic_url = user
            .and_then(|u| u.get("profile_pic_url_hd"))
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
            .or_else(|| {
                user.and_then(|u| u.get("profile_pic_url"))
                    .and_then(Value::as_str)
                    .filter(|s| !s.is_empty())
            })
            .map(|s| s.to_string());

        ProfileRecord::Profile(ProfileSuccess {
            username,
            user_id: user
                .and_then(|u| u.get("id"))
                .and_then(Value::as_str)
                .map(|s| s.to_string()),
            followers_count: user
                .and_then(|u| u.get("edge_followed_by"))
                .and_then(|e| e.get("count"))
                .and_then(Value::as_u64),
            following_count: user
                .and_then(|u| u.get("edge_follow"))
                .and_then(|e| e.get("count"))
                .and_then(Value::as_u64),
            full_name: user
                .and_then(|u| u.get("full_name"))
                .and_then(Value::as_str)
                .map(|s| s.to_string()),
            is_private: user.and_then(|u| u.get("is_private")).and_then(Value::as_bool),
            is_verified: user
                .and_then(|u| u.get("is_verified"))
                .and_then(Value::as_bool),
            profile_pic_url,
            raw: payload,
            status: "ok".to_string(),
            proxy,
        })
    }

    /// Builds a failure record from a classified failure
    pub fn failure(username: String, failure: FetchFailure, proxy: Option<String>) -> Self {
        ProfileRecord::Failure(ProfileFailure {
            username,
            error: failure.message(),
            status_code: failure.status_code(),
            proxy,
        })
    }

    /// The username this record answers for
    pub fn username(&self) -> &str {
        match self {
            ProfileRecord::Profile(success) => &success.username,
            ProfileRecord::Failure(failure) => &failure.username,
        }
    }

    /// Whether this record is a success
    pub fn is_ok(&self) -> bool {
        matches!(self, ProfileRecord::Profile(_))
    }

    /// The error message, for failure records
    pub fn error_message(&self) -> Option<&str> {
        match self {
            ProfileRecord::Profile(_) => None,
            ProfileRecord::Failure(failure) => Some(&failure.error),
        }
    }

    /// The proxy URL this fetch went through, if any
    pub fn proxy(&self) -> Option<&str> {
        match self {
            ProfileRecord::Profile(success) => success.proxy.as_deref(),
            ProfileRecord::Failure(failure) => failure.proxy.as_deref(),
        }
    }
}

/// Extracts an upstream-reported error from a parsed payload
///
/// Follows the source semantics: `null`, `false`, `0`, and `""` do not count
/// as an error; anything else does. The status code defaults to 500 when the
/// payload declares an error without a usable one.
pub(crate) fn upstream_error(payload: &Value) -> Option<(String, u16)> {
    let error = payload.get("error")?;

    let truthy = match error {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    };
    if !truthy {
        return None;
    }

    let message = match error {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    };

    let status_code = payload
        .get("status_code")
        .and_then(Value::as_u64)
        .and_then(|code| u16::try_from(code).ok())
        .unwrap_or(500);

    Some((message, status_code))
}
