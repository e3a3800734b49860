//! The `{ data, code, msg }` shape every backend response uses.

use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer, Serialize};

/// Result code the backend uses for success.
pub const SUCCESS_CODE: i64 = 200;

/// Payload type for endpoints whose `data` carries nothing useful.
pub type Empty = serde_json::Value;

/// A backend result envelope, exactly as received.
///
/// `data` is only decoded when `code` signals success; on any other code it
/// is dropped unread, whatever its shape.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Envelope<T> {
    data: Option<T>,
    code: i64,
    msg: String,
}

/// Wire shape before `data` is typed.
#[derive(Deserialize)]
struct RawEnvelope {
    #[serde(default)]
    data: Option<serde_json::Value>,
    code: i64,
    #[serde(default)]
    msg: String,
}

impl<'de, T: DeserializeOwned> Deserialize<'de> for Envelope<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = RawEnvelope::deserialize(deserializer)?;
        let data = match raw.data {
            Some(value) if raw.code == SUCCESS_CODE => {
                Some(serde_json::from_value(value).map_err(D::Error::custom)?)
            }
            _ => None,
        };
        Ok(Self {
            data,
            code: raw.code,
            msg: raw.msg,
        })
    }
}

/// A non-success envelope, split into code and message.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{msg} (code {code})")]
pub struct Failure {
    pub code: i64,
    pub msg: String,
}

impl<T> Envelope<T> {
    pub fn success(data: T) -> Self {
        Self {
            data: Some(data),
            code: SUCCESS_CODE,
            msg: "success".to_string(),
        }
    }

    pub fn failure(code: i64, msg: impl Into<String>) -> Self {
        Self {
            data: None,
            code,
            msg: msg.into(),
        }
    }

    pub fn code(&self) -> i64 {
        self.code
    }

    pub fn is_success(&self) -> bool {
        self.code == SUCCESS_CODE
    }

    /// The payload, present only when the code signals success.
    pub fn data(&self) -> Option<&T> {
        if self.is_success() {
            self.data.as_ref()
        } else {
            None
        }
    }

    pub fn into_data(self) -> Option<T> {
        if self.is_success() {
            self.data
        } else {
            None
        }
    }

    /// The message as the backend sent it, possibly empty.
    pub fn raw_msg(&self) -> &str {
        &self.msg
    }

    /// Human-readable message.
    ///
    /// A failure with an empty `msg` breaks the backend contract; a generic
    /// message naming the code is returned instead.
    pub fn message(&self) -> String {
        if self.msg.trim().is_empty() && !self.is_success() {
            format!("request failed with code {}", self.code)
        } else {
            self.msg.clone()
        }
    }

    /// Success payload, or the failure to show the user.
    pub fn into_result(self) -> Result<Option<T>, Failure> {
        if self.is_success() {
            Ok(self.data)
        } else {
            Err(Failure {
                code: self.code,
                msg: self.message(),
            })
        }
    }
}
