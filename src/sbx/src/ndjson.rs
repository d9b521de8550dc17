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

//! Newline-delimited JSON request bodies.

use crate::error::Error;
use serde_json::Value;

/// The body of a bulk-style request, one JSON document per line.
///
/// Bulk endpoints do not accept a single JSON document. They expect a
/// sequence of documents separated by newlines, with a trailing newline, and
/// a `content-type` of `application/x-ndjson`.
///
/// Callers can provide the documents as values and let the client serialize
/// them, or hand over an already formatted payload:
///
/// ```
/// use searchbase_sbx::ndjson::NdBody;
/// use serde_json::json;
/// let body = NdBody::from(vec![
///     json!({"index": {}}),
///     json!({"took": 5}),
/// ]);
/// assert!(!body.is_empty());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum NdBody {
    /// A payload already in newline-delimited form.
    Raw(String),
    /// Documents to serialize, one per line.
    Lines(Vec<Value>),
}

impl NdBody {
    /// Returns true if there is nothing to send.
    pub fn is_empty(&self) -> bool {
        match self {
            NdBody::Raw(raw) => raw.is_empty(),
            NdBody::Lines(lines) => lines.is_empty(),
        }
    }

    /// Renders the body as bytes, guaranteeing the trailing newline.
    pub fn into_payload(self) -> crate::Result<bytes::Bytes> {
        let mut payload = match self {
            NdBody::Raw(raw) => raw,
            NdBody::Lines(lines) => {
                let mut buffer = String::new();
                for line in lines {
                    let line = serde_json::to_string(&line).map_err(Error::ser)?;
                    buffer.push_str(&line);
                    buffer.push('\n');
                }
                buffer
            }
        };
        if !payload.is_empty() && !payload.ends_with('\n') {
            payload.push('\n');
        }
        Ok(bytes::Bytes::from(payload))
    }
}

impl From<String> for NdBody {
    fn from(value: String) -> Self {
        NdBody::Raw(value)
    }
}

impl From<&str> for NdBody {
    fn from(value: &str) -> Self {
        NdBody::Raw(value.to_string())
    }
}

impl From<Vec<Value>> for NdBody {
    fn from(value: Vec<Value>) -> Self {
        NdBody::Lines(value)
    }
}
