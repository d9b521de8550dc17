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

//! Filtering of query string parameters against an operation's whitelist.
//!
//! Each operation accepts a fixed set of query string parameters, recorded in
//! its [Operation](crate::plan::Operation) descriptor. Anything else the
//! caller provides is discarded before the request is sent, so a typo cannot
//! change the meaning of a request server-side. Clients built with strict
//! parameters reject instead of discarding.
//!
//! A few parameter names differ between the client API and the wire. Renames
//! are applied before the whitelist check, so descriptors always list wire
//! names.

use crate::plan::Operation;
use sbx::params::Params;

/// Caller-facing parameter names that differ from their wire form.
const RENAMES: &[(&str, &str)] = &[("from_", "from"), ("doc_type", "type")];

/// Parameters every operation accepts. They shape the response presentation
/// and are never listed in individual descriptors.
const DISPLAY: &[&str] = &["pretty", "human", "error_trace", "filter_path"];

#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("operation {operation} does not accept the parameter '{name}'")]
    UnknownParameter { operation: String, name: String },
}

/// Reconciles the caller's parameters with what the operation accepts.
pub fn apply(operation: &Operation, params: &mut Params, strict: bool) -> sbx::Result<()> {
    for (caller, wire) in RENAMES {
        params.rename(caller, wire);
    }
    let unknown = params
        .iter()
        .map(|(name, _)| name)
        .filter(|name| !allowed(operation, name))
        .map(str::to_string)
        .collect::<Vec<_>>();
    for name in unknown {
        if strict {
            return Err(sbx::error::Error::validation(Error::UnknownParameter {
                operation: operation.name.to_string(),
                name,
            }));
        }
        tracing::debug!("{}: discarding unsupported parameter '{name}'", operation.name);
        params.remove(&name);
    }
    Ok(())
}

fn allowed(operation: &Operation, name: &str) -> bool {
    DISPLAY.contains(&name) || operation.params.contains(&name)
}
