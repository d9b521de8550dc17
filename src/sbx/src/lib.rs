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

//! Searchbase API helpers.
//!
//! This crate contains the types shared by all the Searchbase client crates
//! for Rust: the error type, request options, response envelope, credentials,
//! and the small value types used to address operations (path targets, query
//! parameter maps, newline-delimited payloads).
//!
//! Applications normally consume these types through the [`searchbase`] crate
//! rather than depending on this crate directly.
//!
//! [`searchbase`]: https://crates.io/crates/searchbase

/// An alias of [std::result::Result] where the error is always [crate::error::Error].
///
/// This is the result type used by all functions wrapping service operations.
pub type Result<T> = std::result::Result<T, crate::error::Error>;

/// The machinery to initialize clients.
pub mod client_builder;

/// Credential types and their header rendering.
pub mod credentials;

/// The core error types used by all the client crates.
pub mod error;

/// Newline-delimited JSON payloads for bulk-style operations.
pub mod ndjson;

/// Per-call request options.
pub mod options;

/// Query parameter maps and value coercions.
pub mod params;

/// The response envelope returned by service operations.
pub mod response;

/// Path target values: one name, or a comma-joined list of names.
pub mod target;
