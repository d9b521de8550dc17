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

//! Searchbase Client Library for Rust
//!
//! This crate contains the clients to interact with a Searchbase cluster
//! over its REST API. Most applications create one [Searchbase] client
//! (or one [blocking::Searchbase] client) and reuse it:
//!
//! ```
//! # tokio_test::block_on(async {
//! use searchbase::Searchbase;
//! let client = Searchbase::builder()
//!     .with_endpoint("http://localhost:9200")
//!     .build()
//!     .await?;
//! # searchbase::client_builder::Result::<()>::Ok(()) });
//! ```
//!
//! The feature areas of the service are grouped behind namespace clients,
//! obtained from accessor methods on the root client:
//!
//! ```
//! # use searchbase::Searchbase;
//! async fn example(client: &Searchbase) -> searchbase::Result<()> {
//!     use searchbase::options::RequestOptions;
//!     let response = client
//!         .ilm()
//!         .get_lifecycle("logs-policy", RequestOptions::new())
//!         .await?;
//!     println!("policy = {:?}", response.body());
//!     Ok(())
//! }
//! ```

/// The result type used by all request methods.
pub use sbx::Result;
/// The error type for requests that could not be built or sent.
pub use sbx::error::Error;

pub use crate::client::{ClientBuilder, Searchbase};

pub mod blocking;
pub mod client;

pub mod autoscaling;
pub mod ccr;
pub mod enrich;
pub mod eql;
pub mod graph;
pub mod ilm;
pub mod ingest;
pub mod license;
pub mod monitoring;
pub mod ssl;
pub mod transform;
pub mod xpack;

/// Client construction errors and results.
pub mod client_builder {
    pub use sbx::client_builder::{Error, Result};
}
/// Credential types used to authenticate requests.
pub mod credentials {
    pub use sbx::credentials::Credentials;
}
/// Errors reported while building or sending requests.
pub mod error {
    pub use sbx::error::{ApiError, Error, ErrorCause, ErrorDetails};
}
/// Newline-delimited request bodies.
pub mod ndjson {
    pub use sbx::ndjson::NdBody;
}
/// Per-request options: query parameters, headers, and overrides.
pub mod options {
    pub use sbx::options::RequestOptions;
    pub use sbx::params::Params;
}
/// Response envelope with status and headers.
pub mod response {
    pub use sbx::response::{Parts, Response};
}
/// Path targets: index names, identifiers, and lists thereof.
pub mod target {
    pub use sbx::target::Target;
}
