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

use crate::Result;
use http::Method;
use sbx::options::RequestOptions;
use sbx::response::Response;
use sbxi::http::RestClient;
use sbxi::path::Path;
use sbxi::plan::Operation;
use serde_json::Value;
use std::sync::Arc;

/// A client for the TLS certificate API.
#[derive(Clone, Debug)]
pub struct Ssl {
    transport: Arc<RestClient>,
}

static CERTIFICATES: Operation = Operation {
    name: "ssl.certificates",
    method: Method::GET,
    params: &[],
};

impl Ssl {
    pub(crate) fn new(transport: Arc<RestClient>) -> Self {
        Self { transport }
    }

    /// Returns the certificates loaded by every node for TLS.
    pub async fn certificates(&self, options: RequestOptions) -> Result<Response<Value>> {
        let path = Path::new().fixed("_ssl").fixed("certificates").finish();
        let plan = self.transport.plan(&CERTIFICATES, path, options)?;
        self.transport.execute(plan).await
    }
}
