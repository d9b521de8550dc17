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
use sbx::target::Target;
use sbxi::http::RestClient;
use sbxi::path::Path;
use sbxi::plan::Operation;
use sbxi::require;
use serde_json::Value;
use std::sync::Arc;

/// A client for the graph explore API.
#[derive(Clone, Debug)]
pub struct Graph {
    transport: Arc<RestClient>,
}

static EXPLORE: Operation = Operation {
    name: "graph.explore",
    method: Method::POST,
    params: &["routing", "timeout"],
};

impl Graph {
    pub(crate) fn new(transport: Arc<RestClient>) -> Self {
        Self { transport }
    }

    /// Extracts and summarizes terms related to the documents matching a
    /// query.
    pub async fn explore(
        &self,
        index: impl Into<Target>,
        body: Option<Value>,
        options: RequestOptions,
    ) -> Result<Response<Value>> {
        let index = index.into();
        require::argument("index", &index)?;
        let path = Path::new()
            .value(&index)
            .fixed("_graph")
            .fixed("explore")
            .finish();
        let plan = self
            .transport
            .plan(&EXPLORE, path, options)?
            .maybe_json(body.as_ref())?;
        self.transport.execute(plan).await
    }
}
