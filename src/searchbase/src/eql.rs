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

/// A client for the event query language search APIs.
///
/// EQL searches match event sequences. Long-running searches can be kept
/// alive on the server and retrieved later by identifier.
#[derive(Clone, Debug)]
pub struct Eql {
    transport: Arc<RestClient>,
}

static SEARCH: Operation = Operation {
    name: "eql.search",
    method: Method::POST,
    params: &["keep_alive", "keep_on_completion", "wait_for_completion_timeout"],
};

static DELETE: Operation = Operation {
    name: "eql.delete",
    method: Method::DELETE,
    params: &[],
};

static GET: Operation = Operation {
    name: "eql.get",
    method: Method::GET,
    params: &["keep_alive", "wait_for_completion_timeout"],
};

static GET_STATUS: Operation = Operation {
    name: "eql.get_status",
    method: Method::GET,
    params: &[],
};

impl Eql {
    pub(crate) fn new(transport: Arc<RestClient>) -> Self {
        Self { transport }
    }

    /// Runs an EQL search over the given indices.
    ///
    /// # Example
    /// ```
    /// # use searchbase::Searchbase;
    /// # use searchbase::options::RequestOptions;
    /// # use serde_json::json;
    /// async fn example(client: &Searchbase) -> searchbase::Result<()> {
    ///     let body = json!({"query": "process where process.name == \"svchost.exe\""});
    ///     let response = client
    ///         .eql()
    ///         .search("windows-logs-*", body, RequestOptions::new())
    ///         .await?;
    ///     println!("hits: {:?}", response.body());
    ///     Ok(())
    /// }
    /// ```
    pub async fn search(
        &self,
        index: impl Into<Target>,
        body: Value,
        options: RequestOptions,
    ) -> Result<Response<Value>> {
        let index = index.into();
        require::argument("index", &index)?;
        require::body(&body)?;
        let path = Path::new()
            .value(&index)
            .fixed("_eql")
            .fixed("search")
            .finish();
        let plan = self.transport.plan(&SEARCH, path, options)?.json(&body)?;
        self.transport.execute(plan).await
    }

    /// Deletes a stored EQL search and its results.
    pub async fn delete(
        &self,
        id: impl Into<Target>,
        options: RequestOptions,
    ) -> Result<Response<Value>> {
        let id = id.into();
        require::argument("id", &id)?;
        let path = Path::new()
            .fixed("_eql")
            .fixed("search")
            .value(&id)
            .finish();
        let plan = self.transport.plan(&DELETE, path, options)?;
        self.transport.execute(plan).await
    }

    /// Returns the results of a stored EQL search.
    pub async fn get(
        &self,
        id: impl Into<Target>,
        options: RequestOptions,
    ) -> Result<Response<Value>> {
        let id = id.into();
        require::argument("id", &id)?;
        let path = Path::new()
            .fixed("_eql")
            .fixed("search")
            .value(&id)
            .finish();
        let plan = self.transport.plan(&GET, path, options)?;
        self.transport.execute(plan).await
    }

    /// Returns the current status of a stored EQL search.
    pub async fn get_status(
        &self,
        id: impl Into<Target>,
        options: RequestOptions,
    ) -> Result<Response<Value>> {
        let id = id.into();
        require::argument("id", &id)?;
        let path = Path::new()
            .fixed("_eql")
            .fixed("search")
            .fixed("status")
            .value(&id)
            .finish();
        let plan = self.transport.plan(&GET_STATUS, path, options)?;
        self.transport.execute(plan).await
    }
}
