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

/// A client for the enrich policy APIs.
///
/// Enrich policies describe how documents gain fields from reference data
/// at ingest time. A policy only takes effect after it is executed.
#[derive(Clone, Debug)]
pub struct Enrich {
    transport: Arc<RestClient>,
}

static DELETE_POLICY: Operation = Operation {
    name: "enrich.delete_policy",
    method: Method::DELETE,
    params: &[],
};

static EXECUTE_POLICY: Operation = Operation {
    name: "enrich.execute_policy",
    method: Method::PUT,
    params: &["wait_for_completion"],
};

static GET_POLICY: Operation = Operation {
    name: "enrich.get_policy",
    method: Method::GET,
    params: &[],
};

static PUT_POLICY: Operation = Operation {
    name: "enrich.put_policy",
    method: Method::PUT,
    params: &[],
};

static STATS: Operation = Operation {
    name: "enrich.stats",
    method: Method::GET,
    params: &[],
};

impl Enrich {
    pub(crate) fn new(transport: Arc<RestClient>) -> Self {
        Self { transport }
    }

    /// Deletes an enrich policy.
    pub async fn delete_policy(
        &self,
        name: impl Into<Target>,
        options: RequestOptions,
    ) -> Result<Response<Value>> {
        let name = name.into();
        require::argument("name", &name)?;
        let path = Path::new()
            .fixed("_enrich")
            .fixed("policy")
            .value(&name)
            .finish();
        let plan = self.transport.plan(&DELETE_POLICY, path, options)?;
        self.transport.execute(plan).await
    }

    /// Builds the enrich index for an existing policy.
    pub async fn execute_policy(
        &self,
        name: impl Into<Target>,
        options: RequestOptions,
    ) -> Result<Response<Value>> {
        let name = name.into();
        require::argument("name", &name)?;
        let path = Path::new()
            .fixed("_enrich")
            .fixed("policy")
            .value(&name)
            .fixed("_execute")
            .finish();
        let plan = self.transport.plan(&EXECUTE_POLICY, path, options)?;
        self.transport.execute(plan).await
    }

    /// Returns enrich policies, all of them when `name` is empty.
    pub async fn get_policy(
        &self,
        name: impl Into<Target>,
        options: RequestOptions,
    ) -> Result<Response<Value>> {
        let name = name.into();
        let path = Path::new()
            .fixed("_enrich")
            .fixed("policy")
            .value(&name)
            .finish();
        let plan = self.transport.plan(&GET_POLICY, path, options)?;
        self.transport.execute(plan).await
    }

    /// Creates an enrich policy.
    pub async fn put_policy(
        &self,
        name: impl Into<Target>,
        body: Value,
        options: RequestOptions,
    ) -> Result<Response<Value>> {
        let name = name.into();
        require::argument("name", &name)?;
        require::body(&body)?;
        let path = Path::new()
            .fixed("_enrich")
            .fixed("policy")
            .value(&name)
            .finish();
        let plan = self
            .transport
            .plan(&PUT_POLICY, path, options)?
            .json(&body)?;
        self.transport.execute(plan).await
    }

    /// Returns statistics about ongoing enrich executions.
    pub async fn stats(&self, options: RequestOptions) -> Result<Response<Value>> {
        let path = Path::new().fixed("_enrich").fixed("_stats").finish();
        let plan = self.transport.plan(&STATS, path, options)?;
        self.transport.execute(plan).await
    }
}
