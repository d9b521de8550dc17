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

/// A client for the index lifecycle management APIs.
///
/// Lifecycle policies move indices through phases as they age. Policies
/// are applied to indices through index settings, the operations here
/// manage the policies themselves and the lifecycle service.
#[derive(Clone, Debug)]
pub struct Ilm {
    transport: Arc<RestClient>,
}

static DELETE_LIFECYCLE: Operation = Operation {
    name: "ilm.delete_lifecycle",
    method: Method::DELETE,
    params: &[],
};

static EXPLAIN_LIFECYCLE: Operation = Operation {
    name: "ilm.explain_lifecycle",
    method: Method::GET,
    params: &["only_errors", "only_managed"],
};

static GET_LIFECYCLE: Operation = Operation {
    name: "ilm.get_lifecycle",
    method: Method::GET,
    params: &[],
};

static GET_STATUS: Operation = Operation {
    name: "ilm.get_status",
    method: Method::GET,
    params: &[],
};

static MIGRATE_TO_DATA_TIERS: Operation = Operation {
    name: "ilm.migrate_to_data_tiers",
    method: Method::POST,
    params: &["dry_run"],
};

static MOVE_TO_STEP: Operation = Operation {
    name: "ilm.move_to_step",
    method: Method::POST,
    params: &[],
};

static PUT_LIFECYCLE: Operation = Operation {
    name: "ilm.put_lifecycle",
    method: Method::PUT,
    params: &[],
};

static REMOVE_POLICY: Operation = Operation {
    name: "ilm.remove_policy",
    method: Method::POST,
    params: &[],
};

static RETRY: Operation = Operation {
    name: "ilm.retry",
    method: Method::POST,
    params: &[],
};

static START: Operation = Operation {
    name: "ilm.start",
    method: Method::POST,
    params: &[],
};

static STOP: Operation = Operation {
    name: "ilm.stop",
    method: Method::POST,
    params: &[],
};

impl Ilm {
    pub(crate) fn new(transport: Arc<RestClient>) -> Self {
        Self { transport }
    }

    /// Deletes a lifecycle policy. Policies in use cannot be deleted.
    pub async fn delete_lifecycle(
        &self,
        policy: impl Into<Target>,
        options: RequestOptions,
    ) -> Result<Response<Value>> {
        let policy = policy.into();
        require::argument("policy", &policy)?;
        let path = Path::new()
            .fixed("_ilm")
            .fixed("policy")
            .value(&policy)
            .finish();
        let plan = self.transport.plan(&DELETE_LIFECYCLE, path, options)?;
        self.transport.execute(plan).await
    }

    /// Explains where the given indices are in their lifecycle.
    pub async fn explain_lifecycle(
        &self,
        index: impl Into<Target>,
        options: RequestOptions,
    ) -> Result<Response<Value>> {
        let index = index.into();
        require::argument("index", &index)?;
        let path = Path::new()
            .value(&index)
            .fixed("_ilm")
            .fixed("explain")
            .finish();
        let plan = self.transport.plan(&EXPLAIN_LIFECYCLE, path, options)?;
        self.transport.execute(plan).await
    }

    /// Returns lifecycle policies, all of them when `policy` is empty.
    pub async fn get_lifecycle(
        &self,
        policy: impl Into<Target>,
        options: RequestOptions,
    ) -> Result<Response<Value>> {
        let policy = policy.into();
        let path = Path::new()
            .fixed("_ilm")
            .fixed("policy")
            .value(&policy)
            .finish();
        let plan = self.transport.plan(&GET_LIFECYCLE, path, options)?;
        self.transport.execute(plan).await
    }

    /// Returns whether the lifecycle service is running.
    pub async fn get_status(&self, options: RequestOptions) -> Result<Response<Value>> {
        let path = Path::new().fixed("_ilm").fixed("status").finish();
        let plan = self.transport.plan(&GET_STATUS, path, options)?;
        self.transport.execute(plan).await
    }

    /// Switches the cluster from custom node attribute routing to data
    /// tier routing.
    pub async fn migrate_to_data_tiers(
        &self,
        body: Option<Value>,
        options: RequestOptions,
    ) -> Result<Response<Value>> {
        let path = Path::new()
            .fixed("_ilm")
            .fixed("migrate_to_data_tiers")
            .finish();
        let plan = self
            .transport
            .plan(&MIGRATE_TO_DATA_TIERS, path, options)?
            .maybe_json(body.as_ref())?;
        self.transport.execute(plan).await
    }

    /// Manually moves an index into the specified lifecycle step.
    pub async fn move_to_step(
        &self,
        index: impl Into<Target>,
        body: Option<Value>,
        options: RequestOptions,
    ) -> Result<Response<Value>> {
        let index = index.into();
        require::argument("index", &index)?;
        let path = Path::new()
            .fixed("_ilm")
            .fixed("move")
            .value(&index)
            .finish();
        let plan = self
            .transport
            .plan(&MOVE_TO_STEP, path, options)?
            .maybe_json(body.as_ref())?;
        self.transport.execute(plan).await
    }

    /// Creates or updates a lifecycle policy.
    pub async fn put_lifecycle(
        &self,
        policy: impl Into<Target>,
        body: Option<Value>,
        options: RequestOptions,
    ) -> Result<Response<Value>> {
        let policy = policy.into();
        require::argument("policy", &policy)?;
        let path = Path::new()
            .fixed("_ilm")
            .fixed("policy")
            .value(&policy)
            .finish();
        let plan = self
            .transport
            .plan(&PUT_LIFECYCLE, path, options)?
            .maybe_json(body.as_ref())?;
        self.transport.execute(plan).await
    }

    /// Detaches the lifecycle policy from the given indices.
    pub async fn remove_policy(
        &self,
        index: impl Into<Target>,
        options: RequestOptions,
    ) -> Result<Response<Value>> {
        let index = index.into();
        require::argument("index", &index)?;
        let path = Path::new()
            .value(&index)
            .fixed("_ilm")
            .fixed("remove")
            .finish();
        let plan = self.transport.plan(&REMOVE_POLICY, path, options)?;
        self.transport.execute(plan).await
    }

    /// Retries the failed lifecycle step for the given indices.
    pub async fn retry(
        &self,
        index: impl Into<Target>,
        options: RequestOptions,
    ) -> Result<Response<Value>> {
        let index = index.into();
        require::argument("index", &index)?;
        let path = Path::new()
            .value(&index)
            .fixed("_ilm")
            .fixed("retry")
            .finish();
        let plan = self.transport.plan(&RETRY, path, options)?;
        self.transport.execute(plan).await
    }

    /// Starts the lifecycle service.
    pub async fn start(&self, options: RequestOptions) -> Result<Response<Value>> {
        let path = Path::new().fixed("_ilm").fixed("start").finish();
        let plan = self.transport.plan(&START, path, options)?;
        self.transport.execute(plan).await
    }

    /// Stops the lifecycle service once in-flight operations finish.
    pub async fn stop(&self, options: RequestOptions) -> Result<Response<Value>> {
        let path = Path::new().fixed("_ilm").fixed("stop").finish();
        let plan = self.transport.plan(&STOP, path, options)?;
        self.transport.execute(plan).await
    }
}
