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

/// A client for the autoscaling policy APIs.
///
/// Obtained from [Searchbase::autoscaling][crate::Searchbase::autoscaling].
#[derive(Clone, Debug)]
pub struct Autoscaling {
    transport: Arc<RestClient>,
}

static DELETE_AUTOSCALING_POLICY: Operation = Operation {
    name: "autoscaling.delete_autoscaling_policy",
    method: Method::DELETE,
    params: &[],
};

static GET_AUTOSCALING_CAPACITY: Operation = Operation {
    name: "autoscaling.get_autoscaling_capacity",
    method: Method::GET,
    params: &[],
};

static GET_AUTOSCALING_POLICY: Operation = Operation {
    name: "autoscaling.get_autoscaling_policy",
    method: Method::GET,
    params: &[],
};

static PUT_AUTOSCALING_POLICY: Operation = Operation {
    name: "autoscaling.put_autoscaling_policy",
    method: Method::PUT,
    params: &[],
};

impl Autoscaling {
    pub(crate) fn new(transport: Arc<RestClient>) -> Self {
        Self { transport }
    }

    /// Deletes an autoscaling policy.
    pub async fn delete_autoscaling_policy(
        &self,
        name: impl Into<Target>,
        options: RequestOptions,
    ) -> Result<Response<Value>> {
        let name = name.into();
        require::argument("name", &name)?;
        let path = Path::new()
            .fixed("_autoscaling")
            .fixed("policy")
            .value(&name)
            .finish();
        let plan = self
            .transport
            .plan(&DELETE_AUTOSCALING_POLICY, path, options)?;
        self.transport.execute(plan).await
    }

    /// Returns the current autoscaling capacity of the cluster.
    pub async fn get_autoscaling_capacity(
        &self,
        options: RequestOptions,
    ) -> Result<Response<Value>> {
        let path = Path::new().fixed("_autoscaling").fixed("capacity").finish();
        let plan = self
            .transport
            .plan(&GET_AUTOSCALING_CAPACITY, path, options)?;
        self.transport.execute(plan).await
    }

    /// Returns an autoscaling policy.
    pub async fn get_autoscaling_policy(
        &self,
        name: impl Into<Target>,
        options: RequestOptions,
    ) -> Result<Response<Value>> {
        let name = name.into();
        require::argument("name", &name)?;
        let path = Path::new()
            .fixed("_autoscaling")
            .fixed("policy")
            .value(&name)
            .finish();
        let plan = self.transport.plan(&GET_AUTOSCALING_POLICY, path, options)?;
        self.transport.execute(plan).await
    }

    /// Creates or updates an autoscaling policy.
    pub async fn put_autoscaling_policy(
        &self,
        name: impl Into<Target>,
        body: Value,
        options: RequestOptions,
    ) -> Result<Response<Value>> {
        let name = name.into();
        require::argument("name", &name)?;
        require::body(&body)?;
        let path = Path::new()
            .fixed("_autoscaling")
            .fixed("policy")
            .value(&name)
            .finish();
        let plan = self
            .transport
            .plan(&PUT_AUTOSCALING_POLICY, path, options)?
            .json(&body)?;
        self.transport.execute(plan).await
    }
}
