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

/// A client for the license APIs.
#[derive(Clone, Debug)]
pub struct License {
    transport: Arc<RestClient>,
}

static DELETE: Operation = Operation {
    name: "license.delete",
    method: Method::DELETE,
    params: &[],
};

static GET: Operation = Operation {
    name: "license.get",
    method: Method::GET,
    params: &["accept_enterprise", "local"],
};

static GET_BASIC_STATUS: Operation = Operation {
    name: "license.get_basic_status",
    method: Method::GET,
    params: &[],
};

static GET_TRIAL_STATUS: Operation = Operation {
    name: "license.get_trial_status",
    method: Method::GET,
    params: &[],
};

static POST: Operation = Operation {
    name: "license.post",
    method: Method::PUT,
    params: &["acknowledge"],
};

static POST_START_BASIC: Operation = Operation {
    name: "license.post_start_basic",
    method: Method::POST,
    params: &["acknowledge"],
};

static POST_START_TRIAL: Operation = Operation {
    name: "license.post_start_trial",
    method: Method::POST,
    params: &["acknowledge", "type"],
};

impl License {
    pub(crate) fn new(transport: Arc<RestClient>) -> Self {
        Self { transport }
    }

    /// Removes the installed license, reverting to basic features.
    pub async fn delete(&self, options: RequestOptions) -> Result<Response<Value>> {
        let path = Path::new().fixed("_license").finish();
        let plan = self.transport.plan(&DELETE, path, options)?;
        self.transport.execute(plan).await
    }

    /// Returns the installed license.
    pub async fn get(&self, options: RequestOptions) -> Result<Response<Value>> {
        let path = Path::new().fixed("_license").finish();
        let plan = self.transport.plan(&GET, path, options)?;
        self.transport.execute(plan).await
    }

    /// Reports whether the cluster is eligible to start a basic license.
    pub async fn get_basic_status(&self, options: RequestOptions) -> Result<Response<Value>> {
        let path = Path::new().fixed("_license").fixed("basic_status").finish();
        let plan = self.transport.plan(&GET_BASIC_STATUS, path, options)?;
        self.transport.execute(plan).await
    }

    /// Reports whether the cluster is eligible to start a trial.
    pub async fn get_trial_status(&self, options: RequestOptions) -> Result<Response<Value>> {
        let path = Path::new().fixed("_license").fixed("trial_status").finish();
        let plan = self.transport.plan(&GET_TRIAL_STATUS, path, options)?;
        self.transport.execute(plan).await
    }

    /// Installs or updates the cluster license.
    pub async fn post(
        &self,
        body: Option<Value>,
        options: RequestOptions,
    ) -> Result<Response<Value>> {
        let path = Path::new().fixed("_license").finish();
        let plan = self
            .transport
            .plan(&POST, path, options)?
            .maybe_json(body.as_ref())?;
        self.transport.execute(plan).await
    }

    /// Starts a basic license.
    pub async fn post_start_basic(&self, options: RequestOptions) -> Result<Response<Value>> {
        let path = Path::new().fixed("_license").fixed("start_basic").finish();
        let plan = self.transport.plan(&POST_START_BASIC, path, options)?;
        self.transport.execute(plan).await
    }

    /// Starts a trial license.
    ///
    /// The trial type travels as the `type` query parameter. Callers
    /// holding the legacy `doc_type` spelling can keep using it, the
    /// parameter is renamed on the way out.
    pub async fn post_start_trial(&self, options: RequestOptions) -> Result<Response<Value>> {
        let path = Path::new().fixed("_license").fixed("start_trial").finish();
        let plan = self.transport.plan(&POST_START_TRIAL, path, options)?;
        self.transport.execute(plan).await
    }
}
