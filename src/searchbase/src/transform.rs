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

/// A client for the transform APIs.
///
/// Transforms continuously pivot or aggregate source indices into
/// entity-centric destination indices.
///
/// Paging operations accept `from` and `size` parameters. Call sites
/// ported from clients where `from` was a reserved word can pass `from_`,
/// the parameter is renamed before the request is sent.
#[derive(Clone, Debug)]
pub struct Transform {
    transport: Arc<RestClient>,
}

static DELETE_TRANSFORM: Operation = Operation {
    name: "transform.delete_transform",
    method: Method::DELETE,
    params: &["force"],
};

static GET_TRANSFORM: Operation = Operation {
    name: "transform.get_transform",
    method: Method::GET,
    params: &["allow_no_match", "exclude_generated", "from", "size"],
};

static GET_TRANSFORM_STATS: Operation = Operation {
    name: "transform.get_transform_stats",
    method: Method::GET,
    params: &["allow_no_match", "from", "size"],
};

static PREVIEW_TRANSFORM: Operation = Operation {
    name: "transform.preview_transform",
    method: Method::POST,
    params: &[],
};

static PUT_TRANSFORM: Operation = Operation {
    name: "transform.put_transform",
    method: Method::PUT,
    params: &["defer_validation"],
};

static START_TRANSFORM: Operation = Operation {
    name: "transform.start_transform",
    method: Method::POST,
    params: &["timeout"],
};

static STOP_TRANSFORM: Operation = Operation {
    name: "transform.stop_transform",
    method: Method::POST,
    params: &[
        "allow_no_match",
        "force",
        "timeout",
        "wait_for_checkpoint",
        "wait_for_completion",
    ],
};

static UPDATE_TRANSFORM: Operation = Operation {
    name: "transform.update_transform",
    method: Method::POST,
    params: &["defer_validation"],
};

static UPGRADE_TRANSFORMS: Operation = Operation {
    name: "transform.upgrade_transforms",
    method: Method::POST,
    params: &["dry_run"],
};

impl Transform {
    pub(crate) fn new(transport: Arc<RestClient>) -> Self {
        Self { transport }
    }

    /// Deletes a transform.
    pub async fn delete_transform(
        &self,
        transform_id: impl Into<Target>,
        options: RequestOptions,
    ) -> Result<Response<Value>> {
        let transform_id = transform_id.into();
        require::argument("transform_id", &transform_id)?;
        let path = Path::new()
            .fixed("_transform")
            .value(&transform_id)
            .finish();
        let plan = self.transport.plan(&DELETE_TRANSFORM, path, options)?;
        self.transport.execute(plan).await
    }

    /// Returns transform configurations, all of them when `transform_id`
    /// is empty.
    pub async fn get_transform(
        &self,
        transform_id: impl Into<Target>,
        options: RequestOptions,
    ) -> Result<Response<Value>> {
        let transform_id = transform_id.into();
        let path = Path::new()
            .fixed("_transform")
            .value(&transform_id)
            .finish();
        let plan = self.transport.plan(&GET_TRANSFORM, path, options)?;
        self.transport.execute(plan).await
    }

    /// Returns usage statistics for transforms.
    pub async fn get_transform_stats(
        &self,
        transform_id: impl Into<Target>,
        options: RequestOptions,
    ) -> Result<Response<Value>> {
        let transform_id = transform_id.into();
        require::argument("transform_id", &transform_id)?;
        let path = Path::new()
            .fixed("_transform")
            .value(&transform_id)
            .fixed("_stats")
            .finish();
        let plan = self.transport.plan(&GET_TRANSFORM_STATS, path, options)?;
        self.transport.execute(plan).await
    }

    /// Previews the documents a transform would produce.
    ///
    /// The transform is given either by `transform_id` or as a definition
    /// in the body.
    pub async fn preview_transform(
        &self,
        body: Option<Value>,
        transform_id: impl Into<Target>,
        options: RequestOptions,
    ) -> Result<Response<Value>> {
        let transform_id = transform_id.into();
        let path = Path::new()
            .fixed("_transform")
            .value(&transform_id)
            .fixed("_preview")
            .finish();
        let plan = self
            .transport
            .plan(&PREVIEW_TRANSFORM, path, options)?
            .maybe_json(body.as_ref())?;
        self.transport.execute(plan).await
    }

    /// Creates a transform.
    pub async fn put_transform(
        &self,
        transform_id: impl Into<Target>,
        body: Value,
        options: RequestOptions,
    ) -> Result<Response<Value>> {
        let transform_id = transform_id.into();
        require::argument("transform_id", &transform_id)?;
        require::body(&body)?;
        let path = Path::new()
            .fixed("_transform")
            .value(&transform_id)
            .finish();
        let plan = self
            .transport
            .plan(&PUT_TRANSFORM, path, options)?
            .json(&body)?;
        self.transport.execute(plan).await
    }

    /// Starts a transform.
    pub async fn start_transform(
        &self,
        transform_id: impl Into<Target>,
        options: RequestOptions,
    ) -> Result<Response<Value>> {
        let transform_id = transform_id.into();
        require::argument("transform_id", &transform_id)?;
        let path = Path::new()
            .fixed("_transform")
            .value(&transform_id)
            .fixed("_start")
            .finish();
        let plan = self.transport.plan(&START_TRANSFORM, path, options)?;
        self.transport.execute(plan).await
    }

    /// Stops one or more transforms.
    pub async fn stop_transform(
        &self,
        transform_id: impl Into<Target>,
        options: RequestOptions,
    ) -> Result<Response<Value>> {
        let transform_id = transform_id.into();
        require::argument("transform_id", &transform_id)?;
        let path = Path::new()
            .fixed("_transform")
            .value(&transform_id)
            .fixed("_stop")
            .finish();
        let plan = self.transport.plan(&STOP_TRANSFORM, path, options)?;
        self.transport.execute(plan).await
    }

    /// Updates parts of a transform configuration.
    pub async fn update_transform(
        &self,
        transform_id: impl Into<Target>,
        body: Value,
        options: RequestOptions,
    ) -> Result<Response<Value>> {
        let transform_id = transform_id.into();
        require::argument("transform_id", &transform_id)?;
        require::body(&body)?;
        let path = Path::new()
            .fixed("_transform")
            .value(&transform_id)
            .fixed("_update")
            .finish();
        let plan = self
            .transport
            .plan(&UPDATE_TRANSFORM, path, options)?
            .json(&body)?;
        self.transport.execute(plan).await
    }

    /// Upgrades all transforms to the current configuration format.
    pub async fn upgrade_transforms(&self, options: RequestOptions) -> Result<Response<Value>> {
        let path = Path::new().fixed("_transform").fixed("_upgrade").finish();
        let plan = self.transport.plan(&UPGRADE_TRANSFORMS, path, options)?;
        self.transport.execute(plan).await
    }
}
