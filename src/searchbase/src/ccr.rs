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

/// A client for the cross-cluster replication APIs.
///
/// Follower indices replicate a leader index from a remote cluster. The
/// auto-follow operations manage patterns that create followers
/// automatically as matching leader indices appear.
///
/// # Example
/// ```
/// # use searchbase::Searchbase;
/// # use searchbase::options::RequestOptions;
/// # use serde_json::json;
/// async fn example(client: &Searchbase) -> searchbase::Result<()> {
///     let body = json!({
///         "remote_cluster": "eu-west",
///         "leader_index": "logs-2026"
///     });
///     client
///         .ccr()
///         .follow("logs-2026-copy", body, RequestOptions::new())
///         .await?;
///     Ok(())
/// }
/// ```
#[derive(Clone, Debug)]
pub struct Ccr {
    transport: Arc<RestClient>,
}

static DELETE_AUTO_FOLLOW_PATTERN: Operation = Operation {
    name: "ccr.delete_auto_follow_pattern",
    method: Method::DELETE,
    params: &[],
};

static FOLLOW: Operation = Operation {
    name: "ccr.follow",
    method: Method::PUT,
    params: &["wait_for_active_shards"],
};

static FOLLOW_INFO: Operation = Operation {
    name: "ccr.follow_info",
    method: Method::GET,
    params: &[],
};

static FOLLOW_STATS: Operation = Operation {
    name: "ccr.follow_stats",
    method: Method::GET,
    params: &[],
};

static FORGET_FOLLOWER: Operation = Operation {
    name: "ccr.forget_follower",
    method: Method::POST,
    params: &[],
};

static GET_AUTO_FOLLOW_PATTERN: Operation = Operation {
    name: "ccr.get_auto_follow_pattern",
    method: Method::GET,
    params: &[],
};

static PAUSE_AUTO_FOLLOW_PATTERN: Operation = Operation {
    name: "ccr.pause_auto_follow_pattern",
    method: Method::POST,
    params: &[],
};

static PAUSE_FOLLOW: Operation = Operation {
    name: "ccr.pause_follow",
    method: Method::POST,
    params: &[],
};

static PUT_AUTO_FOLLOW_PATTERN: Operation = Operation {
    name: "ccr.put_auto_follow_pattern",
    method: Method::PUT,
    params: &[],
};

static RESUME_AUTO_FOLLOW_PATTERN: Operation = Operation {
    name: "ccr.resume_auto_follow_pattern",
    method: Method::POST,
    params: &[],
};

static RESUME_FOLLOW: Operation = Operation {
    name: "ccr.resume_follow",
    method: Method::POST,
    params: &[],
};

static STATS: Operation = Operation {
    name: "ccr.stats",
    method: Method::GET,
    params: &[],
};

static UNFOLLOW: Operation = Operation {
    name: "ccr.unfollow",
    method: Method::POST,
    params: &[],
};

impl Ccr {
    pub(crate) fn new(transport: Arc<RestClient>) -> Self {
        Self { transport }
    }

    /// Deletes an auto-follow pattern.
    pub async fn delete_auto_follow_pattern(
        &self,
        name: impl Into<Target>,
        options: RequestOptions,
    ) -> Result<Response<Value>> {
        let name = name.into();
        require::argument("name", &name)?;
        let path = Path::new()
            .fixed("_ccr")
            .fixed("auto_follow")
            .value(&name)
            .finish();
        let plan = self
            .transport
            .plan(&DELETE_AUTO_FOLLOW_PATTERN, path, options)?;
        self.transport.execute(plan).await
    }

    /// Creates a follower index that replicates a leader index.
    pub async fn follow(
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
            .fixed("_ccr")
            .fixed("follow")
            .finish();
        let plan = self.transport.plan(&FOLLOW, path, options)?.json(&body)?;
        self.transport.execute(plan).await
    }

    /// Returns replication parameters and status for follower indices.
    pub async fn follow_info(
        &self,
        index: impl Into<Target>,
        options: RequestOptions,
    ) -> Result<Response<Value>> {
        let index = index.into();
        require::argument("index", &index)?;
        let path = Path::new()
            .value(&index)
            .fixed("_ccr")
            .fixed("info")
            .finish();
        let plan = self.transport.plan(&FOLLOW_INFO, path, options)?;
        self.transport.execute(plan).await
    }

    /// Returns shard-level statistics for follower indices.
    pub async fn follow_stats(
        &self,
        index: impl Into<Target>,
        options: RequestOptions,
    ) -> Result<Response<Value>> {
        let index = index.into();
        require::argument("index", &index)?;
        let path = Path::new()
            .value(&index)
            .fixed("_ccr")
            .fixed("stats")
            .finish();
        let plan = self.transport.plan(&FOLLOW_STATS, path, options)?;
        self.transport.execute(plan).await
    }

    /// Removes the follower retention leases from the leader index.
    pub async fn forget_follower(
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
            .fixed("_ccr")
            .fixed("forget_follower")
            .finish();
        let plan = self
            .transport
            .plan(&FORGET_FOLLOWER, path, options)?
            .json(&body)?;
        self.transport.execute(plan).await
    }

    /// Returns auto-follow patterns, all of them when `name` is empty.
    pub async fn get_auto_follow_pattern(
        &self,
        name: impl Into<Target>,
        options: RequestOptions,
    ) -> Result<Response<Value>> {
        let name = name.into();
        let path = Path::new()
            .fixed("_ccr")
            .fixed("auto_follow")
            .value(&name)
            .finish();
        let plan = self.transport.plan(&GET_AUTO_FOLLOW_PATTERN, path, options)?;
        self.transport.execute(plan).await
    }

    /// Pauses an auto-follow pattern.
    pub async fn pause_auto_follow_pattern(
        &self,
        name: impl Into<Target>,
        options: RequestOptions,
    ) -> Result<Response<Value>> {
        let name = name.into();
        require::argument("name", &name)?;
        let path = Path::new()
            .fixed("_ccr")
            .fixed("auto_follow")
            .value(&name)
            .fixed("pause")
            .finish();
        let plan = self
            .transport
            .plan(&PAUSE_AUTO_FOLLOW_PATTERN, path, options)?;
        self.transport.execute(plan).await
    }

    /// Pauses replication into a follower index.
    pub async fn pause_follow(
        &self,
        index: impl Into<Target>,
        options: RequestOptions,
    ) -> Result<Response<Value>> {
        let index = index.into();
        require::argument("index", &index)?;
        let path = Path::new()
            .value(&index)
            .fixed("_ccr")
            .fixed("pause_follow")
            .finish();
        let plan = self.transport.plan(&PAUSE_FOLLOW, path, options)?;
        self.transport.execute(plan).await
    }

    /// Creates or updates an auto-follow pattern.
    pub async fn put_auto_follow_pattern(
        &self,
        name: impl Into<Target>,
        body: Value,
        options: RequestOptions,
    ) -> Result<Response<Value>> {
        let name = name.into();
        require::argument("name", &name)?;
        require::body(&body)?;
        let path = Path::new()
            .fixed("_ccr")
            .fixed("auto_follow")
            .value(&name)
            .finish();
        let plan = self
            .transport
            .plan(&PUT_AUTO_FOLLOW_PATTERN, path, options)?
            .json(&body)?;
        self.transport.execute(plan).await
    }

    /// Resumes a paused auto-follow pattern.
    pub async fn resume_auto_follow_pattern(
        &self,
        name: impl Into<Target>,
        options: RequestOptions,
    ) -> Result<Response<Value>> {
        let name = name.into();
        require::argument("name", &name)?;
        let path = Path::new()
            .fixed("_ccr")
            .fixed("auto_follow")
            .value(&name)
            .fixed("resume")
            .finish();
        let plan = self
            .transport
            .plan(&RESUME_AUTO_FOLLOW_PATTERN, path, options)?;
        self.transport.execute(plan).await
    }

    /// Resumes replication into a paused follower index.
    pub async fn resume_follow(
        &self,
        index: impl Into<Target>,
        body: Option<Value>,
        options: RequestOptions,
    ) -> Result<Response<Value>> {
        let index = index.into();
        require::argument("index", &index)?;
        let path = Path::new()
            .value(&index)
            .fixed("_ccr")
            .fixed("resume_follow")
            .finish();
        let plan = self
            .transport
            .plan(&RESUME_FOLLOW, path, options)?
            .maybe_json(body.as_ref())?;
        self.transport.execute(plan).await
    }

    /// Returns cluster-wide replication statistics.
    pub async fn stats(&self, options: RequestOptions) -> Result<Response<Value>> {
        let path = Path::new().fixed("_ccr").fixed("stats").finish();
        let plan = self.transport.plan(&STATS, path, options)?;
        self.transport.execute(plan).await
    }

    /// Converts a paused follower index back into a regular index.
    pub async fn unfollow(
        &self,
        index: impl Into<Target>,
        options: RequestOptions,
    ) -> Result<Response<Value>> {
        let index = index.into();
        require::argument("index", &index)?;
        let path = Path::new()
            .value(&index)
            .fixed("_ccr")
            .fixed("unfollow")
            .finish();
        let plan = self.transport.plan(&UNFOLLOW, path, options)?;
        self.transport.execute(plan).await
    }
}
