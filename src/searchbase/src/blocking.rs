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

//! Blocking counterparts of the async clients.
//!
//! Every operation available on [crate::Searchbase] exists here with the
//! same signature minus `async`. The client owns a current-thread Tokio
//! runtime and drives the async implementation to completion on each call,
//! so request construction, validation, and error behavior are identical
//! across the two surfaces.
//!
//! These clients must not be used from within an async runtime. Calling
//! into them from an async context panics, use [crate::Searchbase] there
//! instead.
//!
//! ```no_run
//! use searchbase::blocking::Searchbase;
//! use searchbase::options::RequestOptions;
//!
//! fn main() -> anyhow::Result<()> {
//!     let client = Searchbase::builder()
//!         .with_endpoint("http://localhost:9200")
//!         .build()?;
//!     let info = client.info(RequestOptions::new())?;
//!     println!("{:?}", info.body());
//!     Ok(())
//! }
//! ```

use crate::Result;
use sbx::credentials::Credentials;
use sbx::ndjson::NdBody;
use sbx::options::RequestOptions;
use sbx::response::Response;
use sbx::target::Target;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Runtime;

/// A blocking client for the Searchbase REST API.
///
/// See [crate::Searchbase] for the async equivalent and for configuration
/// details. The two share everything but the calling convention.
#[derive(Clone, Debug)]
pub struct Searchbase {
    inner: crate::Searchbase,
    runtime: Arc<Runtime>,
}

impl Searchbase {
    /// Returns a builder for the blocking [Searchbase].
    ///
    /// ```no_run
    /// # use searchbase::blocking::Searchbase;
    /// let client = Searchbase::builder().build()?;
    /// # searchbase::client_builder::Result::<()>::Ok(())
    /// ```
    pub fn builder() -> ClientBuilder {
        ClientBuilder {
            inner: crate::Searchbase::builder(),
        }
    }

    /// Returns basic information about the cluster.
    pub fn info(&self, options: RequestOptions) -> Result<Response<Value>> {
        self.runtime.block_on(self.inner.info(options))
    }

    /// Returns true if the cluster answers at all.
    pub fn ping(&self, options: RequestOptions) -> Result<bool> {
        self.runtime.block_on(self.inner.ping(options))
    }

    /// A client for the autoscaling policy APIs.
    pub fn autoscaling(&self) -> Autoscaling {
        Autoscaling {
            inner: self.inner.autoscaling(),
            runtime: self.runtime.clone(),
        }
    }

    /// A client for the cross-cluster replication APIs.
    pub fn ccr(&self) -> Ccr {
        Ccr {
            inner: self.inner.ccr(),
            runtime: self.runtime.clone(),
        }
    }

    /// A client for the enrich policy APIs.
    pub fn enrich(&self) -> Enrich {
        Enrich {
            inner: self.inner.enrich(),
            runtime: self.runtime.clone(),
        }
    }

    /// A client for the event query language search APIs.
    pub fn eql(&self) -> Eql {
        Eql {
            inner: self.inner.eql(),
            runtime: self.runtime.clone(),
        }
    }

    /// A client for the graph explore API.
    pub fn graph(&self) -> Graph {
        Graph {
            inner: self.inner.graph(),
            runtime: self.runtime.clone(),
        }
    }

    /// A client for the index lifecycle management APIs.
    pub fn ilm(&self) -> Ilm {
        Ilm {
            inner: self.inner.ilm(),
            runtime: self.runtime.clone(),
        }
    }

    /// A client for the ingest pipeline APIs.
    pub fn ingest(&self) -> Ingest {
        Ingest {
            inner: self.inner.ingest(),
            runtime: self.runtime.clone(),
        }
    }

    /// A client for the license APIs.
    pub fn license(&self) -> License {
        License {
            inner: self.inner.license(),
            runtime: self.runtime.clone(),
        }
    }

    /// A client for the monitoring bulk API.
    pub fn monitoring(&self) -> Monitoring {
        Monitoring {
            inner: self.inner.monitoring(),
            runtime: self.runtime.clone(),
        }
    }

    /// A client for the TLS certificate API.
    pub fn ssl(&self) -> Ssl {
        Ssl {
            inner: self.inner.ssl(),
            runtime: self.runtime.clone(),
        }
    }

    /// A client for the transform APIs.
    pub fn transform(&self) -> Transform {
        Transform {
            inner: self.inner.transform(),
            runtime: self.runtime.clone(),
        }
    }

    /// A client for the legacy feature umbrella APIs.
    pub fn xpack(&self) -> Xpack {
        Xpack {
            inner: self.inner.xpack(),
            runtime: self.runtime.clone(),
        }
    }
}

/// A builder for the blocking [Searchbase].
///
/// Offers the same `with_*` methods as the async
/// [ClientBuilder][crate::client::ClientBuilder]. `build()` additionally
/// creates the runtime that drives the requests.
pub struct ClientBuilder {
    inner: crate::client::ClientBuilder,
}

impl ClientBuilder {
    /// Sets the endpoint.
    pub fn with_endpoint<V: Into<String>>(mut self, v: V) -> Self {
        self.inner = self.inner.with_endpoint(v);
        self
    }

    /// Sets the default credentials for every request.
    pub fn with_credentials<T: Into<Credentials>>(mut self, v: T) -> Self {
        self.inner = self.inner.with_credentials(v);
        self
    }

    /// Sets the default timeout for every request.
    pub fn with_timeout(mut self, v: Duration) -> Self {
        self.inner = self.inner.with_timeout(v);
        self
    }

    /// Adds a header to every request.
    pub fn with_header<K: Into<String>, V: Into<String>>(mut self, name: K, value: V) -> Self {
        self.inner = self.inner.with_header(name, value);
        self
    }

    /// Rejects unknown query parameters instead of discarding them.
    pub fn with_strict_params(mut self) -> Self {
        self.inner = self.inner.with_strict_params();
        self
    }

    /// Emits request and response traces at debug level.
    pub fn with_tracing(mut self) -> Self {
        self.inner = self.inner.with_tracing();
        self
    }

    /// Creates the runtime and the client.
    pub fn build(self) -> sbx::client_builder::Result<Searchbase> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(sbx::client_builder::Error::transport)?;
        let inner = runtime.block_on(self.inner.build())?;
        Ok(Searchbase {
            inner,
            runtime: Arc::new(runtime),
        })
    }
}

/// Blocking counterpart of [Autoscaling][crate::autoscaling::Autoscaling].
#[derive(Clone, Debug)]
pub struct Autoscaling {
    inner: crate::autoscaling::Autoscaling,
    runtime: Arc<Runtime>,
}

impl Autoscaling {
    /// Deletes an autoscaling policy.
    pub fn delete_autoscaling_policy(
        &self,
        name: impl Into<Target>,
        options: RequestOptions,
    ) -> Result<Response<Value>> {
        self.runtime
            .block_on(self.inner.delete_autoscaling_policy(name, options))
    }

    /// Returns the current autoscaling capacity of the cluster.
    pub fn get_autoscaling_capacity(&self, options: RequestOptions) -> Result<Response<Value>> {
        self.runtime
            .block_on(self.inner.get_autoscaling_capacity(options))
    }

    /// Returns an autoscaling policy.
    pub fn get_autoscaling_policy(
        &self,
        name: impl Into<Target>,
        options: RequestOptions,
    ) -> Result<Response<Value>> {
        self.runtime
            .block_on(self.inner.get_autoscaling_policy(name, options))
    }

    /// Creates or updates an autoscaling policy.
    pub fn put_autoscaling_policy(
        &self,
        name: impl Into<Target>,
        body: Value,
        options: RequestOptions,
    ) -> Result<Response<Value>> {
        self.runtime
            .block_on(self.inner.put_autoscaling_policy(name, body, options))
    }
}

/// Blocking counterpart of [Ccr][crate::ccr::Ccr].
#[derive(Clone, Debug)]
pub struct Ccr {
    inner: crate::ccr::Ccr,
    runtime: Arc<Runtime>,
}

impl Ccr {
    /// Deletes an auto-follow pattern.
    pub fn delete_auto_follow_pattern(
        &self,
        name: impl Into<Target>,
        options: RequestOptions,
    ) -> Result<Response<Value>> {
        self.runtime
            .block_on(self.inner.delete_auto_follow_pattern(name, options))
    }

    /// Creates a follower index that replicates a leader index.
    pub fn follow(
        &self,
        index: impl Into<Target>,
        body: Value,
        options: RequestOptions,
    ) -> Result<Response<Value>> {
        self.runtime.block_on(self.inner.follow(index, body, options))
    }

    /// Returns replication parameters and status for follower indices.
    pub fn follow_info(
        &self,
        index: impl Into<Target>,
        options: RequestOptions,
    ) -> Result<Response<Value>> {
        self.runtime.block_on(self.inner.follow_info(index, options))
    }

    /// Returns shard-level statistics for follower indices.
    pub fn follow_stats(
        &self,
        index: impl Into<Target>,
        options: RequestOptions,
    ) -> Result<Response<Value>> {
        self.runtime.block_on(self.inner.follow_stats(index, options))
    }

    /// Removes the follower retention leases from the leader index.
    pub fn forget_follower(
        &self,
        index: impl Into<Target>,
        body: Value,
        options: RequestOptions,
    ) -> Result<Response<Value>> {
        self.runtime
            .block_on(self.inner.forget_follower(index, body, options))
    }

    /// Returns auto-follow patterns, all of them when `name` is empty.
    pub fn get_auto_follow_pattern(
        &self,
        name: impl Into<Target>,
        options: RequestOptions,
    ) -> Result<Response<Value>> {
        self.runtime
            .block_on(self.inner.get_auto_follow_pattern(name, options))
    }

    /// Pauses an auto-follow pattern.
    pub fn pause_auto_follow_pattern(
        &self,
        name: impl Into<Target>,
        options: RequestOptions,
    ) -> Result<Response<Value>> {
        self.runtime
            .block_on(self.inner.pause_auto_follow_pattern(name, options))
    }

    /// Pauses replication into a follower index.
    pub fn pause_follow(
        &self,
        index: impl Into<Target>,
        options: RequestOptions,
    ) -> Result<Response<Value>> {
        self.runtime.block_on(self.inner.pause_follow(index, options))
    }

    /// Creates or updates an auto-follow pattern.
    pub fn put_auto_follow_pattern(
        &self,
        name: impl Into<Target>,
        body: Value,
        options: RequestOptions,
    ) -> Result<Response<Value>> {
        self.runtime
            .block_on(self.inner.put_auto_follow_pattern(name, body, options))
    }

    /// Resumes a paused auto-follow pattern.
    pub fn resume_auto_follow_pattern(
        &self,
        name: impl Into<Target>,
        options: RequestOptions,
    ) -> Result<Response<Value>> {
        self.runtime
            .block_on(self.inner.resume_auto_follow_pattern(name, options))
    }

    /// Resumes replication into a paused follower index.
    pub fn resume_follow(
        &self,
        index: impl Into<Target>,
        body: Option<Value>,
        options: RequestOptions,
    ) -> Result<Response<Value>> {
        self.runtime
            .block_on(self.inner.resume_follow(index, body, options))
    }

    /// Returns cluster-wide replication statistics.
    pub fn stats(&self, options: RequestOptions) -> Result<Response<Value>> {
        self.runtime.block_on(self.inner.stats(options))
    }

    /// Converts a paused follower index back into a regular index.
    pub fn unfollow(
        &self,
        index: impl Into<Target>,
        options: RequestOptions,
    ) -> Result<Response<Value>> {
        self.runtime.block_on(self.inner.unfollow(index, options))
    }
}

/// Blocking counterpart of [Enrich][crate::enrich::Enrich].
#[derive(Clone, Debug)]
pub struct Enrich {
    inner: crate::enrich::Enrich,
    runtime: Arc<Runtime>,
}

impl Enrich {
    /// Deletes an enrich policy.
    pub fn delete_policy(
        &self,
        name: impl Into<Target>,
        options: RequestOptions,
    ) -> Result<Response<Value>> {
        self.runtime.block_on(self.inner.delete_policy(name, options))
    }

    /// Builds the enrich index for an existing policy.
    pub fn execute_policy(
        &self,
        name: impl Into<Target>,
        options: RequestOptions,
    ) -> Result<Response<Value>> {
        self.runtime.block_on(self.inner.execute_policy(name, options))
    }

    /// Returns enrich policies, all of them when `name` is empty.
    pub fn get_policy(
        &self,
        name: impl Into<Target>,
        options: RequestOptions,
    ) -> Result<Response<Value>> {
        self.runtime.block_on(self.inner.get_policy(name, options))
    }

    /// Creates an enrich policy.
    pub fn put_policy(
        &self,
        name: impl Into<Target>,
        body: Value,
        options: RequestOptions,
    ) -> Result<Response<Value>> {
        self.runtime
            .block_on(self.inner.put_policy(name, body, options))
    }

    /// Returns statistics about ongoing enrich executions.
    pub fn stats(&self, options: RequestOptions) -> Result<Response<Value>> {
        self.runtime.block_on(self.inner.stats(options))
    }
}

/// Blocking counterpart of [Eql][crate::eql::Eql].
#[derive(Clone, Debug)]
pub struct Eql {
    inner: crate::eql::Eql,
    runtime: Arc<Runtime>,
}

impl Eql {
    /// Runs an EQL search over the given indices.
    pub fn search(
        &self,
        index: impl Into<Target>,
        body: Value,
        options: RequestOptions,
    ) -> Result<Response<Value>> {
        self.runtime.block_on(self.inner.search(index, body, options))
    }

    /// Deletes a stored EQL search and its results.
    pub fn delete(
        &self,
        id: impl Into<Target>,
        options: RequestOptions,
    ) -> Result<Response<Value>> {
        self.runtime.block_on(self.inner.delete(id, options))
    }

    /// Returns the results of a stored EQL search.
    pub fn get(&self, id: impl Into<Target>, options: RequestOptions) -> Result<Response<Value>> {
        self.runtime.block_on(self.inner.get(id, options))
    }

    /// Returns the current status of a stored EQL search.
    pub fn get_status(
        &self,
        id: impl Into<Target>,
        options: RequestOptions,
    ) -> Result<Response<Value>> {
        self.runtime.block_on(self.inner.get_status(id, options))
    }
}

/// Blocking counterpart of [Graph][crate::graph::Graph].
#[derive(Clone, Debug)]
pub struct Graph {
    inner: crate::graph::Graph,
    runtime: Arc<Runtime>,
}

impl Graph {
    /// Extracts and summarizes terms related to the documents matching a
    /// query.
    pub fn explore(
        &self,
        index: impl Into<Target>,
        body: Option<Value>,
        options: RequestOptions,
    ) -> Result<Response<Value>> {
        self.runtime
            .block_on(self.inner.explore(index, body, options))
    }
}

/// Blocking counterpart of [Ilm][crate::ilm::Ilm].
#[derive(Clone, Debug)]
pub struct Ilm {
    inner: crate::ilm::Ilm,
    runtime: Arc<Runtime>,
}

impl Ilm {
    /// Deletes a lifecycle policy. Policies in use cannot be deleted.
    pub fn delete_lifecycle(
        &self,
        policy: impl Into<Target>,
        options: RequestOptions,
    ) -> Result<Response<Value>> {
        self.runtime
            .block_on(self.inner.delete_lifecycle(policy, options))
    }

    /// Explains where the given indices are in their lifecycle.
    pub fn explain_lifecycle(
        &self,
        index: impl Into<Target>,
        options: RequestOptions,
    ) -> Result<Response<Value>> {
        self.runtime
            .block_on(self.inner.explain_lifecycle(index, options))
    }

    /// Returns lifecycle policies, all of them when `policy` is empty.
    pub fn get_lifecycle(
        &self,
        policy: impl Into<Target>,
        options: RequestOptions,
    ) -> Result<Response<Value>> {
        self.runtime.block_on(self.inner.get_lifecycle(policy, options))
    }

    /// Returns whether the lifecycle service is running.
    pub fn get_status(&self, options: RequestOptions) -> Result<Response<Value>> {
        self.runtime.block_on(self.inner.get_status(options))
    }

    /// Switches the cluster from custom node attribute routing to data
    /// tier routing.
    pub fn migrate_to_data_tiers(
        &self,
        body: Option<Value>,
        options: RequestOptions,
    ) -> Result<Response<Value>> {
        self.runtime
            .block_on(self.inner.migrate_to_data_tiers(body, options))
    }

    /// Manually moves an index into the specified lifecycle step.
    pub fn move_to_step(
        &self,
        index: impl Into<Target>,
        body: Option<Value>,
        options: RequestOptions,
    ) -> Result<Response<Value>> {
        self.runtime
            .block_on(self.inner.move_to_step(index, body, options))
    }

    /// Creates or updates a lifecycle policy.
    pub fn put_lifecycle(
        &self,
        policy: impl Into<Target>,
        body: Option<Value>,
        options: RequestOptions,
    ) -> Result<Response<Value>> {
        self.runtime
            .block_on(self.inner.put_lifecycle(policy, body, options))
    }

    /// Detaches the lifecycle policy from the given indices.
    pub fn remove_policy(
        &self,
        index: impl Into<Target>,
        options: RequestOptions,
    ) -> Result<Response<Value>> {
        self.runtime.block_on(self.inner.remove_policy(index, options))
    }

    /// Retries the failed lifecycle step for the given indices.
    pub fn retry(
        &self,
        index: impl Into<Target>,
        options: RequestOptions,
    ) -> Result<Response<Value>> {
        self.runtime.block_on(self.inner.retry(index, options))
    }

    /// Starts the lifecycle service.
    pub fn start(&self, options: RequestOptions) -> Result<Response<Value>> {
        self.runtime.block_on(self.inner.start(options))
    }

    /// Stops the lifecycle service once in-flight operations finish.
    pub fn stop(&self, options: RequestOptions) -> Result<Response<Value>> {
        self.runtime.block_on(self.inner.stop(options))
    }
}

/// Blocking counterpart of [Ingest][crate::ingest::Ingest].
#[derive(Clone, Debug)]
pub struct Ingest {
    inner: crate::ingest::Ingest,
    runtime: Arc<Runtime>,
}

impl Ingest {
    /// Returns ingest pipelines, all of them when `id` is empty.
    pub fn get_pipeline(
        &self,
        id: impl Into<Target>,
        options: RequestOptions,
    ) -> Result<Response<Value>> {
        self.runtime.block_on(self.inner.get_pipeline(id, options))
    }

    /// Creates or updates an ingest pipeline.
    pub fn put_pipeline(
        &self,
        id: impl Into<Target>,
        body: Value,
        options: RequestOptions,
    ) -> Result<Response<Value>> {
        self.runtime
            .block_on(self.inner.put_pipeline(id, body, options))
    }

    /// Deletes an ingest pipeline.
    pub fn delete_pipeline(
        &self,
        id: impl Into<Target>,
        options: RequestOptions,
    ) -> Result<Response<Value>> {
        self.runtime.block_on(self.inner.delete_pipeline(id, options))
    }

    /// Runs sample documents through a pipeline without indexing them.
    pub fn simulate(
        &self,
        body: Value,
        id: impl Into<Target>,
        options: RequestOptions,
    ) -> Result<Response<Value>> {
        self.runtime.block_on(self.inner.simulate(body, id, options))
    }

    /// Returns the built-in grok patterns.
    pub fn processor_grok(&self, options: RequestOptions) -> Result<Response<Value>> {
        self.runtime.block_on(self.inner.processor_grok(options))
    }

    /// Returns download statistics for the GeoIP databases.
    pub fn geo_ip_stats(&self, options: RequestOptions) -> Result<Response<Value>> {
        self.runtime.block_on(self.inner.geo_ip_stats(options))
    }
}

/// Blocking counterpart of [License][crate::license::License].
#[derive(Clone, Debug)]
pub struct License {
    inner: crate::license::License,
    runtime: Arc<Runtime>,
}

impl License {
    /// Removes the installed license, reverting to basic features.
    pub fn delete(&self, options: RequestOptions) -> Result<Response<Value>> {
        self.runtime.block_on(self.inner.delete(options))
    }

    /// Returns the installed license.
    pub fn get(&self, options: RequestOptions) -> Result<Response<Value>> {
        self.runtime.block_on(self.inner.get(options))
    }

    /// Reports whether the cluster is eligible to start a basic license.
    pub fn get_basic_status(&self, options: RequestOptions) -> Result<Response<Value>> {
        self.runtime.block_on(self.inner.get_basic_status(options))
    }

    /// Reports whether the cluster is eligible to start a trial.
    pub fn get_trial_status(&self, options: RequestOptions) -> Result<Response<Value>> {
        self.runtime.block_on(self.inner.get_trial_status(options))
    }

    /// Installs or updates the cluster license.
    pub fn post(&self, body: Option<Value>, options: RequestOptions) -> Result<Response<Value>> {
        self.runtime.block_on(self.inner.post(body, options))
    }

    /// Starts a basic license.
    pub fn post_start_basic(&self, options: RequestOptions) -> Result<Response<Value>> {
        self.runtime.block_on(self.inner.post_start_basic(options))
    }

    /// Starts a trial license.
    pub fn post_start_trial(&self, options: RequestOptions) -> Result<Response<Value>> {
        self.runtime.block_on(self.inner.post_start_trial(options))
    }
}

/// Blocking counterpart of [Monitoring][crate::monitoring::Monitoring].
#[derive(Clone, Debug)]
pub struct Monitoring {
    inner: crate::monitoring::Monitoring,
    runtime: Arc<Runtime>,
}

impl Monitoring {
    /// Ships a batch of monitoring documents.
    pub fn bulk(
        &self,
        body: impl Into<NdBody>,
        doc_type: impl Into<Target>,
        options: RequestOptions,
    ) -> Result<Response<Value>> {
        self.runtime
            .block_on(self.inner.bulk(body, doc_type, options))
    }
}

/// Blocking counterpart of [Ssl][crate::ssl::Ssl].
#[derive(Clone, Debug)]
pub struct Ssl {
    inner: crate::ssl::Ssl,
    runtime: Arc<Runtime>,
}

impl Ssl {
    /// Returns the certificates loaded by every node for TLS.
    pub fn certificates(&self, options: RequestOptions) -> Result<Response<Value>> {
        self.runtime.block_on(self.inner.certificates(options))
    }
}

/// Blocking counterpart of [Transform][crate::transform::Transform].
#[derive(Clone, Debug)]
pub struct Transform {
    inner: crate::transform::Transform,
    runtime: Arc<Runtime>,
}

impl Transform {
    /// Deletes a transform.
    pub fn delete_transform(
        &self,
        transform_id: impl Into<Target>,
        options: RequestOptions,
    ) -> Result<Response<Value>> {
        self.runtime
            .block_on(self.inner.delete_transform(transform_id, options))
    }

    /// Returns transform configurations, all of them when `transform_id`
    /// is empty.
    pub fn get_transform(
        &self,
        transform_id: impl Into<Target>,
        options: RequestOptions,
    ) -> Result<Response<Value>> {
        self.runtime
            .block_on(self.inner.get_transform(transform_id, options))
    }

    /// Returns usage statistics for transforms.
    pub fn get_transform_stats(
        &self,
        transform_id: impl Into<Target>,
        options: RequestOptions,
    ) -> Result<Response<Value>> {
        self.runtime
            .block_on(self.inner.get_transform_stats(transform_id, options))
    }

    /// Previews the documents a transform would produce.
    pub fn preview_transform(
        &self,
        body: Option<Value>,
        transform_id: impl Into<Target>,
        options: RequestOptions,
    ) -> Result<Response<Value>> {
        self.runtime
            .block_on(self.inner.preview_transform(body, transform_id, options))
    }

    /// Creates a transform.
    pub fn put_transform(
        &self,
        transform_id: impl Into<Target>,
        body: Value,
        options: RequestOptions,
    ) -> Result<Response<Value>> {
        self.runtime
            .block_on(self.inner.put_transform(transform_id, body, options))
    }

    /// Starts a transform.
    pub fn start_transform(
        &self,
        transform_id: impl Into<Target>,
        options: RequestOptions,
    ) -> Result<Response<Value>> {
        self.runtime
            .block_on(self.inner.start_transform(transform_id, options))
    }

    /// Stops one or more transforms.
    pub fn stop_transform(
        &self,
        transform_id: impl Into<Target>,
        options: RequestOptions,
    ) -> Result<Response<Value>> {
        self.runtime
            .block_on(self.inner.stop_transform(transform_id, options))
    }

    /// Updates parts of a transform configuration.
    pub fn update_transform(
        &self,
        transform_id: impl Into<Target>,
        body: Value,
        options: RequestOptions,
    ) -> Result<Response<Value>> {
        self.runtime
            .block_on(self.inner.update_transform(transform_id, body, options))
    }

    /// Upgrades all transforms to the current configuration format.
    pub fn upgrade_transforms(&self, options: RequestOptions) -> Result<Response<Value>> {
        self.runtime.block_on(self.inner.upgrade_transforms(options))
    }
}

/// Blocking counterpart of [Xpack][crate::xpack::Xpack].
#[derive(Clone, Debug)]
pub struct Xpack {
    inner: crate::xpack::Xpack,
    runtime: Arc<Runtime>,
}

impl Xpack {
    /// Returns the installed features and their license status.
    pub fn info(&self, options: RequestOptions) -> Result<Response<Value>> {
        self.runtime.block_on(self.inner.info(options))
    }

    /// Returns usage information for every feature.
    pub fn usage(&self, options: RequestOptions) -> Result<Response<Value>> {
        self.runtime.block_on(self.inner.usage(options))
    }

    /// The autoscaling namespace, as reachable before the umbrella split.
    pub fn autoscaling(&self) -> Autoscaling {
        Autoscaling {
            inner: self.inner.autoscaling(),
            runtime: self.runtime.clone(),
        }
    }

    /// The cross-cluster replication namespace.
    pub fn ccr(&self) -> Ccr {
        Ccr {
            inner: self.inner.ccr(),
            runtime: self.runtime.clone(),
        }
    }

    /// The enrich namespace.
    pub fn enrich(&self) -> Enrich {
        Enrich {
            inner: self.inner.enrich(),
            runtime: self.runtime.clone(),
        }
    }

    /// The event query language namespace.
    pub fn eql(&self) -> Eql {
        Eql {
            inner: self.inner.eql(),
            runtime: self.runtime.clone(),
        }
    }

    /// The graph namespace.
    pub fn graph(&self) -> Graph {
        Graph {
            inner: self.inner.graph(),
            runtime: self.runtime.clone(),
        }
    }

    /// The index lifecycle management namespace.
    pub fn ilm(&self) -> Ilm {
        Ilm {
            inner: self.inner.ilm(),
            runtime: self.runtime.clone(),
        }
    }

    /// The ingest namespace.
    pub fn ingest(&self) -> Ingest {
        Ingest {
            inner: self.inner.ingest(),
            runtime: self.runtime.clone(),
        }
    }

    /// The license namespace.
    pub fn license(&self) -> License {
        License {
            inner: self.inner.license(),
            runtime: self.runtime.clone(),
        }
    }

    /// The monitoring namespace.
    pub fn monitoring(&self) -> Monitoring {
        Monitoring {
            inner: self.inner.monitoring(),
            runtime: self.runtime.clone(),
        }
    }

    /// The TLS certificate namespace.
    pub fn ssl(&self) -> Ssl {
        Ssl {
            inner: self.inner.ssl(),
            runtime: self.runtime.clone(),
        }
    }

    /// The transform namespace.
    pub fn transform(&self) -> Transform {
        Transform {
            inner: self.inner.transform(),
            runtime: self.runtime.clone(),
        }
    }
}
