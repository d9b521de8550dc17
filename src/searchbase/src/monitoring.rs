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
use sbx::ndjson::NdBody;
use sbx::options::RequestOptions;
use sbx::response::Response;
use sbx::target::Target;
use sbxi::http::RestClient;
use sbxi::path::Path;
use sbxi::plan::Operation;
use sbxi::require;
use serde_json::Value;
use std::sync::Arc;

/// A client for the monitoring bulk API.
#[derive(Clone, Debug)]
pub struct Monitoring {
    transport: Arc<RestClient>,
}

static BULK: Operation = Operation {
    name: "monitoring.bulk",
    method: Method::POST,
    params: &["interval", "system_api_version", "system_id"],
};

impl Monitoring {
    pub(crate) fn new(transport: Arc<RestClient>) -> Self {
        Self { transport }
    }

    /// Ships a batch of monitoring documents.
    ///
    /// The body is newline-delimited JSON, alternating action lines and
    /// document lines, and is always sent as `application/x-ndjson`.
    ///
    /// # Example
    /// ```
    /// # use searchbase::Searchbase;
    /// # use searchbase::options::RequestOptions;
    /// # use serde_json::json;
    /// async fn example(client: &Searchbase) -> searchbase::Result<()> {
    ///     let lines = vec![
    ///         json!({"index": {"_type": "cluster_stats"}}),
    ///         json!({"cluster_uuid": "pZS9...", "status": "green"}),
    ///     ];
    ///     client
    ///         .monitoring()
    ///         .bulk(lines, None::<&str>, RequestOptions::new())
    ///         .await?;
    ///     Ok(())
    /// }
    /// ```
    pub async fn bulk(
        &self,
        body: impl Into<NdBody>,
        doc_type: impl Into<Target>,
        options: RequestOptions,
    ) -> Result<Response<Value>> {
        let body = body.into();
        let doc_type = doc_type.into();
        require::ndbody(&body)?;
        let path = Path::new()
            .fixed("_monitoring")
            .value(&doc_type)
            .fixed("bulk")
            .finish();
        let plan = self.transport.plan(&BULK, path, options)?.ndjson(body)?;
        self.transport.execute(plan).await
    }
}
