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

//! Verifies the requests each namespace sends for a representative set of
//! operations.

use httptest::{Expectation, Server, matchers::*, responders::*};
use searchbase::Searchbase;
use searchbase::options::RequestOptions;
use serde_json::json;

type Result = anyhow::Result<()>;

async fn test_client(server: &Server) -> anyhow::Result<Searchbase> {
    Ok(Searchbase::builder()
        .with_endpoint(format!("http://{}", server.addr()))
        .build()
        .await?)
}

#[tokio::test]
async fn info_hits_the_root() -> Result {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("GET", "/"))
            .respond_with(json_encoded(json!({"cluster_name": "demo"}))),
    );

    let client = test_client(&server).await?;
    let info = client.info(RequestOptions::new()).await?;
    assert_eq!(info.body()["cluster_name"], json!("demo"));
    Ok(())
}

#[tokio::test]
async fn ping_uses_head() -> Result {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("HEAD", "/"))
            .respond_with(status_code(200)),
    );

    let client = test_client(&server).await?;
    assert!(client.ping(RequestOptions::new()).await?);
    Ok(())
}

#[tokio::test]
async fn follow_sends_put_with_body() -> Result {
    let body = json!({"remote_cluster": "east", "leader_index": "logs"});
    let server = Server::run();
    server.expect(
        Expectation::matching(all_of![
            request::method_path("PUT", "/logs-copy/_ccr/follow"),
            request::query(url_decoded(contains(("wait_for_active_shards", "1")))),
            request::headers(contains(("content-type", "application/json"))),
            request::body(json_decoded(eq(body.clone()))),
        ])
        .respond_with(json_encoded(json!({"follow_index_created": true}))),
    );

    let client = test_client(&server).await?;
    let options = RequestOptions::new().with_param("wait_for_active_shards", "1");
    client.ccr().follow("logs-copy", body, options).await?;
    Ok(())
}

#[tokio::test]
async fn absent_optional_argument_shortens_the_path() -> Result {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("GET", "/_ilm/policy"))
            .respond_with(json_encoded(json!({}))),
    );

    let client = test_client(&server).await?;
    client
        .ilm()
        .get_lifecycle(None::<&str>, RequestOptions::new())
        .await?;
    Ok(())
}

#[tokio::test]
async fn list_arguments_join_with_commas() -> Result {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("GET", "/logs-1,logs-2/_ilm/explain"))
            .respond_with(json_encoded(json!({"indices": {}}))),
    );

    let client = test_client(&server).await?;
    client
        .ilm()
        .explain_lifecycle(["logs-1", "logs-2"], RequestOptions::new())
        .await?;
    Ok(())
}

#[tokio::test]
async fn monitoring_bulk_sends_ndjson() -> Result {
    let server = Server::run();
    server.expect(
        Expectation::matching(all_of![
            request::method_path("POST", "/_monitoring/beats/bulk"),
            request::query(url_decoded(contains(("system_id", "beats")))),
            request::headers(contains(("content-type", "application/x-ndjson"))),
            |req: &http::Request<bytes::Bytes>| {
                let body = String::from_utf8_lossy(req.body());
                body.ends_with('\n') && body.lines().count() == 2
            },
        ])
        .respond_with(json_encoded(json!({"took": 2}))),
    );

    let client = test_client(&server).await?;
    let docs = vec![json!({"index": {"_type": "cpu"}}), json!({"load": 0.4})];
    // A caller-provided content-type must not survive; the bulk endpoint
    // only accepts newline-delimited payloads.
    let options = RequestOptions::new()
        .with_param("system_id", "beats")
        .with_header("content-type", "application/json");
    client.monitoring().bulk(docs, "beats", options).await?;
    Ok(())
}

#[tokio::test]
async fn legacy_paging_parameter_is_renamed() -> Result {
    let server = Server::run();
    server.expect(
        Expectation::matching(all_of![
            request::method_path("GET", "/_transform"),
            request::query(url_decoded(contains(("from", "5")))),
            request::query(url_decoded(not(contains(("from_", any()))))),
        ])
        .respond_with(json_encoded(json!({"count": 0}))),
    );

    let client = test_client(&server).await?;
    let options = RequestOptions::new().with_param("from_", 5_u64);
    client
        .transform()
        .get_transform(None::<&str>, options)
        .await?;
    Ok(())
}

#[tokio::test]
async fn license_install_uses_put() -> Result {
    let server = Server::run();
    server.expect(
        Expectation::matching(all_of![
            request::method_path("PUT", "/_license"),
            request::query(url_decoded(contains(("acknowledge", "true")))),
        ])
        .respond_with(json_encoded(json!({"acknowledged": true}))),
    );

    let client = test_client(&server).await?;
    let options = RequestOptions::new().with_param("acknowledge", true);
    client
        .license()
        .post(Some(json!({"licenses": []})), options)
        .await?;
    Ok(())
}

#[tokio::test]
async fn umbrella_accessors_reach_the_same_endpoints() -> Result {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("GET", "/_ilm/status"))
            .respond_with(json_encoded(json!({"operation_mode": "RUNNING"}))),
    );
    server.expect(
        Expectation::matching(request::method_path("GET", "/_xpack/usage"))
            .respond_with(json_encoded(json!({}))),
    );

    let client = test_client(&server).await?;
    let status = client
        .xpack()
        .ilm()
        .get_status(RequestOptions::new())
        .await?;
    assert_eq!(status.body()["operation_mode"], json!("RUNNING"));
    client.xpack().usage(RequestOptions::new()).await?;
    Ok(())
}

#[tokio::test]
async fn ignored_status_reaches_the_caller_as_a_response() -> Result {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("DELETE", "/_ilm/policy/gone"))
            .respond_with(status_code(404).body(r#"{"error": "not found", "status": 404}"#)),
    );

    let client = test_client(&server).await?;
    let options = RequestOptions::new().with_ignore_status([404]);
    let response = client.ilm().delete_lifecycle("gone", options).await?;
    assert_eq!(response.status_code(), Some(404));
    Ok(())
}

#[tokio::test]
async fn service_errors_surface_their_cause() -> Result {
    let body = json!({
        "error": {"type": "security_exception", "reason": "missing credentials"},
        "status": 401
    });
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("GET", "/_ssl/certificates"))
            .respond_with(status_code(401).body(body.to_string())),
    );

    let client = test_client(&server).await?;
    let err = client
        .ssl()
        .certificates(RequestOptions::new())
        .await
        .expect_err("a 401 must report an error");
    let details = err.api_error().expect("the body names a cause");
    assert_eq!(details.error_type(), Some("security_exception"));
    assert_eq!(err.http_status_code(), Some(401));
    Ok(())
}

#[tokio::test]
async fn simulate_interleaves_body_and_optional_id() -> Result {
    let server = Server::run();
    server.expect(
        Expectation::matching(all_of![
            request::method_path("POST", "/_ingest/pipeline/logs/_simulate"),
            request::query(url_decoded(contains(("verbose", "true")))),
        ])
        .respond_with(json_encoded(json!({"docs": []}))),
    );

    let client = test_client(&server).await?;
    let options = RequestOptions::new().with_param("verbose", true);
    client
        .ingest()
        .simulate(json!({"docs": [{"_source": {}}]}), "logs", options)
        .await?;
    Ok(())
}
