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

//! Verifies the blocking surface sends the same requests as the async one.
//!
//! These tests deliberately run without a Tokio runtime of their own. The
//! blocking client brings its own.

use httptest::{Expectation, Server, matchers::*, responders::*};
use searchbase::blocking::Searchbase;
use searchbase::credentials::Credentials;
use searchbase::options::RequestOptions;
use serde_json::json;
use static_assertions::assert_impl_all;

type Result = anyhow::Result<()>;

fn test_client(server: &Server) -> anyhow::Result<Searchbase> {
    Ok(Searchbase::builder()
        .with_endpoint(format!("http://{}", server.addr()))
        .build()?)
}

#[test]
fn clients_are_thread_safe() {
    assert_impl_all!(searchbase::Searchbase: Clone, Send, Sync, std::fmt::Debug);
    assert_impl_all!(Searchbase: Clone, Send, Sync, std::fmt::Debug);
}

#[test]
fn sends_the_same_requests_as_the_async_client() -> Result {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("DELETE", "/_ilm/policy/stale"))
            .respond_with(json_encoded(json!({"acknowledged": true}))),
    );

    let client = test_client(&server)?;
    let response = client
        .ilm()
        .delete_lifecycle("stale", RequestOptions::new())?;
    assert_eq!(response.body()["acknowledged"], json!(true));
    Ok(())
}

#[test]
fn configuration_reaches_the_wire() -> Result {
    let server = Server::run();
    server.expect(
        Expectation::matching(all_of![
            request::method_path("GET", "/_license/trial_status"),
            request::headers(contains(("x-team", "search"))),
            request::headers(contains(("authorization", "Bearer tok-1"))),
        ])
        .respond_with(json_encoded(json!({"eligible_to_start_trial": false}))),
    );

    let client = Searchbase::builder()
        .with_endpoint(format!("http://{}", server.addr()))
        .with_header("x-team", "search")
        .with_credentials(Credentials::bearer("tok-1"))
        .build()?;
    client.license().get_trial_status(RequestOptions::new())?;
    Ok(())
}

#[test]
fn ping_reports_reachability() -> Result {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("HEAD", "/"))
            .respond_with(status_code(200)),
    );

    let client = test_client(&server)?;
    assert!(client.ping(RequestOptions::new())?);
    Ok(())
}

#[test]
fn validation_matches_the_async_client() -> Result {
    let server = Server::run();
    let client = test_client(&server)?;

    let err = client
        .ilm()
        .delete_lifecycle("", RequestOptions::new())
        .expect_err("an empty policy name must be rejected");
    assert!(err.is_validation(), "{err:?}");
    assert!(
        err.to_string()
            .contains("empty value passed for a required argument 'policy'"),
        "{err}"
    );
    Ok(())
}

#[test]
fn umbrella_accessors_delegate() -> Result {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("GET", "/_enrich/_stats"))
            .respond_with(json_encoded(json!({"executing_policies": []}))),
    );

    let client = test_client(&server)?;
    client.xpack().enrich().stats(RequestOptions::new())?;
    Ok(())
}

#[test]
fn namespace_clients_outlive_the_parent() -> Result {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("GET", "/_ssl/certificates"))
            .respond_with(json_encoded(json!([]))),
    );

    let ssl = {
        let client = test_client(&server)?;
        client.ssl()
    };
    ssl.certificates(RequestOptions::new())?;
    Ok(())
}
