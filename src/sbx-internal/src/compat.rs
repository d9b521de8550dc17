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

//! Relocation of reserved transport settings out of the query string.
//!
//! Older client generations accepted transport settings, such as timeouts
//! and credentials, mixed into the query string parameters. Those names are
//! reserved: they configure the request instead of traveling on the wire.
//! This module moves them to their [RequestOptions] slot, with a warning, so
//! ported call sites keep working and the service never sees the keys.
//!
//! Reconciliation is idempotent. Applying it to already reconciled options
//! changes nothing.

use sbx::credentials::Credentials;
use sbx::options::RequestOptions;
use std::time::Duration;

#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("cannot parse '{0}' as a request timeout in seconds")]
    InvalidTimeout(String),
    #[error("cannot parse '{0}' as a list of status codes")]
    InvalidIgnore(String),
    #[error("cannot parse the 'http_auth' value, expected 'username:password'")]
    InvalidHttpAuth,
}

/// Moves reserved keys from the parameters into their options slot.
///
/// An explicitly configured option always wins over a reserved key. The
/// reserved key is removed from the parameters either way.
pub fn reconcile(options: &mut RequestOptions) -> sbx::Result<()> {
    if let Some(value) = take(options, "request_timeout") {
        let timeout = parse_timeout(&value)?;
        if options.timeout().is_none() {
            options.set_timeout(timeout);
        }
    }
    if let Some(value) = take(options, "ignore") {
        let statuses = parse_ignore(&value)?;
        if options.ignore_status().is_empty() {
            options.set_ignore_status(statuses);
        }
    }
    if let Some(value) = take(options, "opaque_id") {
        if options.opaque_id().is_none() {
            options.set_opaque_id(value);
        }
    }
    if let Some(value) = take(options, "http_auth") {
        let credentials = parse_http_auth(&value)?;
        if options.credentials().is_none() {
            options.set_credentials(credentials);
        }
    }
    if let Some(value) = take(options, "api_key") {
        let credentials = parse_api_key(&value);
        if options.credentials().is_none() {
            options.set_credentials(credentials);
        }
    }
    Ok(())
}

fn take(options: &mut RequestOptions, name: &str) -> Option<String> {
    let value = options.params_mut().remove(name)?;
    tracing::warn!(
        "the '{name}' parameter is reserved, set it through RequestOptions instead"
    );
    Some(value)
}

fn parse_timeout(value: &str) -> sbx::Result<Duration> {
    value
        .parse::<f64>()
        .ok()
        .and_then(|seconds| Duration::try_from_secs_f64(seconds).ok())
        .ok_or_else(|| validation(Error::InvalidTimeout(value.to_string())))
}

fn parse_ignore(value: &str) -> sbx::Result<Vec<u16>> {
    value
        .split(',')
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .map(|piece| piece.parse::<u16>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|_| validation(Error::InvalidIgnore(value.to_string())))
}

fn parse_http_auth(value: &str) -> sbx::Result<Credentials> {
    match value.split_once(':') {
        Some((username, password)) => Ok(Credentials::basic(username, password)),
        None => Err(validation(Error::InvalidHttpAuth)),
    }
}

fn parse_api_key(value: &str) -> Credentials {
    match value.split_once(':') {
        Some((id, key)) => Credentials::api_key(id, key),
        None => Credentials::encoded_api_key(value),
    }
}

fn validation(error: Error) -> sbx::error::Error {
    sbx::error::Error::validation(error)
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn moves_request_timeout() {
        let mut options = RequestOptions::new().with_param("request_timeout", 30_u64);
        reconcile(&mut options).unwrap();
        assert_eq!(options.timeout(), Some(Duration::from_secs(30)));
        assert!(!options.params().contains("request_timeout"));
    }

    #[test]
    fn fractional_timeout() {
        let mut options = RequestOptions::new().with_param("request_timeout", 2.5_f64);
        reconcile(&mut options).unwrap();
        assert_eq!(options.timeout(), Some(Duration::from_millis(2500)));
    }

    #[test_case("abc"; "not a number")]
    #[test_case("-1"; "negative")]
    #[test_case("inf"; "infinite")]
    fn rejects_bad_timeout(value: &str) {
        let mut options = RequestOptions::new().with_param("request_timeout", value);
        let error = reconcile(&mut options).unwrap_err();
        assert!(error.is_validation(), "{error:?}");
        assert!(error.to_string().contains(value), "{error}");
    }

    #[test]
    fn explicit_timeout_wins() {
        let mut options = RequestOptions::new()
            .with_timeout(Duration::from_secs(5))
            .with_param("request_timeout", 30_u64);
        reconcile(&mut options).unwrap();
        assert_eq!(options.timeout(), Some(Duration::from_secs(5)));
        assert!(!options.params().contains("request_timeout"));
    }

    #[test]
    fn moves_ignore_list() {
        let mut options = RequestOptions::new().with_param("ignore", "400, 404");
        reconcile(&mut options).unwrap();
        assert_eq!(options.ignore_status(), [400, 404]);
        assert!(!options.params().contains("ignore"));
    }

    #[test]
    fn rejects_bad_ignore() {
        let mut options = RequestOptions::new().with_param("ignore", "404,oops");
        let error = reconcile(&mut options).unwrap_err();
        assert!(error.is_validation(), "{error:?}");
    }

    #[test]
    fn moves_opaque_id() {
        let mut options = RequestOptions::new().with_param("opaque_id", "req-1");
        reconcile(&mut options).unwrap();
        assert_eq!(options.opaque_id(), Some("req-1"));
        assert!(!options.params().contains("opaque_id"));
    }

    #[test]
    fn moves_http_auth() {
        let mut options = RequestOptions::new().with_param("http_auth", "admin:hunter2");
        reconcile(&mut options).unwrap();
        assert_eq!(
            options.credentials(),
            Some(&Credentials::basic("admin", "hunter2"))
        );
    }

    #[test]
    fn rejects_http_auth_without_password() {
        let mut options = RequestOptions::new().with_param("http_auth", "admin");
        let error = reconcile(&mut options).unwrap_err();
        assert!(error.is_validation(), "{error:?}");
        assert!(error.to_string().contains("http_auth"), "{error}");
    }

    #[test]
    fn moves_api_key_pair_or_encoded() {
        let mut options = RequestOptions::new().with_param("api_key", "id:secret");
        reconcile(&mut options).unwrap();
        assert_eq!(options.credentials(), Some(&Credentials::api_key("id", "secret")));

        let mut options = RequestOptions::new().with_param("api_key", "aWQ6c2VjcmV0");
        reconcile(&mut options).unwrap();
        assert_eq!(
            options.credentials(),
            Some(&Credentials::encoded_api_key("aWQ6c2VjcmV0"))
        );
    }

    #[test]
    fn http_auth_wins_over_api_key() {
        let mut options = RequestOptions::new()
            .with_param("http_auth", "admin:hunter2")
            .with_param("api_key", "id:secret");
        reconcile(&mut options).unwrap();
        assert_eq!(
            options.credentials(),
            Some(&Credentials::basic("admin", "hunter2"))
        );
        assert!(!options.params().contains("api_key"));
    }

    #[test]
    fn explicit_credentials_win() {
        let mut options = RequestOptions::new()
            .with_credentials(Credentials::bearer("token"))
            .with_param("http_auth", "admin:hunter2");
        reconcile(&mut options).unwrap();
        assert_eq!(options.credentials(), Some(&Credentials::bearer("token")));
    }

    #[test]
    fn idempotent() {
        let mut options = RequestOptions::new()
            .with_param("request_timeout", 30_u64)
            .with_param("ignore", "404")
            .with_param("opaque_id", "req-1")
            .with_param("routing", "user-1");
        reconcile(&mut options).unwrap();
        let once = options.clone();
        reconcile(&mut options).unwrap();
        assert_eq!(options, once);
        assert_eq!(options.params().get("routing"), Some("user-1"));
    }

    #[test]
    fn untouched_without_reserved_keys() {
        let mut options = RequestOptions::new().with_param("routing", "user-1");
        let before = options.clone();
        reconcile(&mut options).unwrap();
        assert_eq!(options, before);
    }
}
