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

pub type ClientConfig = sbx::client_builder::internal::ClientConfig;

pub(crate) const LOGGING_VAR: &str = "SEARCHBASE_LOGGING";

/// Returns true if the client should emit request and response traces.
///
/// Tracing is enabled via the client builder, or globally with the
/// `SEARCHBASE_LOGGING` environment variable.
pub fn tracing_enabled(config: &ClientConfig) -> bool {
    if config.tracing {
        return true;
    }
    std::env::var(LOGGING_VAR)
        .map(|value| value == "true")
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use scoped_env::ScopedEnv;
    use serial_test::serial;

    #[test]
    #[serial]
    fn tracing_disabled_by_default() {
        let _e = ScopedEnv::remove(LOGGING_VAR);
        let config = ClientConfig::default();
        assert!(!tracing_enabled(&config));
    }

    #[test]
    #[serial]
    fn tracing_enabled_by_config() {
        let _e = ScopedEnv::remove(LOGGING_VAR);
        let config = ClientConfig {
            tracing: true,
            ..Default::default()
        };
        assert!(tracing_enabled(&config));
    }

    #[test]
    #[serial]
    fn tracing_enabled_by_environment() {
        let _e = ScopedEnv::set(LOGGING_VAR, "true");
        let config = ClientConfig::default();
        assert!(tracing_enabled(&config));
    }

    #[test]
    #[serial]
    fn tracing_ignores_other_values() {
        let _e = ScopedEnv::set(LOGGING_VAR, "yes");
        let config = ClientConfig::default();
        assert!(!tracing_enabled(&config));
    }
}
