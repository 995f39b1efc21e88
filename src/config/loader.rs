//! Configuration loading from the environment

use std::io::Write;

use super::env_validator::EnvVarValidator;
use super::types::ClientConfig;
use crate::domain::value_objects::ManifestConflict;

/// Defaults with `NOW_*` environment overrides applied
pub fn load() -> ClientConfig {
    with_env_overrides(ClientConfig::default())
}

/// Apply environment variable overrides (NOW_* prefix)
pub fn with_env_overrides(config: ClientConfig) -> ClientConfig {
    with_overrides_from(config, |key| std::env::var(key).ok(), &mut std::io::stderr())
}

/// Apply overrides read through `lookup`, writing warnings to `writer`
pub fn with_overrides_from<L, W>(
    mut config: ClientConfig,
    lookup: L,
    writer: &mut W,
) -> ClientConfig
where
    L: Fn(&str) -> Option<String>,
    W: Write,
{
    if let Some(endpoint) = lookup("NOW_API_ENDPOINT").filter(|v| !v.trim().is_empty()) {
        config.api.endpoint = endpoint.trim().trim_end_matches('/').to_string();
    }

    if let Some(secs) = lookup("NOW_TIMEOUT_SECS") {
        let current = config.api.timeout_secs;
        config.api.timeout_secs = EnvVarValidator::new("NOW_TIMEOUT_SECS", &["<positive integer>"])
            .parse_with_writer(
                &secs,
                |s| s.trim().parse::<u64>().ok().filter(|n| *n > 0),
                current,
                writer,
            );
    }

    if let Some(name) = lookup("NOW_DEFAULT_NAME").filter(|v| !v.trim().is_empty()) {
        config.deploy.default_name = name.trim().to_string();
    }

    if let Some(mode) = lookup("NOW_MANIFEST_CONFLICT") {
        let current = config.deploy.manifest_conflict;
        config.deploy.manifest_conflict =
            EnvVarValidator::new("NOW_MANIFEST_CONFLICT", ManifestConflict::VALID_VALUES)
                .parse_with_writer(&mode, ManifestConflict::parse, current, writer);
    }

    config
}
