//! Bearer token resolution
//!
//! Order: the configured environment variable, then standard input: a
//! hidden prompt on a terminal, one line otherwise. The first resolved token
//! is kept for the rest of the process, so the user is asked at most once.

use std::io::BufRead;
use std::sync::OnceLock;

use dialoguer::Password;
use is_terminal::IsTerminal;

use crate::config::ApiConfig;
use crate::domain::value_objects::ApiToken;
use crate::error::{NowError, NowResult};

static RESOLVED: OnceLock<ApiToken> = OnceLock::new();

/// Resolve the process-wide token, reading standard input if needed.
pub fn resolve_token(config: &ApiConfig) -> NowResult<ApiToken> {
    if let Some(token) = RESOLVED.get() {
        return Ok(token.clone());
    }

    let var = config.token_var.as_str();
    let token = resolve_with(var, |key| std::env::var(key).ok(), || prompt_token(var))?;
    Ok(RESOLVED.get_or_init(|| token).clone())
}

/// Resolution without the process cache: `lookup` first, then `prompt`.
pub fn resolve_with<L, P>(var: &str, lookup: L, prompt: P) -> NowResult<ApiToken>
where
    L: Fn(&str) -> Option<String>,
    P: FnOnce() -> NowResult<String>,
{
    if let Some(token) = lookup(var).and_then(ApiToken::new) {
        return Ok(token);
    }

    tracing::debug!(var, "token not in environment, prompting");
    ApiToken::new(prompt()?).ok_or_else(|| NowError::MissingToken {
        var: var.to_string(),
    })
}

fn prompt_token(var: &str) -> NowResult<String> {
    let stdin = std::io::stdin();
    if !stdin.is_terminal() {
        return read_token_line(stdin.lock(), var);
    }

    Password::new()
        .with_prompt("Zeit API token")
        .interact()
        .map_err(|e| NowError::Prompt(e.to_string()))
}

/// First line of a piped input. End of input is a missing token.
pub fn read_token_line<R: BufRead>(mut reader: R, var: &str) -> NowResult<String> {
    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Err(NowError::MissingToken {
            var: var.to_string(),
        });
    }
    Ok(line)
}
