//! Pulls the JSON payload out of a free-text model reply.
//!
//! Models often wrap structured output in markdown fences. Extraction tries,
//! in order:
//!
//! 1. a fence tagged `json` (` ```json ... ``` `),
//! 2. the first fence of any kind, dropping a language tag line if present,
//! 3. the raw reply, untouched.
//!
//! A fence that is opened but never closed runs to the end of the reply.

use once_cell::sync::Lazy;
use regex::Regex;

static JSON_FENCE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)```json(.*?)(?:```|\z)").expect("valid json fence regex"));

static ANY_FENCE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)```(?:[\w+-]*[ \t]*\r?\n)?(.*?)(?:```|\z)").expect("valid fence regex")
});

/// Which rule produced the payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayloadSource {
    JsonFence,
    AnyFence,
    Raw,
}

impl PayloadSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            PayloadSource::JsonFence => "json_fence",
            PayloadSource::AnyFence => "any_fence",
            PayloadSource::Raw => "raw",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Extracted<'a> {
    pub source: PayloadSource,
    pub text: &'a str,
}

/// Locate the JSON text inside `reply`. Fenced content is trimmed; raw
/// replies are returned as-is.
pub fn extract_json_payload(reply: &str) -> Extracted<'_> {
    if let Some(body) = JSON_FENCE.captures(reply).and_then(|c| c.get(1)) {
        return Extracted {
            source: PayloadSource::JsonFence,
            text: body.as_str().trim(),
        };
    }

    if let Some(body) = ANY_FENCE.captures(reply).and_then(|c| c.get(1)) {
        return Extracted {
            source: PayloadSource::AnyFence,
            text: body.as_str().trim(),
        };
    }

    Extracted {
        source: PayloadSource::Raw,
        text: reply,
    }
}
