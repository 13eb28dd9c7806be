//! Plan parser: raw model text -> [`PlanDocument`].
//!
//! Structural decoding only -- no enhancement, no field validation (both are
//! downstream passes). The parser tolerates the noise models wrap JSON in:
//! Markdown code fences are stripped, and anything after the first complete
//! top-level object is treated as ignorable trailing prose. Input that does
//! not contain a complete object fails explicitly.

use thiserror::Error;

use super::document::PlanDocument;

/// Errors from decoding model output into a plan.
#[derive(Debug, Error)]
pub enum MalformedPlanError {
    #[error("invalid JSON in model output: {0}")]
    Json(#[from] serde_json::Error),

    #[error("top-level JSON value is {found}, expected an object")]
    NotAnObject { found: &'static str },
}

/// Parse raw model output into a [`PlanDocument`].
pub fn parse_plan(raw: &str) -> Result<PlanDocument, MalformedPlanError> {
    let text = strip_code_fence(raw);

    match first_json_object(text) {
        Some(object) => Ok(serde_json::from_str(object)?),
        None => {
            // No complete object anywhere. Decode the whole text to produce
            // the most descriptive failure: a syntax error for non-JSON, a
            // type mismatch for arrays and scalars.
            let value: serde_json::Value = serde_json::from_str(text.trim())?;
            Err(MalformedPlanError::NotAnObject {
                found: json_type_name(&value),
            })
        }
    }
}

/// Strip a surrounding Markdown code fence (``` or ```json), if present.
///
/// Returns the fenced body, or the input unchanged when there is no
/// complete fence pair.
fn strip_code_fence(text: &str) -> &str {
    let Some(open) = text.find("```") else {
        return text;
    };
    let after_open = &text[open + 3..];
    // Skip the info string (e.g. "json") through the end of the fence line.
    let Some(body_start) = after_open.find('\n') else {
        return text;
    };
    let body = &after_open[body_start + 1..];
    match body.find("```") {
        Some(close) => &body[..close],
        None => text,
    }
}

/// Find the first complete top-level JSON object and return it as a slice.
///
/// Brace matching is string- and escape-aware so braces inside string values
/// do not confuse the scan. Returns `None` when no `{` appears or the object
/// never closes (truncated output).
fn first_json_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (i, c) in text[start..].char_indices() {
        if in_string {
            match c {
                _ if escaped => escaped = false,
                '\\' => escaped = true,
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }
        match c {
            '"' => in_string = true,
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(&text[start..start + i + 1]);
                }
            }
            _ => {}
        }
    }

    None
}

fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}
