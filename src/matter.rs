//! YAML front-matter extraction.
//!
//! Entry files optionally begin with a `---`-delimited YAML block; the rest
//! of the file is the Markdown body. The block must parse as a key/value
//! mapping - anything else fails the whole run, there is no per-file
//! recovery.

use serde_json::Value;
use thiserror::Error;

/// Ordered string-keyed JSON map (`serde_json` is built with
/// `preserve_order`, so front-matter key order survives into output).
pub type JsonMap = serde_json::Map<String, Value>;

#[derive(Debug, Error)]
pub enum MatterError {
    #[error("front-matter is not valid YAML")]
    Yaml(#[from] serde_yaml::Error),

    #[error("front-matter is not a key/value mapping")]
    NotAMapping,

    #[error("front-matter could not be represented as JSON")]
    Json(#[from] serde_json::Error),
}

/// Split a Markdown document into front-matter metadata and body.
///
/// The block opens with `---` as the first line (an optional BOM is
/// tolerated) and closes at the next `---` or `...` line; the body is
/// everything after the closing line. Without an opening marker the
/// metadata map is empty and the whole input is body. An unterminated
/// block is parsed to the end of the input, leaving an empty body.
pub fn split_front_matter(input: &str) -> Result<(JsonMap, &str), MatterError> {
    let doc = input.strip_prefix('\u{feff}').unwrap_or(input);

    let mut lines = doc.split_inclusive('\n');
    let Some(first) = lines.next() else {
        return Ok((JsonMap::new(), input));
    };
    if first.trim_end() != "---" {
        return Ok((JsonMap::new(), input));
    }

    // Byte offsets into `doc`, tracked line by line.
    let yaml_start = first.len();
    let mut offset = yaml_start;
    let mut close = None;
    for line in lines {
        let trimmed = line.trim_end();
        if trimmed == "---" || trimmed == "..." {
            close = Some((offset, offset + line.len()));
            break;
        }
        offset += line.len();
    }

    let (yaml_end, body_start) = close.unwrap_or((doc.len(), doc.len()));
    let yaml = &doc[yaml_start..yaml_end];
    let body = &doc[body_start..];

    if yaml.trim().is_empty() {
        return Ok((JsonMap::new(), body));
    }
    Ok((parse_mapping(yaml)?, body))
}

/// Parse a YAML block into a JSON-compatible map.
fn parse_mapping(yaml: &str) -> Result<JsonMap, MatterError> {
    let parsed: serde_yaml::Value = serde_yaml::from_str(yaml)?;
    match serde_json::to_value(parsed)? {
        Value::Object(map) => Ok(map),
        Value::Null => Ok(JsonMap::new()),
        _ => Err(MatterError::NotAMapping),
    }
}
