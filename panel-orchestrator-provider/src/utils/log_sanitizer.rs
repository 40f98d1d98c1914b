//! Log sanitization utilities
//!
//! Keeps admin passwords, account passwords and oversized panel responses
//! out of debug/error logs.

use serde_json::Value;

/// 日志中保留的最大字节数
const TRUNCATE_LIMIT: usize = 256;

/// Request body keys whose values are never logged.
const SECRET_KEYS: &[&str] = &[
    "adminPass",
    "password",
    "ownerPassword",
    "passwordByPass",
];

const REDACTED: &str = "***";

/// Shortens a panel response for logging.
///
/// Text within `TRUNCATE_LIMIT` bytes is returned as is. Longer text is cut
/// at the last character boundary before the limit and suffixed with the
/// original size.
pub fn truncate_for_log(s: &str) -> String {
    if s.len() <= TRUNCATE_LIMIT {
        return s.to_string();
    }
    // 多字节字符不能从中间截断
    let cut = s
        .char_indices()
        .map(|(i, _)| i)
        .take_while(|&i| i <= TRUNCATE_LIMIT)
        .last()
        .unwrap_or(0);
    format!("{}... [truncated, total {} bytes]", &s[..cut], s.len())
}

/// Returns a copy of a JSON request body with secret fields masked.
///
/// Only top-level object keys are inspected; panel payloads are flat.
pub fn redact_secrets(body: &Value) -> Value {
    match body {
        Value::Object(map) => Value::Object(
            map.iter()
                .map(|(k, v)| {
                    if SECRET_KEYS.contains(&k.as_str()) {
                        (k.clone(), Value::String(REDACTED.to_string()))
                    } else {
                        (k.clone(), v.clone())
                    }
                })
                .collect(),
        ),
        other => other.clone(),
    }
}
