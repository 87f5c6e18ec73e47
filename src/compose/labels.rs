//! Traefik label stamping
//!
//! Compose allows service labels in two syntaxes: a sequence of `key=value`
//! strings or a mapping of key to value. Both are supported here; whichever
//! form the file already uses is kept.

use crate::compose::document::ComposeDocument;
use crate::error::{LabelError, Result};
use serde_yaml::Value;

/// Enables routing for the service when the proxy runs with
/// `providers.docker.exposedbydefault=false`.
pub const TRAEFIK_ENABLE_KEY: &str = "traefik.enable";

/// Add `key=value` to a label sequence, or replace the value if the key is
/// already present.
///
/// The scan stops at the first entry whose prefix up to and including the
/// first `=` matches; its position in the sequence is preserved. Entries
/// that are not strings are skipped. With no match the new label is
/// appended.
pub fn upsert_label(labels: &mut Vec<Value>, key: &str, value: &str) {
    let prefix = format!("{}=", key);
    let entry = format!("{}={}", key, value);

    for label in labels.iter_mut() {
        if label.as_str().is_some_and(|s| s.starts_with(&prefix)) {
            *label = Value::String(entry);
            return;
        }
    }
    labels.push(Value::String(entry));
}

/// Build the host-based router rule for a deployment id.
fn router_rule(id: &str) -> (String, String) {
    (
        format!("traefik.http.routers.{}.rule", id),
        format!("Host(`{}.localhost`)", id),
    )
}

/// Set the Traefik routing labels on one service of the document.
///
/// Ensures the service has a `labels` node (an empty sequence is created
/// when absent), then upserts `traefik.enable=true` and the host router
/// rule for `id`. Fails when the document has no `services` mapping or no
/// service of that name.
pub fn apply_traefik_labels(doc: &mut ComposeDocument, service: &str, id: &str) -> Result<()> {
    let labels = doc.labels_mut(service)?;
    let (rule_key, rule_value) = router_rule(id);

    match labels {
        Value::Sequence(seq) => {
            upsert_label(seq, TRAEFIK_ENABLE_KEY, "true");
            upsert_label(seq, &rule_key, &rule_value);
        }
        Value::Mapping(map) => {
            map.insert(Value::from(TRAEFIK_ENABLE_KEY), Value::from("true"));
            map.insert(Value::from(rule_key), Value::from(rule_value));
        }
        _ => {
            return Err(LabelError::ComposeParse(format!(
                "service '{}' has invalid 'labels' (expected sequence or mapping)",
                service
            )));
        }
    }

    Ok(())
}
