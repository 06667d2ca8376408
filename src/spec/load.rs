use std::path::Path;

use anyhow::Context;

use super::document::AsyncApiDoc;

/// Load an AsyncAPI document from a YAML or JSON file
///
/// Files ending in `.yaml`/`.yml` are parsed as YAML, everything else as
/// JSON. The JSON path goes through `serde_json` with `preserve_order`
/// enabled, so mapping order from the source file survives into the
/// document model either way.
///
/// # Errors
///
/// Returns an error if the file cannot be read or does not parse.
pub fn load_document(path: &Path) -> anyhow::Result<AsyncApiDoc> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read AsyncAPI document {path:?}"))?;

    let is_yaml = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"));

    let value: serde_yaml::Value = if is_yaml {
        serde_yaml::from_str(&content)
            .with_context(|| format!("failed to parse YAML document {path:?}"))?
    } else {
        let json: serde_json::Value = serde_json::from_str(&content)
            .with_context(|| format!("failed to parse JSON document {path:?}"))?;
        serde_yaml::to_value(json)
            .with_context(|| format!("failed to convert JSON document {path:?}"))?
    };

    tracing::debug!(path = %path.display(), yaml = is_yaml, "loaded AsyncAPI document");
    Ok(AsyncApiDoc::new(value))
}
