use std::collections::BTreeMap;

/// Overlay `overrides` onto the inherited environment; override entries win,
/// everything else passes through unchanged.
pub fn merge_environment(
    inherited: impl IntoIterator<Item = (String, String)>,
    overrides: &BTreeMap<String, String>,
) -> BTreeMap<String, String> {
    let mut merged: BTreeMap<String, String> = inherited.into_iter().collect();
    for (key, value) in overrides {
        merged.insert(key.clone(), value.clone());
    }
    merged
}
