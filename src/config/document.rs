use std::collections::BTreeMap;

use serde::Deserialize;

/// Display fallback when a configuration carries no `name`.
pub const UNNAMED_PLACEHOLDER: &str = "Unnamed";

/// Parsed `.vscode/launch.json` document.
///
/// `configurations` keeps file order; display numbering and selection indices
/// follow it.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LaunchDocument {
    #[serde(default)]
    pub configurations: Vec<LaunchEntry>,
}

/// One selectable launch configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LaunchEntry {
    pub name: Option<String>,
    /// Command to spawn. Optional at parse time; required once selected.
    #[serde(rename = "runtimeExecutable")]
    pub runtime_executable: Option<String>,
    #[serde(rename = "runtimeArgs", default)]
    pub runtime_args: Vec<String>,
    /// Overrides merged over the inherited environment, entry wins.
    #[serde(default)]
    pub env: BTreeMap<String, String>,
}

impl LaunchEntry {
    /// Name shown in the selection menu.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(UNNAMED_PLACEHOLDER)
    }
}
