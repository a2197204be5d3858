//! Built-in service rules embedded into the binary at compile time.

use rust_embed::RustEmbed;

use crate::error::{ArnComposerError, ArnComposerResult};
use crate::rules::RuleSet;

#[derive(RustEmbed)]
#[folder = "resources"]
#[include = "*.json"]
struct RuleData;

const RULES_FILE: &str = "service-rules.json";

impl RuleSet {
    /// Load the default rule table shipped with the crate.
    pub fn built_in() -> ArnComposerResult<Self> {
        let file = RuleData::get(RULES_FILE).ok_or_else(|| {
            ArnComposerError::config(format!("embedded rules file '{RULES_FILE}' not found"))
        })?;

        let json = std::str::from_utf8(&file.data).map_err(|e| {
            ArnComposerError::config(format!("embedded rules file is not valid UTF-8: {e}"))
        })?;

        log::debug!("loading built-in rules from '{RULES_FILE}' ({} bytes)", json.len());
        Self::from_json(json)
    }
}
