//! Rendering decoded objects to stdout.

use anyhow::Result;
use uriload_core::Object;

pub(super) fn render(obj: &Object, json: bool) -> Result<String> {
    if json {
        Ok(serde_json::to_string_pretty(obj)?)
    } else {
        Ok(serde_yaml::to_string(obj)?)
    }
}
