use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct EstreeConfig {
    /// Emit `location` objects.
    #[serde(default = "true_by_default")]
    pub locations: bool,

    /// Emit `range: [start, end]` byte offsets, like Esprima and Acorn do.
    #[serde(default)]
    pub ranges: bool,
}

impl Default for EstreeConfig {
    fn default() -> Self {
        EstreeConfig {
            locations: true,
            ranges: false,
        }
    }
}

fn true_by_default() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_is_default() {
        let config: EstreeConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, EstreeConfig::default());
    }

    #[test]
    fn camel_case_fields() {
        let config: EstreeConfig =
            serde_json::from_str(r#"{"locations": false, "ranges": true}"#).unwrap();
        assert!(!config.locations);
        assert!(config.ranges);
    }

    #[test]
    fn unknown_fields_are_rejected() {
        assert!(serde_json::from_str::<EstreeConfig>(r#"{"comments": true}"#).is_err());
    }
}
