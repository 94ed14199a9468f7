//! Page layout and fragment locations

use naf_types::Tier;
use serde::{Deserialize, Serialize};

/// Where the fragments live and which page elements hold the selectors
///
/// Every field is optional when deserialized from JS; missing ones keep the
/// default layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SelectConfig {
    pub sectors_file: String,
    pub divisions_folder: String,
    pub groups_folder: String,
    pub classes_folder: String,

    pub sector_container: String,
    pub division_container: String,
    pub group_container: String,
    pub class_container: String,

    /// Class toggled on a container while its fragment is in flight
    pub loading_class: String,
}

impl Default for SelectConfig {
    fn default() -> Self {
        Self {
            sectors_file: "/data/secteurs.htm".to_string(),
            divisions_folder: "/data/divisions/".to_string(),
            groups_folder: "/data/groupes/".to_string(),
            classes_folder: "/data/classes/".to_string(),
            sector_container: "data_secteurs".to_string(),
            division_container: "data_divisions".to_string(),
            group_container: "data_groupes".to_string(),
            class_container: "data_classes".to_string(),
            loading_class: "loading".to_string(),
        }
    }
}

impl SelectConfig {
    /// Folder holding the fragments of `tier`, keyed by parent code
    pub fn folder(&self, tier: Tier) -> Option<&str> {
        match tier {
            Tier::Sector => None,
            Tier::Division => Some(&self.divisions_folder),
            Tier::Group => Some(&self.groups_folder),
            Tier::Class => Some(&self.classes_folder),
        }
    }

    /// Id of the element wrapping the label and the select of `tier`
    pub fn container_id(&self, tier: Tier) -> &str {
        match tier {
            Tier::Sector => &self.sector_container,
            Tier::Division => &self.division_container,
            Tier::Group => &self.group_container,
            Tier::Class => &self.class_container,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_layout() {
        let config = SelectConfig::default();
        assert_eq!(config.sectors_file, "/data/secteurs.htm");
        assert_eq!(config.folder(Tier::Sector), None);
        assert_eq!(config.folder(Tier::Group), Some("/data/groupes/"));
        assert_eq!(config.container_id(Tier::Class), "data_classes");
    }

    #[test]
    fn test_partial_override() {
        let config: SelectConfig =
            serde_json::from_str(r#"{"divisionsFolder":"/naf/divisions/","loadingClass":"busy"}"#)
                .unwrap();
        assert_eq!(config.divisions_folder, "/naf/divisions/");
        assert_eq!(config.loading_class, "busy");
        assert_eq!(config.classes_folder, "/data/classes/");
    }
}
