//! The four nested levels of the NAF classification

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::NafError;

/// One level of the classification, in cascade order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    #[serde(rename = "secteur")]
    Sector,
    Division,
    #[serde(rename = "groupe")]
    Group,
    #[serde(rename = "classe")]
    Class,
}

impl Tier {
    /// All tiers, from the root of the cascade to the leaf
    pub const ALL: [Tier; 4] = [Tier::Sector, Tier::Division, Tier::Group, Tier::Class];

    /// Position in the cascade (0 = sector, 3 = class)
    pub fn ordinal(self) -> usize {
        match self {
            Tier::Sector => 0,
            Tier::Division => 1,
            Tier::Group => 2,
            Tier::Class => 3,
        }
    }

    /// Value of the `data-type` attribute carried by options of this tier
    pub fn data_type(self) -> &'static str {
        match self {
            Tier::Sector => "secteur",
            Tier::Division => "division",
            Tier::Group => "groupe",
            Tier::Class => "classe",
        }
    }

    /// Inverse of [`Tier::data_type`]
    pub fn from_data_type(value: &str) -> Option<Tier> {
        match value {
            "secteur" => Some(Tier::Sector),
            "division" => Some(Tier::Division),
            "groupe" => Some(Tier::Group),
            "classe" => Some(Tier::Class),
            _ => None,
        }
    }

    /// The tier whose options are loaded once an option of this tier is chosen
    pub fn next(self) -> Option<Tier> {
        match self {
            Tier::Sector => Some(Tier::Division),
            Tier::Division => Some(Tier::Group),
            Tier::Group => Some(Tier::Class),
            Tier::Class => None,
        }
    }

    /// Folder holding one fragment per parent code. Sectors live in a single file.
    pub fn folder(self) -> Option<&'static str> {
        match self {
            Tier::Sector => None,
            Tier::Division => Some("divisions"),
            Tier::Group => Some("groupes"),
            Tier::Class => Some("classes"),
        }
    }

    /// Disabled first option of every fragment
    pub fn placeholder(self) -> &'static str {
        match self {
            Tier::Sector => "Sélectionnez votre Secteur",
            Tier::Division => "Sélectionnez votre Division",
            Tier::Group => "Sélectionnez votre Groupe",
            Tier::Class => "Sélectionnez votre Classe",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.data_type())
    }
}

impl FromStr for Tier {
    type Err = NafError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tier::from_data_type(s).ok_or_else(|| NafError::UnknownType(s.to_string()))
    }
}
