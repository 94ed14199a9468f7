//! NAF / NAFA activity codes

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::NafError;
use crate::tier::Tier;

/// A normalized code: the dot removed, four digits then up to two letters
///
/// `01` (division), `011` (group), `0111Z` (NAF class), `1071BA` (NAFA class)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NafCode(String);

impl NafCode {
    /// Normalize a raw code as printed in the nomenclatures (`10.71A`)
    pub fn normalize(raw: &str) -> Result<Self, NafError> {
        let len = raw.chars().count();
        if !(2..=6).contains(&len) {
            return Err(NafError::InvalidCode(raw.to_string()));
        }

        let code = raw.replacen('.', "", 1);
        let code = code.trim();

        let valid = code.chars().enumerate().all(|(i, c)| {
            if i < 4 {
                c.is_ascii_digit()
            } else {
                c.is_ascii_alphabetic()
            }
        });

        if !valid || code.is_empty() {
            return Err(NafError::InvalidCode(raw.to_string()));
        }

        Ok(Self(code.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Tier implied by the code length, if any
    pub fn tier(&self) -> Option<Tier> {
        match self.0.len() {
            2 => Some(Tier::Division),
            3 => Some(Tier::Group),
            5 | 6 => Some(Tier::Class),
            _ => None,
        }
    }

    /// Code of the parent level, for groups and classes
    ///
    /// Divisions hang off a sector letter which the code does not carry.
    pub fn parent(&self) -> Option<&str> {
        match self.tier()? {
            Tier::Group => Some(&self.0[..2]),
            Tier::Class => Some(&self.0[..3]),
            _ => None,
        }
    }

    /// First five characters, the NAF class a NAFA code refines
    pub fn naf_prefix(&self) -> &str {
        let end = self.0.len().min(5);
        &self.0[..end]
    }
}

impl fmt::Display for NafCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for NafCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
