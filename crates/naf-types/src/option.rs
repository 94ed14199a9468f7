//! `<option>` markup carried by every fragment

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::tier::Tier;

/// Nomenclature an option comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Nomenclature {
    /// Shared structure levels (sectors, divisions, groups)
    All,
    /// INSEE NAF rev.2 class
    Naf,
    /// Craft-trades refinement of a NAF class
    Nafa,
}

impl Nomenclature {
    pub fn as_str(self) -> &'static str {
        match self {
            Nomenclature::All => "all",
            Nomenclature::Naf => "naf",
            Nomenclature::Nafa => "nafa",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "all" => Some(Nomenclature::All),
            "naf" => Some(Nomenclature::Naf),
            "nafa" => Some(Nomenclature::Nafa),
            _ => None,
        }
    }
}

/// A single selectable entry of a fragment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    /// Code used to build the next fetch URL
    pub value: String,
    pub nomenclature: Nomenclature,
    /// Human-readable label, as found in the source
    pub text: String,
    /// Tier the option belongs to; `None` renders an empty `data-type`
    pub tier: Option<Tier>,
}

impl SelectOption {
    pub fn new(
        value: impl Into<String>,
        nomenclature: Nomenclature,
        text: impl Into<String>,
        tier: Tier,
    ) -> Self {
        Self {
            value: value.into(),
            nomenclature,
            text: text.into(),
            tier: Some(tier),
        }
    }

    /// Label as displayed: lower-cased, then title-cased
    pub fn display_text(&self) -> String {
        title_case(&self.text.to_lowercase())
    }

    /// Render the option element
    pub fn to_markup(&self) -> String {
        format!(
            r#"<option value="{}" data-nomenclature="{}" data-type="{}">{}</option>"#,
            escape(&self.value),
            self.nomenclature.as_str(),
            self.tier.map(Tier::data_type).unwrap_or(""),
            escape(&self.display_text()),
        )
    }

    /// Disabled, pre-selected first entry of a tier's fragment
    pub fn placeholder_markup(tier: Tier) -> String {
        format!(
            "<option disabled selected>{}</option>",
            escape(tier.placeholder())
        )
    }
}

impl fmt::Display for SelectOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_markup())
    }
}

/// Upper-case the first letter of every word
///
/// A word starts after whitespace or after any ASCII character that is not
/// alphanumeric or `_`, so `d'animaux` becomes `D'Animaux`.
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut prev = ' ';

    for c in text.chars() {
        if is_word_separator(prev) {
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
        prev = c;
    }

    out
}

fn is_word_separator(c: char) -> bool {
    if c.is_ascii() {
        return !(c.is_ascii_alphanumeric() || c == '_');
    }
    if c.is_alphanumeric() {
        return false;
    }
    c.is_whitespace()
}

pub(crate) fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

pub(crate) fn unescape(text: &str) -> String {
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}
