//! A fragment is the option list of one tier for one parent code

use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashMap;

use crate::error::NafError;
use crate::option::{unescape, Nomenclature, SelectOption};
use crate::tier::Tier;

lazy_static! {
    static ref OPTION_PATTERN: Regex =
        Regex::new(r"(?s)<option\b([^>]*)>(.*?)</option>").unwrap();

    static ref ATTRIBUTE_PATTERN: Regex =
        Regex::new(r#"([a-zA-Z][a-zA-Z-]*)(?:\s*=\s*"([^"]*)")?"#).unwrap();
}

/// Placeholder plus the selectable options of a tier
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fragment {
    pub placeholder: Option<String>,
    pub options: Vec<SelectOption>,
}

impl Fragment {
    /// Empty fragment headed by the tier's placeholder
    pub fn for_tier(tier: Tier) -> Self {
        Self {
            placeholder: Some(tier.placeholder().to_string()),
            options: Vec::new(),
        }
    }

    pub fn push(&mut self, option: SelectOption) {
        self.options.push(option);
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    pub fn find(&self, value: &str) -> Option<&SelectOption> {
        self.options.iter().find(|o| o.value == value)
    }

    /// Render the fragment as served under `/data`
    pub fn to_markup(&self) -> String {
        let mut out = String::new();
        if let Some(placeholder) = &self.placeholder {
            out.push_str(&format!(
                "<option disabled selected>{}</option>",
                crate::option::escape(placeholder)
            ));
        }
        for option in &self.options {
            out.push_str(&option.to_markup());
        }
        out
    }
}

/// Parse option markup back into a [`Fragment`]
///
/// Anything other than whitespace between option elements (an error alert,
/// for instance) makes the markup malformed.
pub fn parse_fragment(markup: &str) -> Result<Fragment, NafError> {
    let mut fragment = Fragment::default();
    let mut cursor = 0;

    for caps in OPTION_PATTERN.captures_iter(markup) {
        let Some(whole) = caps.get(0) else {
            continue;
        };
        check_gap(&markup[cursor..whole.start()])?;
        cursor = whole.end();

        let attributes = parse_attributes(&caps[1]);
        let text = unescape(caps[2].trim());

        if attributes.contains_key("disabled") && !attributes.contains_key("value") {
            if fragment.placeholder.is_none() && fragment.options.is_empty() {
                fragment.placeholder = Some(text);
            }
            continue;
        }

        let tier = match attributes.get("data-type").map(String::as_str) {
            None | Some("") => None,
            Some(data_type) => Some(
                Tier::from_data_type(data_type)
                    .ok_or_else(|| NafError::UnknownType(data_type.to_string()))?,
            ),
        };

        let nomenclature = attributes
            .get("data-nomenclature")
            .and_then(|n| Nomenclature::parse(n))
            .unwrap_or(Nomenclature::All);

        fragment.options.push(SelectOption {
            value: attributes.get("value").cloned().unwrap_or_else(|| text.clone()),
            nomenclature,
            text,
            tier,
        });
    }

    check_gap(&markup[cursor..])?;

    Ok(fragment)
}

fn check_gap(gap: &str) -> Result<(), NafError> {
    let gap = gap.trim();
    if gap.is_empty() {
        return Ok(());
    }
    let excerpt: String = gap.chars().take(40).collect();
    Err(NafError::MalformedFragment(excerpt))
}

fn parse_attributes(raw: &str) -> HashMap<String, String> {
    ATTRIBUTE_PATTERN
        .captures_iter(raw)
        .map(|caps| {
            let name = caps[1].to_ascii_lowercase();
            let value = caps.get(2).map(|v| unescape(v.as_str())).unwrap_or_default();
            (name, value)
        })
        .collect()
}
