//! In-memory nomenclature tree, filled by the NAF and NAFA readers

use std::collections::{BTreeMap, HashSet};

use naf_types::{Fragment, NafCode, Nomenclature, SelectOption, Tier};
use serde::Serialize;
use tracing::debug;

/// One raw row of a source: printed code and label
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NafRow {
    pub code: String,
    pub name: String,
}

impl NafRow {
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
        }
    }
}

/// Entry of the `codes.json` index
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CodeEntry {
    pub code: String,
    pub label: String,
    pub group: String,
    pub nomenclature: Nomenclature,
}

/// Per-tier counts of what was extracted
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TreeStats {
    pub sectors: usize,
    pub divisions: usize,
    pub groups: usize,
    pub classes: usize,
    pub skipped: usize,
}

/// Sectors plus, for every lower tier, the options keyed by parent code
#[derive(Debug, Default)]
pub struct NomenclatureTree {
    sectors: Vec<SelectOption>,
    children: BTreeMap<(Tier, String), Vec<SelectOption>>,
    /// Full class codes already attached, per parent group
    seen: HashSet<(String, String)>,
    /// Five-character prefixes of NAFA classes
    nafa_prefixes: HashSet<String>,
    classes: BTreeMap<String, CodeEntry>,
    skipped: usize,
}

impl NomenclatureTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_sector(&mut self, letter: &str, name: &str) {
        self.sectors.push(SelectOption::new(
            letter,
            Nomenclature::All,
            name,
            Tier::Sector,
        ));
    }

    pub fn add_division(&mut self, sector: &str, code: &NafCode, name: &str) {
        self.push_child(
            Tier::Division,
            sector,
            SelectOption::new(code.as_str(), Nomenclature::All, name, Tier::Division),
        );
    }

    pub fn add_group(&mut self, code: &NafCode, name: &str) {
        let Some(division) = code.parent() else {
            self.skip(code.as_str(), "group without parent");
            return;
        };
        let division = division.to_string();
        self.push_child(
            Tier::Group,
            &division,
            SelectOption::new(code.as_str(), Nomenclature::All, name, Tier::Group),
        );
    }

    /// Attach a class under its group
    ///
    /// Returns `false` when the class was dropped as a duplicate: the exact
    /// code already exists under the group, or a NAF class is shadowed by a
    /// NAFA refinement sharing its five-character prefix.
    pub fn add_class(&mut self, code: &NafCode, name: &str, nomenclature: Nomenclature) -> bool {
        let Some(group) = code.parent().map(str::to_string) else {
            self.skip(code.as_str(), "class without parent");
            return false;
        };

        if nomenclature == Nomenclature::Naf && self.nafa_prefixes.contains(code.naf_prefix()) {
            self.skip(code.as_str(), "covered by NAFA");
            return false;
        }

        if !self.seen.insert((group.clone(), code.as_str().to_string())) {
            self.skip(code.as_str(), "duplicate code");
            return false;
        }

        if nomenclature == Nomenclature::Nafa {
            self.nafa_prefixes.insert(code.naf_prefix().to_string());
        }

        self.classes.insert(
            code.as_str().to_string(),
            CodeEntry {
                code: code.as_str().to_string(),
                label: name.to_string(),
                group: group.clone(),
                nomenclature,
            },
        );
        self.push_child(
            Tier::Class,
            &group,
            SelectOption::new(code.as_str(), nomenclature, name, Tier::Class),
        );
        true
    }

    /// Count a row that could not be placed
    pub fn skip(&mut self, code: &str, reason: &str) {
        debug!("Skipping {}: {}", code, reason);
        self.skipped += 1;
    }

    /// Fragment of the root file
    pub fn sector_fragment(&self) -> Fragment {
        let mut fragment = Fragment::for_tier(Tier::Sector);
        for sector in &self.sectors {
            fragment.push(sector.clone());
        }
        fragment
    }

    /// Fragments of a lower tier, one per parent code, in parent order
    ///
    /// Class fragments are sorted by code so NAFA refinements sit next to the
    /// NAF classes they refine. Other tiers keep the source order.
    pub fn fragments(&self, tier: Tier) -> Vec<(String, Fragment)> {
        self.children
            .iter()
            .filter(|((t, _), _)| *t == tier)
            .map(|((_, parent), options)| {
                let mut fragment = Fragment::for_tier(tier);
                let mut options = options.clone();
                if tier == Tier::Class {
                    options.sort_by(|a, b| a.value.cmp(&b.value));
                }
                for option in options {
                    fragment.push(option);
                }
                (parent.clone(), fragment)
            })
            .collect()
    }

    /// Every extracted class, sorted by code
    pub fn code_index(&self) -> Vec<CodeEntry> {
        self.classes.values().cloned().collect()
    }

    pub fn stats(&self) -> TreeStats {
        let count = |tier: Tier| -> usize {
            self.children
                .iter()
                .filter(|((t, _), _)| *t == tier)
                .map(|(_, options)| options.len())
                .sum()
        };

        TreeStats {
            sectors: self.sectors.len(),
            divisions: count(Tier::Division),
            groups: count(Tier::Group),
            classes: count(Tier::Class),
            skipped: self.skipped,
        }
    }

    fn push_child(&mut self, tier: Tier, parent: &str, option: SelectOption) {
        self.children
            .entry((tier, parent.to_string()))
            .or_default()
            .push(option);
    }
}
