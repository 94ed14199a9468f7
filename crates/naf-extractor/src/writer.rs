//! Writes the fragment tree served under `/data`

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use naf_types::{Fragment, Tier};
use serde::Serialize;
use tracing::{debug, info};

use crate::error::ExtractError;
use crate::tree::NomenclatureTree;

pub const SECTORS_FILE: &str = "secteurs.htm";
pub const CODES_FILE: &str = "codes.json";

/// Files written by one run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct WriteSummary {
    pub division_files: usize,
    pub group_files: usize,
    pub class_files: usize,
    pub codes: usize,
}

pub struct FragmentWriter {
    root: PathBuf,
}

impl FragmentWriter {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Remove the output of a previous run and recreate the tier folders
    pub fn reset(&self) -> Result<(), ExtractError> {
        fs::create_dir_all(&self.root)?;

        ignore_missing(fs::remove_file(self.root.join(SECTORS_FILE)))?;
        ignore_missing(fs::remove_file(self.root.join(CODES_FILE)))?;

        for folder in tier_folders() {
            let path = self.root.join(folder);
            ignore_missing(fs::remove_dir_all(&path))?;
            fs::create_dir(&path)?;
        }

        debug!("Reset output directory {}", self.root.display());
        Ok(())
    }

    /// Write `secteurs.htm`, one file per parent code and the code index
    pub fn write(&self, tree: &NomenclatureTree) -> Result<WriteSummary, ExtractError> {
        self.reset()?;

        fs::write(
            self.root.join(SECTORS_FILE),
            tree.sector_fragment().to_markup(),
        )?;

        let mut summary = WriteSummary {
            division_files: self.write_tier(tree, Tier::Division)?,
            group_files: self.write_tier(tree, Tier::Group)?,
            class_files: self.write_tier(tree, Tier::Class)?,
            codes: 0,
        };

        let index = tree.code_index();
        summary.codes = index.len();
        fs::write(
            self.root.join(CODES_FILE),
            serde_json::to_string_pretty(&index)?,
        )?;

        info!(
            "Wrote {} division, {} group and {} class fragments to {}",
            summary.division_files,
            summary.group_files,
            summary.class_files,
            self.root.display()
        );

        Ok(summary)
    }

    fn write_tier(&self, tree: &NomenclatureTree, tier: Tier) -> Result<usize, ExtractError> {
        let Some(folder) = tier.folder() else {
            return Ok(0);
        };

        let fragments = tree.fragments(tier);
        for (parent, fragment) in &fragments {
            self.write_fragment(folder, parent, fragment)?;
        }
        Ok(fragments.len())
    }

    fn write_fragment(
        &self,
        folder: &str,
        parent: &str,
        fragment: &Fragment,
    ) -> Result<(), ExtractError> {
        let path = self.root.join(folder).join(format!("{}.htm", parent));
        fs::write(&path, fragment.to_markup())?;
        Ok(())
    }
}

fn tier_folders() -> impl Iterator<Item = &'static str> {
    Tier::ALL.into_iter().filter_map(Tier::folder)
}

fn ignore_missing(result: std::io::Result<()>) -> std::io::Result<()> {
    match result {
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
        other => other,
    }
}
