//! INSEE NAF rev.2 reader
//!
//! The XLS lists, in order, sections (`SECTION A`), divisions (`01`), groups
//! (`01.1`), classes (`01.11`) and sub-classes (`01.11Z`). The sub-classes are
//! what the selector calls classes; four-digit classes are skipped.

use std::io::Cursor;

use calamine::{Data, Range, Reader, Xls};
use naf_types::{NafCode, Nomenclature, Tier};
use tracing::{debug, info};

use crate::error::ExtractError;
use crate::tree::{NafRow, NomenclatureTree};

const COL_CODE: usize = 1;
const COL_NAME: usize = 2;

const SECTION_PREFIX: &str = "SECTION ";

/// Read the rows of the first sheet of the NAF workbook
pub fn read_naf_rows(bytes: &[u8]) -> Result<Vec<NafRow>, ExtractError> {
    let mut workbook = Xls::new(Cursor::new(bytes))
        .map_err(|e| ExtractError::Spreadsheet(e.to_string()))?;

    let sheet = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or(ExtractError::NoSheet)?;

    let range = workbook
        .worksheet_range(&sheet)
        .map_err(|e| ExtractError::Spreadsheet(e.to_string()))?;

    debug!("Reading NAF sheet '{}'", sheet);
    Ok(rows_from_range(&range))
}

/// Extract (code, label) pairs; rows without a code are dropped
pub fn rows_from_range(range: &Range<Data>) -> Vec<NafRow> {
    range
        .rows()
        .filter_map(|row| {
            let code = cell_text(row.get(COL_CODE))?;
            let name = cell_text(row.get(COL_NAME)).unwrap_or_default();
            Some(NafRow::new(code, name))
        })
        .collect()
}

fn cell_text(cell: Option<&Data>) -> Option<String> {
    let text = cell?.to_string();
    let text = text.trim();
    if text.is_empty() {
        None
    } else {
        Some(text.to_string())
    }
}

/// Place NAF rows into the tree
///
/// Divisions hang off the last section seen; groups and classes find their
/// parent from their own code.
pub fn ingest_naf(tree: &mut NomenclatureTree, rows: &[NafRow]) {
    let mut sector: Option<String> = None;
    let mut added = 0usize;

    for row in rows {
        if let Some(letter) = row.code.strip_prefix(SECTION_PREFIX) {
            let letter = letter.trim();
            tree.add_sector(letter, &row.name);
            sector = Some(letter.to_string());
            added += 1;
            continue;
        }

        let Ok(code) = NafCode::normalize(&row.code) else {
            tree.skip(&row.code, "invalid code");
            continue;
        };

        match code.tier() {
            Some(Tier::Division) => match &sector {
                Some(sector) => {
                    tree.add_division(sector, &code, &row.name);
                    added += 1;
                }
                None => tree.skip(code.as_str(), "division before any section"),
            },
            Some(Tier::Group) => {
                tree.add_group(&code, &row.name);
                added += 1;
            }
            Some(Tier::Class) if code.len() == 5 => {
                if tree.add_class(&code, &row.name, Nomenclature::Naf) {
                    added += 1;
                }
            }
            _ => tree.skip(code.as_str(), "not a selector level"),
        }
    }

    info!("Ingested {} NAF entries", added);
}
