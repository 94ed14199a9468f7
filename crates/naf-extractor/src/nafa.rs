//! NAFA (craft trades) reader
//!
//! The open-data export is `;`-separated with a header row. Column 1 holds the
//! code and the label together, e.g. `10.71B Boulangerie et boulangerie-pâtisserie`.

use naf_types::{NafCode, Nomenclature};
use tracing::info;

use crate::error::ExtractError;
use crate::tree::{NafRow, NomenclatureTree};

const COL_CODE: usize = 1;
const MIN_COLUMNS: usize = 3;
const MIN_CODE_CELL: usize = 8;
const CODE_CHARS: usize = 6;
const LABEL_OFFSET: usize = 7;

/// Split the code cell of every data row into code and label
pub fn read_nafa_rows(bytes: &[u8]) -> Result<Vec<NafRow>, ExtractError> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b';')
        .has_headers(false)
        .flexible(true)
        .from_reader(bytes);

    let mut rows = Vec::new();
    for (idx, record) in reader.byte_records().enumerate() {
        let record = record?;
        if idx == 0 || record.len() < MIN_COLUMNS {
            continue;
        }

        let cell = String::from_utf8_lossy(&record[COL_CODE]);
        if cell.chars().count() < MIN_CODE_CELL {
            continue;
        }

        let code: String = cell.chars().take(CODE_CHARS).collect();
        let name: String = cell.chars().skip(LABEL_OFFSET).collect();
        rows.push(NafRow::new(code, name.trim()));
    }

    Ok(rows)
}

/// Attach NAFA rows as classes under their NAF group
pub fn ingest_nafa(tree: &mut NomenclatureTree, rows: &[NafRow]) {
    let mut added = 0usize;

    for row in rows {
        let Ok(code) = NafCode::normalize(&row.code) else {
            tree.skip(&row.code, "invalid NAFA code");
            continue;
        };

        if code.len() < 5 {
            tree.skip(code.as_str(), "NAFA code too short");
            continue;
        }

        if tree.add_class(&code, &row.name, Nomenclature::Nafa) {
            added += 1;
        }
    }

    info!("Ingested {} NAFA entries", added);
}
