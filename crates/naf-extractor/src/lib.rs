//! NAF/NAFA fragment extraction
//!
//! Downloads the two nomenclatures, places every entry in a
//! [`NomenclatureTree`] and writes the `/data` layout read by the browser
//! selector:
//!
//! ```text
//! secteurs.htm
//! divisions/<sector>.htm
//! groupes/<division>.htm
//! classes/<group>.htm
//! codes.json
//! ```
//!
//! NAFA is ingested before NAF so that a craft refinement takes precedence
//! over the NAF class sharing its prefix.

pub mod error;
pub mod naf;
pub mod nafa;
pub mod source;
pub mod tree;
pub mod writer;

use std::path::PathBuf;
use std::time::Duration;

use serde::Serialize;
use tracing::info;

pub use error::ExtractError;
pub use naf::{ingest_naf, read_naf_rows};
pub use nafa::{ingest_nafa, read_nafa_rows};
pub use source::{Source, DEFAULT_TIMEOUT, NAFA_SOURCE_URL, NAF_SOURCE_URL};
pub use tree::{CodeEntry, NafRow, NomenclatureTree, TreeStats};
pub use writer::{FragmentWriter, WriteSummary};

/// What to read and where to write
#[derive(Debug, Clone)]
pub struct ExtractConfig {
    pub output: PathBuf,
    pub naf: Source,
    /// `None` skips the craft nomenclature
    pub nafa: Option<Source>,
    pub timeout: Duration,
}

impl ExtractConfig {
    pub fn new(output: impl Into<PathBuf>) -> Self {
        Self {
            output: output.into(),
            naf: Source::Url(NAF_SOURCE_URL.to_string()),
            nafa: Some(Source::Url(NAFA_SOURCE_URL.to_string())),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

/// Outcome of a full extraction
#[derive(Debug, Clone, Serialize)]
pub struct ExtractSummary {
    pub stats: TreeStats,
    pub files: WriteSummary,
}

/// Build the tree from raw source bytes
pub fn build_tree(naf_xls: &[u8], nafa_csv: Option<&[u8]>) -> Result<NomenclatureTree, ExtractError> {
    let mut tree = NomenclatureTree::new();

    if let Some(csv) = nafa_csv {
        let rows = read_nafa_rows(csv)?;
        ingest_nafa(&mut tree, &rows);
    }

    let rows = read_naf_rows(naf_xls)?;
    ingest_naf(&mut tree, &rows);

    Ok(tree)
}

/// Download both sources, build the tree and write the fragments
pub async fn run(config: &ExtractConfig) -> Result<ExtractSummary, ExtractError> {
    let nafa = match &config.nafa {
        Some(source) => Some(source.load(config.timeout).await?),
        None => {
            info!("Skipping NAFA nomenclature");
            None
        }
    };
    let naf = config.naf.load(config.timeout).await?;

    let tree = build_tree(&naf, nafa.as_deref())?;
    let stats = tree.stats();

    let files = FragmentWriter::new(&config.output).write(&tree)?;

    Ok(ExtractSummary { stats, files })
}
