//! Where the nomenclatures come from: a URL or a local copy

use std::path::PathBuf;
use std::time::Duration;

use reqwest::StatusCode;
use tracing::{debug, info};

use crate::error::ExtractError;

/// INSEE NAF rev.2 nomenclature (short labels)
pub const NAF_SOURCE_URL: &str =
    "https://www.insee.fr/fr/statistiques/fichier/2120875/int_courts_naf_rev_2.xls";

/// Craft trades by NAFA code, Hauts-de-Seine open data
pub const NAFA_SOURCE_URL: &str = "https://opendata.hauts-de-seine.fr/explore/dataset/entreprises-artisanales-par-code-nafa/download/?format=csv&timezone=Europe/Berlin&lang=fr&use_labels_for_header=true&csv_separator=%3B";

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Url(String),
    File(PathBuf),
}

impl Source {
    /// Fetch the raw bytes of the source
    ///
    /// Anything but `200 OK` is an error, redirects aside.
    pub async fn load(&self, timeout: Duration) -> Result<Vec<u8>, ExtractError> {
        match self {
            Source::File(path) => {
                debug!("Reading {}", path.display());
                Ok(std::fs::read(path)?)
            }
            Source::Url(url) => {
                info!("Downloading {}", url);
                let client = reqwest::Client::builder().timeout(timeout).build()?;
                let response = client.get(url).send().await?;

                if response.status() != StatusCode::OK {
                    return Err(ExtractError::Status {
                        url: url.clone(),
                        status: response.status().to_string(),
                    });
                }

                let bytes = response.bytes().await?;
                debug!("Downloaded {} bytes from {}", bytes.len(), url);
                Ok(bytes.to_vec())
            }
        }
    }
}

impl std::fmt::Display for Source {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Source::Url(url) => f.write_str(url),
            Source::File(path) => write!(f, "{}", path.display()),
        }
    }
}
