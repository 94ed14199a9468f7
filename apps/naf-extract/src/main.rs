//! naf-extract
//!
//! Regenerates the `/data` fragment tree consumed by the NAF/NAFA cascading
//! selector. Sources are downloaded by default; `--naf-file` and
//! `--nafa-file` work from local copies instead.
//!
//! ```text
//! naf-extract -o www/data
//! naf-extract -o www/data --naf-file int_courts_naf_rev_2.xls --skip-nafa
//! ```

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use naf_extractor::{ExtractConfig, Source, NAFA_SOURCE_URL, NAF_SOURCE_URL};
use tracing::{info, Level};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Command-line arguments for the extractor
#[derive(Parser, Debug)]
#[command(name = "naf-extract")]
#[command(about = "Generate NAF/NAFA option fragments for the cascading selector")]
struct Args {
    /// Output directory (the served `/data` folder)
    #[arg(short, long)]
    output: PathBuf,

    /// URL of the INSEE NAF rev.2 workbook
    #[arg(long, default_value = NAF_SOURCE_URL, conflicts_with = "naf_file")]
    naf_source: String,

    /// Read the NAF workbook from a local file
    #[arg(long)]
    naf_file: Option<PathBuf>,

    /// URL of the NAFA csv export
    #[arg(long, default_value = NAFA_SOURCE_URL, conflicts_with = "nafa_file")]
    nafa_source: String,

    /// Read the NAFA export from a local file
    #[arg(long)]
    nafa_file: Option<PathBuf>,

    /// Only extract the NAF nomenclature
    #[arg(long, conflicts_with_all = ["nafa_file", "nafa_source"])]
    skip_nafa: bool,

    /// Download timeout in seconds
    #[arg(long, default_value = "10")]
    timeout_secs: u64,

    /// Print the summary as JSON
    #[arg(long)]
    json: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn into_config(self) -> ExtractConfig {
        let naf = match self.naf_file {
            Some(path) => Source::File(path),
            None => Source::Url(self.naf_source),
        };

        let nafa = if self.skip_nafa {
            None
        } else {
            Some(match self.nafa_file {
                Some(path) => Source::File(path),
                None => Source::Url(self.nafa_source),
            })
        };

        ExtractConfig {
            output: self.output,
            naf,
            nafa,
            timeout: Duration::from_secs(self.timeout_secs),
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = if args.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env().add_directive(log_level.into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let json = args.json;
    let config = args.into_config();

    info!("Extracting NAF fragments into {}", config.output.display());
    info!("NAF source: {}", config.naf);
    if let Some(nafa) = &config.nafa {
        info!("NAFA source: {}", nafa);
    }

    let summary = naf_extractor::run(&config)
        .await
        .with_context(|| format!("extraction into {} failed", config.output.display()))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        let stats = summary.stats;
        println!(
            "{} sectors, {} divisions, {} groups, {} classes ({} rows skipped)",
            stats.sectors, stats.divisions, stats.groups, stats.classes, stats.skipped
        );
        println!(
            "{} division files, {} group files, {} class files, {} indexed codes",
            summary.files.division_files,
            summary.files.group_files,
            summary.files.class_files,
            summary.files.codes
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults_download_both_sources() {
        let args = Args::try_parse_from(["naf-extract", "-o", "data"]).unwrap();
        let config = args.into_config();
        assert_eq!(config.output, PathBuf::from("data"));
        assert_eq!(config.naf, Source::Url(NAF_SOURCE_URL.to_string()));
        assert_eq!(config.nafa, Some(Source::Url(NAFA_SOURCE_URL.to_string())));
        assert_eq!(config.timeout, Duration::from_secs(10));
    }

    #[test]
    fn test_local_files() {
        let args = Args::try_parse_from([
            "naf-extract",
            "--output",
            "out",
            "--naf-file",
            "naf.xls",
            "--nafa-file",
            "nafa.csv",
            "--timeout-secs",
            "3",
        ])
        .unwrap();
        let config = args.into_config();
        assert_eq!(config.naf, Source::File(PathBuf::from("naf.xls")));
        assert_eq!(config.nafa, Some(Source::File(PathBuf::from("nafa.csv"))));
        assert_eq!(config.timeout, Duration::from_secs(3));
    }

    #[test]
    fn test_skip_nafa() {
        let args = Args::try_parse_from(["naf-extract", "-o", "out", "--skip-nafa"]).unwrap();
        assert_eq!(args.into_config().nafa, None);
    }

    #[test]
    fn test_skip_nafa_conflicts_with_nafa_source() {
        let result = Args::try_parse_from([
            "naf-extract",
            "-o",
            "out",
            "--skip-nafa",
            "--nafa-source",
            "http://localhost/nafa.csv",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_output_required() {
        assert!(Args::try_parse_from(["naf-extract"]).is_err());
    }

    #[test]
    fn test_file_conflicts_with_source() {
        let result = Args::try_parse_from([
            "naf-extract",
            "-o",
            "out",
            "--naf-source",
            "http://localhost/naf.xls",
            "--naf-file",
            "naf.xls",
        ]);
        assert!(result.is_err());
    }
}
