use crate::archive;
use crate::cli::args::Cli;
use crate::config::ReportConfig;
use crate::error::Result;
use crate::processors::{distinct_county_count, rank_by_growth, total_tiv_2012};
use crate::readers::PolicyReader;
use crate::utils::constants::RANKING_LIMIT;
use crate::writers::ReportWriter;
use tracing::debug;
use tracing_subscriber::EnvFilter;

pub fn run(cli: Cli) -> Result<()> {
    if cli.verbose {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
            )
            .with_writer(std::io::stderr)
            .init();
    }

    let config = ReportConfig {
        archive_path: cli.archive,
        output_dir: cli.output_dir,
        ..ReportConfig::default()
    };

    run_pipeline(&config)
}

/// Execute the full pipeline: extract the archive entry, parse the dataset,
/// compute the three aggregates, write the three report files.
pub fn run_pipeline(config: &ReportConfig) -> Result<()> {
    debug!(archive = %config.archive_path.display(), entry = %config.entry_name, "reading archive entry");
    let contents = archive::read_entry_to_string(&config.archive_path, &config.entry_name)?;

    let dataset = PolicyReader::new().read_dataset_str(&contents)?;
    debug!(rows = dataset.len(), "dataset loaded");

    let county_count = distinct_county_count(&dataset);
    let total_2012 = total_tiv_2012(&dataset)?;
    let ranking = rank_by_growth(&dataset, RANKING_LIMIT)?;
    debug!(
        county_count,
        total_2012,
        ranked = ranking.len(),
        "aggregates computed"
    );

    let writer = ReportWriter::new(config.clone());
    writer.write_county_count(county_count)?;
    writer.write_total_value(total_2012)?;
    writer.write_growth_ranking(&ranking)?;
    debug!("report files written");

    Ok(())
}
