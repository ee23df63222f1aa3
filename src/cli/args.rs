use crate::utils::constants::DATA_ARCHIVE;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "fl-insurance-processor")]
#[command(about = "Generates summary reports from a Florida insurance policy archive")]
#[command(version)]
pub struct Cli {
    #[arg(short, long, default_value = DATA_ARCHIVE, help = "Input zip archive file")]
    pub archive: PathBuf,

    #[arg(short, long, default_value = ".", help = "Directory for the report files")]
    pub output_dir: PathBuf,

    #[arg(short, long, help = "Enable verbose logging on stderr")]
    pub verbose: bool,
}
