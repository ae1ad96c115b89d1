use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "cihui")]
#[command(about = "Turn screenshots of English/Chinese word lists into a study handout")]
#[command(version)]
pub struct Cli {
    /// Screenshots to read (PNG or JPEG), processed in the order given
    pub images: Vec<PathBuf>,

    /// JSON config file (defaults to ./cihui.json when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Where to write the .docx handout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Also write the records as JSON
    #[arg(long)]
    pub json: Option<PathBuf>,

    /// Do not print the record table
    #[arg(long)]
    pub no_preview: bool,

    /// Enable debug logging (recognized lines per image)
    #[arg(short, long)]
    pub verbose: bool,
}
