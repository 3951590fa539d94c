//! CLI entry point for counting and peeling accessible cells in grid files

use clap::Parser;
use rollpeel::io::cli::{Cli, FileProcessor, init_logging};

fn main() -> rollpeel::Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_level);
    let mut processor = FileProcessor::new(cli);
    processor.process()?;
    Ok(())
}
