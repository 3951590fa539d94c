//! Command-line interface for peeling one grid file or a directory of them

use crate::algorithm::{GridPeeler, PeelTrace};
use crate::io::configuration::{
    CASCADE_SUFFIX, DEFAULT_LOG_LEVEL, GIF_FRAME_DELAY_MS, INPUT_EXTENSION, RENDER_SUFFIX,
};
use crate::io::error::{Result, file_system_error, invalid_parameter};
use crate::io::image::export_peel_png;
use crate::io::parse::{format_grid, load_grid};
use crate::io::progress::ProgressManager;
use crate::io::visualization::CascadeCapture;
use crate::spatial::OccupancyGrid;
use clap::Parser;
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "rollpeel")]
#[command(
    author,
    version,
    about = "Count accessible cells and peel occupancy grids to their fixed point"
)]
/// Command-line arguments for the grid peeling tool
// CLI tools commonly need multiple boolean flags for various features and user preferences
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Input grid file or directory of `.txt` grids to process
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Only count initially accessible cells, do not peel
    #[arg(short, long)]
    pub count_only: bool,

    /// Shuffle the initial worklist with this seed before peeling
    #[arg(short, long, value_name = "SEED")]
    pub shuffle_seed: Option<u64>,

    /// Write a PNG of remaining and removed cells next to each input
    #[arg(short, long)]
    pub render: bool,

    /// Write an animated GIF of the removal cascade next to each input
    #[arg(short, long)]
    pub visualize: bool,

    /// Print each peeled grid to stdout ahead of its summary line
    #[arg(short, long)]
    pub print: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Re-render images even if they already exist
    #[arg(short, long)]
    pub no_skip: bool,

    /// Default tracing filter, overridden by `RUST_LOG`
    #[arg(long, value_name = "LEVEL", default_value = DEFAULT_LOG_LEVEL)]
    pub log_level: String,
}

impl Cli {
    /// Check if existing output files should be skipped
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Check if the initial grid must be kept for rendering
    pub const fn needs_initial_grid(&self) -> bool {
        !self.count_only && (self.render || self.visualize)
    }
}

/// Install the stderr tracing subscriber
///
/// `RUST_LOG` takes precedence over `default_level`. Calling this more than
/// once leaves the first subscriber in place.
pub fn init_logging(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Result of processing one grid file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridReport {
    /// Input file
    pub path: PathBuf,
    /// Occupied cells initially below the threshold
    pub accessible: usize,
    /// Cells removed by peeling, `None` in count-only mode
    pub removed: Option<usize>,
    /// Occupied cells left at the fixed point, `None` in count-only mode
    pub remaining: Option<usize>,
}

impl fmt::Display for GridReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: accessible={}",
            self.path.display(),
            self.accessible
        )?;
        if let Some(removed) = self.removed {
            write!(f, " removed={removed}")?;
        }
        Ok(())
    }
}

/// Orchestrates batch processing of grid files with progress tracking
pub struct FileProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl FileProcessor {
    /// Create a new file processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Process files according to CLI arguments, printing one line per grid
    ///
    /// # Errors
    ///
    /// Returns an error if target validation, grid loading or image export fails
    pub fn process(&mut self) -> Result<Vec<GridReport>> {
        let files = self.collect_files()?;

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(files.len());
        }

        let mut reports = Vec::with_capacity(files.len());
        for (index, file) in files.iter().enumerate() {
            let report = self.process_file(file, index)?;
            Self::emit(&report);
            reports.push(report);
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.finish();
        }

        Ok(reports)
    }

    // Allow print for the result line, the tool's actual output
    #[allow(clippy::print_stdout)]
    fn emit(report: &GridReport) {
        println!("{report}");
    }

    fn collect_files(&self) -> Result<Vec<PathBuf>> {
        let target = &self.cli.target;
        if target.is_file() {
            Ok(vec![target.clone()])
        } else if target.is_dir() {
            let entries =
                std::fs::read_dir(target).map_err(|e| file_system_error(target, "list", e))?;
            let mut files = Vec::new();
            for entry in entries {
                let path = entry
                    .map_err(|e| file_system_error(target, "list", e))?
                    .path();
                if path.is_file()
                    && path.extension().and_then(|s| s.to_str()) == Some(INPUT_EXTENSION)
                {
                    files.push(path);
                }
            }
            files.sort();
            Ok(files)
        } else {
            Err(invalid_parameter(
                "target",
                &target.display(),
                &"must be a grid file or directory",
            ))
        }
    }

    // Allow print for the optional final grid dump
    #[allow(clippy::print_stdout)]
    fn process_file(&mut self, input_path: &Path, index: usize) -> Result<GridReport> {
        if let Some(ref mut pm) = self.progress_manager {
            pm.start_file(index, input_path);
        }

        let grid = load_grid(input_path)?;
        let initial = self.cli.needs_initial_grid().then(|| grid.clone());

        let mut peeler = GridPeeler::new(grid);
        let accessible = peeler.count_accessible();

        let mut report = GridReport {
            path: input_path.to_path_buf(),
            accessible,
            removed: None,
            remaining: None,
        };

        if !self.cli.count_only {
            if let Some(seed) = self.cli.shuffle_seed {
                peeler.shuffle_worklist(seed);
            }

            let removed = if self.cli.visualize {
                let trace = peeler.run_traced();
                if let Some(initial) = &initial {
                    self.export_cascade(input_path, initial, &trace)?;
                }
                trace.removed()
            } else {
                peeler.run_to_fixed_point()
            };

            if self.cli.render {
                if let Some(initial) = &initial {
                    let output_path = output_path(input_path, RENDER_SUFFIX, "png");
                    if self.should_write(&output_path) {
                        export_peel_png(initial, peeler.grid(), &output_path)?;
                    }
                }
            }

            if self.cli.print {
                print!("{}", format_grid(peeler.grid()));
            }

            report.removed = Some(removed);
            report.remaining = Some(peeler.grid().occupied_count());
        }

        info!(
            file = %input_path.display(),
            accessible = report.accessible,
            removed = report.removed,
            "grid processed"
        );

        if let Some(ref mut pm) = self.progress_manager {
            pm.complete_file(index, &report.to_string());
        }

        Ok(report)
    }

    fn export_cascade(
        &self,
        input_path: &Path,
        initial: &OccupancyGrid,
        trace: &PeelTrace,
    ) -> Result<()> {
        let gif_path = output_path(input_path, CASCADE_SUFFIX, "gif");
        if !self.should_write(&gif_path) {
            return Ok(());
        }
        if trace.removed() == 0 {
            warn!(file = %input_path.display(), "no removals, skipping cascade animation");
            return Ok(());
        }
        CascadeCapture::new(initial.clone(), trace).export_gif(&gif_path, GIF_FRAME_DELAY_MS)
    }

    fn should_write(&self, output_path: &Path) -> bool {
        if !self.cli.skip_existing() || !output_path.exists() {
            return true;
        }
        info!(output = %output_path.display(), "output exists, skipping");
        false
    }
}

/// Path of a derived output file next to `input_path`
///
/// `grid.txt` with suffix `_peeled` and extension `png` becomes `grid_peeled.png`.
pub fn output_path(input_path: &Path, suffix: &str, extension: &str) -> PathBuf {
    let stem = input_path.file_stem().unwrap_or_default();
    let output_name = format!("{}{suffix}.{extension}", stem.to_string_lossy());

    if let Some(parent) = input_path.parent() {
        parent.join(output_name)
    } else {
        PathBuf::from(output_name)
    }
}
