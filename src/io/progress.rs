//! Multi-file progress tracking with automatic batching for large sets

use crate::io::configuration::MAX_INDIVIDUAL_PROGRESS_BARS;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::path::Path;
use std::sync::LazyLock;

/// Status line shown for one grid file
#[derive(Debug, Clone, Default)]
struct FileLine {
    name: String,
    status: String,
    done: bool,
}

impl FileLine {
    fn prefix(&self) -> String {
        if self.done {
            format!("✓ {}", self.name)
        } else {
            self.name.clone()
        }
    }
}

/// Coordinates progress display for batch runs
///
/// Small batches get one spinner line per file (the most recent
/// `MAX_INDIVIDUAL_PROGRESS_BARS` are kept visible); larger batches add a
/// single overall bar on top.
pub struct ProgressManager {
    multi_progress: MultiProgress,
    batch_bar: Option<ProgressBar>,
    file_bars: Vec<ProgressBar>,
    lines: Vec<FileLine>,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

static FILE_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_spinner()
        .template("{spinner:.cyan} {prefix} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
});

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Grids: [{bar:40.cyan/blue}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
});

impl ProgressManager {
    /// Create a new progress manager
    pub fn new() -> Self {
        Self {
            multi_progress: MultiProgress::new(),
            batch_bar: None,
            file_bars: Vec::new(),
            lines: Vec::new(),
        }
    }

    /// Initialize progress bars based on file count
    pub fn initialize(&mut self, file_count: usize) {
        // Switch to batch mode for large file sets to avoid terminal spam
        if file_count > MAX_INDIVIDUAL_PROGRESS_BARS + 1 {
            let batch_bar = ProgressBar::new(file_count as u64);
            batch_bar.set_style(BATCH_STYLE.clone());
            self.batch_bar = Some(self.multi_progress.add(batch_bar));
        }

        let bars_to_create = file_count.min(MAX_INDIVIDUAL_PROGRESS_BARS);
        for _ in 0..bars_to_create {
            let pb = ProgressBar::new_spinner();
            pb.set_style(FILE_STYLE.clone());
            self.file_bars.push(self.multi_progress.add(pb));
        }
    }

    /// Show a file as being peeled
    pub fn start_file(&mut self, index: usize, path: &Path) {
        if index >= self.lines.len() {
            self.lines.resize_with(index + 1, FileLine::default);
        }
        if let Some(line) = self.lines.get_mut(index) {
            *line = FileLine {
                name: path
                    .file_name()
                    .unwrap_or_default()
                    .to_string_lossy()
                    .into_owned(),
                status: "peeling".to_string(),
                done: false,
            };
        }
        self.redraw();
    }

    /// Mark a started file as done, showing its report line
    pub fn complete_file(&mut self, index: usize, summary: &str) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.inc(1);
        }

        if let Some(line) = self.lines.get_mut(index) {
            line.done = true;
            summary.clone_into(&mut line.status);
        }
        self.redraw();
    }

    /// Clear every bar from the terminal
    pub fn finish(&self) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.finish_with_message("All grids processed");
        }
        let _ = self.multi_progress.clear();
    }

    /// Number of files started so far
    pub fn tracked_files(&self) -> usize {
        self.lines.iter().filter(|line| !line.name.is_empty()).count()
    }

    /// Show the most recently started files on the available bars
    fn redraw(&self) {
        let started: Vec<&FileLine> = self
            .lines
            .iter()
            .filter(|line| !line.name.is_empty())
            .collect();
        let visible = started
            .get(started.len().saturating_sub(self.file_bars.len())..)
            .unwrap_or(&[]);

        for (bar, line) in self.file_bars.iter().zip(visible) {
            bar.set_prefix(line.prefix());
            bar.set_message(line.status.clone());
            bar.tick();
        }

        for bar in self.file_bars.iter().skip(visible.len()) {
            bar.set_prefix(String::new());
            bar.set_message(String::new());
        }
    }
}
