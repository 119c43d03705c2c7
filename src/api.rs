use std::fmt::Write;
use std::path::{Path, PathBuf};
use log::{info, warn};
use crate::errors::{SplitError, SplitResult};
use crate::utils::logger::Logger;
use crate::utils::progress::ProgressTracker;
use crate::processing::{band_regions, bounding_box, clear_background, split_bands, Band};
use crate::pipeline;

/// Main interface to the iconsplit library
pub struct IconSplitter {
    logger: Logger,
    show_progress: bool,
}

impl IconSplitter {
    /// Create a new IconSplitter instance
    ///
    /// # Arguments
    /// * `log_file` - Optional path to log file, defaults to "iconsplit.log"
    ///
    /// # Returns
    /// An IconSplitter instance or an error if the log file cannot be created
    pub fn new(log_file: Option<&str>) -> SplitResult<Self> {
        let log_path = log_file.unwrap_or("iconsplit.log");
        let logger = Logger::new(log_path)?;
        Ok(IconSplitter { logger, show_progress: false })
    }

    /// Draw a progress bar over the three bands while splitting
    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    /// Split a sheet into its three icons
    ///
    /// # Arguments
    /// * `source` - Path to the composite image
    /// * `output_dir` - Directory to write the icons into, created if missing
    /// * `on_saved` - Called with each band and its file after it is written
    ///
    /// # Returns
    /// Paths of the written icons or the first error met
    pub fn split<F>(&self, source: &Path, output_dir: &Path, mut on_saved: F) -> SplitResult<Vec<PathBuf>>
    where
        F: FnMut(Band, &Path),
    {
        let total = Band::ALL.len() as u64;
        let progress = if self.show_progress {
            ProgressTracker::new(total, "Splitting bands")
        } else {
            ProgressTracker::hidden(total)
        };

        self.record(&format!("Splitting {} into {}", source.display(), output_dir.display()));

        let result = pipeline::process_image(source, output_dir, |band, path| {
            progress.set_message(band.file_name());
            progress.increment(1);
            self.record(&format!("Saved {}", path.display()));
            on_saved(band, path);
        });

        match &result {
            Ok(written) => {
                progress.finish();
                info!("Wrote {} icons", written.len());
                self.record(&format!("Split complete: {} files", written.len()));
            }
            Err(e) => {
                self.record(&format!("Split failed after {} files: {}", progress.position(), e));
            }
        }

        result
    }

    /// Append a line to the run log; a failing log file never masks the split outcome
    fn record(&self, message: &str) {
        if let Err(e) = self.logger.log(message) {
            warn!("Cannot write run log: {}", e);
        }
    }

    /// Describe how a sheet would be split without writing anything
    ///
    /// # Arguments
    /// * `source` - Path to the composite image
    ///
    /// # Returns
    /// A report listing the sheet size, band rows and each band's content box
    pub fn inspect(&self, source: &Path) -> SplitResult<String> {
        let sheet = image::open(source)?;
        let regions = band_regions(sheet.width(), sheet.height());

        let mut report = String::new();
        writeln!(report, "Sheet: {} ({}x{})", source.display(), sheet.width(), sheet.height())
            .map_err(|e| SplitError::GenericError(e.to_string()))?;

        for ((band, region), (_, band_image)) in regions.iter().zip(split_bands(&sheet)) {
            let content = match bounding_box(&clear_background(&band_image)) {
                Some(bbox) => format!("content {}", bbox),
                None => "no visible content".to_string(),
            };
            writeln!(
                report,
                "  {} band -> {}: rows {}..{}, {}",
                band,
                band.file_name(),
                region.y,
                region.end_y(),
                content
            ).map_err(|e| SplitError::GenericError(e.to_string()))?;
        }

        self.logger.log(&report)?;
        Ok(report)
    }
}
