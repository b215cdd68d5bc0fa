//! Progress display over the hole pixels of a fill pass

use crate::io::configuration::{PROGRESS_BAR_WIDTH, PROGRESS_UPDATE_INTERVAL};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use std::sync::LazyLock;

static FILL_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "{{prefix}} [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} pixels ({{elapsed}})"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Progress bar advanced by the fill observer
///
/// Redraws are throttled to every [`PROGRESS_UPDATE_INTERVAL`] pixels since a
/// sampled pass can process millions of pixels per second.
pub struct FillProgress {
    bar: ProgressBar,
}

impl FillProgress {
    /// Create a visible progress bar labelled with the image name
    pub fn new(path: &Path) -> Self {
        let bar = ProgressBar::new(0);
        bar.set_style(FILL_STYLE.clone());
        bar.set_prefix(
            path.file_name()
                .unwrap_or_default()
                .to_string_lossy()
                .to_string(),
        );
        Self { bar }
    }

    /// Create a progress tracker that draws nothing
    pub fn hidden() -> Self {
        Self {
            bar: ProgressBar::hidden(),
        }
    }

    /// Record `processed` of `total` hole pixels
    pub fn update(&self, processed: usize, total: usize) {
        if processed % PROGRESS_UPDATE_INTERVAL == 0 || processed == total {
            self.bar.set_length(total as u64);
            self.bar.set_position(processed as u64);
        }
    }

    /// Pixels recorded so far
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    /// Clear the bar from the terminal
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}
