//! Progress display for long exhaustive searches

use crate::solver::SearchProgress;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::sync::LazyLock;

static ROUTES_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("{prefix} [{elapsed_precise}] [{bar:40.cyan/blue}] {human_pos}/{human_len} routes")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

static SPINNER_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_spinner()
        .template("{prefix} [{elapsed_precise}] {spinner} {human_pos} routes")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
});

/// Route counter for one brute-force run, drawn on stderr
///
/// Hidden bars still track position, so callers need no special casing for `--quiet`.
pub struct RouteProgress {
    bar: ProgressBar,
    visible: bool,
}

impl RouteProgress {
    /// Bar labelled with the dataset size; `visible = false` draws nothing
    pub fn new(sites: usize, visible: bool) -> Self {
        let bar = ProgressBar::hidden();
        bar.set_prefix(format!("{sites:>3} sites"));
        Self { bar, visible }
    }

    /// Routes counted so far
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    /// Declared total, if one was reported
    pub fn length(&self) -> Option<u64> {
        self.bar.length()
    }
}

impl SearchProgress for RouteProgress {
    fn begin(&mut self, total_routes: Option<u128>) {
        match total_routes.and_then(|total| u64::try_from(total).ok()) {
            Some(total) => {
                self.bar.set_length(total);
                self.bar.set_style(ROUTES_STYLE.clone());
            }
            None => self.bar.set_style(SPINNER_STYLE.clone()),
        }
        self.bar.set_position(0);
        if self.visible {
            self.bar.set_draw_target(ProgressDrawTarget::stderr());
        }
    }

    fn advance(&mut self, routes_checked: u64) {
        self.bar.set_position(routes_checked);
    }

    fn end(&mut self) {
        self.bar.finish_and_clear();
    }
}
