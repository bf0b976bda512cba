//! Batch progress reporting using indicatif

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

/// Batches smaller than this finish too fast for a bar to be useful
pub const PROGRESS_MIN_ITEMS: usize = 10_000;

/// Create a progress bar for converting `len` values
///
/// The bar draws to stderr and stays hidden for small batches.
pub fn create_batch_progress(len: usize) -> ProgressBar {
    let pb = ProgressBar::with_draw_target(Some(len as u64), ProgressDrawTarget::stderr());
    if len < PROGRESS_MIN_ITEMS {
        pb.set_draw_target(ProgressDrawTarget::hidden());
    }

    // Template is a literal; a parse failure falls back to the default style
    if let Ok(style) =
        ProgressStyle::default_bar().template("{msg} [{bar:40.cyan/blue}] {pos}/{len} ({eta})")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }
    pb.set_message("Converting");
    pb
}

/// Finish the bar, flagging failures in the final message
pub fn finish_batch_progress(pb: &ProgressBar, failed: usize) {
    if failed == 0 {
        pb.finish_with_message("✅ All values converted");
    } else {
        pb.finish_with_message(format!("⚠️  {} value(s) failed", failed));
    }
}
