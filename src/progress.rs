use indicatif::{ProgressBar, ProgressStyle};

fn fetch_style() -> ProgressStyle {
    ProgressStyle::default_spinner()
        .template("{spinner} {msg}: {pos} repos ({per_sec})")
        .expect("error with progress bar style")
}

/// Spinner with an unknown total, advanced by the item count of each page.
pub fn fetch_spinner(scope: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(fetch_style());
    pb.set_message(format!("Fetching repos for {}", scope));
    pb
}
