use std::io::Write;

use console::Style;
use indicatif::{ProgressBar, ProgressStyle};

/// Print a Cargo-style status line: `  Downloading zserio 2.14.0`
///
/// The `label` is right-padded to 12 characters and printed in bold green,
/// followed by the `message` in the default terminal colour.
pub fn status(label: &str, message: &str) {
    let green_bold = Style::new().green().bold();
    let _ = writeln!(
        std::io::stderr(),
        "{:>12} {message}",
        green_bold.apply_to(label),
    );
}

/// Print a warning-style status line (bold yellow label).
pub fn status_warn(label: &str, message: &str) {
    let yellow_bold = Style::new().yellow().bold();
    let _ = writeln!(
        std::io::stderr(),
        "{:>12} {message}",
        yellow_bold.apply_to(label),
    );
}

/// Create a byte-counting progress bar for a download of `len` bytes.
pub fn download_bar(len: u64) -> ProgressBar {
    let pb = ProgressBar::new(len);
    pb.set_style(
        ProgressStyle::with_template("  {bar:40.cyan/dim} {bytes}/{total_bytes} ({eta})")
            .expect("valid template")
            .progress_chars("##-"),
    );
    pb
}
