use imgdiff::DiffStatistics;

/// The one-line result printed on success.
pub fn format_summary(stats: &DiffStatistics) -> String {
    format!(
        "Total pixels: {}, Diff  pixels: {}, Diff  percentage: {}%",
        stats.total_pixels,
        stats.diff_pixels,
        stats.diff_percentage()
    )
}

pub fn print_summary(stats: &DiffStatistics) {
    println!("{}", format_summary(stats));
}

/// Print a fatal error with its whole context chain.
pub fn print_error(err: &anyhow::Error) {
    eprintln!("ERROR: {err:#}");
}
