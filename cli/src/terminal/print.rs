use std::time::Duration;

use colored::*;
use sweepr_core::SweepSummary;
use tracing::info;

pub const TOTAL_WIDTH: usize = 64;

/// Events on this target are printed without a level symbol.
pub const PRINT_TARGET: &str = "sweepr::print";

pub fn print(msg: &str) {
    info!(target: PRINT_TARGET, "{msg}");
}

pub fn header(msg: &str) {
    let formatted: String = format!("⟦ {} ⟧", msg);
    let msg_len: usize = formatted.chars().count();

    let dash_count: usize = TOTAL_WIDTH.saturating_sub(msg_len);
    let left: usize = dash_count / 2;
    let right: usize = dash_count - left;

    let line: ColoredString = format!(
        "{}{}{}",
        "─".repeat(left),
        formatted.to_uppercase().bright_green(),
        "─".repeat(right)
    )
    .bright_black();

    print(&format!("{}", line));
}

pub fn fat_separator() {
    let sep: ColoredString = "═".repeat(TOTAL_WIDTH).bright_black();
    print(&format!("{}", sep));
}

pub fn aligned_line(key: &str, value: &str, key_width: usize) {
    let dots: String = ".".repeat((key_width + 1).saturating_sub(key.len()));
    print(&format!(
        "{} {}{}{} {}",
        ">".bright_black(),
        key.bright_cyan(),
        dots.bright_black(),
        ":".bright_black(),
        value
    ));
}

pub fn summary(summary: &SweepSummary, total_time: Duration) {
    let up: ColoredString = format!("{} up", summary.up).bold().green();
    let down: ColoredString = format!("{} down", summary.down).bold().red();
    let errors: ColoredString = format!("{} errors", summary.errors).bold().yellow();
    let total_time: ColoredString = format!("{:.2}s", total_time.as_secs_f64()).bold().yellow();

    fat_separator();
    print(&format!(
        "Sweep Complete: {up}, {down}, {errors} across {} addresses in {total_time}",
        summary.total()
    ));
}
