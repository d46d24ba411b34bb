//! Text User Interface (TUI) utilities.
//!
//! Handles formatted output for both binaries.

use crate::harness::{HarnessReport, PhaseReport};
use crate::registry::{AlgorithmRegistry, AlgorithmRunner, BenchmarkResult};
use crate::utils::bench::{as_millis_f64, format_measurement};
use terminal_size::{terminal_size, Width};

/// Get the current terminal width, constrained to a reasonable range
fn get_term_width() -> usize {
    if let Some((Width(w), _)) = terminal_size() {
        (w as usize).clamp(40, 200)
    } else {
        80
    }
}

/// Sorting priority: original (0), Rust (1), C by compiler then name (2).
fn variant_sort_key(result: &BenchmarkResult) -> (u8, String) {
    let name = result.name.to_lowercase();

    if name == "original" {
        (0, String::new())
    } else if name.starts_with("c-") {
        (2, name)
    } else {
        (1, name)
    }
}

/// Sort variants: original first, then Rust, then C
pub fn sort_variants(results: &mut [BenchmarkResult]) {
    results.sort_by_key(variant_sort_key);
}

/// Print algorithm info box
pub fn print_algo_info_box(algo: &dyn AlgorithmRunner) {
    let term_width = get_term_width();
    let max_content_width = term_width.saturating_sub(4).max(40);

    let variants_str = algo.available_variants().join(", ");
    let name_line = format!("Algorithm: {}", algo.name());
    let cat_line = format!("Category:  {}", algo.category());
    let desc_line = algo.description();
    let var_line = format!("Variants: {}", variants_str);

    let content_width = [
        name_line.chars().count(),
        cat_line.chars().count(),
        desc_line.chars().count(),
        var_line.chars().count(),
    ]
    .into_iter()
    .max()
    .unwrap_or(60)
    .min(max_content_width);

    let border = "─".repeat(content_width + 2);

    println!("┌{}┐", border);
    for line in [name_line.as_str(), cat_line.as_str(), desc_line] {
        println!(
            "│ {:<width$} │",
            truncate(line, content_width),
            width = content_width
        );
    }
    println!("├{}┤", border);
    println!(
        "│ {:<width$} │",
        truncate(&var_line, content_width),
        width = content_width
    );
    println!("└{}┘", border);
    println!();
}

/// Truncate string with ellipsis if it exceeds width (character-wise)
fn truncate(s: &str, width: usize) -> String {
    if s.chars().count() <= width {
        s.to_string()
    } else {
        let mut result: String = s.chars().take(width.saturating_sub(3)).collect();
        result.push_str("...");
        result
    }
}

/// Relative difference of a result sample against the reference sample.
fn relative_error(sample: Option<f64>, reference: Option<f64>) -> f64 {
    match (sample, reference) {
        (Some(res), Some(base)) => {
            let diff = (res - base).abs();
            if base.abs() > 1e-9 {
                diff / base.abs()
            } else {
                diff
            }
        }
        _ => 0.0,
    }
}

/// Print results table for a single size.
///
/// Speedup and relative error are computed against the first row, which
/// [`sort_variants`] makes the `original` variant.
pub fn print_results_table(results: &[BenchmarkResult], size: usize, runs: usize) {
    if results.is_empty() {
        return;
    }

    let term_width = get_term_width();
    let fixed_width = 72;
    let variant_col_width = term_width.saturating_sub(fixed_width).max(15);
    let table_width = variant_col_width + 64 + 6;

    let reference_time = results
        .first()
        .map(|r| r.avg_time.as_nanos() as f64)
        .unwrap_or(1.0);
    let reference_sample = results.first().and_then(|r| r.result_sample);

    println!("  Size: {} ({} runs)", size, runs);
    println!("  {}", "─".repeat(table_width));
    println!(
        "  {:<v_width$} {:>12} {:>12} {:>12} {:>9} {:>9} {:>10}",
        "Variant",
        "Average",
        "Min",
        "Max",
        "Speedup",
        "CV",
        "Rel. Error",
        v_width = variant_col_width
    );
    println!("  {}", "─".repeat(table_width));

    for result in results {
        let avg_ns = result.avg_time.as_nanos() as f64;
        let speedup = if avg_ns > 0.0 {
            reference_time / avg_ns
        } else {
            1.0
        };

        let display_name = if result.name.starts_with("c-") {
            match crate::utils::C_COMPILER_NAME {
                Some(c) => format!("{} ({})", result.name, c),
                None => result.name.clone(),
            }
        } else {
            result.name.clone()
        };

        println!(
            "  {:<v_width$} {:>12} {:>12} {:>12} {:>8.2}x {:>8.2}% {:>10.2e}",
            truncate(&display_name, variant_col_width),
            format_measurement(result.avg_time),
            format_measurement(result.min_time),
            format_measurement(result.max_time),
            speedup,
            result.cv() * 100.0,
            relative_error(result.result_sample, reference_sample),
            v_width = variant_col_width
        );
    }
    println!();
}

/// Print the application header
pub fn print_header(title: &str) {
    let term_width = get_term_width().min(80);
    let title = format!(" {} ", title);
    let title_width = title.chars().count();
    let padding = term_width.saturating_sub(title_width) / 2;
    let right_padding = term_width.saturating_sub(padding + title_width);

    let border = "═".repeat(term_width);

    println!("╔{}╗", border);
    println!(
        "║{}{}{}║",
        " ".repeat(padding),
        title,
        " ".repeat(right_padding)
    );
    println!("╚{}╝", border);
    println!();
}

/// Print the list of available algorithms
pub fn print_available_algorithms(registry: &AlgorithmRegistry) {
    let mut categories: Vec<&'static str> = registry.all().iter().map(|a| a.category()).collect();
    categories.dedup();

    println!("Available algorithms:");
    for category in categories {
        println!();
        println!("  [{}]", category);
        for algo in registry.by_category(category) {
            println!("    {:<20} - {}", algo.name(), algo.description());
        }
    }
}

/// One `label: value` row of the harness report.
fn report_line(label: &str, value: &str) -> String {
    format!("{:>18}: {:>18}", label, value)
}

/// Rows for one phase: baseline, optimized, acceleration, mismatches.
pub fn phase_lines(phase: &PhaseReport) -> Vec<String> {
    let mut lines = Vec::with_capacity(4);

    if let Some(baseline) = phase.baseline {
        lines.push(report_line(
            "baseline(ms)",
            &format!("{:.6}", as_millis_f64(baseline)),
        ));
    }
    lines.push(report_line(
        "optimized(ms)",
        &format!("{:.6}", as_millis_f64(phase.optimized)),
    ));
    if let Some(speedup) = phase.speedup() {
        lines.push(format!("{} x", report_line("acceleration", &format!("{:.6}", speedup))));
    }
    if let Some(mismatches) = phase.mismatches {
        lines.push(report_line("mismatches", &mismatches.to_string()));
    }

    lines
}

/// Render the full harness report as printed to stdout.
pub fn format_harness_report(report: &HarnessReport) -> String {
    let mut out = Vec::new();

    for phase in &report.phases {
        out.push(phase.phase.title().to_string());
        out.extend(phase_lines(phase));
    }

    if report.phases.len() > 1 {
        out.push("TOTALs".to_string());
        if let Some(baseline) = report.total_baseline() {
            out.push(report_line(
                "baseline(ms)",
                &format!("{:.6}", as_millis_f64(baseline)),
            ));
        }
        out.push(report_line(
            "optimized(ms)",
            &format!("{:.6}", as_millis_f64(report.total_optimized())),
        ));
        if let Some(speedup) = report.total_speedup() {
            out.push(format!("{} x", report_line("acceleration", &format!("{:.6}", speedup))));
        }
    }

    if let Some(path) = &report.result_file {
        out.push(format!("optimized ranks written to {}", path.display()));
    }
    if let Some(path) = &report.correct_file {
        out.push(format!("baseline ranks written to {}", path.display()));
    }
    if let (Some(result), Some(correct)) = (&report.result_file, &report.correct_file) {
        out.push(format!(
            "check correctness with: diff -u {} {}",
            result.display(),
            correct.display()
        ));
    }

    out.join("\n")
}

/// Print the harness report to stdout.
pub fn print_harness_report(report: &HarnessReport) {
    println!("{}", format_harness_report(report));
}
