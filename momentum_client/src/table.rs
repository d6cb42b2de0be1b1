//! Rendering of scan results for the terminal.
//!
//! Results arrive from the scanner in ticker order; they are sorted by
//! percentage change, highest first, right before display.
use std::io::Write;

use momentum_common::{Result, ScanResult};

/// Message shown when no ticker passed the filter.
pub const NO_MATCHES: &str = "No stocks matched your criteria.";

const HEADERS: [&str; 6] = ["Ticker", "Price", "Change %", "Volume", "Avg Vol", "RSI"];

/// Sort by percentage change, descending. Ties keep their scan order.
pub fn sort_by_change_desc(results: &mut [ScanResult]) {
    results.sort_by(|a, b| b.change_percent.total_cmp(&a.change_percent));
}

/// Write the match count and the results table, or the no-match notice.
pub fn write_report<W: Write>(out: &mut W, results: &[ScanResult]) -> Result<()> {
    if results.is_empty() {
        writeln!(out, "{}", NO_MATCHES)?;
        return Ok(());
    }
    writeln!(out, "Found {} matching stocks!", results.len())?;
    writeln!(out)?;
    out.write_all(render_table(results).as_bytes())?;
    Ok(())
}

/// Write the results as a pretty-printed JSON array.
pub fn write_json<W: Write>(out: &mut W, results: &[ScanResult]) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, results)?;
    writeln!(out)?;
    Ok(())
}

/// Render results as an aligned plain-text table.
pub fn render_table(results: &[ScanResult]) -> String {
    let rows: Vec<[String; 6]> = results
        .iter()
        .map(|r| {
            [
                r.ticker.clone(),
                r.price.to_string(),
                r.change_percent.to_string(),
                r.volume.to_string(),
                r.average_volume.to_string(),
                format!("{:.2}", r.rsi),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(str::len);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.len());
        }
    }

    let mut table = String::new();
    push_line(&mut table, &HEADERS.map(String::from), &widths);
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    table.push_str(&rule.join("  "));
    table.push('\n');
    for row in &rows {
        push_line(&mut table, row, &widths);
    }
    table
}

// Ticker is left-aligned, numeric columns right-aligned.
fn push_line(table: &mut String, cells: &[String; 6], widths: &[usize; 6]) {
    let line: Vec<String> = cells
        .iter()
        .zip(widths)
        .enumerate()
        .map(|(i, (cell, &width))| {
            if i == 0 {
                format!("{cell:<width$}")
            } else {
                format!("{cell:>width$}")
            }
        })
        .collect();
    table.push_str(line.join("  ").trim_end());
    table.push('\n');
}
