//! Plain-text table rendering for terminal front ends.

use crate::view::row::{TaskRow, DELETE_LABEL};

const HEADERS: [&str; 4] = ["ID", "Task", "Status", "Action"];

/// Renders rows as a fixed-width table with an `ID | Task | Status | Action` header.
///
/// Controls are shown in brackets; static labels are shown bare.
pub fn render_table(rows: &[TaskRow]) -> String {
    let cells: Vec<[String; 4]> = rows
        .iter()
        .map(|row| {
            let status = if row.status.offers_mark_complete() {
                format!("[{}]", row.status.label())
            } else {
                row.status.label().to_string()
            };
            [
                row.id.to_string(),
                row.text.clone(),
                status,
                format!("[{DELETE_LABEL}]"),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(|header| header.chars().count());
    for line in &cells {
        for (width, cell) in widths.iter_mut().zip(line.iter()) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    push_line(&mut out, &HEADERS.map(str::to_string), &widths);
    let separator = widths.map(|width| "-".repeat(width));
    push_line(&mut out, &separator, &widths);
    for line in &cells {
        push_line(&mut out, line, &widths);
    }
    out
}

fn push_line(out: &mut String, cells: &[String; 4], widths: &[usize; 4]) {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths.iter())
        .map(|(cell, width)| {
            let pad = width.saturating_sub(cell.chars().count());
            format!("{cell}{}", " ".repeat(pad))
        })
        .collect();
    out.push_str(padded.join(" | ").trim_end());
    out.push('\n');
}
