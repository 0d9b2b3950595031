use std::collections::HashMap;
use std::io::{self, Write};

use traj_forge::Trajectory;

use crate::util::text::{format_vec3, truncate};

const INDENT: &str = "      ";

const BOX_INNER_WIDTH: usize = 62;
const SAFE_TABLE_WIDTH: usize = BOX_INNER_WIDTH - INDENT.len();

pub fn print_trajectory_summary(trajectory: &Trajectory) {
    let stderr = io::stderr();
    let mut out = stderr.lock();

    let meta = &trajectory.metadata;
    let rows = vec![
        ("Source", meta.source.clone()),
        ("Frames", meta.num_frames.to_string()),
        ("Atoms", meta.num_atoms.to_string()),
        ("Bounds min", format_vec3(meta.bounds.min)),
        ("Bounds max", format_vec3(meta.bounds.max)),
        ("Center", format_vec3(meta.bounds.center)),
    ];

    print_kv_table(&mut out, "Trajectory Summary", &rows);
}

pub fn print_element_distribution(trajectory: &Trajectory) {
    let Some(frame) = trajectory.frames.first() else {
        return;
    };

    let mut counts: HashMap<&str, usize> = HashMap::new();
    for atom in frame.atoms() {
        *counts.entry(atom.identity.element.as_str()).or_insert(0) += 1;
    }

    let mut sorted: Vec<_> = counts
        .into_iter()
        .map(|(element, count)| (element.to_string(), count))
        .collect();
    sorted.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

    let stderr = io::stderr();
    let mut out = stderr.lock();
    print_distribution_table(&mut out, "Element Distribution", &sorted, frame.len());
}

fn print_distribution_table(
    out: &mut impl Write,
    title: &str,
    data: &[(String, usize)],
    total: usize,
) {
    const MAX_ROWS: usize = 15;

    let name_w = 10usize;
    let count_w = 8usize;
    let sep_overhead = 6;
    let dist_w = SAFE_TABLE_WIDTH.saturating_sub(name_w + count_w + sep_overhead);
    let max_bar_width = dist_w.saturating_sub(8).min(20);

    let rule = |left: &str, mid: &str, right: &str| {
        format!(
            "{INDENT}{left}{}{mid}{}{mid}{}{right}",
            "─".repeat(name_w + 2),
            "─".repeat(count_w + 2),
            "─".repeat(dist_w + 2)
        )
    };

    let _ = writeln!(out, "{INDENT}┌─ {} ─┐", truncate(title, SAFE_TABLE_WIDTH - 6));
    let _ = writeln!(out, "{}", rule("┌", "┬", "┐"));
    let _ = writeln!(
        out,
        "{INDENT}│ {:<name_w$} │ {:>count_w$} │ {:<dist_w$} │",
        "Element", "Count", "Distribution"
    );
    let _ = writeln!(out, "{}", rule("├", "┼", "┤"));

    for (name, count) in data.iter().take(MAX_ROWS) {
        let pct = if total == 0 {
            0.0
        } else {
            *count as f64 / total as f64 * 100.0
        };
        let dist_cell = format!("{}  {:>5.1}%", make_bar(pct, max_bar_width), pct);
        let _ = writeln!(
            out,
            "{INDENT}│ {:<name_w$} │ {:>count_w$} │ {:<dist_w$} │",
            truncate(name, name_w),
            count,
            dist_cell
        );
    }

    if data.len() > MAX_ROWS {
        let _ = writeln!(
            out,
            "{INDENT}│ {:<name_w$} │ {:>count_w$} │ {:<dist_w$} │",
            "...",
            "...",
            format!("({} more elements)", data.len() - MAX_ROWS)
        );
    }

    let _ = writeln!(out, "{}", rule("└", "┴", "┘"));
}

fn print_kv_table(out: &mut impl Write, title: &str, rows: &[(&str, String)]) {
    let key_w = 12usize;
    let sep_overhead = 6;
    let val_w = SAFE_TABLE_WIDTH.saturating_sub(key_w + sep_overhead);

    let rule = |left: &str, mid: &str, right: &str| {
        format!(
            "{INDENT}{left}{}{mid}{}{right}",
            "─".repeat(key_w + 2),
            "─".repeat(val_w + 2)
        )
    };

    let _ = writeln!(out, "{INDENT}┌─ {} ─┐", truncate(title, SAFE_TABLE_WIDTH - 6));
    let _ = writeln!(out, "{}", rule("┌", "┬", "┐"));
    let _ = writeln!(out, "{INDENT}│ {:<key_w$} │ {:>val_w$} │", "Metric", "Value");
    let _ = writeln!(out, "{}", rule("├", "┼", "┤"));

    for (key, val) in rows {
        let _ = writeln!(
            out,
            "{INDENT}│ {:<key_w$} │ {:>val_w$} │",
            truncate(key, key_w),
            truncate(val, val_w)
        );
    }

    let _ = writeln!(out, "{}", rule("└", "┴", "┘"));
}

fn make_bar(pct: f64, max_width: usize) -> String {
    let filled = ((pct / 100.0) * max_width as f64).round() as usize;
    let filled = filled.min(max_width);
    format!("{}{}", "█".repeat(filled), "░".repeat(max_width - filled))
}
