use crate::domain::model::TableRow;
use regex::Regex;

/// Column order of the rendered table. Headers are looked up per key in
/// COLUMN_LABELS rather than substituted into the finished markup, so a key
/// that is a prefix of another key can never corrupt a neighboring header.
pub const COLUMNS: [&str; 8] = [
    "official",
    "name",
    "nodeDeveloperRate",
    "nodeProjectRate",
    "frameworks",
    "link",
    "remoteWork",
    "army",
];

const COLUMN_LABELS: [(&str, &str); 8] = [
    ("official", "공식 여부"),
    ("name", "회사명"),
    ("nodeDeveloperRate", "NodeJS/BE 개발자 비율"),
    ("nodeProjectRate", "NodeJS 프로젝트 비율"),
    ("frameworks", "사용 프레임워크"),
    ("link", "채용 링크"),
    ("remoteWork", "원격 근무"),
    ("army", "병역 특례"),
];

fn header_label(key: &str) -> &'static str {
    COLUMN_LABELS
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, label)| *label)
        .unwrap_or("")
}

/// Renders the full markdown table: translated header row, center-aligned
/// separator row, one row per listing.
pub fn render_table(rows: &[TableRow]) -> String {
    let headers: Vec<&str> = COLUMNS.iter().map(|key| header_label(key)).collect();
    let separator = vec!["---"; COLUMNS.len()];

    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(format!("| {} |", headers.join(" | ")));
    lines.push(format!("| {} |", separator.join(" | ")));
    for row in rows {
        lines.push(format!("| {} |", row.cells().join(" | ")));
    }

    center_align_separator(&lines.join("\n"))
}

/// Rewrites hyphen runs in the separator row (line index 1) to
/// center-alignment markers. Runs once per table; data rows are untouched
/// even when a cell value contains hyphens.
fn center_align_separator(table: &str) -> String {
    let hyphen_run = Regex::new(r"-{2,}").expect("literal pattern");

    table
        .lines()
        .enumerate()
        .map(|(index, line)| {
            if index == 1 {
                hyphen_run.replace_all(line, ":${0}:").into_owned()
            } else {
                line.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}
