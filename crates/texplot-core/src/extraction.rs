use regex::Regex;
use std::sync::LazyLock;

static TABULAR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\\begin\{tabular\}\s*\{.*?\}(?s:(.*?))\\end\{tabular\}")
        .expect("tabular pattern is valid")
});

/// Pull the body of every `tabular` environment out of a report, in
/// document order.
///
/// The column specification is dropped and newlines inside the body are
/// removed, so each returned table is a single line of `&`-separated
/// cells and `\\` row separators.
pub fn extract_tables(tex: &str) -> Vec<String> {
    TABULAR
        .captures_iter(tex)
        .map(|c| c[1].replace('\n', ""))
        .collect()
}

/// Split a single-line table body into rows. Empty segments (such as the
/// one left behind by a trailing `\\`) are dropped.
pub fn split_rows(table: &str) -> Vec<String> {
    table
        .split("\\\\")
        .filter(|r| !r.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Split a row into trimmed cells. Empty cells are preserved.
pub fn split_cells(row: &str) -> Vec<String> {
    row.split('&').map(|c| c.trim().to_owned()).collect()
}
