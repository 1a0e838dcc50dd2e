//! Plain-text rendering of grid snapshots.

use cellgrid_core::GridView;

/// Render `view` as a fixed-width table: a header row of column labels,
/// then one line per grid row with its number in the left margin.
/// Cell text longer than `column_width` is cut off; newlines show as spaces.
pub fn render_table(view: &GridView, column_width: usize) -> String {
    let width = column_width.max(1);
    let margin = view.row_headers.iter().map(|h| h.len()).max().unwrap_or(0);

    let mut out = String::new();
    out.push_str(&" ".repeat(margin));
    for label in &view.column_headers {
        out.push_str(" | ");
        out.push_str(&fit(label, width));
    }
    out.push('\n');

    for (header, row) in view.row_headers.iter().zip(&view.cells) {
        out.push_str(&format!("{:>margin$}", header));
        for text in row {
            out.push_str(" | ");
            out.push_str(&fit(text, width));
        }
        out.push('\n');
    }
    out
}

fn fit(text: &str, width: usize) -> String {
    let mut cell: String = text
        .chars()
        .map(|c| if c == '\n' { ' ' } else { c })
        .take(width)
        .collect();
    let len = cell.chars().count();
    cell.extend(std::iter::repeat_n(' ', width - len));
    cell
}
