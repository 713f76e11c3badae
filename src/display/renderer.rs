//! Fixed-width table rendering.
//!
//! Rendering is pure: the output depends only on the table and the requested
//! window, never on the terminal. Every border character below is part of
//! the output contract.

use crate::display::result_table::ResultTable;
use crate::utils::text::pad_to_width;

const BOX_TOP_LEFT: &str = "┌";
const BOX_TOP_RIGHT: &str = "┐";
const BOX_BOTTOM_LEFT: &str = "└";
const BOX_BOTTOM_RIGHT: &str = "┘";
const BOX_HORIZONTAL_LINE: &str = "─";
const BOX_VERTICAL_LINE: &str = "│";
const BOX_VERTICAL_RIGHT_BAR: &str = "├";
const BOX_VERTICAL_LEFT_BAR: &str = "┤";

/// Render rows `[first_row, first_row + page_size)`, 1-based, clamped to the
/// table. A window starting past the last row renders headers only; a window
/// running past the last row shrinks instead of padding.
pub fn render_window(table: &ResultTable, first_row: usize, page_size: usize) -> String {
    let first_row = first_row.max(1);
    let total_rows = table.row_count();
    let visible_rows = if first_row > total_rows {
        0
    } else {
        page_size.min(total_rows - first_row + 1)
    };

    // Column widths plus one border character per divider and both edges.
    let table_width: usize =
        table.columns().iter().map(|c| c.width).sum::<usize>() + table.column_count() + 1;
    let horizontal = BOX_HORIZONTAL_LINE.repeat(table_width - 2);

    let mut out = String::new();

    out.push_str(BOX_TOP_LEFT);
    out.push_str(&horizontal);
    out.push_str(BOX_TOP_RIGHT);
    out.push('\n');

    out.push_str(BOX_VERTICAL_LINE);
    for column in table.columns() {
        out.push_str(&pad_to_width(&column.name, column.width));
        out.push_str(BOX_VERTICAL_LINE);
    }
    out.push('\n');

    out.push_str(BOX_VERTICAL_RIGHT_BAR);
    out.push_str(&horizontal);
    out.push_str(BOX_VERTICAL_LEFT_BAR);
    out.push('\n');

    for index in first_row..first_row + visible_rows {
        let row = table.row(index - 1);
        out.push_str(BOX_VERTICAL_LINE);
        for (cell, column) in row.iter().zip(table.columns()) {
            out.push_str(&pad_to_width(cell, column.width));
            out.push_str(BOX_VERTICAL_LINE);
        }
        out.push('\n');
    }

    out.push_str(BOX_BOTTOM_LEFT);
    out.push_str(&horizontal);
    out.push_str(BOX_BOTTOM_RIGHT);
    out.push('\n');

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::result_table::tests::MockCursor;

    async fn two_row_table() -> ResultTable {
        let mut cursor = MockCursor::new(
            &["id", "name"],
            vec![
                vec![Some("1".to_string()), Some("Alice".to_string())],
                vec![Some("2".to_string()), Some("Bob".to_string())],
            ],
        );
        ResultTable::ingest(&mut cursor).await.unwrap()
    }

    async fn numbered_table(rows: usize) -> ResultTable {
        let data = (1..=rows)
            .map(|i| vec![Some(format!("v{}", i))])
            .collect::<Vec<_>>();
        let mut cursor = MockCursor::new(&["value"], data);
        ResultTable::ingest(&mut cursor).await.unwrap()
    }

    #[tokio::test]
    async fn test_render_is_byte_exact() {
        let table = two_row_table().await;
        let expected = "\
┌───────────────┐
│rowNum│id│name │
├───────────────┤
│1     │1 │Alice│
│2     │2 │Bob  │
└───────────────┘
";
        assert_eq!(render_window(&table, 1, 15), expected);
    }

    #[tokio::test]
    async fn test_render_is_idempotent() {
        let table = two_row_table().await;
        assert_eq!(render_window(&table, 1, 15), render_window(&table, 1, 15));
    }

    #[tokio::test]
    async fn test_first_row_clamps_to_one() {
        let table = two_row_table().await;
        assert_eq!(render_window(&table, 0, 15), render_window(&table, 1, 15));
    }

    #[tokio::test]
    async fn test_window_shrinks_at_the_end() {
        let table = numbered_table(32).await;

        // rows 31..32 only: header + divider + 2 data lines + 2 borders
        let rendered = render_window(&table, 31, 15);
        assert_eq!(rendered.lines().count(), 3 + 2 + 1);
        assert!(rendered.contains("│v31  │"));
        assert!(rendered.contains("│v32  │"));
        assert!(!rendered.contains("│v30  │"));
    }

    #[tokio::test]
    async fn test_window_past_the_end_renders_no_rows() {
        let table = numbered_table(2).await;
        let rendered = render_window(&table, 5, 15);
        assert_eq!(rendered.lines().count(), 4);
    }

    #[tokio::test]
    async fn test_zero_row_table_renders_headers_and_borders() {
        let table = numbered_table(0).await;
        let rendered = render_window(&table, 1, 15);
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with('┌') && lines[0].ends_with('┐'));
        assert_eq!(lines[1], "│rowNum│value│");
        assert!(lines[2].starts_with('├') && lines[2].ends_with('┤'));
        assert!(lines[3].starts_with('└') && lines[3].ends_with('┘'));
    }

    #[tokio::test]
    async fn test_total_width_accounts_for_dividers() {
        let table = two_row_table().await;
        let widths: usize = table.columns().iter().map(|c| c.width).sum();
        let expected_width = widths + table.column_count() + 1;

        for line in render_window(&table, 1, 15).lines() {
            assert_eq!(line.chars().count(), expected_width);
        }
    }
}
