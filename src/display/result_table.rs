//! In-memory model of one query result.
//!
//! A [`ResultTable`] is built exactly once from a forward-only cursor and is
//! read-only afterwards. Column display widths are tracked incrementally
//! while rows are ingested and floored at the header length at the end, so
//! the renderer never has to rescan the data.

use crate::db::RowCursor;
use crate::error::QueryError;
use crate::utils::text::display_width;

/// Text substituted for an absent database value.
pub const NULL_SENTINEL: &str = "NULL";

/// Header of the synthetic row-number column injected at position 0.
pub const ROW_NUMBER_HEADER: &str = "rowNum";

#[derive(Debug, Clone)]
pub struct Column {
    pub name: String,
    pub width: usize,
}

#[derive(Debug)]
pub struct ResultTable {
    columns: Vec<Column>,
    rows: Vec<Vec<String>>,
}

impl ResultTable {
    /// Consume a cursor fully and materialize the result. Row numbers are
    /// assigned in ingestion order, starting at 1.
    pub async fn ingest(cursor: &mut dyn RowCursor) -> Result<Self, QueryError> {
        let mut columns: Vec<Column> = Vec::with_capacity(cursor.columns().len() + 1);
        columns.push(Column {
            name: ROW_NUMBER_HEADER.to_string(),
            width: 0,
        });
        for name in cursor.columns() {
            columns.push(Column {
                name: name.clone(),
                width: 0,
            });
        }

        let mut rows: Vec<Vec<String>> = Vec::new();
        while let Some(cells) = cursor.next_row().await? {
            let mut row = Vec::with_capacity(columns.len());
            row.push((rows.len() + 1).to_string());

            for (index, cell) in cells.into_iter().enumerate() {
                let text = cell.unwrap_or_else(|| NULL_SENTINEL.to_string());
                let column = &mut columns[index + 1];
                let width = display_width(&text);
                if width > column.width {
                    column.width = width;
                }
                row.push(text);
            }
            rows.push(row);
        }

        // Widths may still be short of the header once the data is in.
        for column in columns.iter_mut().skip(1) {
            column.width = column.width.max(display_width(&column.name));
        }
        columns[0].width = display_width(ROW_NUMBER_HEADER).max(rows.len().to_string().len());

        Ok(Self { columns, rows })
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Cells of one row, 0-based, aligned 1:1 with [`Self::columns`].
    pub fn row(&self, index: usize) -> &[String] {
        &self.rows[index]
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::db::CursorRow;
    use async_trait::async_trait;

    /// Vec-backed cursor; optionally fails after its rows are exhausted to
    /// model a transport error mid-stream.
    pub(crate) struct MockCursor {
        columns: Vec<String>,
        rows: std::vec::IntoIter<CursorRow>,
        fail_at_end: bool,
    }

    impl MockCursor {
        pub(crate) fn new(columns: &[&str], rows: Vec<CursorRow>) -> Self {
            Self {
                columns: columns.iter().map(|c| c.to_string()).collect(),
                rows: rows.into_iter(),
                fail_at_end: false,
            }
        }

        pub(crate) fn failing(columns: &[&str], rows: Vec<CursorRow>) -> Self {
            let mut cursor = Self::new(columns, rows);
            cursor.fail_at_end = true;
            cursor
        }
    }

    #[async_trait]
    impl RowCursor for MockCursor {
        fn columns(&self) -> &[String] {
            &self.columns
        }

        async fn next_row(&mut self) -> Result<Option<CursorRow>, QueryError> {
            match self.rows.next() {
                Some(row) => Ok(Some(row)),
                None if self.fail_at_end => Err(QueryError::UnsupportedColumnType {
                    column: "broken".to_string(),
                    type_name: "transport".to_string(),
                }),
                None => Ok(None),
            }
        }
    }

    fn text(value: &str) -> Option<String> {
        Some(value.to_string())
    }

    #[tokio::test]
    async fn test_ingest_counts_rows_and_prefixes_row_numbers() {
        let mut cursor = MockCursor::new(
            &["id", "name"],
            vec![
                vec![text("1"), text("Alice")],
                vec![text("2"), text("Bob")],
                vec![text("3"), None],
            ],
        );
        let table = ResultTable::ingest(&mut cursor).await.unwrap();

        assert_eq!(table.row_count(), 3);
        assert_eq!(table.column_count(), 3);
        assert_eq!(table.columns()[0].name, ROW_NUMBER_HEADER);
        assert_eq!(table.row(0), &["1", "1", "Alice"]);
        assert_eq!(table.row(2), &["3", "3", "NULL"]);
    }

    #[tokio::test]
    async fn test_width_invariant() {
        let mut cursor = MockCursor::new(
            &["icao", "airportName"],
            vec![
                vec![text("CYWG"), text("Winnipeg International")],
                vec![text("EGLL"), None],
            ],
        );
        let table = ResultTable::ingest(&mut cursor).await.unwrap();

        for (index, column) in table.columns().iter().enumerate() {
            assert!(column.width >= display_width(&column.name));
            for row in 0..table.row_count() {
                assert!(column.width >= display_width(&table.row(row)[index]));
            }
        }
        // "airportName" column: longest cell wins over the header
        assert_eq!(table.columns()[2].width, "Winnipeg International".len());
        // "icao" column: header and cells tie at 4
        assert_eq!(table.columns()[1].width, 4);
    }

    #[tokio::test]
    async fn test_all_null_column_reports_sentinel_width() {
        let mut cursor = MockCursor::new(&["x"], vec![vec![None], vec![None]]);
        let table = ResultTable::ingest(&mut cursor).await.unwrap();

        // every cell is the 4-character sentinel, header "x" is shorter
        assert_eq!(table.columns()[1].width, NULL_SENTINEL.len());
        assert_eq!(table.row(0)[1], NULL_SENTINEL);
    }

    #[tokio::test]
    async fn test_zero_rows_is_valid() {
        let mut cursor = MockCursor::new(&["flightNum", "origin"], vec![]);
        let table = ResultTable::ingest(&mut cursor).await.unwrap();

        assert_eq!(table.row_count(), 0);
        assert_eq!(table.columns()[1].width, "flightNum".len());
        assert_eq!(table.columns()[2].width, "origin".len());
        assert_eq!(table.columns()[0].width, ROW_NUMBER_HEADER.len());
    }

    #[tokio::test]
    async fn test_row_number_width_grows_with_count() {
        let rows: Vec<CursorRow> = (0..1234).map(|i| vec![text(&i.to_string())]).collect();
        let mut cursor = MockCursor::new(&["n"], rows);
        let table = ResultTable::ingest(&mut cursor).await.unwrap();

        // max(len("rowNum"), len("1234")) = 6
        assert_eq!(table.columns()[0].width, 6);
        assert_eq!(table.row(1233)[0], "1234");
    }

    #[tokio::test]
    async fn test_mid_stream_failure_surfaces_as_error() {
        let mut cursor = MockCursor::failing(&["id"], vec![vec![text("1")]]);
        let result = ResultTable::ingest(&mut cursor).await;
        assert!(result.is_err());
    }
}
