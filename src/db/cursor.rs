//! Forward-only result cursors.
//!
//! A cursor exposes its column names up front and then yields rows until
//! exhausted, so ingestion never has to interleave metadata discovery with
//! row iteration. Two implementations exist: one over the binary protocol
//! (prepared statements with bound parameters) and one over the text
//! protocol (direct statements), both yielding cells as text.

use crate::error::QueryError;
use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use futures::TryStreamExt;
use std::pin::Pin;
use tokio_postgres::types::{FromSql, Type};
use tokio_postgres::{Row, RowStream, SimpleQueryMessage, SimpleQueryRow};

/// One row of decoded cell text; `None` marks a SQL NULL.
pub type CursorRow = Vec<Option<String>>;

#[async_trait]
pub trait RowCursor: Send {
    /// Column names, in result order, available before the first row.
    fn columns(&self) -> &[String];

    /// The next row, or `None` once the result is exhausted. A transport or
    /// decoding failure mid-stream surfaces as an error.
    async fn next_row(&mut self) -> Result<Option<CursorRow>, QueryError>;
}

/// Cursor over a prepared statement's streamed, binary-format rows.
pub struct PgRowCursor {
    columns: Vec<String>,
    stream: Pin<Box<RowStream>>,
}

impl PgRowCursor {
    pub(crate) fn new(columns: Vec<String>, stream: RowStream) -> Self {
        Self {
            columns,
            stream: Box::pin(stream),
        }
    }
}

#[async_trait]
impl RowCursor for PgRowCursor {
    fn columns(&self) -> &[String] {
        &self.columns
    }

    async fn next_row(&mut self) -> Result<Option<CursorRow>, QueryError> {
        match self.stream.try_next().await? {
            Some(row) => Ok(Some(decode_row(&row)?)),
            None => Ok(None),
        }
    }
}

/// Cursor over a direct (simple-query) result, which arrives fully
/// materialized in text format.
pub struct TextRowCursor {
    columns: Vec<String>,
    rows: std::vec::IntoIter<SimpleQueryRow>,
}

impl TextRowCursor {
    pub(crate) fn new(messages: Vec<SimpleQueryMessage>) -> Self {
        let mut columns: Vec<String> = Vec::new();
        let mut rows = Vec::new();

        for message in messages {
            match message {
                SimpleQueryMessage::RowDescription(description) => {
                    columns = description.iter().map(|c| c.name().to_string()).collect();
                }
                SimpleQueryMessage::Row(row) => {
                    if columns.is_empty() {
                        columns = row.columns().iter().map(|c| c.name().to_string()).collect();
                    }
                    rows.push(row);
                }
                _ => {}
            }
        }

        Self {
            columns,
            rows: rows.into_iter(),
        }
    }
}

#[async_trait]
impl RowCursor for TextRowCursor {
    fn columns(&self) -> &[String] {
        &self.columns
    }

    async fn next_row(&mut self) -> Result<Option<CursorRow>, QueryError> {
        Ok(self.rows.next().map(|row| {
            (0..row.len())
                .map(|index| row.get(index).map(str::to_string))
                .collect()
        }))
    }
}

fn decode_row(row: &Row) -> Result<CursorRow, QueryError> {
    (0..row.columns().len())
        .map(|index| decode_cell(row, index))
        .collect()
}

fn decode_cell(row: &Row, index: usize) -> Result<Option<String>, QueryError> {
    let column = &row.columns()[index];
    let ty = column.type_();

    if *ty == Type::BOOL {
        text_of::<bool>(row, index, |v| v.to_string())
    } else if *ty == Type::INT2 {
        text_of::<i16>(row, index, |v| v.to_string())
    } else if *ty == Type::INT4 {
        text_of::<i32>(row, index, |v| v.to_string())
    } else if *ty == Type::INT8 {
        text_of::<i64>(row, index, |v| v.to_string())
    } else if *ty == Type::FLOAT4 {
        text_of::<f32>(row, index, |v| v.to_string())
    } else if *ty == Type::FLOAT8 {
        text_of::<f64>(row, index, |v| v.to_string())
    } else if *ty == Type::TEXT || *ty == Type::VARCHAR || *ty == Type::BPCHAR || *ty == Type::NAME
    {
        text_of::<String>(row, index, |v| v)
    } else if *ty == Type::DATE {
        text_of::<NaiveDate>(row, index, |v| v.format("%Y-%m-%d").to_string())
    } else if *ty == Type::TIME {
        text_of::<NaiveTime>(row, index, |v| v.format("%H:%M:%S").to_string())
    } else if *ty == Type::TIMESTAMP {
        text_of::<NaiveDateTime>(row, index, |v| v.format("%Y-%m-%d %H:%M:%S").to_string())
    } else if *ty == Type::TIMESTAMPTZ {
        text_of::<DateTime<Utc>>(row, index, |v| v.format("%Y-%m-%d %H:%M:%S%z").to_string())
    } else {
        Err(QueryError::UnsupportedColumnType {
            column: column.name().to_string(),
            type_name: ty.name().to_string(),
        })
    }
}

fn text_of<'a, T>(
    row: &'a Row,
    index: usize,
    render: impl Fn(T) -> String,
) -> Result<Option<String>, QueryError>
where
    T: FromSql<'a>,
{
    Ok(row.try_get::<_, Option<T>>(index)?.map(render))
}
