//! Schema extraction: mapping inferred column types to SQL type labels.

use crate::{ColumnType, Table};
use serde::{Deserialize, Serialize};

/// SQL type label used in the schema description sent to the model.
///
/// # Examples
///
/// ```
/// use sheetql_core::SqlType;
///
/// assert_eq!(format!("{}", SqlType::Integer), "INTEGER");
/// assert_eq!(format!("{}", SqlType::DateTime), "DATETIME");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
pub enum SqlType {
    /// INTEGER
    #[display("INTEGER")]
    Integer,
    /// REAL
    #[display("REAL")]
    Real,
    /// TEXT
    #[display("TEXT")]
    Text,
    /// DATETIME
    #[display("DATETIME")]
    DateTime,
    /// BOOLEAN
    #[display("BOOLEAN")]
    Boolean,
}

/// Fixed mapping from inferred column types to SQL type labels.
///
/// Expressed as data so it stays trivially auditable; anything absent
/// from this table falls back to TEXT.
const TYPE_MAP: &[(ColumnType, SqlType)] = &[
    (ColumnType::Integer, SqlType::Integer),
    (ColumnType::Real, SqlType::Real),
    (ColumnType::Text, SqlType::Text),
    (ColumnType::DateTime, SqlType::DateTime),
    (ColumnType::Boolean, SqlType::Boolean),
];

/// Look up the SQL type label for an inferred column type.
///
/// Unmapped types default to [`SqlType::Text`].
pub fn sql_type_for(column_type: ColumnType) -> SqlType {
    TYPE_MAP
        .iter()
        .find(|(ct, _)| *ct == column_type)
        .map(|(_, sql)| *sql)
        .unwrap_or(SqlType::Text)
}

/// Ordered (column name, SQL type) pairs derived from a [`Table`].
///
/// Ephemeral: recomputed wholesale from the table on every generation
/// request, never mutated in place.
///
/// # Examples
///
/// ```
/// use sheetql_core::{Column, ColumnType, SchemaDescription, Table};
///
/// let table = Table::new(
///     vec![
///         Column::new("region", ColumnType::Text),
///         Column::new("sales", ColumnType::Real),
///     ],
///     vec![],
///     0,
/// );
/// let schema = SchemaDescription::from_table(&table);
/// assert_eq!(schema.render(), "region TEXT, sales REAL");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct SchemaDescription {
    entries: Vec<(String, SqlType)>,
}

impl SchemaDescription {
    /// Extract the schema description from a table, preserving column order.
    pub fn from_table(table: &Table) -> Self {
        let entries = table
            .columns
            .iter()
            .map(|col| (col.name.clone(), sql_type_for(col.column_type)))
            .collect();
        Self { entries }
    }

    /// The (name, SQL type) pairs in table order.
    pub fn entries(&self) -> &[(String, SqlType)] {
        &self.entries
    }

    /// Render as `"<name> <SQL_TYPE>"` entries joined with `", "`.
    ///
    /// An empty table yields the empty string; downstream prompt
    /// construction still produces a complete template.
    pub fn render(&self) -> String {
        self.entries
            .iter()
            .map(|(name, sql_type)| format!("{name} {sql_type}"))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl std::fmt::Display for SchemaDescription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.render())
    }
}
