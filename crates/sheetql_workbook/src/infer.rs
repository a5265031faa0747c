//! Column type inference over decoded cells.

use calamine::Data;
use sheetql_core::ColumnType;
use std::collections::BTreeSet;

/// Primitive type of a single cell, if it carries one.
///
/// Empty cells carry no type and are ignored during inference.
fn cell_type(cell: &Data) -> Option<ColumnType> {
    match cell {
        Data::Int(_) => Some(ColumnType::Integer),
        Data::Float(_) => Some(ColumnType::Real),
        Data::String(_) => Some(ColumnType::Text),
        Data::Bool(_) => Some(ColumnType::Boolean),
        Data::DateTime(_) | Data::DateTimeIso(_) => Some(ColumnType::DateTime),
        Data::DurationIso(_) | Data::Error(_) => Some(ColumnType::Unknown),
        Data::Empty => None,
    }
}

/// Infer a single primitive type for a whole column of cells.
///
/// Every column gets exactly one type:
/// - all non-empty cells share one type → that type
/// - integers mixed with floats → [`ColumnType::Real`]
/// - any other mixture, or no non-empty cells → [`ColumnType::Text`]
///
/// # Examples
///
/// ```
/// use calamine::Data;
/// use sheetql_core::ColumnType;
/// use sheetql_workbook::infer_column_type;
///
/// let cells = [Data::Int(1), Data::Float(2.5), Data::Empty];
/// assert_eq!(infer_column_type(cells.iter()), ColumnType::Real);
/// ```
pub fn infer_column_type<'a>(cells: impl Iterator<Item = &'a Data>) -> ColumnType {
    let seen: BTreeSet<ColumnType> = cells.filter_map(cell_type).collect();
    match seen.len() {
        1 => seen.into_iter().next().unwrap_or(ColumnType::Text),
        2 if seen.contains(&ColumnType::Integer) && seen.contains(&ColumnType::Real) => {
            ColumnType::Real
        }
        _ => ColumnType::Text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniform_columns_keep_their_type() {
        assert_eq!(
            infer_column_type([Data::Int(1), Data::Int(2)].iter()),
            ColumnType::Integer
        );
        assert_eq!(
            infer_column_type([Data::Float(1.5), Data::Float(2.5)].iter()),
            ColumnType::Real
        );
        assert_eq!(
            infer_column_type([Data::String("a".into())].iter()),
            ColumnType::Text
        );
        assert_eq!(
            infer_column_type([Data::Bool(true), Data::Bool(false)].iter()),
            ColumnType::Boolean
        );
        assert_eq!(
            infer_column_type([Data::DateTimeIso("2024-03-01".into())].iter()),
            ColumnType::DateTime
        );
    }

    #[test]
    fn integers_mixed_with_floats_widen_to_real() {
        let cells = [Data::Int(1), Data::Float(2.5), Data::Int(3)];
        assert_eq!(infer_column_type(cells.iter()), ColumnType::Real);
    }

    #[test]
    fn mixed_types_fall_back_to_text() {
        let cells = [Data::Int(1), Data::String("one".into())];
        assert_eq!(infer_column_type(cells.iter()), ColumnType::Text);
    }

    #[test]
    fn empty_cells_are_ignored() {
        let cells = [Data::Empty, Data::Int(7), Data::Empty];
        assert_eq!(infer_column_type(cells.iter()), ColumnType::Integer);
    }

    #[test]
    fn all_empty_column_is_text() {
        let cells = [Data::Empty, Data::Empty];
        assert_eq!(infer_column_type(cells.iter()), ColumnType::Text);
    }

    #[test]
    fn error_cells_alone_map_outside_the_closed_set() {
        use calamine::CellErrorType;
        let cells = [Data::Error(CellErrorType::Div0)];
        assert_eq!(infer_column_type(cells.iter()), ColumnType::Unknown);
    }
}
