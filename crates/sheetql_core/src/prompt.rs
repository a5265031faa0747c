//! Prompt construction for the generation service.

use crate::SchemaDescription;
use serde::{Deserialize, Serialize};

/// One generation request: table name, schema, and the user's question.
///
/// Exists only for the duration of a single dispatch call.
///
/// # Examples
///
/// ```
/// use sheetql_core::{QueryRequest, SchemaDescription};
///
/// let request = QueryRequest::new("sales_data", SchemaDescription::default(), "total sales");
/// assert_eq!(request.table_name, "sales_data");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryRequest {
    /// User-editable SQL table name
    pub table_name: String,
    /// Schema description derived from the loaded table
    pub schema: SchemaDescription,
    /// The user's free-text question
    pub question: String,
}

impl QueryRequest {
    /// Create a new query request.
    pub fn new(
        table_name: impl Into<String>,
        schema: SchemaDescription,
        question: impl Into<String>,
    ) -> Self {
        Self {
            table_name: table_name.into(),
            schema,
            question: question.into(),
        }
    }
}

/// Assemble the fixed instruction prompt for a request.
///
/// The template states the assistant's role as a SQL expert, names the
/// table, lists the schema, asks for a query compatible with common SQL
/// dialects, forbids explanatory prose, embeds the question, and ends
/// with a `SQL Query:` cue.
///
/// # Examples
///
/// ```
/// use sheetql_core::{QueryRequest, SchemaDescription, build_prompt};
///
/// let request = QueryRequest::new("orders", SchemaDescription::default(), "count all orders");
/// let prompt = build_prompt(&request);
/// assert!(prompt.contains("`orders`"));
/// assert!(prompt.contains("count all orders"));
/// assert!(prompt.trim_end().ends_with("SQL Query:"));
/// ```
pub fn build_prompt(request: &QueryRequest) -> String {
    let table_name = &request.table_name;
    let schema_description = request.schema.render();
    let user_question = &request.question;
    format!(
        "You are an expert in SQL. Your task is to write a SQL query based on a user's question and a given table schema.\n\
         The table name is `{table_name}`.\n\
         The table has the following columns and their approximate SQL types:\n\
         {schema_description}\n\
         \n\
         Based on this information, generate a SQL query that answers the user's question.\n\
         Ensure the query is standard SQL (e.g., compatible with SQLite, PostgreSQL, MySQL).\n\
         Do NOT include any explanations, just the SQL query itself.\n\
         \n\
         User Question: {user_question}\n\
         \n\
         SQL Query:\n"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Column, ColumnType, Table};

    fn sales_request(question: &str) -> QueryRequest {
        let table = Table::new(
            vec![
                Column::new("region", ColumnType::Text),
                Column::new("sales", ColumnType::Real),
            ],
            vec![],
            0,
        );
        QueryRequest::new("sales_data", SchemaDescription::from_table(&table), question)
    }

    #[test]
    fn prompt_contains_table_schema_and_question() {
        let prompt = build_prompt(&sales_request("total sales by region"));
        assert!(prompt.contains("sales_data"));
        assert!(prompt.contains("region TEXT, sales REAL"));
        assert!(prompt.contains("total sales by region"));
    }

    #[test]
    fn prompt_states_role_and_dialects() {
        let prompt = build_prompt(&sales_request("anything"));
        assert!(prompt.starts_with("You are an expert in SQL."));
        assert!(prompt.contains("SQLite, PostgreSQL, MySQL"));
        assert!(prompt.contains("Do NOT include any explanations"));
    }

    #[test]
    fn prompt_ends_with_query_cue() {
        let prompt = build_prompt(&sales_request("anything"));
        assert!(prompt.trim_end().ends_with("SQL Query:"));
    }

    #[test]
    fn empty_schema_still_yields_well_formed_prompt() {
        let request = QueryRequest::new("empty", SchemaDescription::default(), "what is here?");
        let prompt = build_prompt(&request);
        assert!(prompt.contains("`empty`"));
        assert!(prompt.contains("what is here?"));
        assert!(prompt.trim_end().ends_with("SQL Query:"));
    }
}
