// End-to-end test of the logical core: table → schema → prompt → cleanup.

use sheetql_core::{
    Column, ColumnType, QueryRequest, SchemaDescription, Table, build_prompt, sanitize_table_name,
    strip_sql_fences,
};

#[test]
fn sales_table_flows_through_to_prompt() {
    let table = Table::new(
        vec![
            Column::new("region", ColumnType::Text),
            Column::new("sales", ColumnType::Real),
        ],
        vec![vec!["West".to_string(), "1200.5".to_string()]],
        42,
    );

    let table_name = sanitize_table_name("Sales Data.xlsx");
    assert_eq!(table_name, "sales_data");

    let schema = SchemaDescription::from_table(&table);
    assert_eq!(schema.render(), "region TEXT, sales REAL");

    let request = QueryRequest::new(table_name, schema, "total sales by region");
    let prompt = build_prompt(&request);
    assert!(prompt.contains("sales_data"));
    assert!(prompt.contains("region TEXT, sales REAL"));
    assert!(prompt.contains("total sales by region"));
}

#[test]
fn fenced_model_output_cleans_to_bare_sql() {
    let raw = "```sql\nSELECT region, SUM(sales) AS total\nFROM sales_data\nGROUP BY region;\n```";
    let cleaned = strip_sql_fences(raw);
    assert!(cleaned.starts_with("SELECT region"));
    assert!(cleaned.ends_with("GROUP BY region;"));
    assert!(!cleaned.contains("```"));
}

#[test]
fn zero_column_table_produces_complete_prompt() {
    let schema = SchemaDescription::from_table(&Table::default());
    assert_eq!(schema.render(), "");

    let request = QueryRequest::new("data_table", schema, "is anything here?");
    let prompt = build_prompt(&request);
    assert!(prompt.contains("`data_table`"));
    assert!(prompt.trim_end().ends_with("SQL Query:"));
}
