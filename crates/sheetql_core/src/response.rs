//! Post-processing of generation service responses.

/// Strip a surrounding markdown code fence from returned text.
///
/// Trims whitespace, removes one leading ```` ```sql ```` token if
/// present (trimming again), then removes one trailing ```` ``` ````
/// token if present (trimming again). Syntactic cleanup only; the text
/// is not parsed as SQL.
///
/// # Examples
///
/// ```
/// use sheetql_core::strip_sql_fences;
///
/// assert_eq!(strip_sql_fences("```sql\nSELECT 1;\n```"), "SELECT 1;");
/// assert_eq!(strip_sql_fences("SELECT 1;"), "SELECT 1;");
/// ```
pub fn strip_sql_fences(text: &str) -> String {
    let mut result = text.trim();
    if let Some(rest) = result.strip_prefix("```sql") {
        result = rest.trim();
    }
    if let Some(rest) = result.strip_suffix("```") {
        result = rest.trim();
    }
    result.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_sql_fence_pair() {
        assert_eq!(strip_sql_fences("```sql\nSELECT 1;\n```"), "SELECT 1;");
    }

    #[test]
    fn strips_fences_with_surrounding_whitespace() {
        assert_eq!(
            strip_sql_fences("  ```sql\nSELECT * FROM t;\n```  \n"),
            "SELECT * FROM t;"
        );
    }

    #[test]
    fn leaves_unfenced_text_untouched() {
        assert_eq!(strip_sql_fences("SELECT count(*) FROM orders;"), "SELECT count(*) FROM orders;");
    }

    #[test]
    fn strips_trailing_fence_without_leading_one() {
        assert_eq!(strip_sql_fences("SELECT 1;\n```"), "SELECT 1;");
    }

    #[test]
    fn idempotent_on_realistic_responses() {
        for raw in [
            "```sql\nSELECT region, SUM(sales) FROM sales_data GROUP BY region;\n```",
            "SELECT 1;",
            "```sql SELECT 1; ```",
            "",
            "   \n  ",
        ] {
            let once = strip_sql_fences(raw);
            assert_eq!(strip_sql_fences(&once), once);
        }
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert_eq!(strip_sql_fences(""), "");
        assert_eq!(strip_sql_fences("```sql\n```"), "");
    }
}
