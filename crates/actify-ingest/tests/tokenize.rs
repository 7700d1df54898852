//! Property tests for the CSV line tokenizer.

use actify_ingest::{parse_line, tokenize_csv};
use proptest::prelude::*;

proptest! {
    #[test]
    fn field_count_matches_unquoted_commas(line in "[a-zA-Z0-9 ,\"]{0,80}") {
        let fields = parse_line(&line);
        let mut in_quotes = false;
        let mut splits = 0usize;
        for ch in line.chars() {
            if ch == '"' {
                in_quotes = !in_quotes;
            } else if ch == ',' && !in_quotes {
                splits += 1;
            }
        }
        prop_assert_eq!(fields.len(), splits + 1);
    }

    #[test]
    fn fields_are_always_trimmed(line in "[a-zA-Z0-9 ,]{0,80}") {
        for field in parse_line(&line) {
            prop_assert_eq!(field.trim(), field.as_str());
        }
    }

    #[test]
    fn row_count_matches_newlines(text in "[a-z,\n]{0,120}") {
        let rows = tokenize_csv(&text);
        let newlines = text.chars().filter(|ch| *ch == '\n').count();
        prop_assert_eq!(rows.len(), newlines + 1);
    }
}

#[test]
fn quoted_department_with_comma_parses_as_one_field() {
    let rows = tokenize_csv(
        "No,Name,Dept,Role,Start,End\n1,Jane Doe,\"Finance, APAC\",Acting Manager,2024-01-01,2024-12-31",
    );
    assert_eq!(rows[1], vec![
        "1",
        "Jane Doe",
        "Finance, APAC",
        "Acting Manager",
        "2024-01-01",
        "2024-12-31"
    ]);
}
