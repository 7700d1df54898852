//! Quote-aware line tokenizer for the spreadsheet CSV export.
//!
//! This reproduces the tokenizer the dashboard has always used against this
//! sheet, so both sides agree on field boundaries: a single in-quotes flag
//! toggled on every `"`, commas split only outside quotes, and every field
//! is trimmed. Doubled-quote escaping (`""` for a literal quote) is NOT
//! handled; the two quotes just flip the flag twice and vanish from the
//! output. The sheet has never produced that pattern, so the limitation is
//! kept rather than fixed.

/// Tokenize one line into trimmed fields.
///
/// The trailing field is always emitted, even without a closing delimiter;
/// an empty line therefore yields a single empty field.
pub fn parse_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut cell = String::new();
    let mut in_quotes = false;
    for ch in line.chars() {
        if ch == '"' {
            in_quotes = !in_quotes;
        } else if ch == ',' && !in_quotes {
            fields.push(cell.trim().to_string());
            cell.clear();
        } else {
            cell.push(ch);
        }
    }
    fields.push(cell.trim().to_string());
    fields
}

/// Tokenize a full CSV body into rows of trimmed fields.
///
/// Lines split on `\n`, tolerating a preceding `\r`. Row 0 is the header;
/// stripping it is the caller's job.
pub fn tokenize_csv(text: &str) -> Vec<Vec<String>> {
    text.split('\n')
        .map(|line| parse_line(line.strip_suffix('\r').unwrap_or(line)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_fields() {
        assert_eq!(
            parse_line("1,Jane Doe,Finance"),
            vec!["1", "Jane Doe", "Finance"]
        );
    }

    #[test]
    fn test_quoted_comma_stays_one_field() {
        assert_eq!(
            parse_line("1,Jane Doe,\"Finance, APAC\",Acting Manager"),
            vec!["1", "Jane Doe", "Finance, APAC", "Acting Manager"]
        );
    }

    #[test]
    fn test_fields_are_trimmed() {
        assert_eq!(parse_line("  1 , Jane Doe ,Finance "), vec![
            "1", "Jane Doe", "Finance"
        ]);
    }

    #[test]
    fn test_trailing_field_without_delimiter() {
        assert_eq!(parse_line("a,b"), vec!["a", "b"]);
        assert_eq!(parse_line("a,"), vec!["a", ""]);
        assert_eq!(parse_line(""), vec![""]);
    }

    #[test]
    fn test_doubled_quotes_are_not_unescaped() {
        // Both quotes toggle the flag and disappear; this is the documented
        // parity behavior, not an escape mechanism.
        assert_eq!(parse_line("\"say \"\"hi\"\"\""), vec!["say hi"]);
    }

    #[test]
    fn test_crlf_and_lf_line_endings() {
        let rows = tokenize_csv("a,b\r\nc,d\ne,f");
        assert_eq!(rows, vec![vec!["a", "b"], vec!["c", "d"], vec!["e", "f"]]);
    }

    #[test]
    fn test_header_row_is_preserved() {
        let rows = tokenize_csv("No,Name\n1,Jane");
        assert_eq!(rows[0], vec!["No", "Name"]);
    }
}
