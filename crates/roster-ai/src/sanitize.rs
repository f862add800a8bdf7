//! Checks applied to the model's reply before it becomes the artifact.
//!
//! The reply is trimmed, unwrapped from a single Markdown code fence if the
//! model added one, and must still parse as a table: comment rows are
//! allowed anywhere, the first other row is a header naming at least the
//! `name` and `email` columns, and every data row has the header's width.
//! Instructions may drop or rename the remaining columns.

use crate::error::AiError;

const REQUIRED_COLUMNS: [&str; 2] = ["name", "email"];

/// Removes one surrounding ```` ``` ```` fence (with optional language tag).
fn strip_code_fence(text: &str) -> &str {
    let Some(rest) = text.strip_prefix("```") else {
        return text;
    };
    // Drop the language tag line, e.g. "csv".
    let body = match rest.find('\n') {
        Some(idx) => &rest[idx + 1..],
        None => return text,
    };
    body.trim_end()
        .strip_suffix("```")
        .unwrap_or(body)
        .trim()
}

/// Comment rows may come back unquoted, so a comma splits them into
/// several fields; only the first one decides.
fn is_comment_row(record: &csv::StringRecord) -> bool {
    record
        .get(0)
        .is_some_and(|f| f.trim_start().starts_with('#'))
}

fn has_column(record: &csv::StringRecord, column: &str) -> bool {
    record
        .iter()
        .any(|field| field.trim().eq_ignore_ascii_case(column))
}

/// Returns the cleaned reply, or `AiError::MalformedCsv` when it is not a
/// roster table.
pub fn sanitize_edited_csv(raw: &str) -> Result<String, AiError> {
    let text = strip_code_fence(raw.trim());
    if text.is_empty() {
        return Err(AiError::EmptyResponse);
    }

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(text.as_bytes());

    let mut header_width = None;
    for (idx, record) in reader.records().enumerate() {
        let record = record.map_err(|e| AiError::MalformedCsv(e.to_string()))?;
        if is_comment_row(&record) {
            continue;
        }
        match header_width {
            None => {
                if !REQUIRED_COLUMNS.iter().all(|c| has_column(&record, c)) {
                    return Err(AiError::MalformedCsv(format!(
                        "expected a header with columns '{}'",
                        REQUIRED_COLUMNS.join(",")
                    )));
                }
                header_width = Some(record.len());
            }
            Some(width) if record.len() != width => {
                return Err(AiError::MalformedCsv(format!(
                    "row {} has {} fields, header has {}",
                    idx + 1,
                    record.len(),
                    width
                )));
            }
            Some(_) => {}
        }
    }

    if header_width.is_none() {
        return Err(AiError::MalformedCsv("no header row".to_string()));
    }

    Ok(text.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const EDITED: &str = "# don't add user 2\r\nname,email,password,role,department\r\n1,1@x.com,Ab1!Ab1!Ab,student,BSC\r\n3,3@x.com,Cd2@Cd2@Cd,student,BSC";

    #[test]
    fn test_plain_reply_passes_through() {
        assert_eq!(sanitize_edited_csv(EDITED).unwrap(), EDITED);
    }

    #[test]
    fn test_reply_is_trimmed() {
        let padded = format!("\n\n  {}  \n", EDITED);
        assert_eq!(sanitize_edited_csv(&padded).unwrap(), EDITED);
    }

    #[test]
    fn test_fenced_reply_is_unwrapped() {
        let fenced = format!("```csv\n{}\n```", EDITED);
        assert_eq!(sanitize_edited_csv(&fenced).unwrap(), EDITED);

        let bare_fence = format!("```\n{}\n```\n", EDITED);
        assert_eq!(sanitize_edited_csv(&bare_fence).unwrap(), EDITED);
    }

    #[test]
    fn test_quoted_comment_row_is_allowed() {
        let text = "\"# drop 2, keep 3\"\nname,email,password,role,department\n3,3@x.com,pw,student,BSC";
        assert!(sanitize_edited_csv(text).is_ok());
    }

    #[test]
    fn test_unquoted_comment_with_comma_is_allowed() {
        let text = "# don't add users 5, 6\nname,email,password,role,department\n4,4@x.com,Ab1!Ab1!Ab,student,BSC";
        assert_eq!(sanitize_edited_csv(text).unwrap(), text);
    }

    #[test]
    fn test_dropped_column_is_allowed() {
        let text = "name,email,role,department\n1,1@x.com,student,BSC";
        assert_eq!(sanitize_edited_csv(text).unwrap(), text);
    }

    #[test]
    fn test_renamed_column_is_allowed() {
        let text = "Name,Email,Password,Role,Dept\n1,1@x.com,Ab1!Ab1!Ab,student,BSC";
        assert!(sanitize_edited_csv(text).is_ok());
    }

    #[test]
    fn test_header_without_email_is_rejected() {
        let err = sanitize_edited_csv("name,password\n1,Ab1!Ab1!Ab").unwrap_err();
        assert!(matches!(err, AiError::MalformedCsv(_)));
    }

    #[test]
    fn test_ragged_row_is_rejected() {
        let text = "name,email,password,role,department\n1,1@x.com,Ab1!Ab1!Ab,student\n";
        let err = sanitize_edited_csv(text).unwrap_err();
        assert!(matches!(err, AiError::MalformedCsv(_)));
    }

    #[test]
    fn test_prose_reply_is_rejected() {
        let err = sanitize_edited_csv("Sure! I removed user 2 for you.").unwrap_err();
        assert!(matches!(err, AiError::MalformedCsv(_)));
    }

    #[test]
    fn test_comment_only_reply_is_rejected() {
        let err = sanitize_edited_csv("# nothing left").unwrap_err();
        assert!(matches!(err, AiError::MalformedCsv(_)));
    }

    #[test]
    fn test_blank_reply_is_empty() {
        assert!(matches!(
            sanitize_edited_csv("  \n "),
            Err(AiError::EmptyResponse)
        ));
        assert!(matches!(
            sanitize_edited_csv("```csv\n```"),
            Err(AiError::EmptyResponse)
        ));
    }
}
