//! Input validation for submitted post data.
//!
//! Checks every required field and collects all problems instead of stopping
//! at the first one. No I/O.

use serde_json::{Map, Value};

use crate::models::PostInput;

/// Fields a post submission must carry, in reporting order.
pub const REQUIRED_FIELDS: [&str; 3] = ["author", "title", "content"];

/// Outcome of validating one submission.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    pub errors: Vec<String>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Validate a submission against [`REQUIRED_FIELDS`].
///
/// Each field yields at most one message: missing, not a string, or blank
/// after trimming whitespace.
pub fn validate_post_data(data: &Map<String, Value>) -> ValidationReport {
    let errors = REQUIRED_FIELDS
        .iter()
        .filter_map(|field| match data.get(*field) {
            None => Some(format!("Missing required field: {}", field)),
            Some(Value::String(s)) if s.trim().is_empty() => {
                Some(format!("'{}' cannot be empty.", field))
            }
            Some(Value::String(_)) => None,
            Some(_) => Some(format!("'{}' must be a string.", field)),
        })
        .collect();

    ValidationReport { errors }
}

/// Validate a submission and extract it as a [`PostInput`].
///
/// Values are kept as submitted; trimming is only used for the emptiness check.
pub fn parse_post_input(data: &Map<String, Value>) -> Result<PostInput, Vec<String>> {
    let report = validate_post_data(data);
    if !report.is_valid() {
        return Err(report.errors);
    }

    let field = |name: &str| {
        data.get(name)
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string()
    };
    Ok(PostInput::new(field("author"), field("title"), field("content")))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {}", other),
        }
    }

    #[test]
    fn test_valid_data() {
        let data = object(json!({"author": "Ann", "title": "Hello", "content": "World"}));

        let report = validate_post_data(&data);

        assert!(report.is_valid());
        assert!(report.errors.is_empty());
    }

    #[test]
    fn test_extra_fields_are_ignored() {
        let data = object(json!({
            "author": "Ann", "title": "Hello", "content": "World", "likes": 99
        }));

        assert!(validate_post_data(&data).is_valid());
    }

    #[test]
    fn test_empty_mapping_reports_every_field() {
        let report = validate_post_data(&Map::new());

        assert!(!report.is_valid());
        assert_eq!(
            report.errors,
            vec![
                "Missing required field: author",
                "Missing required field: title",
                "Missing required field: content",
            ]
        );
    }

    #[test]
    fn test_one_missing_field() {
        let data = object(json!({"author": "Ann", "content": "World"}));

        let report = validate_post_data(&data);

        assert_eq!(report.errors, vec!["Missing required field: title"]);
    }

    #[test]
    fn test_whitespace_only_is_empty() {
        let data = object(json!({"author": "  \t", "title": "", "content": "\n"}));

        let report = validate_post_data(&data);

        assert_eq!(
            report.errors,
            vec![
                "'author' cannot be empty.",
                "'title' cannot be empty.",
                "'content' cannot be empty.",
            ]
        );
    }

    #[test]
    fn test_non_string_values() {
        let data = object(json!({"author": 5, "title": null, "content": ["x"]}));

        let report = validate_post_data(&data);

        assert_eq!(
            report.errors,
            vec![
                "'author' must be a string.",
                "'title' must be a string.",
                "'content' must be a string.",
            ]
        );
    }

    #[test]
    fn test_mixed_errors_accumulate() {
        let data = object(json!({"author": false, "title": "   "}));

        let report = validate_post_data(&data);

        assert!(!report.is_valid());
        assert_eq!(
            report.errors,
            vec![
                "'author' must be a string.",
                "'title' cannot be empty.",
                "Missing required field: content",
            ]
        );
    }

    #[test]
    fn test_parse_post_input_keeps_values_untrimmed() {
        let data = object(json!({"author": " Ann ", "title": "Hello", "content": "World\n"}));

        let input = parse_post_input(&data).unwrap();

        assert_eq!(input, PostInput::new(" Ann ", "Hello", "World\n"));
    }

    #[test]
    fn test_parse_post_input_returns_errors() {
        let data = object(json!({"author": "Ann"}));

        let errors = parse_post_input(&data).unwrap_err();

        assert_eq!(errors.len(), 2);
    }
}
