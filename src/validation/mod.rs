pub mod rules;

use serde_json::{Map, Value};
use sqlx::PgPool;

/// A single failed constraint. `message` is already resolved against the
/// entity's message table.
#[derive(Debug, Clone)]
pub struct ValidationError {
    pub field: String,
    pub rule: String,
    pub message: String,
}

/// Outcome of running a rule table against an input object.
///
/// Errors are ordered: rule-table entry order first, pipe order within a
/// field. Callers surface only the first message; the rest are computed but
/// discarded, matching the original API's behavior.
#[derive(Debug, Default)]
pub struct ValidationResult {
    errors: Vec<ValidationError>,
}

impl ValidationResult {
    pub fn fails(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn first_message(&self) -> &str {
        self.errors
            .first()
            .map(|e| e.message.as_str())
            .unwrap_or_default()
    }

    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }
}

/// Evaluate a pipe-delimited rule table against an input object.
///
/// Supported constraints: `required`, `min:N`, `max:N`, `in:a,b`,
/// `date_format:YYYY-MM-DD`, `email`, `unique:<table>`. The `unique`
/// constraint queries the store, which is why validation is async; store
/// errors propagate to the caller instead of being folded into the result.
pub async fn validate(
    input: &Map<String, Value>,
    rule_table: &[(&str, &str)],
    message_table: &[(&str, &str)],
    pool: &PgPool,
) -> Result<ValidationResult, sqlx::Error> {
    let mut result = ValidationResult::default();

    for (field, rules) in rule_table {
        let value = input.get(*field);
        for rule in rules.split('|') {
            let (name, arg) = match rule.split_once(':') {
                Some((name, arg)) => (name, arg),
                None => (rule, ""),
            };
            let passed = match name {
                "unique" => check_unique(value, arg, field, pool).await?,
                _ => apply_rule(name, arg, value),
            };
            if !passed {
                result.errors.push(ValidationError {
                    field: (*field).to_string(),
                    rule: name.to_string(),
                    message: resolve_message(message_table, field, name),
                });
            }
        }
    }

    Ok(result)
}

/// Evaluate one non-store constraint. Absent fields pass every rule except
/// `required`.
fn apply_rule(name: &str, arg: &str, value: Option<&Value>) -> bool {
    if name == "required" {
        return match value {
            None | Some(Value::Null) => false,
            Some(Value::String(s)) => !s.trim().is_empty(),
            Some(_) => true,
        };
    }

    let value = match value {
        None | Some(Value::Null) => return true,
        Some(v) => v,
    };

    match name {
        "min" => match (value.as_str(), arg.parse::<usize>()) {
            (Some(s), Ok(n)) => s.chars().count() >= n,
            _ => true,
        },
        "max" => match (value.as_str(), arg.parse::<usize>()) {
            (Some(s), Ok(n)) => s.chars().count() <= n,
            _ => true,
        },
        "in" => match value_as_text(value) {
            Some(text) => arg.split(',').any(|candidate| candidate == text),
            None => false,
        },
        "date_format" => match value_as_text(value) {
            Some(text) => {
                chrono::NaiveDate::parse_from_str(&text, date_format_spec(arg)).is_ok()
            }
            None => false,
        },
        "email" => match value.as_str() {
            Some(s) => looks_like_email(s),
            None => false,
        },
        unknown => {
            tracing::warn!("unknown validation rule '{}', skipping", unknown);
            true
        }
    }
}

async fn check_unique(
    value: Option<&Value>,
    table: &str,
    field: &str,
    pool: &PgPool,
) -> Result<bool, sqlx::Error> {
    let text = match value.and_then(value_as_text) {
        Some(text) => text,
        // Absent values are the `required` rule's problem.
        None => return Ok(true),
    };
    if !is_identifier(table) || !is_identifier(field) {
        tracing::warn!("refusing unique check on non-identifier {}.{}", table, field);
        return Ok(true);
    }

    let sql = format!(
        "SELECT EXISTS (SELECT 1 FROM {} WHERE {}::text = $1)",
        table, field
    );
    let exists: bool = sqlx::query_scalar(&sql).bind(&text).fetch_one(pool).await?;
    Ok(!exists)
}

fn resolve_message(message_table: &[(&str, &str)], field: &str, rule: &str) -> String {
    let key = format!("{}.{}", field, rule);
    message_table
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, msg)| (*msg).to_string())
        .unwrap_or_else(|| format!("{} validation failed on {}", rule, field))
}

fn value_as_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn date_format_spec(arg: &str) -> &'static str {
    // Only the one date layout appears in the rule tables.
    match arg {
        "YYYY-MM-DD" => "%Y-%m-%d",
        _ => "%Y-%m-%d",
    }
}

fn looks_like_email(s: &str) -> bool {
    let Some((local, domain)) = s.split_once('@') else {
        return false;
    };
    !local.is_empty() && domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
}

fn is_identifier(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use sqlx::postgres::PgPoolOptions;

    fn lazy_pool() -> PgPool {
        // Never actually connected; the tests below avoid `unique` rules.
        PgPoolOptions::new()
            .connect_lazy("postgres://localhost/unused")
            .unwrap()
    }

    fn input(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("test input must be an object"),
        }
    }

    #[test]
    fn required_rejects_missing_null_and_blank() {
        assert!(!apply_rule("required", "", None));
        assert!(!apply_rule("required", "", Some(&Value::Null)));
        assert!(!apply_rule("required", "", Some(&json!("  "))));
        assert!(apply_rule("required", "", Some(&json!("x"))));
        assert!(apply_rule("required", "", Some(&json!(0))));
    }

    #[test]
    fn min_max_measure_string_length() {
        assert!(!apply_rule("min", "5", Some(&json!("abcd"))));
        assert!(apply_rule("min", "5", Some(&json!("abcde"))));
        assert!(!apply_rule("max", "3", Some(&json!("abcd"))));
        assert!(apply_rule("max", "20", Some(&json!("abcd"))));
    }

    #[test]
    fn in_rule_matches_exact_candidates() {
        assert!(apply_rule("in", "m,f", Some(&json!("m"))));
        assert!(!apply_rule("in", "m,f", Some(&json!("x"))));
        assert!(!apply_rule("in", "m,f", Some(&json!("mf"))));
    }

    #[test]
    fn date_format_accepts_iso_dates_only() {
        assert!(apply_rule("date_format", "YYYY-MM-DD", Some(&json!("2024-02-29"))));
        assert!(!apply_rule("date_format", "YYYY-MM-DD", Some(&json!("29-02-2024"))));
        assert!(!apply_rule("date_format", "YYYY-MM-DD", Some(&json!("2024-13-01"))));
    }

    #[test]
    fn email_rule_checks_basic_shape() {
        assert!(apply_rule("email", "", Some(&json!("a@b.com"))));
        assert!(!apply_rule("email", "", Some(&json!("a.b.com"))));
        assert!(!apply_rule("email", "", Some(&json!("@b.com"))));
    }

    #[test]
    fn rules_other_than_required_pass_on_absent_fields() {
        assert!(apply_rule("min", "5", None));
        assert!(apply_rule("date_format", "YYYY-MM-DD", None));
        assert!(apply_rule("in", "m,f", None));
    }

    #[tokio::test]
    async fn errors_keep_rule_table_order() {
        let rules: &[(&str, &str)] = &[
            ("firstname", "required|min:5|max:20"),
            ("gender", "in:m,f|required"),
        ];
        let messages: &[(&str, &str)] = &[
            ("firstname.min", "firstname should be min 5 characters"),
            ("gender.in", "gender m,f format only"),
        ];
        let body = input(json!({"firstname": "Al", "gender": "x"}));
        let result = validate(&body, rules, messages, &lazy_pool()).await.unwrap();

        assert!(result.fails());
        assert_eq!(result.errors().len(), 2);
        assert_eq!(result.first_message(), "firstname should be min 5 characters");
        assert_eq!(result.errors()[1].message, "gender m,f format only");
    }

    #[tokio::test]
    async fn missing_message_falls_back_to_generic() {
        let rules: &[(&str, &str)] = &[("salary", "required")];
        let body = input(json!({}));
        let result = validate(&body, rules, &[], &lazy_pool()).await.unwrap();
        assert_eq!(result.first_message(), "required validation failed on salary");
    }
}
