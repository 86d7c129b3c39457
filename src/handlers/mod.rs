pub mod employees;
pub mod salaries;
pub mod titles;
pub mod users;

use serde::Deserialize;

/// Query parameter carrying the employee key for the read endpoints.
///
/// The raw value is kept as text so a non-numeric key falls through to the
/// handlers' not-found branch instead of failing in the extractor.
#[derive(Debug, Deserialize)]
pub struct EmpNoParam {
    emp_no: Option<String>,
}

impl EmpNoParam {
    pub fn emp_no(&self) -> Option<i32> {
        self.emp_no.as_deref().and_then(|raw| raw.trim().parse().ok())
    }
}

/// Parses a path segment the same way: miss means "no such record".
pub(crate) fn parse_key(raw: &str) -> Option<i32> {
    raw.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emp_no_param_tolerates_garbage() {
        let param = EmpNoParam {
            emp_no: Some("10001".to_string()),
        };
        assert_eq!(param.emp_no(), Some(10001));

        let param = EmpNoParam {
            emp_no: Some("abc".to_string()),
        };
        assert_eq!(param.emp_no(), None);

        let param = EmpNoParam { emp_no: None };
        assert_eq!(param.emp_no(), None);
    }

    #[test]
    fn path_keys_parse_or_miss() {
        assert_eq!(parse_key(" 42 "), Some(42));
        assert_eq!(parse_key("forty-two"), None);
    }
}
