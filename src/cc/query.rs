//! Query string helpers for list endpoints

use std::fmt;

/// Comparison used by a Cloud Controller `q` filter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterOperator {
    Eq,
    Gt,
    Ge,
    Lt,
    Le,
    In,
}

impl FilterOperator {
    fn as_str(self) -> &'static str {
        match self {
            FilterOperator::Eq => ":",
            FilterOperator::Gt => ">",
            FilterOperator::Ge => ">=",
            FilterOperator::Lt => "<",
            FilterOperator::Le => "<=",
            FilterOperator::In => " IN ",
        }
    }
}

/// A single `q=<field><op><value>` filter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterQuery {
    field: String,
    operator: FilterOperator,
    values: Vec<String>,
}

impl FilterQuery {
    pub fn new(field: &str, operator: FilterOperator, value: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            operator,
            values: vec![value.into()],
        }
    }

    /// `field:value`
    pub fn equals(field: &str, value: impl Into<String>) -> Self {
        Self::new(field, FilterOperator::Eq, value)
    }

    /// `field IN a,b,c`
    pub fn any_of<I, S>(field: &str, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            field: field.to_string(),
            operator: FilterOperator::In,
            values: values.into_iter().map(Into::into).collect(),
        }
    }
}

impl fmt::Display for FilterQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{}",
            self.field,
            self.operator.as_str(),
            self.values.join(",")
        )
    }
}

/// Append url-encoded query parameters to an API path
pub(crate) fn with_query(path: &str, params: &[(&str, String)]) -> String {
    if params.is_empty() {
        return path.to_string();
    }
    let query = params
        .iter()
        .map(|(key, value)| format!("{}={}", key, urlencoding::encode(value)))
        .collect::<Vec<_>>()
        .join("&");
    let separator = if path.contains('?') { "&" } else { "?" };
    format!("{}{}{}", path, separator, query)
}

/// `q` parameter for an optional filter
pub(crate) fn filter_param(filter: Option<&FilterQuery>) -> Vec<(&'static str, String)> {
    filter
        .map(|f| vec![("q", f.to_string())])
        .unwrap_or_default()
}
