use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Zone {
    pub id: String,
    pub name: String,
}

/// A DNS record as the provider returns it, and as it is sent back on update.
///
/// Field order is the order of the PUT body. `comment` serializes as `null`
/// when absent because the update endpoint overwrites the whole record.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct DnsRecord {
    pub id: String,
    pub r#type: String,
    pub name: String,
    pub content: String,
    #[serde(default)]
    pub proxied: bool,
    #[serde(default)]
    pub comment: Option<String>,
}

impl DnsRecord {
    /// Copy of this record pointing at new content. Every other field, `id`
    /// included, is carried over as is.
    pub fn with_content(&self, content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            ..self.clone()
        }
    }

    pub fn is_a_record(&self) -> bool {
        self.r#type == "A"
    }
}

#[derive(Debug, Deserialize)]
pub struct ApiResponse<T> {
    pub result: Option<T>,
    #[serde(default = "default_success")]
    pub success: bool,
    #[serde(default)]
    pub errors: Vec<ApiMessage>,
}

fn default_success() -> bool {
    true
}

#[derive(Debug, Deserialize)]
pub struct ApiMessage {
    #[serde(default)]
    pub code: i64,
    #[serde(default)]
    pub message: String,
}

/// Body of a failed request. Anything that does not parse is treated as
/// carrying no structured error.
#[derive(Debug, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub errors: Vec<ApiMessage>,
}

/// Query parameters accepted by the list-records endpoint.
///
/// Only these keys ever reach the query string; empty strings and a zero
/// `page`/`per_page` are dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordFilters {
    pub comment: Option<String>,
    pub content: Option<String>,
    pub r#type: Option<String>,
    pub order: Option<String>,
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}

impl RecordFilters {
    pub const KEYS: [&'static str; 6] = ["comment", "content", "order", "page", "per_page", "type"];

    pub fn with_type(mut self, record_type: impl Into<String>) -> Self {
        self.r#type = Some(record_type.into());
        self
    }

    pub fn with_comment(mut self, comment: Option<String>) -> Self {
        self.comment = comment;
        self
    }

    /// Builds filters from loose key/value pairs. Unknown keys and empty
    /// values are silently discarded, as are page numbers that do not parse.
    pub fn from_pairs<K, V, I>(pairs: I) -> Self
    where
        K: AsRef<str>,
        V: AsRef<str>,
        I: IntoIterator<Item = (K, V)>,
    {
        let mut filters = Self::default();
        for (key, value) in pairs {
            let value = value.as_ref();
            if value.is_empty() {
                continue;
            }
            match key.as_ref() {
                "comment" => filters.comment = Some(value.to_string()),
                "content" => filters.content = Some(value.to_string()),
                "type" => filters.r#type = Some(value.to_string()),
                "order" => filters.order = Some(value.to_string()),
                "page" => filters.page = value.parse().ok(),
                "per_page" => filters.per_page = value.parse().ok(),
                _ => {}
            }
        }
        filters
    }

    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        let strings = [
            ("comment", &self.comment),
            ("content", &self.content),
            ("type", &self.r#type),
            ("order", &self.order),
        ];
        let numbers = [("page", self.page), ("per_page", self.per_page)];

        let mut query: Vec<(&'static str, String)> = strings
            .into_iter()
            .filter_map(|(key, value)| match value {
                Some(v) if !v.is_empty() => Some((key, v.clone())),
                _ => None,
            })
            .collect();
        query.extend(numbers.into_iter().filter_map(|(key, value)| match value {
            Some(n) if n > 0 => Some((key, n.to_string())),
            _ => None,
        }));
        query
    }
}
