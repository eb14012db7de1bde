use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// The `user` object embedded in the host's init data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WebAppUser {
    pub id: i64,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub photo_url: Option<String>,
    #[serde(default)]
    pub language_code: Option<String>,
}

impl WebAppUser {
    pub fn display_name(&self) -> String {
        match &self.last_name {
            Some(last) if !last.is_empty() => format!("{} {}", self.first_name, last),
            _ => self.first_name.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum InitDataError {
    Empty,
    MissingHash,
    InvalidUser(String),
}

impl fmt::Display for InitDataError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InitDataError::Empty => write!(f, "init data is empty"),
            InitDataError::MissingHash => write!(f, "init data has no hash"),
            InitDataError::InvalidUser(e) => write!(f, "init data user is malformed: {}", e),
        }
    }
}

impl std::error::Error for InitDataError {}

/// Decoded `initData` query string as handed to the web view.
#[derive(Debug, Clone, PartialEq)]
pub struct InitData {
    fields: BTreeMap<String, String>,
    hash: String,
}

impl InitData {
    pub fn parse(raw: &str) -> Result<Self, InitDataError> {
        let raw = raw.trim().trim_start_matches('?');
        if raw.is_empty() {
            return Err(InitDataError::Empty);
        }

        let mut fields: BTreeMap<String, String> = url::form_urlencoded::parse(raw.as_bytes())
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        let hash = fields.remove("hash").ok_or(InitDataError::MissingHash)?;

        Ok(Self { fields, hash })
    }

    pub fn hash(&self) -> &str {
        &self.hash
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    /// `key=value` pairs sorted by key and joined with `\n`, excluding `hash`.
    pub fn data_check_string(&self) -> String {
        self.fields
            .iter()
            .map(|(k, v)| format!("{}={}", k, v))
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn user(&self) -> Result<Option<WebAppUser>, InitDataError> {
        self.get("user")
            .map(|json| {
                serde_json::from_str(json).map_err(|e| InitDataError::InvalidUser(e.to_string()))
            })
            .transpose()
    }

    pub fn auth_date(&self) -> Option<u64> {
        self.get("auth_date").and_then(|v| v.parse().ok())
    }
}
