//! Catalog dataset loading
//!
//! The dataset is a JSON array of entries read once per session from a
//! local file or an http(s) URL. Malformed entries are skipped, and a
//! failed load can degrade to an empty catalog instead of aborting.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tokio::time::timeout;
use tracing::{debug, error, info, warn};
use url::Url;

use crate::error::AppError;
use crate::http::client_with_timeout;
use crate::search::Searchable;

/// One catalog entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "criador")]
    pub creator: String,
    #[serde(rename = "ano", default)]
    pub year: Year,
    #[serde(rename = "descricao")]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

impl Searchable for Record {
    fn name(&self) -> &str {
        &self.name
    }

    fn token_fields(&self) -> [&str; 3] {
        [&self.name, &self.description, &self.creator]
    }
}

/// Display-only year, stored as either a JSON number or a string
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Year {
    Number(serde_json::Number),
    Text(String),
}

impl Default for Year {
    fn default() -> Self {
        Year::Text(String::new())
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Year::Number(n) => write!(f, "{}", n),
            Year::Text(s) => f.write_str(s),
        }
    }
}

/// Where the dataset is read from
#[derive(Debug, Clone, PartialEq)]
pub enum DataSource {
    File(PathBuf),
    Remote(Url),
}

impl FromStr for DataSource {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(AppError::InvalidInput(
                "Dataset source cannot be empty".to_string(),
            ));
        }

        if s.starts_with("http://") || s.starts_with("https://") {
            let url = Url::parse(s)
                .map_err(|e| AppError::InvalidInput(format!("Invalid dataset URL {}: {}", s, e)))?;
            return Ok(DataSource::Remote(url));
        }

        Ok(DataSource::File(PathBuf::from(s)))
    }
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataSource::File(path) => write!(f, "{}", path.display()),
            DataSource::Remote(url) => write!(f, "{}", url),
        }
    }
}

/// Read-only catalog for the session
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    source: String,
    records: Vec<Record>,
}

impl Dataset {
    pub fn new(source: impl Into<String>, records: Vec<Record>) -> Self {
        Self {
            source: source.into(),
            records,
        }
    }

    /// Fetch and parse the dataset, failing on any fetch or parse error
    pub async fn load(source: &DataSource, limit: Duration) -> Result<Self, AppError> {
        info!("Loading dataset from {}", source);

        let body = match timeout(limit, read_source(source, limit)).await {
            Ok(result) => result?,
            Err(_) => {
                return Err(AppError::Timeout(format!(
                    "Loading {} exceeded {} seconds",
                    source,
                    limit.as_secs()
                )))
            }
        };

        let dataset = Self::from_json(source.to_string(), &body)?;
        info!("Loaded {} records from {}", dataset.len(), source);
        Ok(dataset)
    }

    /// Like [`Dataset::load`], but a failure yields an empty dataset
    pub async fn load_or_empty(source: &DataSource, limit: Duration) -> Self {
        match Self::load(source, limit).await {
            Ok(dataset) => dataset,
            Err(e) => {
                error!("Failed to load dataset from {}: {}", source, e);
                Self::new(source.to_string(), Vec::new())
            }
        }
    }

    /// Parse a JSON array of entries.
    ///
    /// Entries missing a required field are skipped with a warning. A link
    /// that is not an absolute URL is dropped.
    pub fn from_json(source: impl Into<String>, body: &str) -> Result<Self, AppError> {
        let value: Value = serde_json::from_str(body)?;
        let entries = match value {
            Value::Array(entries) => entries,
            other => {
                return Err(AppError::DatasetParseFailed(format!(
                    "Expected a JSON array of entries, found {}",
                    json_kind(&other)
                )))
            }
        };

        let total = entries.len();
        let mut records = Vec::with_capacity(total);
        for (idx, entry) in entries.into_iter().enumerate() {
            match serde_json::from_value::<Record>(entry) {
                Ok(record) => records.push(sanitize_link(record)),
                Err(e) => warn!("Skipping dataset entry {}: {}", idx, e),
            }
        }

        if records.len() < total {
            debug!("Kept {} of {} dataset entries", records.len(), total);
        }

        Ok(Self::new(source, records))
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

async fn read_source(source: &DataSource, limit: Duration) -> Result<String, AppError> {
    match source {
        DataSource::File(path) => tokio::fs::read_to_string(path).await.map_err(|e| {
            AppError::DatasetFetchFailed(format!("Cannot read {}: {}", path.display(), e))
        }),
        DataSource::Remote(url) => {
            let client = client_with_timeout(limit)?;
            let response = client.get(url.clone()).send().await?.error_for_status()?;
            Ok(response.text().await?)
        }
    }
}

fn sanitize_link(mut record: Record) -> Record {
    if let Some(link) = record.link.take() {
        let link = link.trim();
        if link.is_empty() {
            return record;
        }
        match Url::parse(link) {
            Ok(url) => record.link = Some(url.to_string()),
            Err(e) => warn!("Dropping invalid link {:?} of {}: {}", link, record.name, e),
        }
    }
    record
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
