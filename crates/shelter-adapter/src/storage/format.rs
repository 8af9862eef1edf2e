//! The two interchangeable encodings

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::{Result, StorageError};

const XML_DECLARATION: &str = "<?xml version=\"1.0\" encoding=\"utf-8\"?>\n";

/// Encoding of persisted files and reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Json,
    Xml,
}

impl ReportFormat {
    pub const ALL: [ReportFormat; 2] = [ReportFormat::Json, ReportFormat::Xml];

    /// File extension, without the dot
    pub fn extension(&self) -> &'static str {
        match self {
            ReportFormat::Json => "json",
            ReportFormat::Xml => "xml",
        }
    }

    /// The format reports get converted to
    pub fn other(&self) -> ReportFormat {
        match self {
            ReportFormat::Json => ReportFormat::Xml,
            ReportFormat::Xml => ReportFormat::Json,
        }
    }

    pub fn encode<T: Serialize + ?Sized>(&self, data: &T) -> Result<String> {
        match self {
            ReportFormat::Json => Ok(serde_json::to_string_pretty(data)?),
            ReportFormat::Xml => {
                let mut body = String::new();
                let mut serializer = quick_xml::se::Serializer::new(&mut body);
                serializer.indent(' ', 2);
                data.serialize(serializer)?;
                Ok(format!("{XML_DECLARATION}{body}\n"))
            }
        }
    }

    pub fn decode<T: DeserializeOwned>(&self, text: &str) -> Result<T> {
        match self {
            ReportFormat::Json => Ok(serde_json::from_str(text)?),
            ReportFormat::Xml => Ok(quick_xml::de::from_str(text)?),
        }
    }
}

impl core::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ReportFormat::Json => f.write_str("JSON"),
            ReportFormat::Xml => f.write_str("XML"),
        }
    }
}

impl core::str::FromStr for ReportFormat {
    type Err = StorageError;

    fn from_str(s: &str) -> Result<Self> {
        ReportFormat::ALL
            .into_iter()
            .find(|f| f.extension().eq_ignore_ascii_case(s.trim().trim_start_matches('.')))
            .ok_or_else(|| StorageError::UnknownFormat {
                format: s.to_string(),
            })
    }
}
