//! Pipeline configuration
//!
//! The defaults describe the IBGE/SIDRA table 1737 (IPCA) export: one URL,
//! one output directory and five lists pulled out of the table descriptor.
//! A YAML file may override any part; omitted fields keep their defaults.

use crate::error::{Error, Result};
use crate::extract::ExtractionPath;
use crate::http::HttpClientConfig;
use crate::output::ParquetCompression;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// SIDRA descriptor for table 1737 (IPCA), latest version
pub const DEFAULT_SOURCE_URL: &str = "https://sidra.ibge.gov.br/Ajax/Json/Tabela/1/1737?versao=-1";

/// Directory the tables are written to
pub const DEFAULT_OUTPUT_DIR: &str = "saida_dados";

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

// ============================================================================
// Output Specs
// ============================================================================

/// One output file and where its data lives in the document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputSpec {
    /// File name without extension (e.g. "notas")
    pub name: String,

    /// Keys leading from the document root to the list
    pub path: ExtractionPath,
}

impl OutputSpec {
    /// Create an output spec
    pub fn new(name: impl Into<String>, path: ExtractionPath) -> Self {
        Self {
            name: name.into(),
            path,
        }
    }

    /// File name with the given extension (e.g. "notas.parquet")
    pub fn file_name(&self, extension: &str) -> String {
        format!("{}.{extension}", self.name)
    }
}

/// The five lists exported from a SIDRA table descriptor, in write order
pub fn default_outputs() -> Vec<OutputSpec> {
    vec![
        OutputSpec::new("variaveis", ExtractionPath::single("Variaveis")),
        OutputSpec::new(
            "unidades_de_medida",
            ExtractionPath::single("UnidadesDeMedida"),
        ),
        OutputSpec::new(
            "periodos",
            ExtractionPath::single("Periodos").child("Periodos"),
        ),
        OutputSpec::new(
            "conjuntos_periodos",
            ExtractionPath::single("Periodos").child("Conjuntos"),
        ),
        OutputSpec::new("notas", ExtractionPath::single("Notas")),
    ]
}

// ============================================================================
// Source Config
// ============================================================================

/// Where the document is fetched from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceConfig {
    /// URL of the JSON document
    #[serde(default = "default_url")]
    pub url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// User agent override
    #[serde(default)]
    pub user_agent: Option<String>,
}

fn default_url() -> String {
    DEFAULT_SOURCE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            url: default_url(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: None,
        }
    }
}

impl SourceConfig {
    /// HTTP client settings for this source
    pub fn http_client_config(&self) -> HttpClientConfig {
        let mut builder = HttpClientConfig::builder()
            .timeout(Duration::from_secs(self.timeout_secs))
            .header("Accept", "application/json");
        if let Some(agent) = &self.user_agent {
            builder = builder.user_agent(agent);
        }
        builder.build()
    }
}

// ============================================================================
// Pipeline Config
// ============================================================================

/// Complete run configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Document source
    #[serde(default)]
    pub source: SourceConfig,

    /// Directory for output files (created if missing)
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Tables to extract, processed in this order
    #[serde(default = "default_outputs")]
    pub outputs: Vec<OutputSpec>,

    /// Parquet compression codec
    #[serde(default)]
    pub compression: ParquetCompression,
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT_DIR)
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            source: SourceConfig::default(),
            output_dir: default_output_dir(),
            outputs: default_outputs(),
            compression: ParquetCompression::default(),
        }
    }
}

impl PipelineConfig {
    /// Parse and validate a YAML config
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a YAML config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::FileNotFound {
                    path: path.display().to_string(),
                }
            } else {
                Error::config(format!(
                    "Failed to read config file '{}': {e}",
                    path.display()
                ))
            }
        })?;
        Self::from_yaml_str(&content)
    }

    /// Override the source URL
    #[must_use]
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.source.url = url.into();
        self
    }

    /// Override the output directory
    #[must_use]
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    /// Override the request timeout
    #[must_use]
    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.source.timeout_secs = secs;
        self
    }

    /// Replace the output list
    #[must_use]
    pub fn with_outputs(mut self, outputs: Vec<OutputSpec>) -> Self {
        self.outputs = outputs;
        self
    }

    /// Override the Parquet compression codec
    #[must_use]
    pub fn with_compression(mut self, compression: ParquetCompression) -> Self {
        self.compression = compression;
        self
    }

    /// Check the config is usable
    pub fn validate(&self) -> Result<()> {
        url::Url::parse(&self.source.url)
            .map_err(|e| Error::invalid_value("source.url", e.to_string()))?;

        if self.source.timeout_secs == 0 {
            return Err(Error::invalid_value(
                "source.timeout_secs",
                "must be greater than zero",
            ));
        }

        if self.outputs.is_empty() {
            return Err(Error::invalid_value("outputs", "at least one output is required"));
        }

        let mut seen = HashSet::new();
        for spec in &self.outputs {
            if spec.name.trim().is_empty() {
                return Err(Error::invalid_value("outputs.name", "must not be empty"));
            }
            if spec.name.contains(['/', '\\']) || spec.name == "." || spec.name == ".." {
                return Err(Error::invalid_value(
                    "outputs.name",
                    format!("'{}' is not a plain file name", spec.name),
                ));
            }
            if !seen.insert(spec.name.as_str()) {
                return Err(Error::invalid_value(
                    "outputs.name",
                    format!("duplicate output '{}'", spec.name),
                ));
            }
        }

        Ok(())
    }
}
