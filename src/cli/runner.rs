//! CLI runner - builds the pipeline from arguments and runs it

use crate::cli::commands::Cli;
use crate::config::PipelineConfig;
use crate::error::Result;
use crate::http::FileSource;
use crate::pipeline::{Pipeline, RunSummary};

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Resolve the configuration: defaults, then the YAML file, then flags
    pub fn build_config(&self) -> Result<PipelineConfig> {
        let mut config = match &self.cli.config {
            Some(path) => PipelineConfig::load(path)?,
            None => PipelineConfig::default(),
        };

        if let Some(url) = &self.cli.url {
            config = config.with_url(url);
        }
        if let Some(dir) = &self.cli.output {
            config = config.with_output_dir(dir);
        }
        if let Some(secs) = self.cli.timeout {
            config = config.with_timeout_secs(secs);
        }

        config.validate()?;
        Ok(config)
    }

    /// Build the pipeline described by the arguments
    pub fn build_pipeline(&self) -> Result<Pipeline> {
        let pipeline = Pipeline::from_config(self.build_config()?)?;
        Ok(match &self.cli.input {
            Some(path) => pipeline.with_source(FileSource::new(path)),
            None => pipeline,
        })
    }

    /// Run the pipeline once
    pub async fn run(&self) -> Result<RunSummary> {
        self.build_pipeline()?.run().await
    }
}
