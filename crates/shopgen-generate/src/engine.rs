use std::path::{Path, PathBuf};
use std::time::Instant;

use shopgen_core::Dataset;
use tracing::{info, warn};

use crate::errors::GenerationError;
use crate::generators::generate_dataset;
use crate::model::{GenerateOptions, GenerationReport};
use crate::output::write_dataset;

/// File name of the JSON summary written next to the CSV files.
pub const REPORT_FILE: &str = "generation_report.json";

/// Result of a generation run.
#[derive(Debug, Clone)]
pub struct GenerationResult {
    pub out_dir: PathBuf,
    pub dataset: Dataset,
    pub report: GenerationReport,
}

/// Entry point for generating and writing a dataset.
#[derive(Debug, Clone)]
pub struct GenerationEngine {
    options: GenerateOptions,
}

impl GenerationEngine {
    pub fn new(options: GenerateOptions) -> Self {
        Self { options }
    }

    /// Generate the dataset and write one CSV per entity kind into `out_dir`.
    pub fn run(&self, out_dir: &Path) -> Result<GenerationResult, GenerationError> {
        let start = Instant::now();
        info!(
            records = self.options.record_count,
            seed = self.options.seed,
            anchor = %self.options.anchor,
            out_dir = %out_dir.display(),
            "generation started"
        );

        let outcome = self.generate_and_write(out_dir, start);
        match &outcome {
            Ok(result) => info!(
                tables = result.report.tables.len(),
                bytes_written = result.report.bytes_written,
                duration_ms = result.report.duration_ms,
                "generation completed"
            ),
            Err(err) => warn!(error = %err, "generation failed"),
        }
        outcome
    }

    fn generate_and_write(
        &self,
        out_dir: &Path,
        start: Instant,
    ) -> Result<GenerationResult, GenerationError> {
        let dataset = generate_dataset(&self.options)?;

        let mut report = GenerationReport::new(&self.options);
        for table in write_dataset(&dataset, out_dir)? {
            info!(
                table = %table.entity,
                rows = table.rows,
                bytes = table.bytes,
                "table generated"
            );
            report.record_table(table);
        }
        report.duration_ms = start.elapsed().as_millis() as u64;

        std::fs::write(
            out_dir.join(REPORT_FILE),
            serde_json::to_vec_pretty(&report)?,
        )?;

        Ok(GenerationResult {
            out_dir: out_dir.to_path_buf(),
            dataset,
            report,
        })
    }
}
