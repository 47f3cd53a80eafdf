//! Structured export document for download
//!
//! Layout matches the dashboard's "Export Report" JSON: the originating
//! inputs, their metrics (runway as the 999 sentinel when indefinite), the
//! projection rows and an RFC 3339 timestamp.

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize, Serializer};

use crate::budget::BudgetInputs;
use crate::error::Result;
use crate::projection::{FinancialMetrics, MonthlyProjection, ProjectionResult};

fn serialize_timestamp<S: Serializer>(ts: &DateTime<Utc>, serializer: S) -> std::result::Result<S::Ok, S::Error> {
    serializer.serialize_str(&ts.to_rfc3339_opts(SecondsFormat::Millis, true))
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportDocument {
    pub budget: BudgetInputs,
    pub metrics: FinancialMetrics,
    pub projections: Vec<MonthlyProjection>,
    #[serde(serialize_with = "serialize_timestamp")]
    pub timestamp: DateTime<Utc>,
}

impl ExportDocument {
    pub fn new(result: &ProjectionResult, timestamp: DateTime<Utc>) -> Self {
        Self {
            budget: result.inputs,
            metrics: result.metrics,
            projections: result.projections.clone(),
            timestamp,
        }
    }

    /// Pretty-printed JSON with two-space indentation
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Download name used by the dashboard: `cfo-helper-scenario-<millis>.json`
    pub fn default_file_name(&self) -> String {
        format!("cfo-helper-scenario-{}.json", self.timestamp.timestamp_millis())
    }

    /// Write the document into `dir` under its default name, returning the path
    pub fn write_to_dir<P: AsRef<Path>>(&self, dir: P) -> Result<PathBuf> {
        let path = dir.as_ref().join(self.default_file_name());
        self.write_to(&path)?;
        Ok(path)
    }

    pub fn write_to<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let mut file = File::create(path)?;
        file.write_all(self.to_json()?.as_bytes())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projection::{ProjectionConfig, ProjectionEngine, Runway};
    use chrono::TimeZone;

    fn document(inputs: &BudgetInputs) -> ExportDocument {
        let engine = ProjectionEngine::new(ProjectionConfig { projection_months: 3 });
        let ts = Utc.with_ymd_and_hms(2024, 5, 17, 12, 0, 0).unwrap();
        ExportDocument::new(&engine.project(inputs), ts)
    }

    #[test]
    fn test_export_shape() {
        let doc = document(&BudgetInputs::default());
        let value: serde_json::Value = serde_json::from_str(&doc.to_json().unwrap()).unwrap();

        assert_eq!(value["budget"]["initialCash"], 5_000_000.0);
        assert_eq!(value["metrics"]["runway"], 999.0);
        assert_eq!(value["metrics"]["monthlyBurn"], 0.0);
        assert_eq!(value["projections"].as_array().unwrap().len(), 4);
        assert_eq!(value["projections"][1]["cash"], 5_400_000.0);
        assert_eq!(value["projections"][1]["month"], 1);
        assert_eq!(value["timestamp"], "2024-05-17T12:00:00.000Z");
    }

    #[test]
    fn test_export_reads_back() {
        let hiring = BudgetInputs {
            engineers_count: 5,
            ..Default::default()
        };
        let doc = document(&hiring);
        let parsed = ExportDocument::from_json(&doc.to_json().unwrap()).unwrap();

        assert_eq!(parsed.metrics.runway, Runway::Finite(50.0));
        assert_eq!(parsed, doc);
    }

    #[test]
    fn test_write_to_dir_reads_back() {
        let dir = std::env::temp_dir().join(format!("cfo-helper-export-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();

        let doc = document(&BudgetInputs::default());
        let path = doc.write_to_dir(&dir).unwrap();
        assert_eq!(path, dir.join("cfo-helper-scenario-1715947200000.json"));

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, doc.to_json().unwrap());
        assert_eq!(ExportDocument::from_json(&written).unwrap(), doc);

        let named = dir.join("report.json");
        doc.write_to(&named).unwrap();
        let reread = ExportDocument::from_json(&std::fs::read_to_string(&named).unwrap()).unwrap();
        assert_eq!(reread.projections.len(), 4);

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_default_file_name() {
        let doc = document(&BudgetInputs::default());
        assert_eq!(doc.default_file_name(), "cfo-helper-scenario-1715947200000.json");
    }
}
