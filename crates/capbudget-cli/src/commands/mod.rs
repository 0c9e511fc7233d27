//! CLI command implementations.

pub mod config;
pub mod details;
pub mod irr;
pub mod metrics;
pub mod npv;
pub mod payback;
pub mod pi;
pub mod scenarios;
pub mod wacc;

// Re-export submodules for convenience
pub use config::ConfigArgs;
pub use details::DetailsArgs;
pub use irr::IrrArgs;
pub use metrics::MetricsArgs;
pub use npv::NpvArgs;
pub use payback::PaybackArgs;
pub use pi::PiArgs;
pub use scenarios::ScenariosArgs;
pub use wacc::WaccArgs;

use std::fs;
use std::path::{Path, PathBuf};

use clap::Args;
use tracing::debug;

use capbudget_config::EngineConfig;
use capbudget_core::types::{CashFlowEntry, CashFlowSeries, ProjectInputs};

use crate::cli::OutputFormat;
use crate::error::{CliError, CliResult};

/// Settings shared by every command.
pub struct Context {
    /// Output format.
    pub format: OutputFormat,
    /// Suppress headers and notes.
    pub quiet: bool,
    /// Effective configuration.
    pub config: EngineConfig,
}

/// Project inputs, from flags or a file.
#[derive(Args, Debug, Clone, Default)]
pub struct ProjectArgs {
    /// Initial investment paid at period 0
    #[arg(short, long)]
    pub investment: Option<f64>,

    /// Per-period net cash flows, comma separated (e.g. 300,400,500)
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
    pub flows: Vec<f64>,

    /// Per-period revenues, comma separated (netted against --costs)
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true, requires = "costs")]
    pub revenues: Vec<f64>,

    /// Per-period costs, comma separated
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true, requires = "revenues")]
    pub costs: Vec<f64>,

    /// Discount rate as a decimal (default from configuration)
    #[arg(short, long, allow_negative_numbers = true)]
    pub rate: Option<f64>,

    /// Project file: JSON project inputs, or CSV with period,amount columns
    #[arg(long)]
    pub input: Option<PathBuf>,
}

impl ProjectArgs {
    /// Builds validated project inputs. Flags override values from a JSON
    /// file; the rate falls back to the configured default.
    pub fn resolve(&self, config: &EngineConfig) -> anyhow::Result<ProjectInputs> {
        let from_flags = !self.flows.is_empty() || !self.revenues.is_empty();

        let (file_investment, file_flows, file_rate) = match &self.input {
            Some(path) => {
                if from_flags {
                    return Err(CliError::Conflict(
                        "--input cannot be combined with --flows or --revenues".into(),
                    )
                    .into());
                }
                read_project_file(path)?
            }
            None => (None, None, None),
        };

        let cash_flows = match file_flows {
            Some(series) => series,
            None if !self.revenues.is_empty() => {
                CashFlowSeries::from_revenues_and_costs(&self.revenues, &self.costs)?
            }
            None if !self.flows.is_empty() => CashFlowSeries::from_amounts(&self.flows)?,
            None => {
                return Err(CliError::MissingArgument(
                    "--flows, --revenues/--costs or --input".into(),
                )
                .into())
            }
        };

        let investment = self
            .investment
            .or(file_investment)
            .ok_or_else(|| CliError::MissingArgument("--investment".into()))?;
        let rate = self
            .rate
            .or(file_rate)
            .unwrap_or(config.default_discount_rate);

        debug!(
            "project: investment {investment}, {} cash flows, rate {rate}",
            cash_flows.len()
        );
        Ok(ProjectInputs::new(investment, cash_flows, rate)?)
    }
}

type FileProject = (Option<f64>, Option<CashFlowSeries>, Option<f64>);

fn read_project_file(path: &Path) -> CliResult<FileProject> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);

    match extension.as_deref() {
        Some("json") => {
            let inputs: ProjectInputs = read_json(path)?;
            Ok((
                Some(inputs.initial_investment()),
                Some(inputs.cash_flows().clone()),
                Some(inputs.discount_rate()),
            ))
        }
        Some("csv") => Ok((None, Some(read_csv_series(path)?), None)),
        _ => Err(CliError::UnsupportedInput(path.to_path_buf())),
    }
}

/// Reads and deserializes a JSON file.
pub fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> CliResult<T> {
    let content = fs::read_to_string(path).map_err(|e| input_error(path, e))?;
    serde_json::from_str(&content).map_err(|e| input_error(path, e))
}

/// Reads a `period,amount` CSV file (`year`/`cash_flow` headers also accepted).
pub fn read_csv_series(path: &Path) -> CliResult<CashFlowSeries> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(|e| input_error(path, e))?;

    let entries = reader
        .deserialize::<CashFlowEntry>()
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| input_error(path, e))?;

    CashFlowSeries::new(entries).map_err(|e| input_error(path, e))
}

fn input_error(path: &Path, err: impl std::fmt::Display) -> CliError {
    CliError::InputFile {
        path: path.to_path_buf(),
        reason: err.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn args() -> ProjectArgs {
        ProjectArgs::default()
    }

    #[test]
    fn test_flags() {
        let a = ProjectArgs {
            investment: Some(1000.0),
            flows: vec![300.0, 400.0, 500.0],
            ..args()
        };
        let inputs = a.resolve(&EngineConfig::default()).unwrap();
        assert_eq!(inputs.discount_rate(), 0.10);
        assert_eq!(inputs.cash_flows().total(), 1200.0);
    }

    #[test]
    fn test_revenues_and_costs() {
        let a = ProjectArgs {
            investment: Some(100.0),
            revenues: vec![80.0, 90.0],
            costs: vec![20.0, 30.0],
            rate: Some(0.05),
            ..args()
        };
        let inputs = a.resolve(&EngineConfig::default()).unwrap();
        assert_eq!(inputs.cash_flows().total(), 120.0);
    }

    #[test]
    fn test_missing_investment() {
        let a = ProjectArgs {
            flows: vec![300.0],
            ..args()
        };
        assert!(a.resolve(&EngineConfig::default()).is_err());
    }

    #[test]
    fn test_csv_file() {
        let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
        writeln!(file, "period,amount\n1,300\n2, 400\n3,500").unwrap();

        let a = ProjectArgs {
            investment: Some(1000.0),
            input: Some(file.path().to_path_buf()),
            ..args()
        };
        let inputs = a.resolve(&EngineConfig::default()).unwrap();
        assert_eq!(inputs.cash_flows().len(), 3);
    }

    #[test]
    fn test_json_file_with_rate_override() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(
            file,
            r#"{{"initialInvestment": 500, "cashFlows": [{{"year": 1, "cashFlow": 600}}], "discountRate": 0.1}}"#
        )
        .unwrap();

        let a = ProjectArgs {
            rate: Some(0.2),
            input: Some(file.path().to_path_buf()),
            ..args()
        };
        let inputs = a.resolve(&EngineConfig::default()).unwrap();
        assert_eq!(inputs.initial_investment(), 500.0);
        assert_eq!(inputs.discount_rate(), 0.2);
    }

    #[test]
    fn test_input_conflicts_with_flows() {
        let a = ProjectArgs {
            investment: Some(1.0),
            flows: vec![1.0],
            input: Some(PathBuf::from("p.json")),
            ..args()
        };
        assert!(a.resolve(&EngineConfig::default()).is_err());
    }
}
