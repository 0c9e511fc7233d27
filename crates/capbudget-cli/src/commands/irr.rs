//! IRR command implementation.

use anyhow::Result;
use clap::Args;

use capbudget_analytics::irr::{IrrSolver, IrrSolverConfig};
use capbudget_core::types::{IrrMethod, IrrOutcome};

use crate::commands::{Context, ProjectArgs};
use crate::output::{emit, format_irr, minimal_irr, KeyValue};

/// Arguments for the irr command.
#[derive(Args, Debug)]
pub struct IrrArgs {
    #[command(flatten)]
    pub project: ProjectArgs,

    /// Multi-seed Newton only, without bracketing, root detection or polishing
    #[arg(long)]
    pub reference: bool,
}

/// Execute the irr command.
pub fn execute(args: IrrArgs, ctx: &Context) -> Result<()> {
    let inputs = args.project.resolve(&ctx.config)?;

    let config = if args.reference {
        IrrSolverConfig {
            bracket_fallback: false,
            detect_multiple_roots: false,
            polish_residual: false,
            ..ctx.config.irr.clone()
        }
    } else {
        ctx.config.irr.clone()
    };
    let outcome = IrrSolver::new(config).solve_project(&inputs);

    let mut rows = vec![KeyValue::new("IRR", format_irr(&outcome))];
    if let IrrOutcome::Rate(solution) = &outcome {
        let method = match solution.method {
            IrrMethod::Newton { seed, iterations } => {
                format!("Newton-Raphson (seed {seed}, {iterations} iterations)")
            }
            IrrMethod::Bracketed { iterations } => {
                format!("Bracketed Brent ({iterations} iterations)")
            }
        };
        rows.push(KeyValue::new("Method", method));
        for (i, root) in solution.other_roots.iter().enumerate() {
            rows.push(KeyValue::from_percent(format!("Other Root #{}", i + 1), *root));
        }
    }

    emit(
        ctx.format,
        ctx.quiet,
        "Internal Rate of Return",
        &rows,
        &outcome,
        &minimal_irr(&outcome),
    )
}
