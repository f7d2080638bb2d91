use clap::Parser;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{self, Read};

use crate::chemistry::concentration_set;
use crate::dissociation::assembler::free_scale_constants_with;
use crate::error::AppError;
use crate::models::{
    AssemblyOptions, ConcentrationSet, EquilibriumConstants, PhysicalState, Totals,
};

#[derive(Parser, Debug)]
#[command(author, version, about = "Seawater dissociation constants on the Free pH scale", long_about = None)]
pub struct Args {
    #[arg(long)]
    json: bool,
    #[arg(long, help = "Log the scale conversion factor to stderr")]
    pub verbose: bool,
    #[arg(
        long,
        value_name = "FILE",
        help = "JSON document with state and optional totals/options; '-' reads from stdin"
    )]
    input: Option<String>,
    #[arg(
        long,
        value_name = "JSON",
        help = "Inline JSON for the physical state, e.g. {\"temp_k\":298.15,\"psal\":35} (overrides --input)"
    )]
    state_json: Option<String>,
}

#[derive(Deserialize, Debug)]
pub struct CmdInput {
    pub state: PhysicalState,
    #[serde(default)]
    pub totals: Totals,
    #[serde(default)]
    pub options: AssemblyOptions,
    /// Measured sulfate total (mol/kg-sw); estimated from salinity when absent.
    #[serde(default)]
    pub sulfate_total: Option<f64>,
}

impl From<PhysicalState> for CmdInput {
    fn from(state: PhysicalState) -> Self {
        Self {
            state,
            totals: Totals::default(),
            options: AssemblyOptions::default(),
            sulfate_total: None,
        }
    }
}

#[derive(Serialize, Debug)]
pub struct Report {
    pub state: PhysicalState,
    pub concentrations: ConcentrationSet,
    pub constants: EquilibriumConstants,
}

fn parse_cmd_input_doc(doc: &str) -> Result<CmdInput, AppError> {
    serde_json::from_str(doc).map_err(|source| AppError::ParseInputJson { source })
}

pub fn parse_inputs(args: &Args) -> Result<CmdInput, AppError> {
    match (&args.state_json, &args.input) {
        (Some(state_json), _) => serde_json::from_str::<PhysicalState>(state_json)
            .map(CmdInput::from)
            .map_err(|source| AppError::ParseStateJson { source }),
        (None, Some(path)) if path == "-" => {
            let mut s = String::new();
            io::stdin()
                .read_to_string(&mut s)
                .map_err(|source| AppError::ReadStdin { source })?;
            parse_cmd_input_doc(&s)
        }
        (None, Some(path)) => {
            let s = fs::read_to_string(path).map_err(|source| AppError::ReadFile {
                path: path.clone(),
                source,
            })?;
            parse_cmd_input_doc(&s)
        }
        (None, None) => Err(AppError::MissingInputData),
    }
}

pub fn compute_report(input: &CmdInput) -> Report {
    let mut concentrations = concentration_set(input.state.psal, &input.totals);
    if let Some(st) = input.sulfate_total {
        concentrations.sulfate = st;
    }
    let constants =
        free_scale_constants_with(&input.state, concentrations.sulfate, &input.options);
    Report {
        state: input.state,
        concentrations,
        constants,
    }
}

pub fn print_output(out: &Report, args: &Args) -> Result<(), AppError> {
    if args.json {
        let s = serde_json::to_string_pretty(out)
            .map_err(|source| AppError::SerializeOutput { source })?;
        println!("{}", s);
    } else {
        println!(
            "T: {:.2} K  S: {:.3}",
            out.state.temp_k, out.state.psal
        );
        println!("BT: {:.4e} mol/kg", out.concentrations.borate);
        println!("ST: {:.4e} mol/kg", out.concentrations.sulfate);
        println!("FT: {:.4e} mol/kg", out.concentrations.fluoride);
        for (name, k) in out.constants.named() {
            println!("p{} ({}): {:.4}", name, out.constants.scale, -k.log10());
        }
    }

    Ok(())
}
