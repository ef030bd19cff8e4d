use std::path::PathBuf;

use alloysim_validation::TableId;
use clap::{Parser, Subcommand};

#[cfg(test)]
mod tests;

#[derive(Parser, Debug)]
#[command(name = "alloysim")]
#[command(about = "Alloy form validation, grain-size conversion and state replay")]
#[command(version)]
/// Command-line arguments.
pub struct Cli {
	/// Configuration file (defaults to $XDG_CONFIG_HOME/alloysim/config.toml)
	#[arg(long, short = 'c', value_name = "PATH", global = true)]
	pub config: Option<PathBuf>,

	/// Verbose logging, including every dispatched action
	#[arg(long, short = 'v', global = true)]
	pub verbose: bool,

	/// Subcommand to execute.
	#[command(subcommand)]
	pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
	/// Validate one form value (alloys, admin-alloys, user-alloys)
	Validate {
		/// Constraint table name
		table: TableId,
		/// Field name, e.g. weight, carbon, name
		field: String,
		/// Raw input value
		#[arg(allow_hyphen_values = true)]
		value: String,
	},
	/// Convert between ASTM grain-size number and grain diameter
	Convert {
		/// Conversion direction.
		#[command(subcommand)]
		from: ConvertFrom,
	},
	/// Dispatch actions from a JSON file and print the final state
	Replay {
		/// JSON array of actions, or one action per line
		file: PathBuf,
	},
}

/// Conversion directions.
#[derive(Subcommand, Debug)]
pub enum ConvertFrom {
	/// ASTM grain-size number to mean diameter in µm
	Astm {
		#[arg(allow_hyphen_values = true)]
		value: f64,
	},
	/// Mean diameter in µm to ASTM grain-size number
	Diameter {
		#[arg(allow_hyphen_values = true)]
		value: f64,
	},
}
