use clap::Parser;
use pretty_assertions::assert_eq;

use super::*;

#[test]
fn parse_validate() {
	let cli = Cli::try_parse_from(["alloysim", "validate", "admin-alloys", "carbon", "-0.5"]).unwrap();
	match cli.command {
		Command::Validate { table, field, value } => {
			assert_eq!(table, TableId::AdminAlloys);
			assert_eq!(field, "carbon");
			assert_eq!(value, "-0.5");
		}
		other => panic!("unexpected command: {other:?}"),
	}
	assert!(!cli.verbose);
	assert_eq!(cli.config, None);
}

#[test]
fn unknown_table_is_a_usage_error() {
	let err = Cli::try_parse_from(["alloysim", "validate", "steels", "weight", "1"]).unwrap_err();
	assert!(err.to_string().contains("unknown constraint table"), "{err}");
}

#[test]
fn parse_convert_negative_astm() {
	let cli = Cli::try_parse_from(["alloysim", "convert", "astm", "-1"]).unwrap();
	assert!(matches!(
		cli.command,
		Command::Convert {
			from: ConvertFrom::Astm { value }
		} if value == -1.0
	));
}

#[test]
fn global_flags_after_subcommand() {
	let cli = Cli::try_parse_from(["alloysim", "replay", "actions.json", "-v", "--config", "a.toml"]).unwrap();
	assert!(cli.verbose);
	assert_eq!(cli.config, Some(PathBuf::from("a.toml")));
	assert!(matches!(cli.command, Command::Replay { file } if file == PathBuf::from("actions.json")));
}
