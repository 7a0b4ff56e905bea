use clap::Parser;
use std::path::PathBuf;

/// Manage a single-user bank ledger from an interactive menu
#[derive(Parser, Debug)]
#[command(name = "bank-ledger")]
#[command(about = "Manage a single-user bank ledger from an interactive menu", long_about = None)]
pub struct CliArgs {
    /// Path of the JSON data file the ledger is persisted to
    #[arg(
        long = "data-file",
        value_name = "FILE",
        default_value = "bank-data.json",
        help = "Path to the JSON data file"
    )]
    pub data_file: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::default(&["program"], "bank-data.json")]
    #[case::custom(&["program", "--data-file", "/tmp/ledger.json"], "/tmp/ledger.json")]
    fn test_data_file_parsing(#[case] args: &[&str], #[case] expected: &str) {
        let parsed = CliArgs::try_parse_from(args).unwrap();
        assert_eq!(parsed.data_file, PathBuf::from(expected));
    }

    #[test]
    fn test_unknown_flag_is_rejected() {
        let result = CliArgs::try_parse_from(["program", "--verbose"]);
        assert!(result.is_err());
    }
}
