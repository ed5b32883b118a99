use anyhow::{Context, Result};
use tracing::debug;

use bizmerge_cli::pipeline::{MergeOutcome, run_check, run_merge};
use bizmerge_model::PipelineConfig;
use bizmerge_validate::ValidationReport;

use crate::cli::{CheckArgs, MergeArgs};

pub fn run_merge_command(args: &MergeArgs) -> Result<MergeOutcome> {
    let config = merge_config(args)?;
    debug!(?config, "resolved merge configuration");
    run_merge(&config)
}

pub fn run_check_command(args: &CheckArgs) -> Result<ValidationReport> {
    let config = check_config(args)?;
    debug!(?config, "resolved check configuration");
    run_check(&config)
}

fn base_config(path: Option<&std::path::Path>) -> Result<PipelineConfig> {
    match path {
        Some(path) => PipelineConfig::load(path).context("load configuration"),
        None => Ok(PipelineConfig::default()),
    }
}

fn merge_config(args: &MergeArgs) -> Result<PipelineConfig> {
    let mut config = base_config(args.config.as_deref())?;
    if let Some(path) = &args.primary {
        config.primary.path.clone_from(path);
    }
    if let Some(path) = &args.secondary {
        config.secondary.path.clone_from(path);
    }
    if let Some(prefix) = &args.primary_prefix {
        config.primary.prefix.clone_from(prefix);
    }
    if let Some(prefix) = &args.secondary_prefix {
        config.secondary.prefix.clone_from(prefix);
    }
    if let Some(path) = &args.output {
        config.output.clone_from(path);
    }
    Ok(config)
}

fn check_config(args: &CheckArgs) -> Result<PipelineConfig> {
    let mut config = base_config(args.config.as_deref())?;
    if args.input.is_some() {
        config.check.input.clone_from(&args.input);
    }
    if args.key_column.is_some() {
        config.check.key_column.clone_from(&args.key_column);
    }
    if args.address_column.is_some() {
        config.check.address_column.clone_from(&args.address_column);
    }
    Ok(config)
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    #[test]
    fn merge_flags_override_defaults() {
        let args = MergeArgs {
            config: None,
            primary: Some(PathBuf::from("in/g.csv")),
            secondary: None,
            primary_prefix: None,
            secondary_prefix: Some("fb".to_string()),
            output: Some(PathBuf::from("out.csv")),
        };
        let config = merge_config(&args).expect("config");
        assert_eq!(config.primary.path, PathBuf::from("in/g.csv"));
        assert_eq!(config.primary.prefix, "google");
        assert!(config.primary.employee_source);
        assert_eq!(config.secondary.prefix, "fb");
        assert_eq!(config.secondary.path, PathBuf::from("facebook_dataset.csv"));
        assert_eq!(config.output, PathBuf::from("out.csv"));
    }

    #[test]
    fn check_flags_override_defaults() {
        let args = CheckArgs {
            config: None,
            input: None,
            key_column: Some("company_name".to_string()),
            address_column: None,
        };
        let config = check_config(&args).expect("config");
        assert_eq!(config.check_input(), std::path::Path::new("merged_dataset.csv"));
        assert_eq!(config.check_key_column(), "company_name");
        assert_eq!(config.check_address_column(), "google_address");
    }
}
