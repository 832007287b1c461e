pub mod cli;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "corp-readme")]
#[command(about = "Generates the company listing README from JSON records")]
pub struct CliConfig {
    /// Directory containing one JSON record per company
    #[arg(long, default_value = "./data")]
    pub data_dir: String,

    /// Static markdown template prepended to the generated table
    #[arg(long, default_value = "./default-readme.md")]
    pub template_path: String,

    /// Where the assembled README is written
    #[arg(long, default_value = "./new-readme.md")]
    pub output_path: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn data_dir(&self) -> &str {
        &self.data_dir
    }

    fn template_path(&self) -> &str {
        &self.template_path
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("data_dir", &self.data_dir)?;
        validate_path("template_path", &self.template_path)?;
        validate_path("output_path", &self.output_path)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_original_layout() {
        let config = CliConfig::parse_from(["corp-readme"]);

        assert_eq!(config.data_dir, "./data");
        assert_eq!(config.template_path, "./default-readme.md");
        assert_eq!(config.output_path, "./new-readme.md");
        assert!(!config.verbose);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn empty_paths_fail_validation() {
        let mut config = CliConfig::parse_from(["corp-readme"]);
        config.output_path = String::new();

        assert!(config.validate().is_err());
    }
}
