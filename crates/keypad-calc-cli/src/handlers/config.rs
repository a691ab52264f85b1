//! Config command handler

use crate::config::CliConfig;
use crate::error::CliResult;
use crate::output::OutputFormat;
use std::io::Write;

/// Execute the config command
pub fn execute_config<W: Write>(config: &CliConfig, out: &mut W) -> CliResult<()> {
    match config.format {
        OutputFormat::Text => print_current_config(config, out)?,
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, config)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

/// Print the current configuration
pub fn print_current_config<W: Write>(config: &CliConfig, out: &mut W) -> CliResult<()> {
    writeln!(out, "Current configuration:")?;
    writeln!(out, "  Verbosity: {:?}", config.verbosity)?;
    writeln!(out, "  Log filter: {}", config.verbosity.log_directive())?;
    writeln!(out, "  Color: {:?}", config.color)?;
    writeln!(out, "  Format: {:?}", config.format)?;
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::config::Verbosity;

    #[test]
    fn test_config_text() {
        let config = CliConfig::new().with_verbosity(Verbosity::Verbose);
        let mut out = Vec::new();
        execute_config(&config, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Verbosity: Verbose"));
        assert!(text.contains("Log filter: info"));
        assert!(text.contains("Format: Text"));
    }

    #[test]
    fn test_config_json() {
        let config = CliConfig::new().with_format(OutputFormat::Json);
        let mut out = Vec::new();
        execute_config(&config, &mut out).unwrap();
        let back: CliConfig = serde_json::from_slice(&out).unwrap();
        assert_eq!(back, config);
    }
}
