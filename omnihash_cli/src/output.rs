//! Terminal rendering of results and registry listings

use crate::OutputFormat;
use anyhow::Result;
use colored::Colorize;
use omnihash_core::{AlgorithmRegistry, DigestResult, OutputKind};

/// Print one result set in the requested format
pub fn print_results(results: &[DigestResult], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => {
            let registry = AlgorithmRegistry::global();
            let width = registry
                .entries()
                .iter()
                .map(|entry| entry.display_name().len())
                .max()
                .unwrap_or(0);

            for result in results {
                let name = registry.get(result.algorithm).display_name();
                println!("{}  {}", format!("{name:<width$}").bold(), result.output);
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(results)?);
        }
    }
    Ok(())
}

/// Print the registry listing (index, name, output kind)
pub fn print_algorithms() {
    let registry = AlgorithmRegistry::global();
    for (index, descriptor) in registry.descriptors().into_iter().enumerate() {
        let kind = match descriptor.output_kind {
            OutputKind::HexDigest => "hex digest",
            OutputKind::NumericChecksum => "checksum",
            OutputKind::TextEncoding => "text encoding",
        };
        println!("{index:>2}  {:<12} {kind}", descriptor.display_name);
    }
}
