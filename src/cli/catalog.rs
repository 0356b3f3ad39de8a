use std::path::PathBuf;

use clap::{Args, Subcommand};

use crate::catalog::store::SnpCatalog;
use crate::cli::OutputFormat;
use crate::core::types::SnpId;

#[derive(Args)]
pub struct CatalogArgs {
    #[command(subcommand)]
    pub action: CatalogAction,
}

#[derive(Subcommand)]
pub enum CatalogAction {
    /// List all supported SNPs
    List,

    /// Show one catalog entry in full
    Show {
        /// Catalog id (e.g. "mthfr_c677t")
        id: String,
    },

    /// Export the catalog as JSON
    Export {
        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Execute catalog subcommand
///
/// # Errors
///
/// Returns an error if the embedded catalog fails to load, the requested id
/// does not exist, or the export file cannot be written.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: CatalogArgs, format: OutputFormat, _verbose: bool) -> anyhow::Result<()> {
    let catalog = SnpCatalog::load_embedded()?;

    match args.action {
        CatalogAction::List => match format {
            OutputFormat::Text => {
                println!("Supported SNPs ({}):", catalog.len());
                for snp in &catalog.snps {
                    println!(
                        "  {:<18} {:<12} {:<8} {}",
                        snp.id.0, snp.rsid, snp.gene, snp.display_name
                    );
                }
            }
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(&catalog.snps)?);
            }
        },
        CatalogAction::Show { id } => {
            let snp = catalog
                .get(&SnpId::new(&id))
                .ok_or_else(|| anyhow::anyhow!("no catalog entry with id '{id}'"))?;
            match format {
                OutputFormat::Text => {
                    println!("id:           {}", snp.id);
                    println!("display name: {}", snp.display_name);
                    println!("rsid:         {}", snp.rsid);
                    println!("gene:         {}", snp.gene);
                    if snp.aliases.is_empty() {
                        println!("aliases:      (none)");
                    } else {
                        println!("aliases:      {}", snp.aliases.join(", "));
                    }
                }
                OutputFormat::Json => {
                    println!("{}", serde_json::to_string_pretty(snp)?);
                }
            }
        }
        CatalogAction::Export { output } => {
            let json = catalog.to_json()?;
            match output {
                Some(path) => {
                    std::fs::write(&path, &json)?;
                    eprintln!("Exported {} SNPs to {}", catalog.len(), path.display());
                }
                None => println!("{json}"),
            }
        }
    }

    Ok(())
}
