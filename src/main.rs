use clap::{Parser, Subcommand};
use unitcfg::catalog::{SystemType, UnitCatalog};
use unitcfg::convert;
use unitcfg::report;

#[derive(Parser)]
#[command(name = "unitcfg")]
#[command(about = "Converts physical-quantity values in config files between unit systems", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print conversion factors between every catalog unit and the target system
    PrintUnits {
        /// Target unit system (SI or AU)
        target_system: SystemType,

        /// Unit catalog file (CSV)
        catalog_file: String,

        /// Emit the table as JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Convert all assignments in a config file to the target unit system
    ConvertCfg {
        /// Target unit system (SI or AU)
        target_system: SystemType,

        /// Unit catalog file (CSV)
        catalog_file: String,

        /// Input config file
        input_file: String,

        /// Output config file
        output_file: String,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::PrintUnits {
            target_system,
            catalog_file,
            json,
        } => print_units(target_system, &catalog_file, json),
        Commands::ConvertCfg {
            target_system,
            catalog_file,
            input_file,
            output_file,
        } => convert_cfg(target_system, &catalog_file, &input_file, &output_file),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn print_units(
    system: SystemType,
    catalog_file: &str,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let catalog = UnitCatalog::load(catalog_file)?;
    let reports = report::build_report(&catalog, system, catalog_file)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    } else {
        print!("{}", report::render_text(&reports));
    }

    Ok(())
}

fn convert_cfg(
    system: SystemType,
    catalog_file: &str,
    input_file: &str,
    output_file: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    // The catalog must load completely before any document processing starts
    let catalog = UnitCatalog::load(catalog_file)?;

    let input = std::fs::read_to_string(input_file)
        .map_err(|e| format!("unable to open file '{}': {}", input_file, e))?;

    let output = convert::convert_document(&catalog, system, &input, input_file)?;

    let mut text = output.join("\n");
    text.push('\n');
    std::fs::write(output_file, text)
        .map_err(|e| format!("unable to write file '{}': {}", output_file, e))?;

    Ok(())
}
