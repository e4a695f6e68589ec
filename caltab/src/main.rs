use caltab::report::render;
use caltab_lib::curve::Curve;
use caltab_lib::table::{load_records, transform};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "caltab")]
#[command(about = "Calibration table generator for log-curve controls", long_about = None)]
struct Args {
    /// Curve variant: range or threshold
    #[arg(short, long)]
    curve: String,

    /// Input data file (defaults to the curve's conventional file name)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Output file path (optional)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format: text or json
    #[arg(short, long, default_value = "text")]
    format: String,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Resolve curve variant
    let curve = match Curve::from_name(&args.curve) {
        Some(curve) => curve,
        None => {
            eprintln!(
                "Error: Unknown curve '{}'. Use 'range' or 'threshold'",
                args.curve
            );
            std::process::exit(1);
        }
    };

    // Validate format
    if args.format != "text" && args.format != "json" {
        eprintln!(
            "Error: Unknown format '{}'. Use 'text' or 'json'",
            args.format
        );
        std::process::exit(1);
    }

    // Default to the curve's conventional input file
    let input = args
        .input
        .unwrap_or_else(|| PathBuf::from(curve.default_input()));
    if !input.exists() {
        eprintln!("Error: Input file does not exist: {}", input.display());
        std::process::exit(1);
    }

    eprintln!("📈 Curve: {}", curve.as_str());
    eprintln!("📄 Reading records from {}", input.display());

    let records = load_records(&input)?;
    eprintln!("📦 Parsed {} records", records.len());

    let points = transform(&records, curve)?;
    eprintln!("🔢 Computed {} curve points", points.len());

    // Generate output
    let output = render(&args.format, curve, &points)?;

    // Write output
    if let Some(output_path) = &args.output {
        std::fs::write(output_path, &output)?;
        eprintln!("✅ Output written to {}", output_path.display());
    } else {
        print!("{output}");
    }

    Ok(())
}
