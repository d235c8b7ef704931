//! Parse command - extract a ledger from a receipt text dump.

use std::fs;
use std::path::PathBuf;

use clap::Args;
use console::style;
use tracing::info;

use billy_core::{Ledger, extract_items};

use super::{parse_total_arg, read_input, render_text};

/// Arguments for the parse command.
#[derive(Args)]
pub struct ParseArgs {
    /// Receipt OCR text dump (use `-` for stdin)
    #[arg(required = true)]
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Receipt total as printed on the bill
    #[arg(short, long)]
    total: Option<String>,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// Plain text table
    Text,
    /// JSON output
    Json,
}

pub fn run(args: ParseArgs) -> anyhow::Result<()> {
    let total = args.total.as_deref().map(parse_total_arg).transpose()?;

    let raw_text = read_input(&args.input)?;
    info!("parsing {} bytes of OCR text", raw_text.len());

    let items = extract_items(&raw_text);
    if items.is_empty() {
        eprintln!("{}", style("No items detected in the receipt.").yellow());
    }

    let ledger = Ledger::new(items, total);
    let view = ledger.view();

    let output = match args.format {
        OutputFormat::Text => render_text(&view),
        OutputFormat::Json => serde_json::to_string_pretty(&view)? + "\n",
    };

    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        println!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        print!("{}", output);
    }

    Ok(())
}
