use abtest::cli::{Cli, Commands, GenerateArgs, OutputFormat, UpliftArgs};
use abtest::config::ExperimentConfig;
use abtest::csv_output::{uplift_to_csv, CsvOutput};
use abtest::experiment::generate_from_config;
use abtest::json_output::JsonOutput;
use abtest::text_output::{format_experiment_table, format_uplift};
use abtest::uplift::{compute_uplift, Rounding};
use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Initialize tracing subscriber for debug output
fn init_tracing(debug: bool) {
    if debug {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::from_default_env().add_directive(tracing::Level::TRACE.into()),
            )
            .with_writer(std::io::stderr)
            .init();
    }
}

fn run_uplift(args: UpliftArgs, format: OutputFormat) -> Result<String> {
    let uplift = compute_uplift(args.control, args.variant, Rounding::from(args.round));

    Ok(match format {
        OutputFormat::Text => format_uplift(&uplift),
        OutputFormat::Json => {
            let mut output = JsonOutput::new();
            output.set_uplift(uplift);
            output.to_json()?
        }
        OutputFormat::Csv => uplift_to_csv(&uplift),
    })
}

fn run_generate(args: GenerateArgs, format: OutputFormat) -> Result<String> {
    let base = match &args.config {
        Some(path) => ExperimentConfig::from_toml(path)?,
        None => ExperimentConfig::default(),
    };
    let config = base.with_overrides(args.seed, args.n, args.control_cr, args.variant_cr);

    let result = generate_from_config(&config).context("Failed to generate experiment")?;
    let uplift = args
        .uplift
        .then(|| result.uplift(Rounding::from(args.round)));

    Ok(match format {
        OutputFormat::Text => {
            let mut text = format_experiment_table(&result);
            if let Some(uplift) = &uplift {
                text.push('\n');
                text.push_str(&format_uplift(uplift));
            }
            text
        }
        OutputFormat::Json => {
            let mut output = JsonOutput::new();
            output.set_experiment(&result);
            if let Some(uplift) = uplift {
                output.set_uplift(uplift);
            }
            output.to_json()?
        }
        OutputFormat::Csv => {
            let mut csv = CsvOutput::from_experiment(&result).to_csv();
            if let Some(uplift) = &uplift {
                csv.push('\n');
                csv.push_str(&uplift_to_csv(uplift));
            }
            csv
        }
    })
}

fn main() -> Result<()> {
    let args = Cli::parse();

    // Initialize tracing if --debug flag is set
    init_tracing(args.debug);

    let output = match args.command {
        Commands::Uplift(uplift) => run_uplift(uplift, args.format)?,
        Commands::Generate(generate) => run_generate(generate, args.format)?,
    };

    print!("{}", output);
    if args.format == OutputFormat::Json {
        println!();
    }

    Ok(())
}
