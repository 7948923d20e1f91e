use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use qualpal::models::{parse_severity, InputArgs, ScoringArgs};
use qualpal::services::PaletteService;
use qualpal_core::{difference, simulate_cvd, CvdKind, Metric, Rgb};

#[derive(Parser)]
#[command(name = "qualpal")]
#[command(about = "Qualpal - distinct color palettes for data visualization")]
struct Cli {
    /// Raise log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate n maximally distinct colors
    Generate {
        /// Number of colors
        n: usize,

        #[command(flatten)]
        input: InputArgs,
    },
    /// Extend fixed colors to a palette of the given total size
    Extend {
        /// Total number of colors, fixed colors included
        total: usize,

        /// Colors to keep, comma-separated hex (e.g. "#e41a1c,#377eb8")
        #[arg(long, value_delimiter = ',', required = true)]
        fixed: Vec<Rgb>,

        #[command(flatten)]
        input: InputArgs,
    },
    /// Execute a YAML request file
    Run {
        /// Request file path
        request: PathBuf,
    },
    /// Print the distance matrix and minimum distance of a palette
    Analyze {
        /// Palette colors, comma-separated hex
        #[arg(long, value_delimiter = ',', required = true)]
        colors: Vec<Rgb>,

        #[command(flatten)]
        scoring: ScoringArgs,
    },
    /// Show how a color appears with a color vision deficiency
    Simulate {
        /// Color as hex
        color: Rgb,

        /// protan, deutan or tritan
        kind: CvdKind,

        /// Severity in [0, 1]
        #[arg(value_parser = parse_severity)]
        severity: f64,
    },
    /// Print the perceived difference between two colors
    Difference {
        a: Rgb,
        b: Rgb,

        /// Color difference metric
        #[arg(long, default_value_t = Metric::Ciede2000)]
        metric: Metric,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Some(Commands::Generate { n, input }) => {
            let request = input.to_request(n, Vec::new())?;
            let palette = PaletteService::generate(&request)?;
            print!("{}", PaletteService::format_palette(&palette));
        }
        Some(Commands::Extend {
            total,
            fixed,
            input,
        }) => {
            let request = input.to_request(total, fixed)?;
            let palette = PaletteService::generate(&request)?;
            print!("{}", PaletteService::format_palette(&palette));
        }
        Some(Commands::Run { request }) => {
            let palette = PaletteService::run_file(&request)?;
            print!("{}", PaletteService::format_palette(&palette));
        }
        Some(Commands::Analyze { colors, scoring }) => {
            let cvd = scoring.cvd_map()?;
            print!(
                "{}",
                PaletteService::format_analysis(&colors, scoring.metric, &cvd, scoring.background)?
            );
        }
        Some(Commands::Simulate {
            color,
            kind,
            severity,
        }) => {
            println!("{}", simulate_cvd(color, kind, severity));
        }
        Some(Commands::Difference { a, b, metric }) => {
            println!("{:.4}", difference(a, b, metric));
        }
        None => run_status_command(),
    }

    Ok(())
}

/// `RUST_LOG` wins; otherwise `-v` raises the default level.
fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "qualpal=warn,qualpal_core=warn",
        1 => "qualpal=info,qualpal_core=info",
        2 => "qualpal=debug,qualpal_core=debug",
        _ => "qualpal=trace,qualpal_core=trace",
    };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default.into()))
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();
}

fn run_status_command() {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    println!("Qualpal v{VERSION}");
    println!("Distinct color palettes for data visualization\n");

    println!("Commands:");
    println!("  generate <n>                 Sample a colorspace and pick n colors");
    println!("  extend <total> --fixed ...   Keep fixed colors and add the rest");
    println!("  run <request.yaml>           Execute a request file");
    println!("  analyze --colors ...         Distance matrix of a palette");
    println!("  simulate <hex> <kind> <sev>  Color vision deficiency simulation");
    println!("  difference <hex> <hex>       Perceived color difference");

    println!("\nMetrics:");
    for metric in Metric::ALL {
        let marker = if metric == Metric::default() {
            " (default)"
        } else {
            ""
        };
        println!("  {metric}{marker}");
    }

    println!("\nColor vision deficiencies:");
    for kind in CvdKind::ALL {
        println!("  {kind}");
    }

    println!("\nEnvironment Variables:");
    println!(
        "  RUST_LOG = {}",
        std::env::var("RUST_LOG")
            .as_deref()
            .unwrap_or("qualpal=warn (default)")
    );

    println!("\nRun 'qualpal --help' for all options.");
}
