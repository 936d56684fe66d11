use clap::{CommandFactory, FromArgMatches, Parser, Subcommand};
use msdcalc::config::CalcParams;
use std::process;
use tracing::Level;

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// JSON file with calculator parameters. Flags given on the command line win.
    #[arg(global = true, long)]
    params: Option<String>,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Rate a chart at one playback rate and accuracy goal.
    Rate(cmd::rate::RateArgs),
    /// Rate a chart at every rate from 0.7x to 2.0x.
    Curve(cmd::curve::CurveArgs),
}

fn main() {
    // Raw matches tell user input apart from defaults
    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    let level = if cli.debug { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let (cli_params, sub_name) = match &cli.command {
        Commands::Rate(args) => (&args.params, "rate"),
        Commands::Curve(args) => (&args.params, "curve"),
    };
    let Some(sub_matches) = matches.subcommand_matches(sub_name) else {
        eprintln!("❌ Missing subcommand arguments");
        process::exit(2);
    };

    let params = match &cli.params {
        Some(path) => {
            println!("⚖️  Loading params from: {}", path);
            let mut file_params = CalcParams::load_from_file(path).unwrap_or_else(|e| {
                eprintln!("❌ {}", e);
                process::exit(1);
            });
            file_params.merge_from_cli(cli_params, sub_matches);
            file_params
        }
        None => cli_params.clone(),
    };

    let result = match cli.command {
        Commands::Rate(args) => cmd::rate::run(args, params),
        Commands::Curve(args) => cmd::curve::run(args, params),
    };

    if let Err(e) = result {
        eprintln!("\n❌ FATAL ERROR:");
        eprintln!("   {}", e);
        process::exit(1);
    }
}
