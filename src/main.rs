use anyhow::Context;
use clap::{Parser, Subcommand};

use fanorona::{
    init_logging,
    ui::{announce_winner, describe_move, render},
    Config, Fanorona, GameError, SaveFile, Session,
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the board and whose turn it is.
    Print,
    /// Move a piece, e.g. `move 4,3 East y`.
    Move {
        /// Coordinate, direction and same-direction capture flag.
        #[arg(num_args = 0.., allow_hyphen_values = true, trailing_var_arg = true)]
        args: Vec<String>,
    },
}

fn main() {
    // Errors are reported as a single line, without anyhow's cause list.
    if let Err(e) = run() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();
    let config = Config::from_env();
    let engine = Fanorona::new();
    let store = SaveFile::new(&config.save_path);

    let mut session = store
        .load_or_else(|| Session::fresh(&engine))
        .with_context(|| format!("Failed to load {}", store.path().display()))?;

    if let Some(winner) = session.winner(&engine) {
        println!("{}", announce_winner(winner));
    }

    let result: Result<(), GameError> = match cli.command {
        Commands::Print => {
            print!("{}", render(&session));
            Ok(())
        }
        Commands::Move { args } => session.play(&engine, args.as_slice()).map(|outcome| {
            print!("{}", render(&session));
            println!("{}", describe_move(&outcome));
        }),
    };
    if let Err(e) = &result {
        log::info!("command failed during {:?}", e.phase());
    }

    // A rejected command leaves the session untouched, so saving is always safe.
    let saved = store.save(&session);
    result?;
    saved.context("Failed to save")?;
    Ok(())
}
