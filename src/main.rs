use clap::{Parser, ValueEnum};
use miette::{IntoDiagnostic, Result};
use potledger::application::session::PotSession;
use potledger::application::view::SessionView;
use potledger::config::{MAX_ITERATIONS, SessionConfig};
use potledger::domain::ports::ConfirmBox;
use potledger::domain::wallet::Balance;
use potledger::infrastructure::confirm::{FixedAnswer, TerminalConfirm};
use potledger::interfaces::csv::intent_reader::IntentReader;
use potledger::interfaces::csv::session_writer::SessionWriter;
use rust_decimal::Decimal;
use std::fs::File;
use std::io;
use std::path::PathBuf;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ConfirmMode {
    /// Accept every prompt
    Yes,
    /// Refuse every prompt
    No,
    /// Ask on the terminal
    Ask,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OutputFormat {
    Csv,
    Json,
}

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Intent script CSV file
    input: PathBuf,

    /// How confirmation prompts are answered when the script does not say
    #[arg(long, value_enum, default_value_t = ConfirmMode::No)]
    confirm: ConfirmMode,

    /// Output format for the final session state
    #[arg(long, value_enum, default_value_t = OutputFormat::Csv)]
    format: OutputFormat,

    /// Wallet pre-filled into new setup slots
    #[arg(long)]
    default_wallet: Option<Decimal>,

    /// Maximum bet rows per round
    #[arg(long, default_value_t = MAX_ITERATIONS)]
    max_iterations: usize,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    let mut config = SessionConfig::default().with_max_iterations(cli.max_iterations);
    if let Some(wallet) = cli.default_wallet {
        config = config.with_default_wallet(Balance::new(wallet));
    }
    let mut session = PotSession::new(config);

    let mut confirm: ConfirmBox = match cli.confirm {
        ConfirmMode::Yes => Box::new(FixedAnswer(true)),
        ConfirmMode::No => Box::new(FixedAnswer(false)),
        ConfirmMode::Ask => Box::new(TerminalConfirm),
    };

    // Replay the script
    let file = File::open(cli.input).into_diagnostic()?;
    let reader = IntentReader::new(file);
    for intent_result in reader.intents() {
        match intent_result {
            Ok(intent) => {
                if let Err(e) = intent.apply(&mut session, confirm.as_mut()) {
                    eprintln!("Rejected intent: {}", e);
                }
            }
            Err(e) => {
                eprintln!("Error reading intent: {}", e);
            }
        }
    }

    // Output final state
    let view = SessionView::from(&session);
    let stdout = io::stdout();
    let mut writer = SessionWriter::new(stdout.lock());
    match cli.format {
        OutputFormat::Csv => writer.write_csv(&view).into_diagnostic()?,
        OutputFormat::Json => writer.write_json(&view).into_diagnostic()?,
    }

    Ok(())
}
