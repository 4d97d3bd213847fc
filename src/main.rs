use std::io;

use clap::Parser;
use roman_calculator::{Mode, respond, run};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Калькулятор арабских (1..10) и римских (I..X) чисел.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Выражение вида `<число> <оператор> <число>`. Без него строка
    /// читается из стандартного ввода.
    #[arg(allow_hyphen_values = true)]
    expression: Option<String>,

    /// Не выводить приветствие и приглашение.
    #[arg(short, long)]
    quiet: bool,

    /// Подробный журнал в stderr.
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();
    init_tracing(args.verbose);

    let stdout = io::stdout();
    let result = match args.expression {
        Some(expression) => respond(&expression, stdout.lock()),
        None => {
            let mode = if args.quiet {
                Mode::Quiet
            } else {
                Mode::Interactive
            };
            run(io::stdin().lock(), stdout.lock(), mode)
        }
    };

    if let Err(e) = result {
        eprintln!("Ошибка ввода-вывода: {e}");
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::WARN
    };

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(level.into())
                .from_env_lossy(),
        )
        .init();
}
