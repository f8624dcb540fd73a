use basil_lang::cli::{self, CliError, EvalOptions};
use clap::{Parser as ClapParser, Subcommand};
use std::io::{self, Read};
use std::path::PathBuf;

#[derive(ClapParser)]
#[command(name = "basil")]
#[command(about = "Basil - a tiny expression language with position-tracked diagnostics")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate a program and print the result
    Eval {
        /// The program text (reads from stdin if neither this nor --file is given)
        source: Option<String>,

        /// Read the program from a file
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Dump the token stream for a program
    Tokens {
        /// The program text (reads from stdin if neither this nor --file is given)
        source: Option<String>,

        /// Read the program from a file
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Apply the even/odd parity post-pass
        #[arg(long)]
        parity: bool,

        /// Print the tokens as JSON
        #[arg(long)]
        json: bool,
    },

    /// Report line, space, tab, word, and token totals
    Count {
        /// The text to analyze (reads from stdin if neither this nor --file is given)
        source: Option<String>,

        /// Read the text from a file
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Eval { source, file, json } => run_eval(source, file, json),
        Commands::Tokens {
            source,
            file,
            parity,
            json,
        } => run_tokens(source, file, parity, json),
        Commands::Count { source, file } => run_count(source, file),
    };

    if let Err(e) = result {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

/// Resolve the program text from the argument, a file, or piped stdin.
fn read_options(source: Option<String>, file: Option<PathBuf>) -> Result<EvalOptions, CliError> {
    if let Some(source) = source {
        return Ok(EvalOptions {
            source_name: "<input>".to_string(),
            source,
        });
    }
    if let Some(path) = file {
        let source = std::fs::read_to_string(&path).map_err(CliError::Io)?;
        return Ok(EvalOptions {
            source_name: path.display().to_string(),
            source,
        });
    }
    if !atty::is(atty::Stream::Stdin) {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer).map_err(CliError::Io)?;
        return Ok(EvalOptions {
            source_name: "<stdin>".to_string(),
            source: buffer,
        });
    }
    Err(CliError::NoInput)
}

fn run_eval(source: Option<String>, file: Option<PathBuf>, json: bool) -> Result<(), CliError> {
    let options = read_options(source, file)?;
    let value = cli::execute_eval(&options)?;

    if json {
        println!("{}", cli::value_to_json(&value));
    } else {
        println!("{}", value);
    }
    Ok(())
}

fn run_tokens(
    source: Option<String>,
    file: Option<PathBuf>,
    parity: bool,
    json: bool,
) -> Result<(), CliError> {
    let options = read_options(source, file)?;
    let tokens = cli::execute_tokens(&options, parity);

    if json {
        println!("{}", cli::tokens_to_json(&tokens));
    } else {
        for token in &tokens {
            println!(
                "{:?} @ {}:{}",
                token.kind, token.span.start.line, token.span.start.column
            );
        }
    }
    Ok(())
}

fn run_count(source: Option<String>, file: Option<PathBuf>) -> Result<(), CliError> {
    let options = read_options(source, file)?;
    let report = cli::execute_count(&options);

    println!("{}", report.totals);
    println!("Total words: {}", report.words);
    println!("Total tokens: {}", report.tokens);
    Ok(())
}
