use std::ffi::OsString;
use std::io::{self, BufWriter, Write};

use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser, ValueEnum};
use log::{debug, info};
use thiserror::Error;
use zoosearch::{
    Alphabet, DEFAULT_ALPHABET, OperatorBudget, check_postfix, count_expressions, iter_postfix,
};

/// Log level for the application
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_log_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// How expressions are written to stdout
#[derive(Debug, Clone, Copy, PartialEq, ValueEnum)]
pub enum OutputFormat {
    /// One expression per line
    Lines,
    /// A single comma-separated line
    List,
}

/// Zoosearch - enumerate postfix expressions
#[derive(Parser, Debug)]
#[command(name = "zoosearch")]
#[command(about = "Enumerate postfix expressions that use an exact number of operators")]
#[command(version)]
pub struct CliArgs {
    /// Number of binary operators in every expression
    #[arg(allow_negative_numbers = true)]
    pub opcount: String,

    /// Operand symbols, in comparison order
    #[arg(short, long, default_value = DEFAULT_ALPHABET)]
    pub alphabet: String,

    /// Output format (default: lines)
    #[arg(short, long, value_enum, default_value = "lines")]
    pub format: OutputFormat,

    /// Stop after this many expressions
    #[arg(short = 'n', long)]
    pub limit: Option<usize>,

    /// Print only the number of expressions
    #[arg(short, long)]
    pub count: bool,

    /// Check that every expression is well-formed postfix before printing it
    #[arg(long)]
    pub verify: bool,

    /// Log level (default: warn)
    #[arg(short, long, value_enum, default_value = "warn")]
    pub log_level: LogLevel,
}

/// Wrong number or shape of command line arguments.
///
/// Displays as the usage line, which `main` prints to stdout.
#[derive(Error, Debug)]
#[error("{usage}")]
pub struct UsageError {
    pub detail: String,
    pub usage: String,
}

/// Configuration for the CLI application
pub struct CliConfig {
    pub budget: OperatorBudget,
    pub alphabet: Alphabet,
    pub format: OutputFormat,
    pub limit: Option<usize>,
    pub count: bool,
    pub verify: bool,
    pub log_level: LogLevel,
}

/// Parse command line arguments and return configuration
pub fn parse_args() -> Result<CliConfig> {
    parse_args_from(std::env::args_os())
}

pub fn parse_args_from<I, T>(args: I) -> Result<CliConfig>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let args = match CliArgs::try_parse_from(args) {
        Ok(args) => args,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            err.exit()
        }
        Err(err) => {
            return Err(UsageError {
                detail: err.kind().as_str().unwrap_or("invalid arguments").to_string(),
                usage: CliArgs::command().render_usage().to_string(),
            }
            .into());
        }
    };

    let budget: OperatorBudget = args
        .opcount
        .parse()
        .context("Invalid operator count")?;
    let alphabet = Alphabet::new(&args.alphabet).context("Invalid alphabet")?;

    Ok(CliConfig {
        budget,
        alphabet,
        format: args.format,
        limit: args.limit,
        count: args.count,
        verify: args.verify,
        log_level: args.log_level,
    })
}

/// Initialize logging based on the provided log level
pub fn init_logging(log_level: &LogLevel) -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log_level.to_log_level_filter())
        .try_init()
        .context("Failed to initialize logging")
}

/// Write expressions in the requested format and return how many were written
pub fn write_expressions<W, I>(
    out: &mut W,
    exprs: I,
    format: OutputFormat,
    verify_against: Option<&Alphabet>,
) -> Result<usize>
where
    W: Write,
    I: IntoIterator<Item = String>,
{
    let mut written = 0;

    for expr in exprs {
        if let Some(alphabet) = verify_against {
            check_postfix(&expr, alphabet)
                .with_context(|| format!("Malformed expression '{}'", expr))?;
        }

        let result = match format {
            OutputFormat::Lines => writeln!(out, "{}", expr),
            OutputFormat::List if written == 0 => write!(out, "{}", expr),
            OutputFormat::List => write!(out, ", {}", expr),
        };
        result.context("Failed to write expression")?;
        written += 1;
    }

    if format == OutputFormat::List {
        writeln!(out).context("Failed to write expression")?;
    }

    Ok(written)
}

/// Run the main application logic
pub fn run() -> Result<()> {
    let config = parse_args()?;

    // Initialize logging
    init_logging(&config.log_level)?;

    let opcount = config.budget.get();
    info!(
        "Enumerating expressions with {} operators over '{}'",
        opcount, config.alphabet
    );

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    if config.count {
        let total = match config.limit {
            Some(limit) => iter_postfix(&config.alphabet, opcount).take(limit).count() as u64,
            None => count_expressions(&config.alphabet, opcount),
        };
        writeln!(out, "{}", total).context("Failed to write count")?;
    } else {
        let exprs =
            iter_postfix(&config.alphabet, opcount).take(config.limit.unwrap_or(usize::MAX));
        let verify_against = config.verify.then_some(&config.alphabet);
        let written = write_expressions(&mut out, exprs, config.format, verify_against)?;
        debug!("Wrote {} expressions", written);
    }

    out.flush().context("Failed to flush output")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use zoosearch::BudgetError;

    #[test]
    fn test_parse_args_defaults() {
        let result = parse_args_from(["zoosearch", "2"]);
        assert!(result.is_ok());
        if let Ok(config) = result {
            assert_eq!(config.budget.get(), 2);
            assert_eq!(config.alphabet, Alphabet::default());
            assert_eq!(config.format, OutputFormat::Lines);
            assert_eq!(config.limit, None);
            assert!(!config.count);
            assert!(!config.verify);
            assert!(matches!(config.log_level, LogLevel::Warn));
        }
    }

    #[test]
    fn test_parse_args_options() {
        let result = parse_args_from([
            "zoosearch", "1", "-a", "axyz", "-f", "list", "-n", "5", "--verify", "-l", "debug",
        ]);
        assert!(result.is_ok());
        if let Ok(config) = result {
            assert_eq!(config.alphabet.to_string(), "axyz");
            assert_eq!(config.format, OutputFormat::List);
            assert_eq!(config.limit, Some(5));
            assert!(config.verify);
            assert!(matches!(config.log_level, LogLevel::Debug));
        }
    }

    #[test]
    fn test_missing_argument_is_usage_error() {
        let result = parse_args_from(["zoosearch"]);
        assert!(result.is_err());
        if let Err(err) = result {
            let usage = err.downcast_ref::<UsageError>();
            assert!(usage.is_some());
            if let Some(usage) = usage {
                assert!(usage.to_string().contains("zoosearch"));
                assert!(usage.to_string().contains("<OPCOUNT>"));
            }
        }
    }

    #[test]
    fn test_extra_argument_is_usage_error() {
        let result = parse_args_from(["zoosearch", "1", "2"]);
        assert!(result.is_err());
        if let Err(err) = result {
            assert!(err.downcast_ref::<UsageError>().is_some());
        }
    }

    #[test]
    fn test_invalid_operator_count() {
        let result = parse_args_from(["zoosearch", "two"]);
        assert!(result.is_err());
        if let Err(err) = result {
            assert!(err.downcast_ref::<UsageError>().is_none());
            assert_eq!(
                err.downcast_ref::<BudgetError>(),
                Some(&BudgetError::InvalidArgument("two".to_string()))
            );
        }
    }

    #[test]
    fn test_negative_operator_count() {
        let result = parse_args_from(["zoosearch", "-3"]);
        assert!(result.is_err());
        if let Err(err) = result {
            assert_eq!(
                err.downcast_ref::<BudgetError>(),
                Some(&BudgetError::Negative(-3))
            );
        }
    }

    #[test]
    fn test_invalid_alphabet() {
        let result = parse_args_from(["zoosearch", "1", "--alphabet", "a+b"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_write_expressions_lines() {
        let alphabet = Alphabet::new("ax").unwrap_or_default();
        let mut out = Vec::new();
        let result = write_expressions(
            &mut out,
            iter_postfix(&alphabet, 1),
            OutputFormat::Lines,
            Some(&alphabet),
        );
        assert!(matches!(result, Ok(6)));
        assert_eq!(
            String::from_utf8_lossy(&out),
            "aa*\nax-\nax+\nax*\nxa-\nxx*\n"
        );
    }

    #[test]
    fn test_write_expressions_list() {
        let alphabet = Alphabet::new("axyz").unwrap_or_default();
        let mut out = Vec::new();
        let result = write_expressions(
            &mut out,
            iter_postfix(&alphabet, 0),
            OutputFormat::List,
            None,
        );
        assert!(matches!(result, Ok(4)));
        assert_eq!(String::from_utf8_lossy(&out), "a, x, y, z\n");
    }

    #[test]
    fn test_write_expressions_verify_rejects_malformed() {
        let alphabet = Alphabet::default();
        let mut out = Vec::new();
        let exprs = vec!["ab+".to_string(), "a+".to_string()];
        let result = write_expressions(&mut out, exprs, OutputFormat::Lines, Some(&alphabet));
        assert!(result.is_err());
        assert_eq!(String::from_utf8_lossy(&out), "ab+\n");
    }

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(
            LogLevel::Error.to_log_level_filter(),
            log::LevelFilter::Error
        );
        assert_eq!(LogLevel::Warn.to_log_level_filter(), log::LevelFilter::Warn);
        assert_eq!(LogLevel::Info.to_log_level_filter(), log::LevelFilter::Info);
        assert_eq!(
            LogLevel::Debug.to_log_level_filter(),
            log::LevelFilter::Debug
        );
        assert_eq!(
            LogLevel::Trace.to_log_level_filter(),
            log::LevelFilter::Trace
        );
    }
}
