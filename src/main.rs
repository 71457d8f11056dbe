// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{generate, Shell};
use log::{error, info, warn, Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use std::io::Write;
use std::path::{Path, PathBuf};

use potrans::app_config::{self, Config, TranslationProvider};
use potrans::language_utils;
use potrans::Controller;

/// CLI Wrapper for TranslationProvider to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliTranslationProvider {
    Google,
    Ollama,
    Anthropic,
}

impl From<CliTranslationProvider> for TranslationProvider {
    fn from(cli_provider: CliTranslationProvider) -> Self {
        match cli_provider {
            CliTranslationProvider::Google => TranslationProvider::Google,
            CliTranslationProvider::Ollama => TranslationProvider::Ollama,
            CliTranslationProvider::Anthropic => TranslationProvider::Anthropic,
        }
    }
}

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for app_config::LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => app_config::LogLevel::Error,
            CliLogLevel::Warn => app_config::LogLevel::Warn,
            CliLogLevel::Info => app_config::LogLevel::Info,
            CliLogLevel::Debug => app_config::LogLevel::Debug,
            CliLogLevel::Trace => app_config::LogLevel::Trace,
        }
    }
}

fn level_filter(level: &app_config::LogLevel) -> LevelFilter {
    match level {
        app_config::LogLevel::Error => LevelFilter::Error,
        app_config::LogLevel::Warn => LevelFilter::Warn,
        app_config::LogLevel::Info => LevelFilter::Info,
        app_config::LogLevel::Debug => LevelFilter::Debug,
        app_config::LogLevel::Trace => LevelFilter::Trace,
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate shell completions for potrans
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(clap::Args, Debug)]
struct TranslateArgs {
    /// Base directory holding the modules
    #[arg(short, long, default_value = ".")]
    dir: PathBuf,

    /// Translate only this module
    #[arg(short, long)]
    module: Option<String>,

    /// Configuration file path
    #[arg(short, long, default_value = "potrans.json")]
    config: PathBuf,

    /// Translation provider to use
    #[arg(short, long, value_enum)]
    provider: Option<CliTranslationProvider>,

    /// Target language code sent to the service (e.g. 'zh-CN')
    #[arg(short, long)]
    target_language: Option<String>,

    /// Delay in milliseconds after every translated entry
    #[arg(long)]
    delay_ms: Option<u64>,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,

    /// Do not draw progress bars
    #[arg(long)]
    no_progress: bool,
}

/// potrans - machine translation of gettext templates
///
/// Finds every module under a directory, translates its i18n/<module>.pot
/// template and writes i18n/<locale>.po next to it.
#[derive(Parser, Debug)]
#[command(name = "potrans")]
#[command(version)]
#[command(about = "Translate gettext templates of a module tree")]
#[command(long_about = "potrans finds the modules of a directory tree and translates their gettext templates.

EXAMPLES:
    potrans                                  # Translate every module in the current directory
    potrans -d /path/to/addons               # Translate every module under a directory
    potrans -d /path/to/addons -m sale_ext   # Translate a single module
    potrans -p ollama -t ja                  # Use a local LLM and translate to Japanese
    potrans completions bash > potrans.bash  # Generate bash completions

Existing translations in the output catalog are kept and reused; entries
that look like code, markup or numbers are left untranslated.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    translate: TranslateArgs,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @creates: New logger with specified level
    fn new(level: LevelFilter) -> Self {
        CustomLogger { level }
    }

    // @initializes: Global logger, `level` is lowered later through log::set_max_level
    fn init(ceiling: LevelFilter, level: LevelFilter) -> Result<(), SetLoggerError> {
        let logger = Box::new(CustomLogger::new(ceiling));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: ANSI color for log level
    fn color_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "\x1B[1;31m",
            Level::Warn => "\x1B[1;33m",
            Level::Info => "\x1B[1;32m",
            Level::Debug => "\x1B[1;36m",
            Level::Trace => "\x1B[1;35m",
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level && metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let mut stderr = std::io::stderr();
            let _ = writeln!(
                stderr,
                "{}{} {:<5} {}\x1B[0m",
                Self::color_for_level(record.level()),
                now,
                record.level(),
                record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize the logger once with info level by default
    // The level is updated after loading the config if needed
    CustomLogger::init(LevelFilter::Trace, LevelFilter::Info)?;

    let cli = CommandLineOptions::parse();

    if let Some(Commands::Completions { shell }) = cli.command {
        let mut cmd = CommandLineOptions::command();
        generate(shell, &mut cmd, "potrans", &mut std::io::stdout());
        return Ok(());
    }

    // Unexpected failures are reported, not turned into an exit code
    if let Err(e) = run_translate(cli.translate).await {
        error!("Translation run failed: {:#}", e);
    }

    Ok(())
}

async fn run_translate(options: TranslateArgs) -> Result<()> {
    // If log level is set via command line, apply it immediately
    if let Some(cmd_log_level) = &options.log_level {
        log::set_max_level(level_filter(&cmd_log_level.clone().into()));
    }

    let mut config = load_or_create_config(&options.config)?;

    // Override config with CLI options if provided
    if let Some(provider) = &options.provider {
        config.translation.provider = provider.clone().into();
    }

    if let Some(target_language) = &options.target_language {
        config.locale = language_utils::to_locale(target_language)?;
        config.target_language = target_language.clone();
    }

    if let Some(delay_ms) = options.delay_ms {
        config.translation.common.request_delay_ms = delay_ms;
    }

    if let Some(log_level) = &options.log_level {
        config.log_level = log_level.clone().into();
    }

    // Validate the configuration after loading and overriding
    config.validate().context("Configuration validation failed")?;

    // If log level was not set via command line, update it from config now
    if options.log_level.is_none() {
        log::set_max_level(level_filter(&config.log_level));
    }

    info!(
        "Using {} provider, translating into {} ({})",
        config.translation.provider.display_name(),
        config.target_language,
        config.locale
    );

    let controller = Controller::with_config(config)?.with_progress(!options.no_progress);

    info!("Scanning {} for modules", options.dir.display());
    controller.run(&options.dir, options.module.as_deref()).await?;

    Ok(())
}

fn load_or_create_config(path: &Path) -> Result<Config> {
    if path.exists() {
        return Config::load(path);
    }

    // Create default configuration if not exists
    warn!("Config file not found at {:?}, creating default config.", path);
    let config = Config::default();
    config.save(path)?;
    Ok(config)
}
