// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::too_many_arguments)]

use anyhow::{Context, Result, anyhow};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{Shell, generate};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError, warn};
use std::fs::File;
use std::io::BufReader;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::app_config::{Config, TranslationProvider};
use app_controller::Controller;

mod app_config;
mod app_controller;
mod chunker;
mod document;
mod errors;
mod file_utils;
mod language_utils;
mod providers;
mod segmenter;
mod translation;

/// CLI Wrapper for TranslationProvider to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliTranslationProvider {
    DeepSeek,
    OpenAI,
}

impl From<CliTranslationProvider> for TranslationProvider {
    fn from(cli_provider: CliTranslationProvider) -> Self {
        match cli_provider {
            CliTranslationProvider::DeepSeek => TranslationProvider::DeepSeek,
            CliTranslationProvider::OpenAI => TranslationProvider::OpenAI,
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

#[derive(Subcommand, Debug)]
enum Commands {
    /// Translate Markdown documents using AI providers (default command)
    Translate(TranslateArgs),

    /// Generate shell completions for mdxlate
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Parser, Debug)]
struct TranslateArgs {
    /// Input document file or directory to process
    #[arg(value_name = "INPUT_PATH")]
    input_path: PathBuf,

    /// Output file or directory for translated documents
    #[arg(value_name = "OUTPUT_PATH")]
    output_path: PathBuf,

    /// Re-translate documents that already have an output file
    #[arg(short = 'f', long = "override")]
    override_existing: bool,

    /// Translation provider to use
    #[arg(short, long, value_enum)]
    provider: Option<CliTranslationProvider>,

    /// Model name to use for translation
    #[arg(short, long)]
    model: Option<String>,

    /// API key for the translation provider
    #[arg(short = 'k', long, env = "MDXLATE_API_KEY")]
    api_key: Option<String>,

    /// Source language code (e.g., 'en', 'zh', 'ja')
    #[arg(short, long)]
    source_language: Option<String>,

    /// Target language code (e.g., 'en', 'zh', 'ja')
    #[arg(short, long)]
    target_language: Option<String>,

    /// Glossary file path (JSON)
    #[arg(short, long)]
    glossary: Option<PathBuf>,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

/// mdxlate - Markdown document translation with AI
///
/// A documentation translation tool that mirrors a Markdown/MDX tree into
/// another language using AI providers (DeepSeek, OpenAI), preserving
/// frontmatter structure and fenced code blocks.
#[derive(Parser, Debug)]
#[command(name = "mdxlate")]
#[command(version = "0.1.0")]
#[command(about = "AI-powered Markdown document translation tool")]
#[command(long_about = "mdxlate translates Markdown/MDX documentation between languages using AI providers.

EXAMPLES:
    mdxlate docs/en docs/zh                      # Translate a docs tree using default config
    mdxlate -f docs/en docs/zh                   # Re-translate existing output files
    mdxlate -p openai -m gpt-4 intro.mdx out.mdx # Use a specific provider and model
    mdxlate -s en -t ja docs/en docs/ja          # Translate from English to Japanese
    mdxlate -g glossary.json docs/en docs/zh     # Enforce a terminology glossary
    mdxlate --log-level debug docs/en docs/zh    # Verbose logging
    mdxlate completions bash > mdxlate.bash      # Generate bash completions

CONFIGURATION:
    Configuration is stored in conf.json by default. You can specify a different
    config file with --config-path. If the config file doesn't exist, a default
    one will be created automatically.

SUPPORTED PROVIDERS:
    deepseek - DeepSeek hosted API (default, requires API key)
    openai   - OpenAI API (requires API key)")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Input document file or directory to process
    #[arg(value_name = "INPUT_PATH")]
    input_path: Option<PathBuf>,

    /// Output file or directory for translated documents
    #[arg(value_name = "OUTPUT_PATH")]
    output_path: Option<PathBuf>,

    /// Re-translate documents that already have an output file
    #[arg(short = 'f', long = "override")]
    override_existing: bool,

    /// Translation provider to use
    #[arg(short, long, value_enum)]
    provider: Option<CliTranslationProvider>,

    /// Model name to use for translation
    #[arg(short, long)]
    model: Option<String>,

    /// API key for the translation provider
    #[arg(short = 'k', long, env = "MDXLATE_API_KEY")]
    api_key: Option<String>,

    /// Source language code (e.g., 'en', 'zh', 'ja')
    #[arg(short, long)]
    source_language: Option<String>,

    /// Target language code (e.g., 'en', 'zh', 'ja')
    #[arg(short, long)]
    target_language: Option<String>,

    /// Glossary file path (JSON)
    #[arg(short, long)]
    glossary: Option<PathBuf>,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
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

    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        let logger = Box::new(CustomLogger::new(level));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: ANSI color prefix for log level
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
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S%.3f");
            let color = Self::color_for_level(record.level());

            let mut stderr = std::io::stderr();
            let _ = writeln!(stderr, "{}{} {:5} {}\x1B[0m", color, now, record.level(), record.args());
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize the logger once with info level by default
    // We'll update the level after loading the config if needed
    CustomLogger::init(LevelFilter::Info)?;

    // Parse command line arguments using clap
    let cli = CommandLineOptions::parse();

    // Handle subcommands
    match cli.command {
        Some(Commands::Completions { shell }) => {
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "mdxlate", &mut std::io::stdout());
            Ok(())
        }
        Some(Commands::Translate(args)) => run_translate(args).await,
        None => {
            // Default behavior - use top-level args for backwards compatibility
            let input_path = cli
                .input_path
                .ok_or_else(|| anyhow!("INPUT_PATH is required when no subcommand is specified"))?;
            let output_path = cli
                .output_path
                .ok_or_else(|| anyhow!("OUTPUT_PATH is required when no subcommand is specified"))?;

            let translate_args = TranslateArgs {
                input_path,
                output_path,
                override_existing: cli.override_existing,
                provider: cli.provider,
                model: cli.model,
                api_key: cli.api_key,
                source_language: cli.source_language,
                target_language: cli.target_language,
                glossary: cli.glossary,
                config_path: cli.config_path,
                log_level: cli.log_level,
            };
            run_translate(translate_args).await
        }
    }
}

async fn run_translate(options: TranslateArgs) -> Result<()> {
    // If log level is set via command line, apply it immediately
    if let Some(cmd_log_level) = &options.log_level {
        let config_log_level: app_config::LogLevel = cmd_log_level.clone().into();
        log::set_max_level(level_filter(&config_log_level));
    }

    // Load or create configuration
    let config_path = &options.config_path;
    let mut config = if Path::new(config_path).exists() {
        // Load existing configuration
        let file = File::open(config_path)
            .context(format!("Failed to open config file: {}", config_path))?;

        let reader = BufReader::new(file);
        serde_json::from_reader(reader)
            .context(format!("Failed to parse config file: {}", config_path))?
    } else {
        // Create default configuration if not exists
        warn!("Config file not found at '{}', creating default config.", config_path);

        let config = Config::default();
        let config_json = serde_json::to_string_pretty(&config)
            .context("Failed to serialize default config to JSON")?;
        std::fs::write(config_path, config_json)
            .context(format!("Failed to write default config to file: {}", config_path))?;

        config
    };

    apply_cli_overrides(&mut config, &options);

    // Validate the configuration after loading and overriding
    config.validate().context("Configuration validation failed")?;

    // If log level was not set via command line, update it from config now
    if options.log_level.is_none() {
        log::set_max_level(level_filter(&config.log_level));
    }

    // Create controller
    let controller = Controller::with_config(config)?;

    // Run the controller with the input path and output path
    if options.input_path.is_file() {
        controller.run(options.input_path.clone(), options.output_path.clone()).await
    } else if options.input_path.is_dir() {
        controller.run_folder(options.input_path.clone(), options.output_path.clone()).await
    } else {
        Err(anyhow!("Input path does not exist: {:?}", options.input_path))
    }
}

/// Apply command line options on top of the loaded configuration.
fn apply_cli_overrides(config: &mut Config, options: &TranslateArgs) {
    if let Some(provider) = &options.provider {
        config.translation.provider = provider.clone().into();
    }

    let provider_str = config.translation.provider.to_lowercase_string();
    if let Some(provider_config) = config
        .translation
        .available_providers
        .iter_mut()
        .find(|p| p.provider_type == provider_str)
    {
        if let Some(model) = &options.model {
            provider_config.model = model.clone();
        }
        if let Some(api_key) = &options.api_key {
            provider_config.api_key = api_key.clone();
        }
    }

    if let Some(source_lang) = &options.source_language {
        config.source_language = source_lang.clone();
    }

    if let Some(target_lang) = &options.target_language {
        config.target_language = target_lang.clone();
    }

    if let Some(glossary) = &options.glossary {
        config.glossary_path = glossary.to_string_lossy().to_string();
    }

    if options.override_existing {
        config.override_existing = true;
    }

    if let Some(log_level) = &options.log_level {
        config.log_level = log_level.clone().into();
    }
}

/// Map a config log level to the log crate's filter.
fn level_filter(level: &app_config::LogLevel) -> LevelFilter {
    match level {
        app_config::LogLevel::Error => LevelFilter::Error,
        app_config::LogLevel::Warn => LevelFilter::Warn,
        app_config::LogLevel::Info => LevelFilter::Info,
        app_config::LogLevel::Debug => LevelFilter::Debug,
        app_config::LogLevel::Trace => LevelFilter::Trace,
    }
}
