//! Command-line lookup of a message in a locale file.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tree_i18n::config::load_settings;
use tree_i18n::{
    FormatArg,
    Group,
    I18nError,
    InstanceCache,
    Lookup,
};

#[derive(Parser, Debug)]
#[command(name = "tree-i18n", version, about = "Look up a message in a locale file")]
struct Cli {
    /// Language to load; defaults to the configured default language.
    #[arg(short, long, default_value = "")]
    lang: String,

    /// Locale file; defaults to `<localesDir>/<lang>.<extension>`.
    #[arg(short, long)]
    path: Option<PathBuf>,

    /// Directory containing `.tree-i18n.json`.
    #[arg(short, long)]
    config_dir: Option<PathBuf>,

    /// Resolve the parent of KEY as a group and look KEY's last segment up in it.
    #[arg(short, long)]
    group: bool,

    /// Dotted key path.
    key: String,

    /// Positional arguments for the message's placeholders.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    args: Vec<String>,
}

#[allow(clippy::print_stdout, clippy::print_stderr)]
fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match run(&cli) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Loads the requested locale and renders the lookup result.
fn run(cli: &Cli) -> Result<String, I18nError> {
    let settings = load_settings(cli.config_dir.as_deref())?;
    let separator = settings.key_separator.clone();
    let cache = InstanceCache::new(settings)?;
    let locale = cache.get_or_create(&cli.lang, cli.path.as_deref())?;
    let args: Vec<FormatArg> = cli.args.iter().map(|arg| FormatArg::infer(arg)).collect();

    if cli.group {
        let (path, key) =
            cli.key.rsplit_once(separator.as_str()).unwrap_or(("", cli.key.as_str()));
        let group = if path.is_empty() {
            Group::from(locale.root().clone())
        } else {
            locale.group(path)?
        };
        return group.try_get(key, &args);
    }

    Ok(match locale.get(&cli.key, &args)? {
        Lookup::Text(text) => text,
        Lookup::Tree(tree) => tree.keys().join("\n"),
    })
}
