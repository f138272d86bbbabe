// SPDX-License-Identifier: PMPL-1.0-or-later

//! iso639: query the ISO 639 language code registry from the command line
//!
//! Resolves 2- and 3-letter language codes, lists languages by type or scope,
//! searches language names, and regenerates the embedded code table from an
//! upstream `iso-639-3.tab` file.

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use iso639_registry::codegen;
use iso639_registry::report::{LanguageFormatter, OutputFormat, RegistryStats};
use iso639_registry::{logging, tab, Language, LanguageScope, LanguageType, Locale, Registry};
use serde::Serialize;
use std::borrow::Cow;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "iso639")]
#[command(version)]
#[command(about = "Look up ISO 639 language codes, types, scopes and names")]
#[command(long_about = None)]
struct Cli {
    /// Output format
    #[arg(short, long, global = true, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Serve queries from this iso-639-3.tab file instead of the embedded table
    #[arg(long, global = true, env = "ISO639_DATA", value_name = "TAB")]
    data: Option<PathBuf>,

    /// Verbose diagnostics on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Only report errors on stderr
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Regenerate the embedded Rust code table from an iso-639-3.tab file
    Generate {
        /// Upstream table file
        #[arg(short, long, value_name = "TAB")]
        input: PathBuf,

        /// Write the generated source here instead of stdout
        #[arg(short, long, value_name = "RS")]
        output: Option<PathBuf>,
    },

    #[command(flatten)]
    Query(QueryCommand),
}

#[derive(Subcommand)]
enum QueryCommand {
    /// Resolve a language code
    Lookup {
        /// 2- or 3-letter code
        #[arg(value_name = "CODE")]
        code: String,

        /// Code space to search (default: infer from length)
        #[arg(short, long, value_enum)]
        part: Option<PartArg>,
    },

    /// List languages, optionally filtered by type and scope
    List {
        /// Language type
        #[arg(short = 't', long = "type", value_enum)]
        language_type: Option<TypeArg>,

        /// Language scope
        #[arg(short, long, value_enum)]
        scope: Option<ScopeArg>,
    },

    /// Search language names by substring
    Search {
        /// Text to look for in language names
        #[arg(value_name = "TEXT")]
        text: String,

        /// Match case exactly
        #[arg(short, long)]
        case_sensitive: bool,
    },

    /// Show the locale associated with a language code (best effort)
    Locale {
        /// 2- or 3-letter code
        #[arg(value_name = "CODE")]
        code: String,
    },

    /// Count languages per type and scope
    Stats,
}

// CLI argument types
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum PartArg {
    #[value(name = "1")]
    Part1,
    #[value(name = "2")]
    Part2,
    #[value(name = "2b")]
    Part2b,
    #[value(name = "3")]
    Part3,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum TypeArg {
    Ancient,
    Constructed,
    Extinct,
    Historical,
    Living,
    Special,
}

impl From<TypeArg> for LanguageType {
    fn from(arg: TypeArg) -> Self {
        match arg {
            TypeArg::Ancient => LanguageType::Ancient,
            TypeArg::Constructed => LanguageType::Constructed,
            TypeArg::Extinct => LanguageType::Extinct,
            TypeArg::Historical => LanguageType::Historical,
            TypeArg::Living => LanguageType::Living,
            TypeArg::Special => LanguageType::Special,
        }
    }
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum ScopeArg {
    Collective,
    Individual,
    Local,
    #[value(name = "macrolanguage", alias = "macro")]
    MacroLanguage,
    Special,
}

impl From<ScopeArg> for LanguageScope {
    fn from(arg: ScopeArg) -> Self {
        match arg {
            ScopeArg::Collective => LanguageScope::Collective,
            ScopeArg::Individual => LanguageScope::Individual,
            ScopeArg::Local => LanguageScope::Local,
            ScopeArg::MacroLanguage => LanguageScope::MacroLanguage,
            ScopeArg::Special => LanguageScope::Special,
        }
    }
}

#[derive(Serialize)]
struct LocaleView<'a> {
    language: &'a Language,
    locale: Option<&'a Locale>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.quiet)?;

    match cli.command {
        Commands::Generate { input, output } => generate(&input, output.as_deref()),
        Commands::Query(command) => {
            let registry = load_registry(cli.data.as_deref())?;
            query(command, &registry, cli.format)
        }
    }
}

fn load_registry(data: Option<&Path>) -> Result<Cow<'static, Registry>> {
    match data {
        Some(path) => {
            let registry = Registry::from_table(path)
                .with_context(|| format!("failed to load {}", path.display()))?;
            Ok(Cow::Owned(registry))
        }
        None => Ok(Cow::Borrowed(Registry::builtin())),
    }
}

fn generate(input: &Path, output: Option<&Path>) -> Result<()> {
    let languages =
        tab::read_table(input).with_context(|| format!("failed to load {}", input.display()))?;
    // Fail on bad codes or duplicates before emitting anything.
    Registry::new(languages.clone())?;
    let source = codegen::render_table(&languages);
    match output {
        Some(path) => {
            fs::write(path, source)
                .with_context(|| format!("failed to write {}", path.display()))?;
            tracing::info!(languages = languages.len(), path = %path.display(), "wrote code table");
        }
        None => print!("{source}"),
    }
    Ok(())
}

fn query(command: QueryCommand, registry: &Registry, format: OutputFormat) -> Result<()> {
    let formatter = LanguageFormatter::new();

    match command {
        QueryCommand::Lookup { code, part } => {
            let found = match part {
                None => registry.lookup(&code),
                Some(PartArg::Part1) => registry.lookup_by_part1(&code),
                Some(PartArg::Part2) => registry.lookup_by_part2(&code),
                Some(PartArg::Part2b) => registry.lookup_by_part2b(&code),
                Some(PartArg::Part3) => registry.lookup_by_part3(&code),
            };
            let language = found.ok_or_else(|| anyhow!("no language with code `{code}`"))?;
            emit(format, language, || formatter.render_detail(language))
        }

        QueryCommand::List {
            language_type,
            scope,
        } => {
            let scope = scope.map(LanguageScope::from);
            let languages: Vec<&Language> = match language_type.map(LanguageType::from) {
                Some(ty) => registry.filter_by_type(ty).collect(),
                None => registry.iter().collect(),
            };
            let languages: Vec<&Language> = languages
                .into_iter()
                .filter(|l| scope.map_or(true, |s| l.scope() == s))
                .collect();
            emit(format, &languages, || formatter.render_list(&languages))
        }

        QueryCommand::Search {
            text,
            case_sensitive,
        } => {
            let languages = registry.search_by_name(&text, !case_sensitive)?;
            emit(format, &languages, || formatter.render_list(&languages))
        }

        QueryCommand::Locale { code } => {
            let language = registry
                .lookup(&code)
                .ok_or_else(|| anyhow!("no language with code `{code}`"))?;
            let locale = language.locale();
            let view = LocaleView {
                language,
                locale: (!locale.is_invariant()).then_some(locale),
            };
            emit(format, &view, || formatter.render_locale(language, locale))
        }

        QueryCommand::Stats => {
            let stats = RegistryStats::collect(registry);
            emit(format, &stats, || formatter.render_stats(&stats))
        }
    }
}

fn emit<T: Serialize + ?Sized>(
    format: OutputFormat,
    value: &T,
    text: impl FnOnce() -> String,
) -> Result<()> {
    match format.serialize(value)? {
        Some(serialized) => println!("{serialized}"),
        None => println!("{}", text()),
    }
    Ok(())
}
