use std::{env, ffi::OsString};

use anyhow::Result;
use clap::{Parser, ValueEnum};
use console::style;
use dialoguer::{Input, Select, theme::ColorfulTheme};

use crate::{
    application::commands::{GenerateTestInsertsCommand, OutputTarget, STDOUT_MARKER},
    domain::{
        fixture_settings::{
            DEFAULT_DESCRIPTION, DEFAULT_END_ID, DEFAULT_OWNER, DEFAULT_START_ID,
            DEFAULT_TOKEN_PAD, DEFAULT_TOKEN_PREFIX, DEFAULT_UNIT, FixtureSettings,
        },
        sql_dialect::SqlDialectKind,
    },
};

#[derive(Debug, Parser)]
#[command(
    name = "fixture-inserts",
    version,
    about = "Generate INSERT statements for the objects and tokens load-test tables"
)]
struct CliArgs {
    #[arg(
        long = "start-id",
        short = 's',
        visible_alias = "n0",
        default_value_t = DEFAULT_START_ID,
        allow_negative_numbers = true,
        help = "First object id, inclusive"
    )]
    start_id: i64,
    #[arg(
        long = "end-id",
        short = 'e',
        visible_alias = "n1",
        default_value_t = DEFAULT_END_ID,
        allow_negative_numbers = true,
        help = "Last object id, inclusive"
    )]
    end_id: i64,
    #[arg(long, short = 'f', default_value = STDOUT_MARKER, help = "Output file, - for stdout")]
    file: String,
    #[arg(long, short = 'b', help = "Rows per INSERT statement pair")]
    batch_size: Option<usize>,
    #[arg(long, default_value_t = DEFAULT_OWNER, allow_negative_numbers = true)]
    owner: i64,
    #[arg(long, default_value = DEFAULT_UNIT)]
    unit: String,
    #[arg(long, default_value = DEFAULT_TOKEN_PREFIX)]
    token_prefix: String,
    #[arg(long, default_value_t = DEFAULT_TOKEN_PAD)]
    token_pad: char,
    #[arg(long = "description", default_value = DEFAULT_DESCRIPTION)]
    description_prefix: String,
    #[arg(long, short = 'd', value_enum, default_value_t = CliDialect::Mysql)]
    dialect: CliDialect,
    #[arg(long, short = 'i', help = "Prompt for the range, batching, dialect and output")]
    interactive: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum CliDialect {
    Mysql,
    Sqlite,
    Postgres,
}

impl From<CliDialect> for SqlDialectKind {
    fn from(value: CliDialect) -> Self {
        match value {
            CliDialect::Mysql => SqlDialectKind::MySql,
            CliDialect::Sqlite => SqlDialectKind::Sqlite,
            CliDialect::Postgres => SqlDialectKind::PostgreSql,
        }
    }
}

pub fn collect_generate_command() -> Result<GenerateTestInsertsCommand> {
    let args = CliArgs::parse_from(normalize_legacy_flags(env::args_os()));
    if args.interactive {
        return collect_interactive_command(args);
    }
    Ok(collect_command_from_args(args))
}

/// Accepts the single-dash `-n0`/`-n1` spellings, which clap would otherwise
/// read as `-n` with a value.
fn normalize_legacy_flags<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    args.into_iter()
        .map(|arg| match arg.to_str() {
            Some(flag) if is_legacy_flag(flag) => OsString::from(format!("-{flag}")),
            _ => arg,
        })
        .collect()
}

fn is_legacy_flag(arg: &str) -> bool {
    ["-n0", "-n1"]
        .iter()
        .any(|flag| arg == *flag || arg.starts_with(&format!("{flag}=")))
}

fn settings_from_args(args: &CliArgs) -> FixtureSettings {
    FixtureSettings {
        owner: args.owner,
        unit: args.unit.clone(),
        token_prefix: args.token_prefix.clone(),
        token_pad: args.token_pad,
        description_prefix: args.description_prefix.clone(),
        dialect: args.dialect.into(),
    }
}

fn collect_command_from_args(args: CliArgs) -> GenerateTestInsertsCommand {
    GenerateTestInsertsCommand {
        start_id: args.start_id,
        end_id: args.end_id,
        batch_size: args.batch_size,
        output: OutputTarget::from_arg(&args.file),
        settings: settings_from_args(&args),
    }
}

fn collect_interactive_command(args: CliArgs) -> Result<GenerateTestInsertsCommand> {
    let theme = ColorfulTheme::default();

    eprintln!();
    eprintln!(
        "{}",
        style(" FIXTURE INSERTS ")
            .black()
            .on_cyan()
            .bold()
            .underlined()
    );
    eprintln!("{}", style("Objects and tokens for load testing").dim());
    eprintln!();

    let start_id: i64 = Input::with_theme(&theme)
        .with_prompt("Start ID")
        .default(args.start_id)
        .interact_text()?;

    let end_id: i64 = Input::with_theme(&theme)
        .with_prompt("End ID")
        .default(args.end_id.max(start_id))
        .validate_with(|value: &i64| {
            if *value < start_id {
                Err("End ID must be greater than or equal to Start ID")
            } else {
                Ok(())
            }
        })
        .interact_text()?;

    let batch_size: usize = Input::with_theme(&theme)
        .with_prompt("Rows per statement (0 for a single statement)")
        .default(args.batch_size.unwrap_or(0))
        .interact_text()?;

    let dialect_items = SqlDialectKind::ALL
        .iter()
        .map(|dialect| dialect.as_str())
        .collect::<Vec<_>>();
    let default_dialect = SqlDialectKind::from(args.dialect);
    let selected_dialect_index = Select::with_theme(&theme)
        .with_prompt("SQL dialect")
        .default(
            SqlDialectKind::ALL
                .iter()
                .position(|dialect| *dialect == default_dialect)
                .unwrap_or(0),
        )
        .items(&dialect_items)
        .interact()?;

    let output_name: String = Input::with_theme(&theme)
        .with_prompt("Output file (- for stdout)")
        .default(args.file.clone())
        .interact_text()?;

    let mut settings = settings_from_args(&args);
    settings.dialect = SqlDialectKind::ALL[selected_dialect_index];

    Ok(GenerateTestInsertsCommand {
        start_id,
        end_id,
        batch_size: (batch_size > 0).then_some(batch_size),
        output: OutputTarget::from_arg(&output_name),
        settings,
    })
}
