use std::collections::HashMap;
use std::env;
use std::path::Path;
use std::process::ExitCode;

use clap::{arg, command, crate_name, ArgMatches, Command};
use cli::report::{Export, ReportParams, EXPORT_VALUES};
use kernel::Mode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod cli;

const DEFAULT_LOG_FILTER: &str = "cloudcap=warn,client=warn,bucket=warn";

/// Credential flags fall back to `.env` values when neither the flag nor the
/// environment variable is given.
fn report_command(
    name: &'static str,
    about: &'static str,
    dotenv: &HashMap<String, String>,
) -> Command {
    let mut user = arg!(-u --user <USER>)
        .env(cli::USER_ENV)
        .required(true)
        .help("Management API user");
    if let Some(value) = dotenv.get(cli::USER_ENV) {
        user = user.required(false).default_value(value.clone());
    }

    let mut password = arg!(-p --password <PASSWORD>)
        .env(cli::PASSWORD_ENV)
        .hide_env_values(true)
        .required(true)
        .help("Management API password");
    if let Some(value) = dotenv.get(cli::PASSWORD_ENV) {
        password = password
            .required(false)
            .default_value(value.clone())
            .hide_default_value(true);
    }

    Command::new(name)
        .about(about)
        .arg(
            arg!(-c --cluster <CLUSTER>)
                .required(true)
                .help("Cluster hostname or ip"),
        )
        .arg(
            arg!(-e --export <EXPORT>)
                .required(false)
                .value_parser(EXPORT_VALUES)
                .default_value("none")
                .help("Print a table (none) or export a .csv file (local or cloud)"),
        )
        .arg(user)
        .arg(password)
}

fn build_cli(dotenv: &HashMap<String, String>) -> Command {
    command!(crate_name!())
        .version(clap::crate_version!())
        .about(clap::crate_description!())
        .subcommand(report_command(
            cli::BACKUP_SUBCOMMAND,
            cli::BACKUP_DESCRIPTION,
            dotenv,
        ))
        .subcommand(report_command(
            cli::TIERING_SUBCOMMAND,
            cli::TIERING_DESCRIPTION,
            dotenv,
        ))
        .subcommand(Command::new(cli::VERSION_SUBCOMMAND).about(cli::VERSION_DESCRIPTION))
        .subcommand(Command::new(cli::BUGREPORT_SUBCOMMAND).about(cli::BUGREPORT_DESCRIPTION))
        .arg_required_else_help(true)
        .disable_version_flag(true)
}

fn report_params(mode: Mode, matches: &ArgMatches) -> ReportParams {
    let value = |id: &str| matches.get_one::<String>(id).cloned().unwrap_or_default();
    ReportParams {
        cluster: value("cluster"),
        user: value("user"),
        password: value("password"),
        mode,
        export: value("export").parse().unwrap_or(Export::None),
    }
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            env::var("RUST_LOG").unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

#[tokio::main]
async fn main() -> ExitCode {
    let dotenv = match cli::dotenv::load(Path::new(cli::dotenv::DOTENV_FILE)) {
        Ok(values) => values,
        Err(e) => {
            eprintln!("error: cannot read {}: {e}", cli::dotenv::DOTENV_FILE);
            return ExitCode::FAILURE;
        }
    };
    let cli = build_cli(&dotenv).get_matches();

    init_tracing();

    let params = match cli.subcommand() {
        Some((cli::VERSION_SUBCOMMAND, _)) => {
            cli::version::run();
            return ExitCode::SUCCESS;
        }
        Some((cli::BUGREPORT_SUBCOMMAND, _)) => {
            cli::bugreport::run();
            return ExitCode::SUCCESS;
        }
        Some((cli::BACKUP_SUBCOMMAND, matches)) => report_params(Mode::Backup, matches),
        Some((cli::TIERING_SUBCOMMAND, matches)) => report_params(Mode::Tiering, matches),
        _ => return ExitCode::SUCCESS,
    };

    match cli::report::run(params).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
