use {
    clap::{arg, ArgAction, Command},
    ddlfmt::cmd::{self, Error as ExecutionError, Input},
    snafu::prelude::*,
    std::{env, io::Write, path::PathBuf, process},
    tracing_subscriber::EnvFilter,
};

#[derive(Debug, Snafu)]
pub enum Error {
    #[snafu(display("{}", source))]
    ExecuteCommand { source: ExecutionError },

    #[snafu(display("Failed to write output, source: {}", source))]
    WriteOutput { source: std::io::Error },
}

pub type Result<T> = std::result::Result<T, Error>;

const DDLFMT_LOG: &str = "DDLFMT_LOG";

fn cli() -> Command {
    let pkg_name = env!("CARGO_PKG_NAME");

    Command::new(pkg_name)
        .bin_name(pkg_name)
        .about(env!("CARGO_PKG_DESCRIPTION"))
        .arg(arg!(--tokens "print the token stream instead of the canonical statements"))
        .arg(
            arg!([FILE] "DDL scripts to read, standard input when absent")
                .action(ArgAction::Append)
                .value_parser(clap::value_parser!(PathBuf)),
        )
}

fn init_tracing() {
    let filter = env::var(DDLFMT_LOG)
        .ok()
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .ok();
}

fn main() {
    init_tracing();

    if let Err(err) = try_main() {
        eprintln!("{}", err);
        process::exit(2);
    }
}

fn try_main() -> Result<()> {
    let matches = cli().get_matches();

    let inputs = match matches.get_many::<PathBuf>("FILE") {
        Some(paths) => paths.cloned().map(Input::File).collect(),
        None => vec![Input::Stdin],
    };

    let out = cmd::run(&inputs, matches.get_flag("tokens")).context(ExecuteCommandSnafu)?;

    std::io::stdout()
        .write_all(out.as_bytes())
        .context(WriteOutputSnafu)
}
