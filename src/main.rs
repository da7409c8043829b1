use anyhow::Result;
use clap::{ArgAction, Parser};
use gas::areas::git::GitCli;
use gas::areas::session::Session;
use gas::artifacts::report::palette::Palette;
use gas::artifacts::summary::unpushed_policy::UnpushedPolicy;
use gas::commands::porcelain::status::StatusOptions;
use is_terminal::IsTerminal;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(
    name = "gas",
    version,
    author = "Sami Barbut-Dica",
    about = "Show git branches with changes not pushed",
    long_about = "Scans a directory tree for git working copies and prints, for each one, \
    the branches that have uncommitted changes, commits not pushed to or not pulled from \
    their upstream, or no upstream at all.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
"
)]
struct Cli {
    #[arg(index = 1, help = "The directory to scan (defaults to the current directory)")]
    dir: Option<PathBuf>,
    #[arg(short, long, help = "Print all branches, not only those with changes not pushed")]
    all: bool,
    #[arg(
        short = 'e',
        long = "error-code",
        help = "Exit with code 1 if any changes are not pushed"
    )]
    error_code: bool,
    #[arg(short, long, help = "Fetch the upstream remotes before inspecting branches")]
    fetch: bool,
    #[arg(long = "no-color", help = "Disable colored output")]
    no_color: bool,
    #[arg(
        long = "ignore-behind",
        help = "Do not count branches that are only behind their upstream"
    )]
    ignore_behind: bool,
    #[arg(
        long,
        value_name = "SECS",
        help = "Kill any git command running longer than this many seconds"
    )]
    timeout: Option<u64>,
    #[arg(long, value_name = "PATH", default_value = "git", help = "The git executable to run")]
    git: PathBuf,
    #[arg(short, long, action = ArgAction::Count, help = "Log more details to stderr (-v, -vv)")]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(&cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<ExitCode> {
    let dir = match &cli.dir {
        Some(dir) => dir.clone(),
        None => std::env::current_dir()?,
    };

    let git = GitCli::new(cli.git.clone(), cli.timeout.map(Duration::from_secs));
    tracing::debug!(
        program = %git.program().display(),
        timeout = ?git.timeout(),
        scan_root = %dir.display(),
        "starting scan"
    );
    let session = Session::new(&dir, Box::new(git), Box::new(std::io::stdout()));

    let opts = StatusOptions {
        all: cli.all,
        fetch_upstream: cli.fetch,
        palette: if !cli.no_color && std::io::stdout().is_terminal() {
            Palette::colored()
        } else {
            Palette::plain()
        },
        policy: if cli.ignore_behind {
            UnpushedPolicy::ignoring_behind()
        } else {
            UnpushedPolicy::default()
        },
    };

    let has_unpushed = session.status(&opts)?;

    if cli.error_code && has_unpushed {
        return Ok(ExitCode::FAILURE);
    }

    Ok(ExitCode::SUCCESS)
}

fn init_logging(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("gas=warn")),
        1 => EnvFilter::new("gas=debug"),
        _ => EnvFilter::new("gas=trace"),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .compact()
                .without_time()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}
