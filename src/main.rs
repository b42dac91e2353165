use anyhow::Result;
use clap::Parser;

use bump_check::check::{self, CheckArgs};
use bump_check::config::{self, Backend};
use bump_check::git::{CommandRepository, Git2Repository, Repository};
use bump_check::ui;

#[derive(clap::Parser)]
#[command(
    name = "bump-check",
    about = "Check that a branch bumps its pom.xml version and bump it if not"
)]
struct Args {
    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(long, value_enum, help = "How to read git history")]
    backend: Option<Backend>,

    #[arg(long, help = "Report the bumped version without writing the descriptor")]
    dry_run: bool,

    #[arg(long, help = "Exit with status 1 when the version was not bumped")]
    strict: bool,

    #[arg(short, long, help = "Print version information")]
    version: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.version {
        println!("bump-check {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let mut config = match config::load_config(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            ui::display_error(&format!("Error loading config: {}", e));
            std::process::exit(1);
        }
    };
    if let Some(backend) = args.backend {
        config.git.backend = backend;
    }
    let strict = args.strict || config.behavior.fail_if_not_bumped;

    let workdir = std::env::current_dir()?;
    let repo: Box<dyn Repository> = match config.git.backend {
        Backend::Cli => Box::new(CommandRepository::new(&workdir)),
        Backend::Libgit2 => match Git2Repository::open(&workdir) {
            Ok(repo) => Box::new(repo),
            Err(e) => {
                ui::display_error(&format!("Git repository error: {}", e));
                std::process::exit(1);
            }
        },
    };

    let check_args = CheckArgs {
        dry_run: args.dry_run,
    };
    let outcome = match check::run_check_with(
        repo.as_ref(),
        &config,
        &check_args,
        &workdir,
        ui::display_warning,
    ) {
        Ok(outcome) => outcome,
        Err(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(1);
        }
    };

    ui::display_outcome(&outcome, &config.descriptor.path);

    if strict && !outcome.bumped {
        std::process::exit(1);
    }

    Ok(())
}
