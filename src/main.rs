use std::path::PathBuf;
use std::process;

use anyhow::Result;
use clap::Parser;

use git_changelog::aggregate::build_changelog;
use git_changelog::config;
use git_changelog::filter::{Combine, PatternSet};
use git_changelog::git::{ensure_present, Git2History, SyncMode};
use git_changelog::output;
use git_changelog::range::RangeSpec;
use git_changelog::repos;
use git_changelog::ui;

#[derive(clap::Parser)]
#[command(
    name = "git-changelog",
    version,
    about = "Aggregate filtered commit history from many repositories into one changelog"
)]
struct Args {
    #[arg(
        short,
        long,
        value_name = "FILE",
        help = "Read the repository list from FILE, one URL or path per line"
    )]
    input: PathBuf,

    #[arg(
        short,
        long,
        value_name = "FILE",
        help = "Write the changelog to FILE instead of stdout"
    )]
    output: Option<PathBuf>,

    #[arg(
        short,
        long,
        value_name = "REV",
        help = "Commit or tag to start searching from (inclusive)"
    )]
    start: Option<String>,

    #[arg(
        short,
        long,
        value_name = "REV",
        help = "Do not look at commits past this commit or tag (inclusive)"
    )]
    end: Option<String>,

    #[arg(
        long = "match",
        value_name = "PATTERN",
        num_args = 1..,
        help = "Keep only commits matching every PATTERN"
    )]
    match_patterns: Vec<String>,

    #[arg(
        long,
        value_name = "PATTERN",
        num_args = 1..,
        help = "Drop commits matching any PATTERN"
    )]
    exclude: Vec<String>,

    #[arg(
        short = 'r',
        long = "repo",
        value_name = "NAME",
        num_args = 1..,
        help = "Only look at the named repositories from the input list"
    )]
    repo: Vec<String>,

    #[arg(
        short,
        long,
        help = "Start clean: remove previously cloned repositories first"
    )]
    clean: bool,

    #[arg(short, long, help = "Do not print progress messages")]
    quiet: bool,

    #[arg(long, value_name = "FILE", help = "Custom configuration file path")]
    config: Option<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = match config::load_config(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            ui::display_error(&e.to_string());
            process::exit(1);
        }
    };

    // CLI-supplied patterns replace configured defaults rather than merging
    let match_raw = if args.match_patterns.is_empty() {
        config.filters.match_patterns.clone()
    } else {
        args.match_patterns.clone()
    };
    let exclude_raw = if args.exclude.is_empty() {
        config.filters.exclude.clone()
    } else {
        args.exclude.clone()
    };

    // Compile filters before any repository is touched so bad pattern syntax
    // fails the whole run up front
    let (match_set, exclude_set) = match (
        PatternSet::compile(&match_raw, Combine::All),
        PatternSet::compile(&exclude_raw, Combine::None),
    ) {
        (Ok(m), Ok(e)) => (m, e),
        (Err(e), _) | (_, Err(e)) => {
            ui::display_error(&e.to_string());
            process::exit(1);
        }
    };

    let repo_list = match repos::read_repo_list(&args.input, &args.repo) {
        Ok(list) => list,
        Err(e) => {
            ui::display_error(&e.to_string());
            process::exit(1);
        }
    };

    let range = RangeSpec::new(args.start.clone(), args.end.clone());
    let workdir = PathBuf::from(&config.workdir);
    let mode = if args.clean {
        SyncMode::Clean
    } else {
        SyncMode::Refresh
    };
    let quiet = args.quiet;

    let changelog = build_changelog(
        &repo_list,
        |spec| {
            ui::display_status(
                quiet,
                &format!("Getting latest {} from {}", spec, spec.url),
            );
            let path = ensure_present(spec, &workdir, mode)?;
            ui::display_status(quiet, &format!("Extracting commit set from {}", spec.name));
            Git2History::open(&path)
        },
        &range,
        &match_set,
        &exclude_set,
    );

    for warning in &changelog.warnings {
        ui::display_warning(warning);
    }

    if let Err(e) = output::write_changelog(&changelog, args.output.as_deref()) {
        ui::display_error(&format!("cannot write changelog: {}", e));
        process::exit(1);
    }

    Ok(())
}
