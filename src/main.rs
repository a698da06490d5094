use anyhow::Result;
use clap::Parser;
use std::io::Read;

use git_release::bump::{self, BumpDecision};
use git_release::changelog;
use git_release::classify;
use git_release::config;
use git_release::domain::{RawCommit, Version};
use git_release::log::{CommitLog, Git2Log};
use git_release::record;
use git_release::ui;

#[derive(clap::Parser)]
#[command(
    name = "git-release",
    about = "Classify commit history, compute the next semantic version, and render a changelog fragment"
)]
struct Args {
    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(
        long,
        help = "Read delimited log records from stdin instead of the repository"
    )]
    stdin: bool,

    #[arg(long, help = "Prior release tag to bump from (stdin mode)")]
    prior_tag: Option<String>,

    #[arg(short, long, help = "Create the local tag for the computed version")]
    tag: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = match config::load_config(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            ui::display_error(&format!("Failed to load config: {}", e));
            std::process::exit(1);
        }
    };

    // Gather the commit sequence and the prior release tag, either from the
    // repository or from a pre-captured log stream on stdin.
    let (commits, prior_tag, repo_log): (Vec<RawCommit>, Option<String>, Option<Git2Log>) =
        if args.stdin {
            let mut stream = String::new();
            std::io::stdin().read_to_string(&mut stream)?;
            let commits = match record::decode_records(&stream) {
                Ok(commits) => commits,
                Err(e) => {
                    ui::display_error(&e.to_string());
                    std::process::exit(1);
                }
            };
            (commits, args.prior_tag.clone(), None)
        } else {
            let log = match Git2Log::discover() {
                Ok(log) => log,
                Err(e) => {
                    ui::display_error(&e.to_string());
                    std::process::exit(1);
                }
            };
            let prior = log.latest_version_tag(&config.tags.prefix)?;
            let commits = log.commits_since(prior.as_deref())?;
            (commits, prior, Some(log))
        };

    // Prior tag must parse before any bump arithmetic happens.
    let prior_version = match prior_tag.as_deref() {
        Some(tag) => match Version::parse(tag) {
            Ok(version) => Some(version),
            Err(e) => {
                ui::display_error(&format!("Prior tag '{}': {}", tag, e));
                std::process::exit(1);
            }
        },
        None => None,
    };

    let result = classify::classify(&commits);
    ui::display_classification_summary(&result);

    let decision = match bump::decide(prior_version, &result) {
        BumpDecision::NoRelease { version } => {
            // Deliberate terminal outcome: stop without error.
            ui::display_no_release(&version, &result);
            return Ok(());
        }
        BumpDecision::Release(decision) => decision,
    };

    ui::display_release_decision(prior_version.as_ref(), &decision);

    let fragment = changelog::build_fragment(&result, &decision, &config.repository);
    println!("\n{}", fragment.render());

    if args.tag {
        let tag_name = config.tag_name(&decision.next_version);
        match &repo_log {
            Some(log) => {
                ui::display_status(&format!("Creating tag: {}", tag_name));
                log.create_tag(&tag_name)?;
                ui::display_success(&format!("Created tag: {}", tag_name));
            }
            None => {
                ui::display_error("--tag requires repository access, not available with --stdin");
                std::process::exit(1);
            }
        }
    }

    Ok(())
}
