#![warn(rust_2018_idioms, unused_lifetimes)]
#![allow(clippy::print_stderr, clippy::print_stdout)]

pub mod wizard;

use a11ykit_core::eslint::{self, LintPatch};
use a11ykit_core::installer::Installer;
use a11ykit_core::{Preferences, Project, manifest, workflow};
use anyhow::{Context, Result};
use clap::Parser;
use std::path::Path;
use std::process::ExitCode;

/// The main CLI structure parsing command-line arguments.
///
/// The tool is fully interactive: beyond the built-in `--help` and
/// `--version` there are no flags, and it always operates on the current
/// directory.
#[derive(Debug, Parser)]
#[command(name = "a11ykit")]
#[command(author = env!("CARGO_PKG_AUTHORS"))]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Add accessibility tooling to an existing web front-end project")]
#[command(long_about = None)]
struct Cli {}

fn main() -> ExitCode {
    let Cli {} = Cli::parse();

    // Single catch point: log the error and exit non-zero. No retries, no
    // partial-failure recovery.
    if let Err(err) = run() {
        eprintln!("❌ {err:#}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

fn run() -> Result<()> {
    println!("♿ a11ykit: accessibility tooling setup\n");

    let cwd = std::env::current_dir().context("Could not determine the current directory")?;
    let project = Project::discover(&cwd)?;
    println!("📦 Package manager: {}", project.manager);

    let prefs = wizard::collect()?;
    if prefs.is_empty() {
        println!("\nNothing selected, nothing to do. 👋");
        return Ok(());
    }

    install_packages(&project, &prefs)?;
    apply_scripts(&project, &prefs)?;
    if prefs.lint {
        patch_eslint(&project)?;
    }
    if prefs.ci && !prefs.tools.is_empty() {
        let path = workflow::write(project.root(), &prefs, project.manager)?;
        println!("⚙️  Wrote {}", rel(&path, project.root()));
    }

    print_summary(&project, &prefs);
    Ok(())
}

fn install_packages(project: &Project, prefs: &Preferences) -> Result<()> {
    let packages = prefs.packages();
    if packages.is_empty() {
        return Ok(());
    }

    let installer = Installer::new(project);
    println!("\n📥 Installing dev dependencies: {}", packages.join(", "));
    println!("   $ {}\n", installer.command_line(&packages));
    installer.install_dev(&packages)?;
    println!();
    Ok(())
}

fn apply_scripts(project: &Project, prefs: &Preferences) -> Result<()> {
    for change in manifest::add_scripts(project, prefs)? {
        match change.previous {
            Some(old) if old != change.command => {
                println!("⚠️  Replaced script '{}' (was: {old})", change.name);
            },
            _ => println!("📝 Added script '{}' → {}", change.name, change.command),
        }
    }
    Ok(())
}

fn patch_eslint(project: &Project) -> Result<()> {
    match eslint::apply(project)? {
        LintPatch::Updated(path) => {
            println!("🧹 Added jsx-a11y to {}", rel(&path, project.root()));
        },
        LintPatch::Created(path) => {
            println!("🧹 Created {} with the jsx-a11y preset", rel(&path, project.root()));
        },
        LintPatch::ManualStepRequired(path) => {
            println!(
                "⚠️  {} is code, not JSON; add these lines yourself:",
                rel(&path, project.root())
            );
            for line in eslint::manual_instructions() {
                println!("   {line}");
            }
        },
    }
    Ok(())
}

fn print_summary(project: &Project, prefs: &Preferences) {
    if !prefs.tools.is_empty() {
        println!("\n✨ Setup complete! Selected checks:\n");
        println!("{:<12} {:<18} {:<55}", "Check", "Script", "Docs");
        println!("{:-<85}", "");
        for tool in &prefs.tools {
            println!("{:<12} {:<18} {:<55}", tool.job_id(), tool.script_name(), tool.docs());
        }
        println!();
        if prefs.tools.len() >= 2 {
            println!("▶️  '{} a11y' runs every check at once.", project.manager.run_prefix());
        }
        println!("💡 The scripts expect your app on http://localhost:3000.");
    }
    if prefs.ci {
        println!("🤖 CI checks every pull request and pushes to main.");
    }
}

fn rel<'a>(path: &'a Path, root: &Path) -> std::path::Display<'a> {
    path.strip_prefix(root).unwrap_or(path).display()
}
