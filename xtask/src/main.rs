//! Developer tasks for the postmeter workspace.
//!
//! Run with `cargo xtask <task>`.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

#[derive(Parser)]
#[command(name = "xtask", about = "Workspace automation tasks")]
struct Xtask {
    #[command(subcommand)]
    task: Task,
}

#[derive(Subcommand)]
enum Task {
    /// Generate the man page(s)
    Man {
        /// Output directory
        #[arg(long, default_value = "target/man")]
        out_dir: PathBuf,
    },
    /// Generate shell completions
    Completions {
        /// Output directory
        #[arg(long, default_value = "target/completions")]
        out_dir: PathBuf,
        /// Shells to generate for (default: all)
        #[arg(long, value_enum)]
        shell: Vec<ShellArg>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum ShellArg {
    Bash,
    Zsh,
    Fish,
    Elvish,
    Powershell,
}

impl From<ShellArg> for Shell {
    fn from(s: ShellArg) -> Self {
        match s {
            ShellArg::Bash => Self::Bash,
            ShellArg::Zsh => Self::Zsh,
            ShellArg::Fish => Self::Fish,
            ShellArg::Elvish => Self::Elvish,
            ShellArg::Powershell => Self::PowerShell,
        }
    }
}

fn main() -> io::Result<()> {
    match Xtask::parse().task {
        Task::Man { out_dir } => gen_man(&out_dir),
        Task::Completions { out_dir, shell } => gen_completions(&out_dir, &shell),
    }
}

fn gen_man(out_dir: &Path) -> io::Result<()> {
    fs::create_dir_all(out_dir)?;
    let cmd = postmeter::command();
    clap_mangen::generate_to(cmd, out_dir)?;
    println!("man pages written to {}", out_dir.display());
    Ok(())
}

fn gen_completions(out_dir: &Path, shells: &[ShellArg]) -> io::Result<()> {
    fs::create_dir_all(out_dir)?;
    let shells: Vec<Shell> = if shells.is_empty() {
        vec![
            Shell::Bash,
            Shell::Zsh,
            Shell::Fish,
            Shell::Elvish,
            Shell::PowerShell,
        ]
    } else {
        shells.iter().copied().map(Shell::from).collect()
    };

    for shell in shells {
        let mut cmd = postmeter::command();
        let path = clap_complete::generate_to(shell, &mut cmd, "postmeter", out_dir)?;
        println!("wrote {}", path.display());
    }
    Ok(())
}
