//! Build automation for ionosctl
//!
//! Usage: cargo xtask <command>

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use xshell::{cmd, Shell};

const BIN_NAME: &str = "ionosctl";

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Build automation for ionosctl")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the binary
    Build {
        #[arg(long)]
        release: bool,
    },
    /// Run unit and integration tests
    Test {
        /// Only run the tests/ suites
        #[arg(long)]
        integration: bool,
    },
    /// Package a release tarball under dist/
    Dist {
        /// Target triple (e.g., x86_64-unknown-linux-gnu)
        #[arg(long)]
        target: Option<String>,
    },
    /// Install the release binary under <prefix>/bin
    Install {
        #[arg(long, default_value = "/usr/local")]
        prefix: String,
    },
    /// Format check, clippy and tests
    Ci,
    /// Format code
    Format {
        #[arg(long)]
        check: bool,
    },
    /// Run clippy with warnings denied
    Clippy,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let sh = Shell::new()?;
    sh.change_dir(project_root());

    match cli.command {
        Commands::Build { release } => build(&sh, release),
        Commands::Test { integration } => test(&sh, integration),
        Commands::Dist { target } => dist(&sh, target.as_deref()),
        Commands::Install { prefix } => install(&sh, Path::new(&prefix)),
        Commands::Ci => {
            format(&sh, true)?;
            clippy(&sh)?;
            test(&sh, false)
        }
        Commands::Format { check } => format(&sh, check),
        Commands::Clippy => clippy(&sh),
    }
}

fn build(sh: &Shell, release: bool) -> Result<()> {
    if release {
        cmd!(sh, "cargo build --release --bin {BIN_NAME}").run()?;
    } else {
        cmd!(sh, "cargo build --bin {BIN_NAME}").run()?;
    }
    Ok(())
}

fn test(sh: &Shell, integration: bool) -> Result<()> {
    if integration {
        cmd!(sh, "cargo test -p ionosctl --test integration_test --test cli_test").run()?;
    } else {
        cmd!(sh, "cargo test --workspace").run()?;
    }
    Ok(())
}

fn dist(sh: &Shell, target: Option<&str>) -> Result<()> {
    let binary = match target {
        Some(triple) => {
            cmd!(sh, "cargo build --release --bin {BIN_NAME} --target {triple}").run()?;
            project_root().join(format!("target/{}/release/{}", triple, BIN_NAME))
        }
        None => {
            build(sh, true)?;
            release_binary()
        }
    };

    let dist_dir = project_root().join("dist");
    sh.create_dir(&dist_dir)?;
    sh.copy_file(&binary, dist_dir.join(BIN_NAME))?;

    let archive = format!("{}-{}.tar.gz", BIN_NAME, env!("CARGO_PKG_VERSION"));
    cmd!(sh, "tar -czf {archive} -C dist {BIN_NAME}")
        .run()
        .context("Failed to create tarball")?;

    println!("Created {}", archive);
    Ok(())
}

fn install(sh: &Shell, prefix: &Path) -> Result<()> {
    let binary = release_binary();
    if !binary.exists() {
        build(sh, true)?;
    }

    let bin_dir = prefix.join("bin");
    sh.create_dir(&bin_dir)?;
    let target = bin_dir.join(BIN_NAME);
    sh.copy_file(&binary, &target)?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(&target, std::fs::Permissions::from_mode(0o755))?;
    }

    println!("Installed {}", target.display());
    Ok(())
}

fn format(sh: &Shell, check: bool) -> Result<()> {
    if check {
        cmd!(sh, "cargo fmt --all -- --check").run()?;
    } else {
        cmd!(sh, "cargo fmt --all").run()?;
    }
    Ok(())
}

fn clippy(sh: &Shell) -> Result<()> {
    cmd!(sh, "cargo clippy --workspace --all-targets -- -D warnings").run()?;
    Ok(())
}

fn release_binary() -> PathBuf {
    project_root().join("target/release").join(BIN_NAME)
}

fn project_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_default()
}
