//! `zserio-package` binary: one-shot packaging pipeline.
//!
//! Fetches the latest compiler release, assembles the publishable package
//! directory, derives the long description, writes the distribution
//! manifest, and optionally invokes an external packaging command.

use std::path::PathBuf;

use clap::Parser;
use miette::Result;

use zserio_pack::assemble::assemble;
use zserio_pack::config::{PackConfig, BUILD_DIR_ENV_VAR};
use zserio_pack::description::long_description;
use zserio_pack::fetch::fetch_latest_release;
use zserio_pack::manifest::DistManifest;
use zserio_util::errors::ZserioError;
use zserio_util::process::CommandBuilder;
use zserio_util::progress::status;

#[derive(Parser, Debug)]
#[command(
    name = "zserio-package",
    version,
    about = "Package the zserio compiler and runtime for publication"
)]
struct Cli {
    /// Project root containing the local source tree and README
    #[arg(long, default_value = ".")]
    root: PathBuf,

    /// Build output directory (default: <root>/build)
    #[arg(long, env = BUILD_DIR_ENV_VAR)]
    build_dir: Option<PathBuf>,

    /// Release index endpoint (default: the zserio GitHub releases API)
    #[arg(long)]
    index_url: Option<String>,

    /// Local source tree merged into the package (default: <root>/src/zserio)
    #[arg(long)]
    src_dir: Option<PathBuf>,

    /// Documentation file for the long description (default: <root>/README.md)
    #[arg(long)]
    readme: Option<PathBuf>,

    /// Published package name
    #[arg(long, default_value = "zserio")]
    name: String,

    /// Packaging toolchain command to run in the build directory after
    /// assembly (e.g. "python3 -m build")
    #[arg(long)]
    packager: Option<String>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    let config = build_config(&cli);

    let version = fetch_latest_release(&config)?;

    let package_dir = assemble(&config)?;
    status("Assembled", &package_dir.display().to_string());

    let description = long_description(&config.readme)?;

    let manifest = DistManifest {
        name: config.name.clone(),
        version: version.clone(),
        description,
        package_dir,
    };
    let manifest_path = manifest.write(&config.build_dir)?;
    status("Wrote", &manifest_path.display().to_string());

    if let Some(packager) = &cli.packager {
        run_packager(packager, &config)?;
    }

    status("Packaged", &format!("{} {version}", config.name));
    Ok(())
}

fn build_config(cli: &Cli) -> PackConfig {
    let mut config = PackConfig::new(&cli.root);
    if let Some(build_dir) = &cli.build_dir {
        config.build_dir = build_dir.clone();
    }
    if let Some(src_dir) = &cli.src_dir {
        config.src_dir = src_dir.clone();
    }
    if let Some(readme) = &cli.readme {
        config.readme = readme.clone();
    }
    if let Some(index_url) = &cli.index_url {
        config.index_url = index_url.clone();
    }
    config.name = cli.name.clone();
    config
}

/// Run the packaging toolchain command in the build directory.
///
/// The command string is split on whitespace; the first token is the
/// program, the rest are its arguments.
fn run_packager(command: &str, config: &PackConfig) -> Result<()> {
    let mut tokens = command.split_whitespace();
    let program = tokens.next().ok_or_else(|| ZserioError::Generic {
        message: "empty --packager command".to_string(),
    })?;

    status("Running", command);
    let cmd_status = CommandBuilder::new(program)
        .args(tokens.map(str::to_string))
        .cwd(config.build_dir.to_string_lossy().to_string())
        .exec_inherit()?;

    if !cmd_status.success() {
        return Err(ZserioError::Generic {
            message: format!(
                "packager command {command:?} exited with code {}",
                cmd_status.code().unwrap_or(-1)
            ),
        }
        .into());
    }
    Ok(())
}
