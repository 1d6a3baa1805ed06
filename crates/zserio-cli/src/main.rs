//! `zserio` binary: verbatim pass-through to the bundled compiler.
//!
//! No subcommands and no argument interception; everything on the command
//! line is forwarded to the compiler, whose output goes straight to the
//! terminal and whose exit code becomes this process's exit code.

use clap::Parser;
use miette::Result;

use zserio_compiler::invoke::CompilerCommand;

#[derive(Parser, Debug)]
#[command(
    name = "zserio",
    about = "Run the bundled zserio compiler",
    disable_help_flag = true,
    disable_version_flag = true
)]
struct Cli {
    /// Arguments forwarded verbatim to the zserio compiler.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    args: Vec<String>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    let output = CompilerCommand::new()
        .args(cli.args)
        .capture_output(false)
        .run()?;

    std::process::exit(output.exit_code);
}
