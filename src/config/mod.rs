use clap::Parser;

/// Command definition. Every argument, including `--help` and `--version`,
/// is accepted and ignored; the output never depends on argv.
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "starter-template")]
#[command(about = "Minimal starter program: prints a greeting, a sum and a message")]
#[command(disable_help_flag = true, disable_version_flag = true)]
pub struct CliConfig {
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, hide = true)]
    pub ignored: Vec<String>,
}
