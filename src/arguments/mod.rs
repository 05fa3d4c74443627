pub mod clap_cli;
pub mod cmd_args;
