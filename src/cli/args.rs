use clap::{Args as ClapArgs, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "onair")]
#[command(about = "Zoom on-air light daemon", long_about = None)]
pub struct Cli {
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<CliCommand>,
}

#[derive(Subcommand, Debug)]
pub enum CliCommand {
    /// Print version information
    Version,
    /// Drive the indicator manually
    Light(LightCliArgs),
    /// List the monitored user's scheduled meetings
    Meetings,
}

#[derive(ClapArgs, Debug)]
pub struct LightCliArgs {
    #[command(subcommand)]
    pub command: LightCommand,
}

#[derive(Subcommand, Debug)]
pub enum LightCommand {
    /// Flash, hold on briefly, then turn off
    Test,
    /// Turn the light on
    On,
    /// Turn the light off
    Off,
}
