pub mod args;
pub mod light;
pub mod meetings;

pub use args::{Cli, CliCommand};
pub use light::handle_light_command;
pub use meetings::handle_meetings_command;
