//! Subcommand handlers. Each handler takes its inputs plus a writer and
//! returns `Result<(), CliError>`; the dispatcher maps errors to exit codes.

pub mod cfg;
pub mod decide;
pub mod equity;
pub mod profiles;

pub use cfg::handle_cfg_command;
pub use decide::handle_decide_command;
pub use equity::handle_equity_command;
pub use profiles::handle_profiles_command;
