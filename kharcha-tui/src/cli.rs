use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "kharcha-tui")]
#[command(about = "Terminal client for the Kharcha expense tracker")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Open the expense tracker UI
    Run,
    /// Sign in with mobile number and password
    Login,
    /// Create a new account
    Register,
    /// Remove the locally saved session
    Logout,
    /// Print config path and create default file if missing
    ConfigPath,
}
