mod app;
mod auth;
mod cli;
mod config;
mod login;
mod runtime;
mod session_store;
mod time_utils;
mod ui;

use anyhow::Result;
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use kharcha_client::KharchaClient;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;

use crate::app::App;
use crate::auth::AuthSession;
use crate::cli::{Cli, Commands};
use crate::config::KharchaConfig;
use crate::session_store::SessionStore;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    match cli.command {
        Commands::Run => run_tui().await,
        Commands::Login => login::run_login().await,
        Commands::Register => login::run_register().await,
        Commands::Logout => {
            let mut auth = AuthSession::bootstrap(SessionStore::open()?);
            auth.logout();
            println!("Logged out. Local session cleared.");
            Ok(())
        }
        Commands::ConfigPath => {
            let path = KharchaConfig::config_path()?;
            if !path.exists() {
                KharchaConfig::default().save()?;
            }
            println!("{}", path.display());
            Ok(())
        }
    }
}

async fn run_tui() -> Result<()> {
    let config = KharchaConfig::load()?;
    let auth = AuthSession::bootstrap(SessionStore::open()?);
    let mut client = KharchaClient::new(&config.api_url, auth.token().map(str::to_string));
    let mut app = App::new(auth);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = runtime::run_app(&mut terminal, &mut app, &mut client).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}
