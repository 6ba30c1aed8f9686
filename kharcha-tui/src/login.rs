use anyhow::{Context, Result};
use std::io::{self, Write};

use kharcha_client::{KharchaClient, RegisterRequest};

use crate::auth::AuthSession;
use crate::config::KharchaConfig;
use crate::session_store::SessionStore;

/// Run the interactive login flow:
/// 1. Prompt for mobile number and password (no echo)
/// 2. Exchange them for an identity and token via the API
/// 3. Persist the session and report who signed in
pub async fn run_login() -> Result<()> {
    let config = KharchaConfig::load()?;
    let client = KharchaClient::new(&config.api_url, None);

    let mobile = prompt("Mobile: ")?;
    let password =
        rpassword::prompt_password("Password: ").context("Failed to read password")?;

    let success = client
        .login(&mobile, &password)
        .await
        .map_err(|e| anyhow::anyhow!("Login failed: {e}"))?;

    let mut auth = AuthSession::bootstrap(SessionStore::open()?);
    let name = success.identity.name.clone();
    auth.login(success.identity, success.token)?;

    println!("Login successful. Session saved. Welcome, {}!", name);
    Ok(())
}

/// Create an account, then point the user at `login`.
pub async fn run_register() -> Result<()> {
    let config = KharchaConfig::load()?;
    let client = KharchaClient::new(&config.api_url, None);

    let name = prompt("Name: ")?;
    let mobile = prompt("Mobile: ")?;
    let password =
        rpassword::prompt_password("Password: ").context("Failed to read password")?;

    client
        .register(&RegisterRequest {
            name,
            mobile,
            password,
        })
        .await
        .map_err(|e| anyhow::anyhow!("Registration failed: {e}"))?;

    println!("Registered. Run `kharcha-tui login` to sign in.");
    Ok(())
}

fn prompt(label: &str) -> Result<String> {
    print!("{label}");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin()
        .read_line(&mut line)
        .context("Failed to read input")?;
    Ok(line.trim().to_string())
}
