//! Admin session commands

use std::io::{self, BufRead, Write};

use clap::Args;
use idolaura::auth;
use idolaura::data::RemoteConfig;

use super::CmdResult;

#[derive(Debug, Args)]
pub struct LoginArgs {
    /// Admin account email
    pub email: String,
}

pub fn execute_login(args: LoginArgs) -> CmdResult {
    let config = RemoteConfig::from_env()
        .ok_or("no remote backend configured; local mode needs no login")?;

    eprint!("Password: ");
    io::stderr().flush()?;
    let mut password = String::new();
    io::stdin().lock().read_line(&mut password)?;
    let password = password.trim_end_matches(&['\r', '\n'][..]);

    let session = auth::sign_in(&config, &args.email, password)?;
    println!("Signed in as {}", session.user_email);
    Ok(())
}

#[derive(Debug, Args)]
pub struct LogoutArgs {}

pub fn execute_logout(_args: LogoutArgs) -> CmdResult {
    auth::sign_out(RemoteConfig::from_env().as_ref())?;
    println!("Signed out.");
    Ok(())
}
