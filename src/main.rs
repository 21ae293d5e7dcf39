mod api;
mod config;
mod hook;
mod output;
#[cfg(test)]
mod tests;

use anyhow::Result;
use api::{DnsApiClient, PddClient};
use config::Config;
use hook::{ChallengeHook, HookOutcome, Stage};
use log::error;
use std::env;
use std::io::{self, Write};

// Invoked as: <program> <stage> <domain> <unused> <token>
#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    let config = Config::from_env()?;

    let args: Vec<String> = env::args().collect();
    let arg = |index: usize| args.get(index).map(String::as_str).unwrap_or_default();

    let client = PddClient::new(&config)?;
    let hook = ChallengeHook::new(client, config.record_ttl);

    run(&hook, arg(1), arg(2), arg(4), &mut io::stdout()).await
}

/// Prints the stage line up front so a failing run still shows what it was doing.
async fn run<C: DnsApiClient>(
    hook: &ChallengeHook<C>,
    stage: &str,
    domain: &str,
    token: &str,
    out: &mut impl Write,
) -> Result<()> {
    if let Some(handled) = Stage::from_hook_name(stage) {
        output::write_stage(out, handled, domain, token)?;
    }

    match hook.handle(stage, domain, token).await {
        Ok(HookOutcome::Deployed(records)) => output::write_records(out, &records)?,
        Ok(HookOutcome::Cleaned(record)) => output::write_records(out, &[record])?,
        Ok(HookOutcome::Skipped) => {}
        Err(e) => {
            error!("{} failed for {}: {}", stage, domain, e);
            return Err(e.into());
        }
    }

    Ok(())
}
