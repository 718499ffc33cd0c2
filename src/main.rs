//! Console stand-in for a chat connection.
//!
//! Each input line is `SENDER CHANNEL TEXT...`. Replies are printed as `CHANNEL REPLY`.

use std::io::{self, BufRead, Write};

use anyhow::Context;
use chatspell::{Assistant, Config};

fn main() -> Result<(), anyhow::Error> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::from_env()?;
    let assistant = Assistant::new(config);

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    for line in stdin.lock().lines() {
        let line = line.context("reading stdin")?;
        let mut parts = line.splitn(3, ' ');
        let (Some(sender), Some(channel)) = (parts.next(), parts.next()) else {
            continue;
        };
        let text = parts.next().unwrap_or_default();

        if let Some(reply) = assistant.handle_message(sender, channel, text) {
            writeln!(stdout, "{channel} {reply}").context("writing stdout")?;
        }
    }

    Ok(())
}
