use crate::config::Config;
use crate::logapi::{LogApiClient, LogApiError, LogQuery};
use serde_json::Value;
use std::io::{BufRead, Write};
use tracing::{error, info};

pub const PROMPT: &str = "Enter code (required): ";

/// How a driver run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Done,
    /// An API call failed; the error was reported to the operator
    Failed,
    MissingCode,
}

impl Outcome {
    /// Process exit status; only a missing code is fatal
    pub fn exit_status(&self) -> u8 {
        match self {
            Outcome::Done | Outcome::Failed => 0,
            Outcome::MissingCode => 1,
        }
    }
}

pub struct App {
    pub client: LogApiClient,
    pub code: Option<String>,
    pub limit: u32,
    pub offset: u32,
}

impl App {
    pub fn new(config: &Config) -> Self {
        App {
            client: LogApiClient::from_config(config),
            code: config.code.clone(),
            limit: config.limit,
            offset: config.offset,
        }
    }

    /// Run the driver and turn the result into a process exit status.
    /// Console I/O failures are logged, not fatal; only a missing code exits 1.
    pub fn execute<R: BufRead, W: Write>(&self, input: &mut R, out: &mut W) -> u8 {
        match self.run(input, out) {
            Ok(outcome) => outcome.exit_status(),
            Err(e) => {
                error!(error = %e, "console I/O failed");
                Outcome::Failed.exit_status()
            }
        }
    }

    /// Ask for a code, then print the log count and the recent logs for it
    pub fn run<R: BufRead, W: Write>(
        &self,
        input: &mut R,
        out: &mut W,
    ) -> anyhow::Result<Outcome> {
        let code = match &self.code {
            Some(code) => code.trim().to_string(),
            None => self.prompt_code(input, out)?,
        };

        if code.is_empty() {
            writeln!(out, "Code is required.")?;
            return Ok(Outcome::MissingCode);
        }

        info!(
            base_url = %self.client.base_url(),
            timeout = ?self.client.timeout(),
            code = %code,
            "querying log API"
        );

        let count = match self.client.get_log_count(&code) {
            Ok(count) => count,
            Err(e) => return report(out, &e),
        };
        print_block(out, "Log Count", &count)?;

        let query = LogQuery::new(self.limit, self.offset).with_code(code);
        let recent = match self.client.get_recent_logs(&query) {
            Ok(recent) => recent,
            Err(e) => return report(out, &e),
        };
        print_block(out, "Recent Logs", &recent)?;

        Ok(Outcome::Done)
    }

    fn prompt_code<R: BufRead, W: Write>(
        &self,
        input: &mut R,
        out: &mut W,
    ) -> anyhow::Result<String> {
        write!(out, "{PROMPT}")?;
        out.flush()?;

        let mut line = String::new();
        input.read_line(&mut line)?;

        Ok(line.trim().to_string())
    }
}

fn print_block<W: Write>(out: &mut W, title: &str, value: &Value) -> anyhow::Result<()> {
    writeln!(out, "\n=== {title} ===")?;
    writeln!(out, "{}", serde_json::to_string_pretty(value)?)?;
    Ok(())
}

fn report<W: Write>(out: &mut W, err: &LogApiError) -> anyhow::Result<Outcome> {
    match err {
        LogApiError::Http { status, body } => {
            writeln!(out, "HTTP Error: {status}")?;
            writeln!(out, "{body}")?;
        }
        other => writeln!(out, "Error: {other}")?,
    }
    Ok(Outcome::Failed)
}
