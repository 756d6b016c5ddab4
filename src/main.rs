mod app;
mod config;
mod logapi;
#[cfg(test)]
mod testing;

use crate::app::App;
use crate::config::Config;
use std::io::{stdin, stdout};
use std::process::ExitCode;

fn main() -> ExitCode {
    let config = Config::new();

    tracing_subscriber::fmt()
        .with_max_level(config.log_level())
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let app = App::new(&config);
    let status = app.execute(&mut stdin().lock(), &mut stdout().lock());

    ExitCode::from(status)
}
