use std::io::{self, Write};

use log::info;
use tipping_env::{Result, env as app_env, logger::initialize_logger};

fn main() -> Result<()> {
    let _logger = initialize_logger()?;

    let app_env = app_env::init_defaults();
    info!(
        "env: PYTHON_ENV={}, APP_TOKEN set={}",
        app_env.python_env(),
        app_env.has_token()
    );

    let mut stdout = io::stdout().lock();
    serde_json::to_writer(&mut stdout, &app_env)?;
    writeln!(stdout)?;
    Ok(())
}
