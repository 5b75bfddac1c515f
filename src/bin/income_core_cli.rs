use std::{env, io, process};

use income_core::{cli, config::ConfigManager, init};

fn main() {
    init();

    let config = match ConfigManager::new().load() {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!(error = %err, "falling back to default configuration");
            Default::default()
        }
    };

    let stdout = io::stdout();
    if let Err(err) = cli::run(env::args().skip(1), &config, &mut stdout.lock()) {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}
