use clap::Parser;
use primer::app::{handle_fatal_error, initialize_app, StartupOptions};
use primer::cli::{execute_command, Cli};

fn main() {
    let cli = Cli::parse();

    let options = StartupOptions {
        verbose: cli.verbose,
        config_path: cli.config.as_deref(),
        strict: cli.strict,
        no_prompt: cli.no_prompt,
    };

    let config = match initialize_app(options) {
        Ok(config) => config,
        Err(e) => handle_fatal_error(e, cli.verbose),
    };

    if let Err(e) = execute_command(cli.command, &config) {
        handle_fatal_error(e, cli.verbose);
    }
}
