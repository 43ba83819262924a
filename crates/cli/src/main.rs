use std::io::{stdin, stdout};
use std::process::ExitCode;

use catalog_cli::cli_args::Args;
use catalog_cli::console::{Prompter, DEFAULT_INDENTATION};
use catalog_cli::menu::{Session, FAREWELL_MESSAGE};
use catalog_core::collection::ProductCollection;
use catalog_core::config::{self, CatalogConfig};
use catalog_core::error::{Error, Result};
use catalog_core::file_handling::{self, LoadOptions};
use clap::Parser;
use log::{debug, warn};

/// Read the configuration and load the catalog it points at
fn initialize(args: &Args) -> Result<(CatalogConfig, ProductCollection)> {
    let config_path = config::get_config_path(&args.config_path);
    debug!("Config path: `{}`", config_path);

    let config = args.apply_to(config::load_config(&config_path)?.expanded());
    let options = LoadOptions::try_from(&config)?;
    let catalog = file_handling::load_catalog(&config.products_path, &options)?;

    Ok((config, catalog))
}

fn print_farewell() {
    println!();
    println!("{}{}", " ".repeat(DEFAULT_INDENTATION), FAREWELL_MESSAGE);
}

/// Ctrl-C ends the session the same way closing the input does
fn install_interrupt_handler() {
    let result = ctrlc::set_handler(|| {
        print_farewell();
        std::process::exit(0);
    });

    if let Err(e) = result {
        warn!("Could not install the Ctrl-C handler: {}", e);
    }
}

fn main() -> ExitCode {
    env_logger::init();

    let args = Args::parse();
    install_interrupt_handler();

    let (config, catalog) = match initialize(&args) {
        Ok(result) => result,
        Err(e) => {
            eprintln!("Erro ao carregar produtos");
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let prompter = Prompter::new(stdin().lock(), stdout()).with_clear_screen(config.clear_screen);
    let mut session = Session::new(catalog, config.output_path, prompter);

    match session.run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(Error::Interrupted) => {
            print_farewell();
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
