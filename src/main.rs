#[macro_use]
extern crate clap;
#[macro_use]
extern crate log;
#[macro_use]
extern crate mysql;

mod config;
mod db;
mod logger;
mod reconcile;
mod remote;
mod sync;

use std::process;

fn main() {
    let config = match config::load_config() {
        Ok(v) => v,
        Err(e) => {
            eprintln!("Unable to load config: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = logger::setup_logger(config.log_level, config.log_dir.as_deref()) {
        eprintln!("Unable to setup logger: {}", e);
        process::exit(1);
    }

    info!("Syncing stations from {} into table {}", config.remote_url, config.table_name);

    if let Err(e) = sync::run(&config) {
        error!("Station sync failed: {}", e);
        process::exit(1);
    }
}
