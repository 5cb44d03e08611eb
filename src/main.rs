mod options;
mod server;
mod store;

use std::process;

use anyhow::Context;
use structopt::StructOpt;

use crate::{options::Options, server::Server, store::SqliteStore};

fn main() {
    env_logger::init();

    let options = Options::from_args();

    match run(options) {
        Ok(_) => {}
        Err(err) => {
            eprintln!("Error: {:#}", err);
            process::exit(1);
        }
    }
}

fn run(options: Options) -> anyhow::Result<()> {
    let store = SqliteStore::open(&options.database)
        .with_context(|| format!("Could not open database {}", options.database.display()))?;

    let server = Server::bind(options.address, store)?;
    server.run();

    Ok(())
}
