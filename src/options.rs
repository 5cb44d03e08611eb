use std::{net::SocketAddr, path::PathBuf};

use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(about = "A service that detects and records rectangle intersections")]
pub struct Options {
    /// The address the HTTP server should listen on.
    #[structopt(long, default_value = "127.0.0.1:8080")]
    pub address: SocketAddr,

    /// The path to the SQLite database that recorded intersections are
    /// stored in. Created on first start if it does not exist.
    #[structopt(long, default_value = "rectangles.db")]
    pub database: PathBuf,
}
