use std::{net::IpAddr, path::PathBuf};

use clap::Parser;

/// HTTP server for a list of open points (LoP)
///
/// Serves the browser client from the root directory and keeps the list in a
/// JSON working file that is rewritten after every change. `GET /save` writes
/// an additional timestamped archive file.
#[derive(Parser, Debug)]
#[command(version, about, name = "lop")]
pub struct Args {
    /// Address to listen on
    #[arg(long, env = "LOP_HOST", default_value = "0.0.0.0")]
    pub host: IpAddr,

    /// Port to listen on
    #[arg(long, short, env = "LOP_PORT", default_value_t = 8080)]
    pub port: u16,

    /// Directory holding html/, style/, script/ and image/. Defaults to the
    /// current directory
    #[arg(long, env = "LOP_ROOT_DIR")]
    pub root_dir: Option<PathBuf>,

    /// Path to the JSON working file. Defaults to
    /// $XDG_DATA_HOME/lop/lop.json
    #[arg(long, env = "LOP_WORKING_FILE")]
    pub working_file: Option<PathBuf>,

    /// Path prefix for archive files; the timestamp and `.json` are appended.
    /// Defaults to `lop_` next to the working file
    #[arg(long, env = "LOP_ARCHIVE_PREFIX")]
    pub archive_prefix: Option<PathBuf>,
}
