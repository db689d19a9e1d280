use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;

use crate::store::DEFAULT_DATA_FILE;

#[derive(Debug, Clone, Parser)]
#[command(name = "todo-server")]
#[command(about = "HTTP todo list API backed by a JSON file")]
pub struct Config {
    /// Address to listen on
    #[arg(long, env = "TODO_SERVER_BIND", default_value = "127.0.0.1:3000")]
    pub bind: SocketAddr,

    /// JSON file holding the todo list (created if missing)
    #[arg(long, env = "TODO_SERVER_DATA_FILE", default_value = DEFAULT_DATA_FILE)]
    pub data_file: PathBuf,
}
