use clap::*;
use std::path::PathBuf;

#[derive(Parser, Clone, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Params {
    /// JSON payload file; stdin when omitted.
    #[arg(short, long, env = "ANALYSQL_INPUT")]
    pub input: Option<PathBuf>,
}
