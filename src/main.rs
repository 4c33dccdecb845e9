mod cli;

use analysql::generate_sql;
use clap::Parser;
use std::io::Read;
use tracing_subscriber::EnvFilter;

#[tracing::instrument]
fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
    let params = cli::Params::parse();

    let raw = match &params.input {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };
    // Unparseable payloads are treated as absent content and fail
    // validation, not as an I/O error.
    let content = serde_json::from_str(&raw).unwrap_or(serde_json::Value::Null);

    match generate_sql(&content) {
        Ok(sql) => println!("{sql}"),
        Err(e) => {
            println!("{e}");
            std::process::exit(1);
        }
    }
    Ok(())
}
