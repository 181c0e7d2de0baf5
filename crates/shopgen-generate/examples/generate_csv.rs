use std::env;
use std::path::PathBuf;

use shopgen_generate::{GenerateOptions, GenerationEngine};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let mut args = env::args().skip(1);
    let mut out_dir: Option<PathBuf> = None;
    let mut options = GenerateOptions::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--out" => out_dir = args.next().map(PathBuf::from),
            "--records" => {
                options.record_count = args.next().ok_or("missing --records value")?.parse()?
            }
            "--seed" => options.seed = args.next().ok_or("missing --seed value")?.parse()?,
            _ => return Err(format!("unexpected argument '{arg}'").into()),
        }
    }

    let out_dir = out_dir.ok_or("missing --out directory")?;
    let result = GenerationEngine::new(options).run(&out_dir)?;

    for table in &result.report.tables {
        println!("{}: {} rows, {} bytes", table.entity, table.rows, table.bytes);
    }
    Ok(())
}
