use anyhow::{bail, Result};
use rallyscraper::{
    classify::{self, Jurisdiction},
    export, fetch, process,
};
use std::{env, path::PathBuf, time::Instant};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

const USAGE: &str = "usage: rallyscraper <document.pdf | response.json> [output.zip]";

fn main() -> Result<()> {
    // ─── 1) init logging ─────────────────────────────────────────────
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    // ─── 2) args ─────────────────────────────────────────────────────
    let mut args = env::args().skip(1);
    let Some(input) = args.next().map(PathBuf::from) else {
        bail!(USAGE);
    };
    let out_zip = args
        .next()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(export::DEFAULT_ZIP_NAME));
    let start = Instant::now();

    // ─── 3) digitize (or load a saved response) ──────────────────────
    let payload = fetch::load_payload(&input)?;

    // ─── 4) parse + classify ─────────────────────────────────────────
    let fragments = fetch::html_fragments(&payload);
    let records = process::extract_records(&fragments);
    let lines = process::format_records(&records);
    let buckets = classify::partition(&records);

    // ─── 5) report + bundle ──────────────────────────────────────────
    println!("총 {}건의 정보를 추출했습니다.", lines.len());
    for j in Jurisdiction::ALL {
        let bucket = buckets.get(j);
        println!();
        println!("[{}] {}건", j, bucket.len());
        for line in bucket {
            println!("{}", line);
        }
    }

    export::write_zip(&out_zip, &lines, &buckets)?;
    info!(
        out = %out_zip.display(),
        elapsed = ?start.elapsed(),
        "done"
    );
    Ok(())
}
