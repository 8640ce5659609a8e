// src/export/mod.rs

use anyhow::{Context, Result};
use std::{fs::File, io::Write, path::Path};
use tracing::{info, instrument};
use zip::{write::SimpleFileOptions, CompressionMethod, ZipWriter};

use crate::classify::{Buckets, Jurisdiction};

pub const FILE_PREFIX: &str = "집회시위정보";
pub const DEFAULT_ZIP_NAME: &str = "집회시위정보.zip";

/// Header, count and lines of one bucket file.
pub fn bucket_text(jurisdiction: Jurisdiction, lines: &[String]) -> String {
    format!(
        "=== {} ===\n총 {}건\n\n{}",
        jurisdiction.label(),
        lines.len(),
        lines.join("\n")
    )
}

/// `(file name, contents)` for the full listing followed by each bucket.
pub fn bundle_files(lines: &[String], buckets: &Buckets) -> Vec<(String, String)> {
    let mut files = vec![(format!("{}_전체.txt", FILE_PREFIX), lines.join("\n"))];
    files.extend(Jurisdiction::ALL.iter().map(|&j| {
        (
            format!("{}_{}.txt", FILE_PREFIX, j.label()),
            bucket_text(j, buckets.get(j)),
        )
    }));
    files
}

/// Write the bundle as a deflate ZIP at `path`.
#[instrument(level = "info", skip(lines, buckets), fields(path = %path.as_ref().display()))]
pub fn write_zip<P: AsRef<Path>>(path: P, lines: &[String], buckets: &Buckets) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path).with_context(|| format!("creating {:?}", path))?;
    let mut zip = ZipWriter::new(file);
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    for (name, contents) in bundle_files(lines, buckets) {
        zip.start_file(name.as_str(), options)
            .with_context(|| format!("starting {} in {:?}", name, path))?;
        zip.write_all(contents.as_bytes())
            .with_context(|| format!("writing {} into {:?}", name, path))?;
    }
    zip.finish()
        .with_context(|| format!("finishing ZIP {:?}", path))?;

    info!(records = lines.len(), "wrote bundle");
    Ok(())
}
