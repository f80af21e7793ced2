use std::{fs::File, io::{BufReader, BufWriter, Write}, path::{Path, PathBuf}, time::Instant};

use anyhow::{Context, Result};
use clap::Parser;
use log::{info, warn};

use huffman_rust::{
    cli::LogArgs,
    decompress,
    utils::filenames::{decompressed_path, properties_path},
    CompressedArtifact, Properties,
};

#[derive(Parser, Debug)]
#[command(about = "Decompress a Huffman-compressed file")]
struct Args {
    /// The compressed file
    source_name: PathBuf,
    /// The destination of the restored file (default: derived from the properties file)
    dest_name: Option<PathBuf>,

    #[clap(flatten)]
    log: LogArgs,
}

fn default_dest(source_name: &Path, props: Option<&Properties>) -> PathBuf {
    match props {
        Some(props) if !props.source_name.is_empty() => decompressed_path(Path::new(&props.source_name)),
        _ => decompressed_path(source_name),
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    args.log.init()?;

    let props_path = properties_path(&args.source_name);
    let props = if props_path.exists() {
        match Properties::load(&props_path) {
            Ok(props) => Some(props),
            Err(e) => {
                warn!("Ignoring {}: {}", props_path.display(), e);
                None
            }
        }
    } else {
        None
    };

    let dest_name = args.dest_name.clone().unwrap_or_else(|| default_dest(&args.source_name, props.as_ref()));

    let reader = BufReader::new(File::open(&args.source_name)
        .with_context(|| format!("Could not open {}", args.source_name.display()))?);

    let decomp_time = Instant::now();
    let artifact = CompressedArtifact::read_from(reader)
        .with_context(|| format!("Could not read an artifact from {}", args.source_name.display()))?;

    if let Some(props) = &props {
        if props.original_length != artifact.original_length {
            warn!("{} declares {} bytes, the artifact {}",
                  props_path.display(), props.original_length, artifact.original_length);
        }
    }

    // Decode fully before touching the destination
    let restored = decompress(&artifact)
        .with_context(|| format!("Could not decompress {}", args.source_name.display()))?;
    let decomp_time = decomp_time.elapsed().as_nanos();

    let mut writer = BufWriter::new(File::create(&dest_name)
        .with_context(|| format!("Could not create {}", dest_name.display()))?);
    writer.write_all(&restored)?;
    writer.flush()?;

    info!("Wrote {}", dest_name.display());
    println!("decompressed {} bytes in {}ns", artifact.original_length, decomp_time);

    Ok(())
}
