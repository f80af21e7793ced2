use std::{fs::{self, File}, io::{BufWriter, Write}, path::PathBuf, time::Instant};

use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, info};

use huffman_rust::{
    cli::LogArgs,
    utils::filenames::{compressed_path, properties_path},
    CompressedArtifact, FrequencyTable, HuffmanCodec, Properties,
};

#[derive(Parser, Debug)]
#[command(about = "Compress a file with Huffman codes, writing the artifact and its properties")]
struct Args {
    /// The file to compress
    source_name: PathBuf,
    /// The destination of the compressed file (default: <source>_compressed.huff)
    dest_name: Option<PathBuf>,
    /// Print the properties as JSON on stdout
    #[arg(long, default_value_t = false)]
    json: bool,

    #[clap(flatten)]
    log: LogArgs,
}

fn main() -> Result<()> {
    let args = Args::parse();
    args.log.init()?;

    let dest_name = args.dest_name.clone().unwrap_or_else(|| compressed_path(&args.source_name));

    let data = fs::read(&args.source_name)
        .with_context(|| format!("Could not read {}", args.source_name.display()))?;
    let frequencies = FrequencyTable::from_bytes(&data);
    info!("Read {} bytes, {} distinct", frequencies.total(), frequencies.len());

    let comp_time = Instant::now();
    let codec = HuffmanCodec::from_frequencies(&frequencies);
    let artifact = match &codec {
        Some(codec) => codec.encode(&data),
        None => CompressedArtifact::empty(),
    };
    let comp_time = comp_time.elapsed().as_nanos();

    if let Some(codec) = &codec {
        debug!("Code tree:\n{}", codec.tree());
        debug!("Code table:\n{}", codec.code_table());
    }

    let mut writer = BufWriter::new(File::create(&dest_name)
        .with_context(|| format!("Could not create {}", dest_name.display()))?);
    artifact.write_to(&mut writer)?;
    writer.flush()?;

    let props = Properties::new(&args.source_name.to_string_lossy(), codec.as_ref(), &artifact);
    let props_path = properties_path(&dest_name);
    props.store(&props_path)
        .with_context(|| format!("Could not store {}", props_path.display()))?;
    info!("Wrote {} and {}", dest_name.display(), props_path.display());

    if args.json {
        println!("{}", serde_json::to_string_pretty(&props)?);
    }

    println!("compressed {} bytes into {} bytes ({:.3} bits per byte) in {}ns",
             props.original_length, props.compressed_length, props.bits_per_symbol(), comp_time);

    Ok(())
}
