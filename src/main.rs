use std::{fs::{self, File}, io::{BufReader, BufWriter, Write}, path::PathBuf, time::Instant};

use anyhow::{ensure, Context, Result};
use clap::Parser;
use log::{debug, info};

use huffman_rust::{
    cli::LogArgs,
    decompress,
    utils::filenames::{compressed_path, decompressed_path, properties_path},
    CompressedArtifact, HuffmanCodec, Properties,
};

#[derive(Parser, Debug)]
#[command(about = "Compress a file, decompress the result from disk and check that nothing changed")]
struct Args {
    /// The file to compress
    source_name: PathBuf,

    #[clap(flatten)]
    log: LogArgs,
}

fn main() -> Result<()> {
    let args = Args::parse();
    args.log.init()?;

    let data = fs::read(&args.source_name)
        .with_context(|| format!("Could not read {}", args.source_name.display()))?;

    let comp_time = Instant::now();
    let codec = HuffmanCodec::from_bytes(&data);
    let artifact = match &codec {
        Some(codec) => codec.encode(&data),
        None => CompressedArtifact::empty(),
    };
    let comp_time = comp_time.elapsed().as_nanos();

    if let Some(codec) = &codec {
        debug!("Code tree:\n{}", codec.tree());
        debug!("Code table:\n{}", codec.code_table());
    }

    let artifact_path = compressed_path(&args.source_name);
    let mut writer = BufWriter::new(File::create(&artifact_path)
        .with_context(|| format!("Could not create {}", artifact_path.display()))?);
    artifact.write_to(&mut writer)?;
    writer.flush()?;
    info!("Wrote {}", artifact_path.display());

    let source_name = args.source_name.to_string_lossy();
    let props = Properties::new(&source_name, codec.as_ref(), &artifact);
    props.store(&properties_path(&artifact_path))?;

    // Decompress from what is on disk only
    drop(codec);
    drop(artifact);

    let reader = BufReader::new(File::open(&artifact_path)
        .with_context(|| format!("Could not open {}", artifact_path.display()))?);

    let decomp_time = Instant::now();
    let artifact = CompressedArtifact::read_from(reader)?;
    let restored = decompress(&artifact)?;
    let decomp_time = decomp_time.elapsed().as_nanos();

    let restored_path = decompressed_path(&args.source_name);
    fs::write(&restored_path, &restored)
        .with_context(|| format!("Could not write {}", restored_path.display()))?;
    info!("Wrote {}", restored_path.display());

    ensure!(restored == data, "{} does not match {}", restored_path.display(), args.source_name.display());

    println!("compressed {} bytes into {} bytes in {}ns", props.original_length, props.compressed_length, comp_time);
    println!("decompressed and verified in {}ns", decomp_time);

    Ok(())
}
