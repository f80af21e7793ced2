use std::{hint::black_box, time::Instant};

use anyhow::{ensure, Result};
use clap::{Parser, ValueEnum};
use log::info;
use rand::{rngs::StdRng, Rng, SeedableRng};

use huffman_rust::{cli::LogArgs, compress, decompress, HuffmanCodec};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Distribution {
    /// Every byte value equally likely
    Uniform,
    /// Byte b drawn with probability roughly proportional to 2^-(b / 8)
    Skewed,
    /// Lowercase ASCII letters and spaces
    Text,
}

#[derive(Parser, Debug)]
#[command(about = "Measure compression ratio and speed on pseudo-random inputs")]
struct Args {
    /// Size of each generated input in bytes
    #[arg(short, long, default_value_t = 1 << 20)]
    size: usize,
    /// Number of timed runs
    #[arg(short, long, default_value_t = 3)]
    runs: usize,
    /// Seed of the generator
    #[arg(long, default_value_t = 42)]
    seed: u64,
    /// Distribution of the generated bytes
    #[arg(short, long, value_enum, default_value_t = Distribution::Skewed)]
    distribution: Distribution,

    #[clap(flatten)]
    log: LogArgs,
}

fn gen_input(rng: &mut StdRng, size: usize, distribution: Distribution) -> Vec<u8> {
    match distribution {
        Distribution::Uniform => (0..size).map(|_| rng.gen::<u8>()).collect(),
        Distribution::Skewed => (0..size)
            .map(|_| {
                // Geometric number of halvings, spread over 8 neighbouring values
                let mut b = 0u32;
                while b < 248 && rng.gen_bool(0.5) {
                    b += 8;
                }
                (b + rng.gen_range(0..8)) as u8
            })
            .collect(),
        Distribution::Text => (0..size)
            .map(|_| if rng.gen_range(0..6) == 0 { b' ' } else { rng.gen_range(b'a'..=b'z') })
            .collect(),
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    args.log.init()?;

    let mut rng = StdRng::seed_from_u64(args.seed);

    let mut comp_total = 0;
    let mut decomp_total = 0;
    let mut compressed_len = 0;

    for run in 0..args.runs {
        let data = gen_input(&mut rng, args.size, args.distribution);

        let comp_time = Instant::now();
        let artifact = black_box(compress(&data));
        let comp_time = comp_time.elapsed().as_nanos();

        let decomp_time = Instant::now();
        let restored = black_box(decompress(&artifact)?);
        let decomp_time = decomp_time.elapsed().as_nanos();

        ensure!(restored == data, "run {} did not round-trip", run);

        if let Some(codec) = HuffmanCodec::from_bytes(&data) {
            info!("run {}: {} symbols, code lengths {}..={}", run, codec.code_table().len(),
                  codec.code_table().min_len(), codec.code_table().max_len());
        }

        comp_total += comp_time;
        decomp_total += decomp_time;
        compressed_len += artifact.serialized_size();
    }

    let runs = args.runs.max(1) as u128;
    let total_len = (args.size * args.runs.max(1)) as f64;

    println!("################### Huffman {:?} benchmark ###################", args.distribution);
    println!("input size {} bytes, {} runs", args.size, args.runs);
    println!("ratio {:.4}", compressed_len as f64 / total_len);
    println!("time compression {} ns", comp_total / runs);
    println!("time decompression {} ns", decomp_total / runs);

    Ok(())
}
