//! # `PractRand` Stream Generator
//!
//! Emits a continuous stream of binary data by hashing an incrementing
//! 64-bit counter, for piping into `PractRand` or similar statistical
//! test suites:
//!
//! ```text
//! farmhash_stream --mode 64 | RNG_test stdin64
//! ```

use anyhow::Result;
use clap::Parser;
use std::io::{self, Write};

// =============================================================================
// CLI DEFINITION
// =============================================================================

#[derive(Parser)]
#[command(name = "farmhash_stream")]
#[command(about = "Statistical test stream generator for FarmHash64", long_about = None)]
#[command(version)]
struct Cli {
    /// Input size in bytes, or "cyclic" to rotate through 16/32/64/128
    #[arg(short, long, default_value = "64")]
    mode: String,
}

// =============================================================================
// ENTRY POINT
// =============================================================================

fn main() -> Result<()> {
    let cli = Cli::parse();

    let fixed_size = match cli.mode.as_str() {
        "cyclic" => None,
        s => Some(s.parse::<usize>().map_err(|_| {
            anyhow::anyhow!("mode must be a byte count or \"cyclic\", got {s:?}")
        })?),
    };

    let stdout = io::stdout();
    let mut handle = io::BufWriter::new(stdout.lock());
    let mut counter: u64 = 0;

    loop {
        let size = fixed_size.unwrap_or(match counter % 4 {
            0 => 16,
            1 => 32,
            2 => 64,
            _ => 128,
        });

        // Fill the input with the counter, repeated to length.
        let counter_bytes = counter.to_le_bytes();
        let mut input = vec![0u8; size];
        for (i, item) in input.iter_mut().enumerate() {
            *item = counter_bytes[i % 8];
        }

        let hash = farmhash64::hash64(&input);

        // Stop silently when the consumer closes the pipe.
        if handle.write_all(&hash.to_le_bytes()).is_err() {
            break;
        }

        counter = counter.wrapping_add(1);
    }

    Ok(())
}
