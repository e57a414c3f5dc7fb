use std::env;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;
use std::time::Instant;

use log::{debug, error, info};

use huffman_codec::cli::{ArgsError, EncodeArgs};
use huffman_codec::{Encoded, Result, encode};

fn write_outputs(encoded: &Encoded, code_path: &Path, packed_path: &Path) -> Result<()> {
    info!("Writing code table to {}", code_path.display());
    encoded.book.write_to(BufWriter::new(File::create(code_path)?))?;

    info!("Writing packed stream to {}", packed_path.display());
    let mut packed = BufWriter::new(File::create(packed_path)?);
    packed.write_all(&encoded.packed)?;
    packed.flush()?;
    Ok(())
}

fn main() {
    env_logger::init();

    let mut argv = env::args();
    let program = argv.next().unwrap_or_else(|| "encode".to_string());
    let args = match EncodeArgs::parse(argv) {
        Ok(args) => args,
        Err(ArgsError::Help) => {
            println!("Usage: {} {}", program, EncodeArgs::USAGE);
            return;
        }
        Err(e) => {
            error!("{}", e);
            eprintln!("Usage: {} {}", program, EncodeArgs::USAGE);
            std::process::exit(1);
        }
    };

    info!("--- Start Encoding ---");

    let raw_data = match fs::read(&args.input) {
        Ok(data) => data,
        Err(e) => {
            error!("Failed to read input file {}: {}", args.input.display(), e);
            std::process::exit(1);
        }
    };
    debug!("Read {} bytes", raw_data.len());

    let start_time = Instant::now();
    let encoded = match encode(&raw_data) {
        Ok(encoded) => encoded,
        Err(e) => {
            error!("Encoding failed: {}", e);
            std::process::exit(1);
        }
    };
    debug!("Encoding finished in {:.2?}.", start_time.elapsed());

    if let Err(e) = write_outputs(&encoded, &args.code_file, &args.packed_file) {
        error!("Could not write encoded output: {}", e);
        std::process::exit(1);
    }

    let original_len = raw_data.len();
    let packed_len = encoded.packed.len();
    let ratio = 100.0 * (1.0 - packed_len as f64 / original_len as f64);

    println!(
        "\r\n✅ Encoding successful.\n\
         📂  Input:       {} ({} bytes)\n\
         📖  Code table:  {} ({} symbols)\n\
         💾  Packed:      {} ({} bytes)\n\
         ℹ️  Entropy:     {:.4} bits/symbol\n\
         🗜️  Ratio:       {:.4}%",
        args.input.display(),
        original_len,
        args.code_file.display(),
        encoded.book.codes.len(),
        args.packed_file.display(),
        packed_len,
        encoded.frequencies.entropy(),
        ratio
    );

    info!("--- End ---");
}
