use std::env;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use std::time::Instant;

use log::{debug, error, info};

use huffman_codec::cli::{ArgsError, DecodeArgs};
use huffman_codec::{CodeBook, FreqTable, Result, decode};

fn read_inputs(code_path: &Path, packed_path: &Path) -> Result<(CodeBook, Vec<u8>)> {
    info!("Reading code table: {}", code_path.display());
    let book = CodeBook::read_from(BufReader::new(File::open(code_path)?))?;

    info!("Reading packed stream: {}", packed_path.display());
    let packed = fs::read(packed_path)?;
    debug!("Packed stream size: {} bytes", packed.len());

    Ok((book, packed))
}

fn main() {
    env_logger::init();

    let mut argv = env::args();
    let program = argv.next().unwrap_or_else(|| "decode".to_string());
    let args = match DecodeArgs::parse(argv) {
        Ok(args) => args,
        Err(ArgsError::Help) => {
            println!("Usage: {} {}", program, DecodeArgs::USAGE);
            return;
        }
        Err(e) => {
            error!("{}", e);
            eprintln!("Usage: {} {}", program, DecodeArgs::USAGE);
            std::process::exit(1);
        }
    };

    info!("--- Start Decoding ---");

    let (book, packed) = match read_inputs(&args.code_file, &args.packed_file) {
        Ok(res) => res,
        Err(e) => {
            error!("Failed to read encoded input: {}", e);
            std::process::exit(1);
        }
    };

    let start_time = Instant::now();
    let decoded = match decode(&book, &packed) {
        Ok(decoded) => decoded,
        Err(e) => {
            error!("Decoding failed: {}", e);
            std::process::exit(1);
        }
    };
    debug!("Bitstream decoding finished in {:.2?}.", start_time.elapsed());

    info!("Writing decoded output to file: {}", args.output.display());
    let written = File::create(&args.output).and_then(|file| {
        let mut out = BufWriter::new(file);
        out.write_all(&decoded)?;
        out.flush()
    });
    if let Err(e) = written {
        error!("Could not write decoded data: {}", e);
        std::process::exit(1);
    }

    let entropy = FreqTable::from_bytes(&decoded).entropy();
    println!(
        "\r\n✅ Decoding successful.\n\
         📖  Code table:  {} ({} symbols)\n\
         📂  Packed:      {} ({} bytes)\n\
         💾  Output:      {} ({} bytes)\n\
         ℹ️  Entropy:     {:.4} bits/symbol",
        args.code_file.display(),
        book.codes.len(),
        args.packed_file.display(),
        packed.len(),
        args.output.display(),
        decoded.len(),
        entropy
    );

    info!("--- End ---");
}
