mod args;
mod config;

use args::Cli;
use clap::Parser;
use config::{Config, Direction, Format};

use std::fs;
use std::io::{self, IsTerminal, Read, Write};
use std::process;
use std::time::Instant;

use thiserror::Error;
use tinytea::Cipher;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("no key, key file or password provided")]
    MissingKey,

    #[error("hex key must be exactly 32 digits (got {digits})")]
    KeyHexLength { digits: usize },

    #[error("invalid hex: {0}")]
    Hex(#[from] hex::FromHexError),

    #[error(transparent)]
    Io(#[from] io::Error),

    #[error(transparent)]
    Tea(#[from] tinytea::Error),
}

fn main() {
    if let Err(e) = tea_cli() {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

fn tea_cli() -> Result<(), CliError> {
    let config = Config::from_cli(Cli::parse())?;
    run(&config)
}

fn run(config: &Config) -> Result<(), CliError> {
    let cipher = Cipher::with_rounds(&config.key, config.rounds);
    let input = read_input(config)?;
    let input_len = input.len();

    let start = Instant::now();

    let output = match config.direction {
        Direction::Encrypt => {
            let tty = config.output.is_none() && io::stdout().is_terminal();
            let ciphertext = cipher.encode(&input);
            match config.ciphertext_format(tty) {
                Format::Hex => {
                    let mut text = hex::encode(&ciphertext).into_bytes();
                    text.push(b'\n');
                    text
                }
                Format::Raw => ciphertext,
            }
        }
        Direction::Decrypt { raw } => {
            let tty = config.input.is_none() && io::stdin().is_terminal();
            let ciphertext = match config.ciphertext_format(tty) {
                // hex text may arrive with a trailing newline
                Format::Hex => hex::decode(input.trim_ascii())?,
                Format::Raw => input,
            };
            if raw {
                cipher.decode_raw(&ciphertext)?
            } else {
                cipher.decode(&ciphertext)?
            }
        }
    };

    let duration = start.elapsed();

    // key first: ciphertext without its key is unrecoverable
    if let Some(path) = &config.gen_key {
        fs::write(path, config.key.to_bytes())?;
    }
    write_output(config, &output)?;

    if config.verbose {
        let verb = match config.direction {
            Direction::Encrypt => "Encrypted",
            Direction::Decrypt { .. } => "Decrypted",
        };
        eprintln!(
            "{verb} {} bytes in {} ms ({} rounds)",
            input_len,
            duration.as_millis(),
            config.rounds
        );
    }

    Ok(())
}

fn read_input(config: &Config) -> io::Result<Vec<u8>> {
    match &config.input {
        Some(path) => fs::read(path),
        None => {
            let mut buf = Vec::new();
            io::stdin().lock().read_to_end(&mut buf)?;
            Ok(buf)
        }
    }
}

fn write_output(config: &Config, bytes: &[u8]) -> io::Result<()> {
    match &config.output {
        Some(path) => fs::write(path, bytes),
        None => {
            let mut out = io::stdout().lock();
            out.write_all(bytes)?;
            out.flush()
        }
    }
}
