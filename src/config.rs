//! Turns parsed command-line arguments into a single [`Config`] value. Everything the run needs
//! (key, direction, ciphertext format, paths) is resolved here once and then passed along.

use std::fs;
use std::io;
use std::path::PathBuf;

use md5::{Digest, Md5};
use tinytea::{KEY_SIZE, Key};

use crate::CliError;
use crate::args::{Cli, Commands, CommonArgs};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Direction {
    Encrypt,
    /// `raw` keeps trailing zero bytes.
    Decrypt { raw: bool },
}

/// Representation of the ciphertext side of the run.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Format {
    Hex,
    Raw,
}

#[derive(Debug)]
pub struct Config {
    pub direction: Direction,
    pub key: Key,
    /// Where to save a freshly generated key. Written only after a successful run.
    pub gen_key: Option<PathBuf>,
    pub rounds: u32,
    /// `None` means pick based on whether the ciphertext side is a terminal.
    pub format: Option<Format>,
    pub input: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub verbose: bool,
}

impl Config {
    pub fn from_cli(cli: Cli) -> Result<Self, CliError> {
        Self::from_cli_with(cli, || rpassword::prompt_password("Password: "))
    }

    /// Like [`from_cli`](Config::from_cli), with the terminal password prompt supplied by the
    /// caller. `prompt` only runs when no key source was given and INPUT is a file.
    pub fn from_cli_with<P>(cli: Cli, prompt: P) -> Result<Self, CliError>
    where
        P: FnOnce() -> io::Result<String>,
    {
        match cli.command {
            Commands::Encrypt(enc) => {
                let key = match enc.gen_key {
                    Some(_) => Key::rand_key()?,
                    None => resolve_key(&enc.common, prompt)?,
                };
                let mut config = Self::build(Direction::Encrypt, key, enc.common);
                config.gen_key = enc.gen_key;
                Ok(config)
            }
            Commands::Decrypt(dec) => {
                let key = resolve_key(&dec.common, prompt)?;
                Ok(Self::build(Direction::Decrypt { raw: dec.raw }, key, dec.common))
            }
        }
    }

    fn build(direction: Direction, key: Key, common: CommonArgs) -> Self {
        let format = match (common.hex, common.text) {
            (true, _) => Some(Format::Hex),
            (_, true) => Some(Format::Raw),
            _ => None,
        };

        Self {
            direction,
            key,
            gen_key: None,
            rounds: common.rounds,
            format,
            input: common.input, // move ownership
            output: common.output,
            verbose: common.verbose,
        }
    }

    /// Resolves the ciphertext format. `tty` reports whether the ciphertext side of the run
    /// (stdout when encrypting, stdin when decrypting) is an interactive terminal.
    pub fn ciphertext_format(&self, tty: bool) -> Format {
        match self.format {
            Some(f) => f,
            None if tty => Format::Hex,
            None => Format::Raw,
        }
    }
}

fn resolve_key<P>(common: &CommonArgs, prompt: P) -> Result<Key, CliError>
where
    P: FnOnce() -> io::Result<String>,
{
    if let Some(hex_key) = &common.key {
        key_from_hex(hex_key)
    } else if let Some(path) = &common.key_file {
        Ok(Key::try_from_slice(&fs::read(path)?)?)
    } else if let Some(password) = &common.password {
        Ok(key_from_password(password))
    } else if common.input.is_some() {
        // stdin carries the message, so a prompted password needs INPUT to be a file
        Ok(key_from_password(&prompt()?))
    } else {
        Err(CliError::MissingKey)
    }
}

pub fn key_from_hex(s: &str) -> Result<Key, CliError> {
    let bytes = hex::decode(s.trim())?;
    if bytes.len() != KEY_SIZE {
        return Err(CliError::KeyHexLength { digits: s.trim().len() });
    }
    Ok(Key::try_from_slice(&bytes)?)
}

/// The key is the MD5 digest of the password.
pub fn key_from_password(password: &str) -> Key {
    let digest = Md5::digest(password.as_bytes());
    let mut k = [0u8; KEY_SIZE];
    k.copy_from_slice(&digest[..KEY_SIZE]);
    Key::from_bytes(&k)
}
