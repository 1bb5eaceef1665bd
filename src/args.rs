use clap::{ArgGroup, Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(version, about, author, arg_required_else_help = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Encrypt input to output
    Encrypt(EncryptArgs),

    /// Decrypt input to output
    Decrypt(DecryptArgs),
}

#[derive(Args, Debug)]
#[command(group(ArgGroup::new("format").args(["hex", "text"])))]
pub struct CommonArgs {
    /// Hexadecimal key string of exactly 32 digits (16 bytes).
    #[arg(short = 'k', long = "key", value_name = "HEX")]
    pub key: Option<String>,

    /// Key file containing exactly 16 raw bytes.
    #[arg(short = 'f', long = "key-file", value_name = "PATH")]
    pub key_file: Option<PathBuf>,

    /// Password whose MD5 digest is used as the key. Without any key source, the password is
    /// prompted for on the terminal (requires INPUT).
    #[arg(short = 'p', long = "password")]
    pub password: Option<String>,

    /// Ciphertext is expressed in hex (default when the ciphertext side is a terminal).
    #[arg(short = 'x', long = "hex")]
    pub hex: bool,

    /// Ciphertext is expressed as raw bytes (default otherwise).
    #[arg(short = 't', long = "text")]
    pub text: bool,

    /// Number of cipher rounds.
    #[arg(short = 'r', long = "rounds", default_value_t = tinytea::DEFAULT_ROUNDS)]
    pub rounds: u32,

    /// Report sizes and timing on stderr.
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Input file path (stdin if omitted).
    pub input: Option<PathBuf>,

    /// Output file path (stdout if omitted).
    pub output: Option<PathBuf>,
}

#[derive(Args, Debug)]
#[command(group(
    ArgGroup::new("key_source")
        .args(["key", "key_file", "password", "gen_key"])
))]
pub struct EncryptArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Generate a random key and encrypt with it. Its 16 raw bytes are written to PATH once the
    /// ciphertext has been produced.
    #[arg(long = "gen-key", value_name = "PATH")]
    pub gen_key: Option<PathBuf>,
}

#[derive(Args, Debug)]
#[command(group(
    ArgGroup::new("key_source")
        .args(["key", "key_file", "password"])
))]
pub struct DecryptArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Keep trailing zero bytes instead of stripping them.
    #[arg(long = "raw")]
    pub raw: bool,
}
