use anyhow::{Context, Result, anyhow};
use clap::error::ErrorKind;
use clap::{Parser, Subcommand};
use ddh_pke::pke::cramer_shoup::{CramerShoupKeyPair, CramerShoupPublicKey, CramerShoupSecretKey};
use ddh_pke::pke::hybrid::{self, HybridCiphertext};
use ddh_pke::preset::groups::PRESET_NAMES;
use ddh_pke::{DDHCryptoError, DomainParameters, ReaderSource, preset};
use env_logger::Env;
use log::{LevelFilter, debug, info};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs::{self, File};
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::process;

const DEFAULT_MAC_BITS: u64 = 128;

#[derive(Parser)]
#[command(
    name = "ddh-pke",
    author,
    version,
    about = "Hybrid public-key encryption from the DDH assumption alone",
    arg_required_else_help = true
)]
struct Cli {
    #[arg(long, global = true)]
    debug: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a Cramer-Shoup key pair.
    Keygen {
        /// Domain parameter file (p, q, x, y).
        params: PathBuf,
        /// Randomness source, e.g. /dev/urandom.
        random: PathBuf,
        /// Where to write the public key.
        public_key: PathBuf,
        /// Where to write the secret key.
        secret_key: PathBuf,
    },
    /// Encrypt a file for the holder of a public key.
    Encrypt {
        params: PathBuf,
        random: PathBuf,
        public_key: PathBuf,
        message: PathBuf,
        ciphertext: PathBuf,
        #[arg(long, default_value_t = DEFAULT_MAC_BITS)]
        mac_bits: u64,
    },
    /// Decrypt a file produced by `encrypt`.
    Decrypt {
        params: PathBuf,
        secret_key: PathBuf,
        ciphertext: PathBuf,
        message: PathBuf,
        #[arg(long, default_value_t = DEFAULT_MAC_BITS)]
        mac_bits: u64,
    },
    /// Write a built-in parameter set to a file.
    Params {
        #[arg(value_parser = PRESET_NAMES)]
        preset: String,
        out: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => match err.kind() {
            // usage requests and incomplete invocations are not failures
            ErrorKind::DisplayHelp
            | ErrorKind::DisplayVersion
            | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
            | ErrorKind::MissingRequiredArgument
            | ErrorKind::MissingSubcommand => {
                let _ = err.print();
                process::exit(0);
            }
            _ => err.exit(),
        },
    };
    init_logging(cli.debug);

    match cli.command {
        Commands::Keygen {
            params,
            random,
            public_key,
            secret_key,
        } => {
            let params = load_params(&params)?;
            let mut rng = open_random(&random)?;

            let keypair = CramerShoupKeyPair::generate(&params, &mut rng)
                .context("generating key pair")?;

            save_json(&public_key, "public key", &keypair.public)?;
            save_json(&secret_key, "secret key", &keypair.secret)?;
            info!(
                "wrote public key to {} and secret key to {}",
                public_key.display(),
                secret_key.display()
            );
        }
        Commands::Encrypt {
            params,
            random,
            public_key,
            message,
            ciphertext,
            mac_bits,
        } => {
            let params = load_params(&params)?;
            let mut rng = open_random(&random)?;
            let public: CramerShoupPublicKey = load_json(&public_key, "public key")?;
            let plaintext = fs::read(&message)
                .with_context(|| format!("reading message from {}", message.display()))?;

            let sealed = hybrid::encrypt(&params, &public, &plaintext, mac_bits, &mut rng)
                .context("encrypting message")?;

            save_json(&ciphertext, "ciphertext", &sealed)?;
            info!(
                "encrypted {} bytes into {}",
                plaintext.len(),
                ciphertext.display()
            );
        }
        Commands::Decrypt {
            params,
            secret_key,
            ciphertext,
            message,
            mac_bits,
        } => {
            let params = load_params(&params)?;
            let secret: CramerShoupSecretKey = load_json(&secret_key, "secret key")?;
            let sealed: HybridCiphertext = load_json(&ciphertext, "ciphertext")?;

            let plaintext =
                hybrid::decrypt(&params, &secret, &sealed, mac_bits).map_err(decrypt_failure)?;

            fs::write(&message, &plaintext)
                .with_context(|| format!("writing message to {}", message.display()))?;
            info!("decrypted {} bytes into {}", plaintext.len(), message.display());
        }
        Commands::Params { preset: name, out } => {
            let params =
                preset::by_name(&name).ok_or_else(|| anyhow!("unknown preset {}", name))?;

            fs::write(&out, params.to_string())
                .with_context(|| format!("writing parameters to {}", out.display()))?;
            info!("wrote {} parameters to {}", name, out.display());
        }
    }

    Ok(())
}

/// Keeps the rejection reason out of the message.
fn decrypt_failure(err: DDHCryptoError) -> anyhow::Error {
    match err {
        DDHCryptoError::AuthenticationFailure => anyhow!("ciphertext invalid or corrupted"),
        other => anyhow::Error::new(other).context("decrypting ciphertext"),
    }
}

fn init_logging(debug: bool) {
    let default = if debug { "debug" } else { "info" };
    let mut builder = env_logger::Builder::from_env(Env::default().default_filter_or(default));
    builder.format_timestamp(None);
    if debug {
        builder.filter_level(LevelFilter::Debug);
    }
    let _ = builder.try_init();
}

fn load_params(path: &Path) -> Result<DomainParameters> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading parameters from {}", path.display()))?;
    let params = text
        .parse::<DomainParameters>()
        .with_context(|| format!("parsing parameters from {}", path.display()))?;
    debug!("loaded parameters from {}", path.display());
    Ok(params)
}

fn open_random(path: &Path) -> Result<ReaderSource<BufReader<File>>> {
    let file = File::open(path)
        .with_context(|| format!("opening randomness source {}", path.display()))?;
    Ok(ReaderSource::new(BufReader::new(file)))
}

fn load_json<T: DeserializeOwned>(path: &Path, label: &str) -> Result<T> {
    let data =
        fs::read(path).with_context(|| format!("reading {} from {}", label, path.display()))?;
    let value = serde_json::from_slice(&data)
        .with_context(|| format!("parsing {} from {}", label, path.display()))?;
    Ok(value)
}

fn save_json<T: ?Sized + Serialize>(path: &Path, label: &str, value: &T) -> Result<()> {
    let serialized = serde_json::to_string_pretty(value)?;
    fs::write(path, serialized)
        .with_context(|| format!("writing {} to {}", label, path.display()))?;
    Ok(())
}
