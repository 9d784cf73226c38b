//! listcerts - print the certificates of the UEFI Secure Boot databases
//!
//! Reads `PK`, `KEK`, `db` and `dbx` from efivarfs (or signature list
//! files, or bare DER certificates) and prints a summary of every X.509
//! certificate found.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use berwalk::ber::{Mode, Options};
use berwalk::efi::{self, SignatureKind, Variable};
use berwalk::x509::{self, Rejected};
use berwalk::Error;
use clap::{Parser, ValueEnum};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "listcerts")]
#[command(about = "List the certificates of the Secure Boot signature databases", long_about = None)]
#[command(version)]
struct Cli {
    /// Databases to list, all of them when nothing else is given
    #[arg(value_enum)]
    variables: Vec<Database>,

    /// efivarfs mount point
    #[arg(long, default_value = "/sys/firmware/efi/efivars")]
    efivars: PathBuf,

    /// Signature list file (EFI_SIGNATURE_LIST, without attributes)
    #[arg(long = "file")]
    files: Vec<PathBuf>,

    /// DER encoded certificate
    #[arg(long = "der")]
    ders: Vec<PathBuf>,

    /// Only accept DER, reject BER constructs
    #[arg(long)]
    strict: bool,

    /// Log decoding details to stderr
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum Database {
    Pk,
    Kek,
    Db,
    Dbx,
}

impl From<Database> for Variable {
    fn from(d: Database) -> Variable {
        match d {
            Database::Pk => Variable::Pk,
            Database::Kek => Variable::Kek,
            Database::Db => Variable::Db,
            Database::Dbx => Variable::Dbx,
        }
    }
}

struct Lister {
    options: Options,
    failures: usize,
}

impl Lister {
    fn certificate(&mut self, der: &[u8]) {
        match x509::summarize_with(der, self.options) {
            Ok(summary) => print!("{}", summary),
            Err(e) => {
                self.failures += 1;
                tracing::error!(error = %e, "cannot decode certificate");
                match e {
                    Error::CallbackAborted { code, .. } => match Rejected::from_code(code) {
                        Some(reason) => println!("  ERROR: {} ({})", e, reason),
                        None => println!("  ERROR: {}", e),
                    },
                    _ => println!("  ERROR: {}", e),
                }
            }
        }
    }

    fn signature_lists(&mut self, data: &[u8]) {
        let mut found = false;
        for list in efi::signature_lists(data) {
            let list = match list {
                Ok(list) => list,
                Err(e) => {
                    self.failures += 1;
                    println!("\nERROR: {}", e);
                    break;
                }
            };
            let kind = list.kind();
            for sig in list.signatures() {
                found = true;
                println!("\nType: {}  (GUID: {})", kind.name(), sig.owner);
                match kind {
                    SignatureKind::X509 => self.certificate(sig.data),
                    _ => println!("  Data: {}", hex(sig.data)),
                }
            }
        }
        if !found {
            println!("\nNo certificates found for this database");
        }
    }

    fn variable(&mut self, efivars: &Path, var: Variable) -> anyhow::Result<()> {
        let path = efivars.join(var.efivarfs_name());
        let raw = match fs::read(&path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                println!("Variable {} not found", var.name());
                return Ok(());
            }
            Err(e) => {
                return Err(e).with_context(|| format!("reading {}", path.display()));
            }
        };
        let data = efi::strip_attributes(&raw)
            .with_context(|| format!("variable {}", var.name()))?;
        println!("\nVARIABLE: {}  (size: {})", var.name(), data.len());
        self.signature_lists(data);
        Ok(())
    }
}

fn hex(data: &[u8]) -> String {
    data.iter().map(|b| format!("{:02x}", b)).collect()
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter_layer = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let mode = if cli.strict { Mode::Der } else { Mode::Ber };
    let mut lister = Lister {
        options: Options::default().with_mode(mode),
        failures: 0,
    };

    let mut variables: Vec<Variable> = cli.variables.iter().map(|d| (*d).into()).collect();
    if variables.is_empty() && cli.files.is_empty() && cli.ders.is_empty() {
        variables = Variable::ALL.to_vec();
    }

    for var in variables {
        lister.variable(&cli.efivars, var)?;
    }
    for path in &cli.files {
        let data = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
        println!("\nFILE: {}  (size: {})", path.display(), data.len());
        lister.signature_lists(&data);
    }
    for path in &cli.ders {
        let der = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
        println!("\nCERTIFICATE: {}", path.display());
        lister.certificate(&der);
    }

    if lister.failures > 0 {
        bail!("{} item(s) could not be decoded", lister.failures);
    }
    Ok(())
}
