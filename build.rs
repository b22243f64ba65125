//! Compiles the builtin alphabets into `OUT_DIR/alphabets.rs`.
//!
//! `ALPHABET_LOG` sets the log filter (default `warn`). When
//! `ALPHABET_CANONICAL` names a file, the regenerated module must match it
//! byte for byte or the build fails.

use alphabet_compiler::{Config, builtin, compile, verify};
use std::error::Error;
use std::path::PathBuf;
use std::{env, fs};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

fn init_logging() {
    let filter = EnvFilter::try_from_env("ALPHABET_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    let subscriber = fmt::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(true)
        .compact()
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}

fn main() -> Result<(), Box<dyn Error>> {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=alphabet-compiler/src");
    println!("cargo:rerun-if-env-changed=ALPHABET_LOG");
    println!("cargo:rerun-if-env-changed=ALPHABET_CANONICAL");
    init_logging();

    let config = Config::default();
    let artifact = compile(&builtin::definitions(), &config)?;
    let rendered = artifact.render(&config);

    let out = PathBuf::from(env::var("OUT_DIR")?).join("alphabets.rs");
    fs::write(&out, &rendered)?;
    info!(target: "alphabet::build", path = %out.display(), bytes = rendered.len(), "wrote artifact");

    if let Some(canonical) = env::var_os("ALPHABET_CANONICAL") {
        let canonical = PathBuf::from(canonical);
        println!("cargo:rerun-if-changed={}", canonical.display());
        let expected = fs::read_to_string(&canonical)?;
        verify(&expected, &rendered)?;
        info!(target: "alphabet::build", canonical = %canonical.display(), "artifact matches canonical copy");
    }
    Ok(())
}
