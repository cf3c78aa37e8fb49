use anyhow::Context;
use std::env;
use std::fs;
use std::path::Path;

const DATA_FILE: &str = "GlobalWeatherRepository.csv";

fn main() -> anyhow::Result<()> {
    let out_dir = env::var("OUT_DIR").context("OUT_DIR not set")?;
    let source = Path::new("../fixtures").join(DATA_FILE);
    let dest = Path::new(&out_dir).join(DATA_FILE);

    // An empty embed is reported as a missing data file at runtime.
    if source.exists() {
        fs::copy(&source, &dest).with_context(|| format!("copying {}", source.display()))?;
    } else {
        fs::write(&dest, "").with_context(|| format!("writing {}", dest.display()))?;
    }

    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=../fixtures/{DATA_FILE}");
    Ok(())
}
