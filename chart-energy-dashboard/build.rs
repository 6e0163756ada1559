use anyhow::{Context, Result};
use std::env;
use std::fs;
use std::path::Path;

/// Every fixture the app embeds with `include_str!`.
const FIXTURES: [&str; 10] = [
    "fractional-energy-by-state.csv",
    "new-england.json",
    "2023_ME-filt.csv",
    "2023_NH-filt.csv",
    "2023_VT-filt.csv",
    "2023_CT-filt.csv",
    "2023_RI-filt.csv",
    "2023_SEMA-filt.csv",
    "2023_NEMA-filt.csv",
    "2023_WCMA-filt.csv",
];

fn main() -> Result<()> {
    let out_dir = env::var("OUT_DIR").context("OUT_DIR not set")?;

    // Copy fixtures to OUT_DIR for include_str. A missing fixture becomes an
    // empty file so the app still builds and reports the load failure.
    for name in FIXTURES {
        let src = Path::new("../fixtures").join(name);
        let dest = Path::new(&out_dir).join(name);
        if src.exists() {
            fs::copy(&src, &dest).with_context(|| format!("failed to copy {}", src.display()))?;
        } else {
            println!("cargo:warning=fixture {} not found", src.display());
            fs::write(&dest, "").with_context(|| format!("failed to write {}", dest.display()))?;
        }
        println!("cargo:rerun-if-changed=../fixtures/{name}");
    }

    println!("cargo:rerun-if-changed=build.rs");
    Ok(())
}
