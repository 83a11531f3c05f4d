//! Build script for rawc-rs.
//!
//! Compiles the raw C ops library in `../raw_c` into a static archive and
//! links it into the crate. Only a C compiler is required.
//!
//! # Environment Variables
//!
//! - `RAWC_OPT_LEVEL`: Optimization level passed to the C compiler
//!   (defaults to cargo's `OPT_LEVEL`)
//! - `RAWC_SKIP_BUILD`: Set to "1" to skip compiling the C library (link it yourself)

use std::env;
use std::path::PathBuf;

const C_SOURCES: &[&str] = &["src/ops.c"];
const C_HEADERS: &[&str] = &["include/array.h", "include/ops.h"];

fn main() {
    build_raw_c();
}

fn build_raw_c() {
    println!("cargo:rerun-if-env-changed=RAWC_OPT_LEVEL");
    println!("cargo:rerun-if-env-changed=RAWC_SKIP_BUILD");

    if env::var("RAWC_SKIP_BUILD")
        .map(|v| v == "1")
        .unwrap_or(false)
    {
        println!("cargo:warning=Skipping raw_c build (RAWC_SKIP_BUILD=1)");
        println!("cargo:rustc-link-lib=static=rawc_ops");
        return;
    }

    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR").unwrap());
    let raw_c_dir = manifest_dir.join("../raw_c");

    for file in C_SOURCES.iter().chain(C_HEADERS) {
        println!("cargo:rerun-if-changed={}", raw_c_dir.join(file).display());
    }

    let mut build = cc::Build::new();
    build
        .include(raw_c_dir.join("include"))
        .warnings(true)
        .flag_if_supported("-std=c99");

    for src in C_SOURCES {
        build.file(raw_c_dir.join(src));
    }

    // Override cargo's profile optimization for the C side only
    if let Ok(level) = env::var("RAWC_OPT_LEVEL") {
        build.opt_level_str(&level);
    }

    // Emits rustc-link-lib=static=rawc_ops and the search path
    build.compile("rawc_ops");
}
