//! Build script for the RTC firmware
//!
//! Adds the linker scripts for the target build. Host test builds
//! (`--no-default-features --features std`) need nothing.

fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    // Cargo exposes enabled features to build scripts as env vars
    if std::env::var_os("CARGO_FEATURE_EMBEDDED").is_some() {
        println!("cargo:rustc-link-arg-bins=--nmagic");
        println!("cargo:rustc-link-arg-bins=-Tlink.x");
        println!("cargo:rustc-link-arg-bins=-Tdefmt.x");
    }
}
