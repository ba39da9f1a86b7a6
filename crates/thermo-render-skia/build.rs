// File: crates/thermo-render-skia/build.rs
// Summary: Links the Windows system library Skia's font manager needs when targeting Windows.

fn main() {
    // cfg!(target_os) would describe the build host, not the target
    if std::env::var("CARGO_CFG_TARGET_OS").as_deref() == Ok("windows") {
        // RegOpenKeyExW, RegQueryInfoKeyW
        println!("cargo:rustc-link-lib=advapi32");
    }
    println!("cargo:rerun-if-changed=build.rs");
}
