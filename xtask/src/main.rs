//! Custom cargo commands for the movediff crate.
//!
//! Usage:
//!   cargo xtask verify    - Run full verification suite
//!   cargo xtask test      - Run all tests (default and minimal features)
//!   cargo xtask check     - Quick check (no fuzzing, no Kani)
//!   cargo xtask bench     - Run benchmarks
//!   cargo xtask fuzz      - Run every fuzz target for a short while
//!   cargo xtask kani      - Run the Kani proofs

use anyhow::{bail, Context, Result};
use std::env;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Fuzz targets in fuzz/Cargo.toml.
const FUZZ_TARGETS: &[&str] = &[
    "diff_invariants",
    "identity_rows",
    "dyn_elements",
    "received_results",
];

/// Seconds per fuzz target in `cargo xtask fuzz`.
const FUZZ_SECONDS: u32 = 60;

/// Contract checks that must stay wired into the engine: (file, marker).
const CONTRACT_MARKERS: &[(&str, &str)] = &[
    ("src/verify/contracts.rs", "movement offset underflow"),
    ("src/verify/contracts.rs", "Contract violation: DiffResult.WellFormed"),
    ("src/movement.rs", "contracts::check_expected_position"),
    ("src/diff.rs", "contracts::check_diff_well_formed"),
    ("src/verify/types.rs", "fn check_movement_predicate"),
];

fn main() -> Result<()> {
    let task = env::args().nth(1);
    match task.as_deref() {
        Some("verify") => verify()?,
        Some("test") => test()?,
        Some("check") => check()?,
        Some("bench") => bench()?,
        Some("fuzz") => fuzz()?,
        Some("kani") => kani()?,
        _ => print_help(),
    }
    Ok(())
}

fn print_help() {
    eprintln!(
        r#"
cargo xtask <COMMAND>

Commands:
  verify    Run full verification suite (markers + tests + clippy + Kani)
  test      Run all Rust tests, with default and minimal features
  check     Quick check (cargo check + test + clippy)
  bench     Run benchmarks
  fuzz      Run each fuzz target for {FUZZ_SECONDS}s (needs cargo-fuzz, nightly)
  kani      Run Kani proofs (needs cargo-kani)
"#
    );
}

/// Full verification suite
fn verify() -> Result<()> {
    println!("==========================================");
    println!("movediff Verification Suite");
    println!("==========================================\n");

    println!("[1/5] Checking contract markers...");
    check_contract_markers()?;
    println!("✓ Contract markers present\n");

    println!("[2/5] Running Rust tests...");
    test()?;
    println!("✓ All Rust tests passed\n");

    println!("[3/5] Running clippy...");
    run_cargo(&["clippy", "--workspace", "--all-targets", "--quiet", "--", "-D", "warnings"])?;
    println!("✓ Clippy passed\n");

    println!("[4/5] Building docs...");
    run_cargo(&["doc", "--no-deps", "--quiet"])?;
    println!("✓ Docs build\n");

    println!("[5/5] Running Kani proofs...");
    kani()?;
    println!("✓ Kani proofs done\n");

    println!("==========================================");
    println!("✓ ALL VERIFICATION CHECKS PASSED");
    println!("==========================================");
    println!("\nSafe to commit changes.");

    Ok(())
}

/// Run all tests, then again without default features.
fn test() -> Result<()> {
    run_cargo(&["test", "--workspace"])?;
    run_cargo(&["test", "--no-default-features", "--lib", "--tests"])?;
    run_cargo(&["test", "--features", "tracing", "--lib"])
}

/// Quick check (no fuzzing, no Kani)
fn check() -> Result<()> {
    println!("Running quick checks...\n");

    println!("[1/3] cargo check...");
    run_cargo(&["check", "--workspace", "--all-targets"])?;

    println!("[2/3] cargo test...");
    run_cargo(&["test", "--workspace", "--quiet"])?;

    println!("[3/3] cargo clippy...");
    run_cargo(&["clippy", "--workspace", "--quiet", "--", "-D", "warnings"])?;

    println!("\n✓ Quick checks passed");
    Ok(())
}

/// Run benchmarks
fn bench() -> Result<()> {
    run_cargo(&["bench", "--bench", "diff_bench"])
}

/// Run every fuzz target for a bounded time.
fn fuzz() -> Result<()> {
    let fuzz_dir = project_root()?.join("fuzz");
    let max_time = format!("-max_total_time={FUZZ_SECONDS}");

    for target in FUZZ_TARGETS {
        println!("Fuzzing {target} for {FUZZ_SECONDS}s...");
        run_in(
            &fuzz_dir,
            "cargo",
            &["+nightly", "fuzz", "run", target, "--", &max_time],
        )?;
    }

    println!("\n✓ No crashes in {} targets", FUZZ_TARGETS.len());
    Ok(())
}

/// Run the Kani proofs, skipping when Kani is not installed.
fn kani() -> Result<()> {
    let installed = Command::new("cargo")
        .args(["kani", "--version"])
        .output()
        .map(|out| out.status.success())
        .unwrap_or(false);
    if !installed {
        println!("  (cargo-kani not installed, skipping)");
        return Ok(());
    }

    let kani_dir = project_root()?.join("kani-proofs");
    run_in(&kani_dir, "cargo", &["kani"])
}

// ============================================================================
// Helper functions
// ============================================================================

fn project_root() -> Result<PathBuf> {
    let manifest_dir = match env::var("CARGO_MANIFEST_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => env::current_dir().context("Failed to read current directory")?,
    };

    // xtask is in project_root/xtask, so go up one level
    let root = manifest_dir.parent().unwrap_or(&manifest_dir);
    Ok(root.to_path_buf())
}

fn run_cargo(args: &[&str]) -> Result<()> {
    run_in(&project_root()?, "cargo", args)
}

fn run_in(dir: &Path, program: &str, args: &[&str]) -> Result<()> {
    let status = Command::new(program)
        .args(args)
        .current_dir(dir)
        .status()
        .with_context(|| format!("Failed to run {} {:?}", program, args))?;

    if !status.success() {
        bail!("{} {:?} failed", program, args);
    }

    Ok(())
}

fn check_contract_markers() -> Result<()> {
    let root = project_root()?;

    for (file, marker) in CONTRACT_MARKERS {
        let content = std::fs::read_to_string(root.join(file))
            .with_context(|| format!("Failed to read {}", file))?;
        if !content.contains(marker) {
            bail!(
                "Missing `{}` in {}. Someone may have removed a contract check!",
                marker,
                file
            );
        }
    }

    Ok(())
}
