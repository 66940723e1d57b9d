use std::env;
use std::process::Command;

/// Short commit of the checkout, if git can tell us
fn head_commit() -> Option<String> {
    let out = Command::new("git")
        .args(["rev-parse", "--short", "HEAD"])
        .output()
        .ok()?;
    let sha = String::from_utf8(out.stdout).ok()?;
    (out.status.success() && !sha.trim().is_empty()).then(|| sha.trim().to_owned())
}

fn main() {
    for var in ["PORTFOLIO_VERSION", "PORTFOLIO_GIT_SHA"] {
        println!("cargo:rerun-if-env-changed={var}");
    }

    let version = env::var("PORTFOLIO_VERSION")
        .unwrap_or_else(|_| env!("CARGO_PKG_VERSION").to_owned());
    let sha = env::var("PORTFOLIO_GIT_SHA")
        .ok()
        .or_else(head_commit)
        .unwrap_or_else(|| "unknown".to_owned());

    println!("cargo:rustc-env=PORTFOLIO_VERSION={version}");
    println!("cargo:rustc-env=PORTFOLIO_GIT_SHA={sha}");
}
