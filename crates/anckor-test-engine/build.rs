// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! Build script to stamp the engine with a version string.
//!
//! An `ANCKOR_VERSION` set by the caller wins. Otherwise `git describe` is
//! used, falling back to the package version outside a git checkout.

// Build scripts need different lint settings than the main crate.
#![allow(clippy::expect_used, clippy::panic)]

fn git_describe() -> Option<String> {
    let output = std::process::Command::new("git")
        .args(["describe", "--tags", "--always", "--dirty"])
        .output()
        .ok()?;
    if !output.status.success() {
        return None;
    }
    let version = String::from_utf8(output.stdout).ok()?;
    let version = version.trim();
    (!version.is_empty()).then(|| version.to_owned())
}

fn main() {
    println!("cargo::rerun-if-env-changed=ANCKOR_VERSION");

    if std::env::var_os("ANCKOR_VERSION").is_some() {
        return;
    }

    let version = git_describe().unwrap_or_else(|| {
        let Ok(version) = std::env::var("CARGO_PKG_VERSION") else {
            panic!("CARGO_PKG_VERSION not set");
        };
        version
    });
    println!("cargo::rustc-env=ANCKOR_VERSION={version}");
}
