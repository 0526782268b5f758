// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::Write;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let out_dir = std::env::var("OUT_DIR")?;
    let path = std::path::Path::new(&out_dir).join("env_vars.rs");
    let mut f = std::fs::File::create(path)?;

    let vars = [
        ("API_BASE_URL", "API_BASE_URL"),
        ("WS_BASE_URL", "WS_BASE_URL"),
        ("QUICKPOLL_CONFIG", "QUICKPOLL_CONFIG"),
        ("QUICKPOLL_LOG", "QUICKPOLL_LOG"),
        ("NO_COLOR", "NO_COLOR"),
        ("COLOR", "COLOR"),
    ];

    for (const_name, env_name) in &vars {
        writeln!(f, "pub const {const_name}: &str = \"{env_name}\";")?;
    }

    println!("cargo::rerun-if-changed=build.rs");
    Ok(())
}
