//! Host-side helper: `cargo run` builds the WASM site into `static/pkg` and
//! serves `static/` on a local HTTP server.

use std::process::{Command, ExitCode, Stdio};
use std::{env, io};

const DEFAULT_PORT: u16 = 8000;

fn port() -> u16 {
    env::var("SITE_PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(DEFAULT_PORT)
}

fn build_pkg() -> io::Result<bool> {
    println!("Building WASM pkg …");
    let status = Command::new("wasm-pack")
        .args([
            "build",
            "--release",
            "--target",
            "web",
            "--out-dir",
            "static/pkg",
        ])
        .status()?;
    Ok(status.success())
}

fn main() -> ExitCode {
    match build_pkg() {
        Ok(true) => {}
        Ok(false) => {
            eprintln!("wasm-pack finished with errors; is wasm-pack installed?");
            return ExitCode::FAILURE;
        }
        Err(_) => {
            eprintln!("wasm-pack not found, serving the existing static/pkg");
        }
    }

    let port = port().to_string();
    println!("Serving static/ at http://127.0.0.1:{port} …");
    let server = Command::new("python3")
        .args(["-m", "http.server", &port, "--directory", "static"])
        .stdout(Stdio::null())
        .stderr(Stdio::inherit())
        .status();

    match server {
        Ok(status) if status.success() => ExitCode::SUCCESS,
        Ok(status) => {
            eprintln!("http server exited with {status}");
            ExitCode::FAILURE
        }
        Err(err) => {
            eprintln!("failed to start http server: {err}");
            ExitCode::FAILURE
        }
    }
}
