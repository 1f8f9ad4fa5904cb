//! gqlws-inspect
//!
//! Reads newline-delimited `graphql-transport-ws` frames from stdin, decodes
//! each one exactly as a connection manager would, and prints one JSON verdict
//! per line.
//!
//! Usage: `gqlws-inspect [config.yaml]`

use std::io::{self, BufRead, Write};

use serde_json::json;
use tracing_subscriber::{fmt, EnvFilter};

use gqlws_codec::{classify, config, decode, Frame, ProtocolConfig};

fn main() {
    fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_writer(io::stderr)
        .init();

    let cfg = match std::env::args().nth(1) {
        Some(path) => config::load_from_file(&path).expect("config load failed"),
        None => ProtocolConfig::default(),
    };
    tracing::info!(max_frame_bytes = cfg.limits.max_frame_bytes, "gqlws-inspect starting");

    let stdin = io::stdin();
    let mut out = io::stdout().lock();
    let (mut accepted, mut rejected) = (0u64, 0u64);

    for line in stdin.lock().lines() {
        let line = line.expect("stdin read failed");
        if line.trim().is_empty() {
            continue;
        }
        let verdict = match decode(Frame::Text(line), &cfg.limits) {
            Ok(msg) => {
                accepted += 1;
                json!({
                    "ok": true,
                    "type": msg.kind().as_str(),
                    "id": msg.id(),
                    "dispatch": classify(&msg).as_str(),
                })
            }
            Err(e) => {
                rejected += 1;
                json!({
                    "ok": false,
                    "code": e.code().as_str(),
                    "error": e.to_string(),
                })
            }
        };
        writeln!(out, "{verdict}").expect("stdout write failed");
    }

    tracing::info!(accepted, rejected, "gqlws-inspect done");
}
