//! Audit a DXF drawing and print the JSON report.
//!
//! Accepts either a local path or an http(s) URL:
//!
//! ```text
//! audit_dxf plan.dxf
//! audit_dxf https://bucket.example.com/plan.dxf?sig=...
//! RUST_LOG=debug audit_dxf plan.dxf
//! ```
//!
//! Exits zero whenever a report was produced, including error reports; the
//! report's own `status` field says how the audit went.

use anyhow::{bail, Context, Result};
use tracing_subscriber::{fmt, EnvFilter};

use dxfaudit::{audit_file, audit_url, is_remote_url};

fn main() -> Result<()> {
    init_logging();

    let mut args = std::env::args().skip(1);
    let target = match args.next() {
        Some(target) => target,
        None => bail!("usage: audit_dxf <path-or-url>"),
    };
    if args.next().is_some() {
        bail!("usage: audit_dxf <path-or-url>");
    }

    let report = if is_remote_url(&target) {
        audit_url(&target)
    } else {
        audit_file(&target)
    };

    let json = report
        .to_json_pretty()
        .context("failed to serialize report")?;
    println!("{json}");
    Ok(())
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = fmt().with_env_filter(filter).with_writer(std::io::stderr).try_init();
}
