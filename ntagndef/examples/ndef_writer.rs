#![cfg(feature = "pcsc")]

//! Write `<base-url>?uid=<UID>` to the tag on the first PC/SC reader.
//!
//! Usage:
//!   cargo run -p ntagndef --example ndef_writer --features pcsc -- https://example.com

use ntagndef::prelude::*;
use ntagndef::transport::PcscTransport;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let base_url = std::env::args()
        .nth(1)
        .ok_or_else(|| anyhow::anyhow!("usage: ndef_writer <base-url>"))?;

    let mut transport = PcscTransport::connect_first()?;
    let tag = Tag::default();
    let report = handle_write_session(&mut transport, &tag, &base_url)?;

    println!("Wrote {}", report.url);
    println!(
        "{} pages ({} bytes), uid {}",
        report.pages_written,
        report.bytes_written,
        report
            .uid
            .as_ref()
            .map(Uid::to_hex)
            .unwrap_or_else(|| "-".into())
    );
    Ok(())
}
