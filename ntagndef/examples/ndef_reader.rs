#![cfg(feature = "pcsc")]

//! Print the NDEF records of the tag on the first PC/SC reader.
//!
//! Usage:
//!   cargo run -p ntagndef --example ndef_reader --features pcsc

use ntagndef::prelude::*;
use ntagndef::transport::PcscTransport;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut transport = PcscTransport::connect_first()?;
    if let Some(reader) = transport.reader() {
        println!("Reader: {}", reader.to_string_lossy());
    }

    let tag = Tag::default();
    match tag.read_uid(&mut transport) {
        Ok(uid) => println!("UID: {}", uid),
        Err(e) => println!("UID unavailable (non-fatal): {}", e),
    }

    let mut tally = SessionTally::new();
    let outcome = handle_read_session(&mut transport, &tag);
    tally.record(&outcome);
    match outcome {
        Ok(msg) => {
            for (i, record) in msg.records().iter().enumerate() {
                println!("[{}] {}", i, record);
            }
        }
        Err(e) => println!("Read failed: {}", e),
    }
    println!(
        "cards: {} ok: {} failed: {}",
        tally.processed, tally.succeeded, tally.failed
    );
    Ok(())
}
