//! Discord interaction plumbing: callback ids, the reply adapter and ack helpers.
//!
//! `handler.rs` turns gateway events into engine calls; everything here is what the
//! engine needs to talk back through serenity.

pub mod ids;
pub mod outbox;
pub mod util;
