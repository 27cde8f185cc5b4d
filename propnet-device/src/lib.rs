//! Host-side stack for driving a propnet network from a PC or gateway.
//!
//! The split mirrors the layers below it: [`radio`] is the seam to the
//! transceiver, [`sniffer`] runs background capture over that seam, and
//! [`registry`] models the nodes the tooling knows how to talk to.

pub mod radio;
pub mod registry;
pub mod sniffer;

#[cfg(test)]
mod test_util;

pub use radio::{send_packet, LinkError, RadioLink};
pub use registry::{Node, NodeRegistry, NodeType};
pub use sniffer::{Capture, Sniffer, SnifferError};
