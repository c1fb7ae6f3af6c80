//! Utilities for driving a [`FragmentationEngine`](meshfrag::FragmentationEngine)
//! during tests.
//!
//! These helpers play the part of the mesh: they acknowledge every fragment
//! the engine emits and feed frames back in arbitrary order.
//!
//! ```rust
//! use meshfrag::{FragmentationEngine, MeshAddress};
//! use meshfrag_testing::{collect_frames, feed_frames, sequential_datagram};
//!
//! let sender = FragmentationEngine::default();
//! let receiver = FragmentationEngine::default();
//! let hop = MeshAddress::from_static(&[0x01, 0x02]);
//! let datagram = sequential_datagram(300);
//! let frames = collect_frames(&sender, &hop, &datagram, 10);
//! let delivered = feed_frames(&receiver, &hop, frames);
//! assert_eq!(delivered, vec![bytes::Bytes::from(datagram)]);
//! ```

pub mod helpers;
pub mod logging;
mod macros;

pub use helpers::{
    collect_frames,
    feed_frames,
    fragment_offsets,
    sequential_datagram,
    shuffled,
    split_datagram,
};
pub use logging::{LoggerHandle, logger};
