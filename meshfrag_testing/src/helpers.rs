//! Helpers that stand in for the mesh around a [`FragmentationEngine`].

use bytes::Bytes;
use meshfrag::{Event, FragmentHeader, FragmentationEngine, MeshAddress, PumpOutcome};
use rand::{SeedableRng, rngs::StdRng, seq::SliceRandom};


/// Deterministic datagram bytes whose value encodes their position.
#[must_use]
pub fn sequential_datagram(len: usize) -> Vec<u8> {
    (0..len)
        .map(|i| u8::try_from(i % 251).unwrap_or_default())
        .collect()
}

/// Split `datagram` into a compressed header of `header_len` bytes and the
/// payload behind it.
///
/// # Panics
///
/// Panics if `header_len` exceeds the datagram length.
#[must_use]
pub fn split_datagram(datagram: &[u8], header_len: usize) -> (Bytes, Bytes) {
    let (header, payload) = datagram.split_at(header_len);
    (Bytes::copy_from_slice(header), Bytes::copy_from_slice(payload))
}

/// Send `datagram` through `engine`, acknowledging every fragment, and
/// return the frames in transmission order.
///
/// # Panics
///
/// Panics if the engine rejects the request.
#[must_use]
pub fn collect_frames(
    engine: &FragmentationEngine,
    next_hop: &MeshAddress,
    datagram: &[u8],
    header_len: usize,
) -> Vec<Bytes> {
    let (header, payload) = split_datagram(datagram, header_len);
    let mut frames: Vec<Bytes> = engine
        .process(Event::Fragment {
            next_hop: next_hop.clone(),
            header,
            payload,
        })
        .into_iter()
        .map(|event| crate::expect_frame!(event))
        .collect();
    assert_eq!(frames.len(), 1, "request must produce exactly one frame");

    let Some(first) = FragmentHeader::decode(&frames[0]).expect("valid frame") else {
        return frames;
    };
    while let PumpOutcome::Frame(event) = engine.on_send_ack(first.tag()) {
        frames.push(crate::expect_frame!(event));
    }
    frames
}

/// Deliver `frames` from `source` and return every datagram the engine
/// passed upward.
///
/// # Panics
///
/// Panics if the engine emits anything other than `meshToV6`.
#[must_use]
pub fn feed_frames<I>(engine: &FragmentationEngine, source: &MeshAddress, frames: I) -> Vec<Bytes>
where
    I: IntoIterator<Item = Bytes>,
{
    frames
        .into_iter()
        .flat_map(|frame| {
            engine.process(Event::FromMoteData {
                source: source.clone(),
                frame,
            })
        })
        .map(|event| match event {
            Event::MeshToV6 { datagram, .. } => datagram,
            other => panic!("expected meshToV6, got {other:?}"),
        })
        .collect()
}

/// Offsets carried by each fragment in `frames`.
///
/// # Panics
///
/// Panics if a frame is not a valid fragment.
#[must_use]
pub fn fragment_offsets(frames: &[Bytes]) -> Vec<u16> {
    frames
        .iter()
        .map(|frame| {
            FragmentHeader::decode(frame)
                .expect("valid frame")
                .expect("fragment header")
                .offset()
        })
        .collect()
}

/// Return `frames` in a permutation determined by `seed`.
#[must_use]
pub fn shuffled(mut frames: Vec<Bytes>, seed: u64) -> Vec<Bytes> {
    frames.shuffle(&mut StdRng::seed_from_u64(seed));
    frames
}
