//! Assertion macros shared by test helpers and integration tests.

/// Unwrap the frame of a `bytesToMesh` event, panicking with the caller's
/// location on any other event.
#[macro_export]
macro_rules! expect_frame {
    ($event:expr) => {{
        match $event {
            ::meshfrag::Event::BytesToMesh { frame, .. } => frame,
            other => ::std::panic!(
                "expected bytesToMesh at {}:{}, got {other:?}",
                file!(),
                line!()
            ),
        }
    }};
}
