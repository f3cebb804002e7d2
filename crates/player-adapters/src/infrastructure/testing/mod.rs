//! Test-only infrastructure fakes.
//!
//! Hand-written stand-ins for the native SDK and the host surface, used by
//! the player component tests and the demo runner. They live next to the real
//! adapters since they implement the same outbound ports; the ports crate
//! only generates `mockall` mocks for "never called" style checks.

pub mod fixtures;
pub mod mock_native_bridge;
pub mod recording_surface;

pub use fixtures::{sample_product, test_constants, TEST_OVER_EVENT, TEST_PROGRESS_EVENT};
pub use mock_native_bridge::{MockNativeBridge, Scripted, SentCommand};
pub use recording_surface::RecordingSurface;
