//! Where round advice comes from.
//!
//! - [`remote`] - the real-advice HTTP endpoint
//! - [`fixtures`] - the fabricated list used for fake rounds
//!
//! Real advice is reached through the [`AdviceSource`] trait so the controller
//! can be driven by a canned source in tests and by [`remote::AdviceClient`]
//! in the binary.

pub mod error;
pub mod fixtures;
pub mod remote;

pub use error::{AdviceFetchError, FixtureError};
pub use fixtures::FixtureSet;
pub use remote::AdviceClient;

/// Substituted for real advice when the endpoint cannot be used. Still counts
/// as true advice for scoring.
pub const FALLBACK_ADVICE: &str = "The true secret is to never give up.";

/// A provider of genuine advice, one item per call.
#[allow(async_fn_in_trait)]
pub trait AdviceSource {
    async fn fetch_advice(&self) -> Result<String, AdviceFetchError>;
}
