//! Hardware and server abstraction traits
//!
//! - [`bus`] - the multi-lane serial bus the device transmits through
//! - [`strip`] - one addressable LED chain bound to a bus lane
//! - [`output`] - the device contract consumed by the protocol server

pub mod bus;
pub mod output;
pub mod strip;

pub use bus::{Lane, MultiLaneBus};
pub use output::OutputDevice;
pub use strip::LedStrip;
