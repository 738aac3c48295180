//! Lane backends
//!
//! Implementations of [`strandcast_core::traits::MultiLaneBus`]. The
//! in-memory backend here covers tests and bring-up; a hardware
//! bit-shifting engine plugs in behind the same trait.

pub mod memory;

pub use memory::{LaneError, MemoryLanes};
