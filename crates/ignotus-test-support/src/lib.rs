//! Shared test doubles for the Ignotus workspace.

mod counter;
mod mapper;

pub use counter::CloneCounter;
pub use mapper::RecordingMapper;
