pub mod stopwatch;
pub mod timings;

pub use stopwatch::Stopwatch;
pub use timings::FrameTimings;
