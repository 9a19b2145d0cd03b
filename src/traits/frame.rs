use crate::frame::FrameInfo;

/// Frame timing and iteration abstraction
pub trait FrameSource: Iterator<Item = FrameInfo> {
    /// Delta time of the most recent frame in seconds
    fn delta_time(&self) -> f32;

    /// Total number of frames yielded so far
    fn frame_count(&self) -> u64;
}
