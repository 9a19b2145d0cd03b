/// Anything that can report the latest document scroll offset in pixels.
pub trait OffsetSource {
    fn current_offset(&self) -> f32;
}

/// A fixed offset, handy for headless stepping.
impl OffsetSource for f32 {
    fn current_offset(&self) -> f32 {
        *self
    }
}
