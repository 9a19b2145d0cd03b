use std::time::Instant;

use crate::traits::FrameSource;

/// Frame metadata - carries frame number and timing info
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameInfo {
    pub number: u64,
    /// Seconds since the clock started; never decreases
    pub time: f32,
    pub delta: f32,
}

impl FrameInfo {
    pub fn new(number: u64, time: f32, delta: f32) -> Self {
        Self { number, time, delta }
    }
}

/// Elapsed-time clock shared by every animation driver.
///
/// Infinite iterator: each `next()` samples wall-clock time once and yields
/// the frame's number, elapsed seconds and delta. There is no reset.
#[derive(Debug)]
pub struct FrameClock {
    frame_number: u64,
    start_time: Instant,
    last_frame_time: Instant,
    last_delta: f32,
}

impl FrameClock {
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            frame_number: 0,
            start_time: now,
            last_frame_time: now,
            last_delta: 0.0,
        }
    }

    pub fn frame_number(&self) -> u64 {
        self.frame_number
    }

    pub fn time(&self) -> f32 {
        self.start_time.elapsed().as_secs_f32()
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for FrameClock {
    type Item = FrameInfo;

    fn next(&mut self) -> Option<FrameInfo> {
        let now = Instant::now();
        let delta = now.duration_since(self.last_frame_time).as_secs_f32();
        let time = now.duration_since(self.start_time).as_secs_f32();

        let info = FrameInfo::new(self.frame_number, time, delta);

        self.frame_number += 1;
        self.last_frame_time = now;
        self.last_delta = delta;

        Some(info)
    }
}

impl FrameSource for FrameClock {
    fn delta_time(&self) -> f32 {
        self.last_delta
    }

    fn frame_count(&self) -> u64 {
        self.frame_number
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;
    use std::time::Duration;

    #[test]
    fn test_frames_are_numbered_in_order() {
        let mut clock = FrameClock::new();
        let a = clock.next().unwrap();
        let b = clock.next().unwrap();
        assert_eq!(a.number, 0);
        assert_eq!(b.number, 1);
        assert_eq!(clock.frame_count(), 2);
    }

    #[test]
    fn test_time_is_monotonic() {
        let mut clock = FrameClock::new();
        let mut last = 0.0;
        for frame in clock.by_ref().take(20) {
            assert!(frame.time >= last);
            last = frame.time;
        }
    }

    #[test]
    fn test_delta_measures_sleep() {
        let mut clock = FrameClock::new();
        clock.next();
        thread::sleep(Duration::from_millis(10));
        let frame = clock.next().unwrap();

        assert!(frame.delta >= 0.009);
        assert_eq!(clock.delta_time(), frame.delta);
        assert!(frame.time >= frame.delta);
    }
}
