/// Time-parameterized pose update.
///
/// `time` is the shared elapsed-time clock in seconds. Implementors only touch
/// their own local transforms and never draw new randomness.
pub trait Animate {
    fn animate(&mut self, time: f32);
}
