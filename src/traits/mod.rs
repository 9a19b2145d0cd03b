pub mod animate;
pub mod frame;
pub mod scroll;

pub use animate::*;
pub use frame::*;
pub use scroll::*;
