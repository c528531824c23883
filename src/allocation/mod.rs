pub mod engine;
pub mod facing;
pub mod shares;

pub use engine::{allocate, Allocation};
pub use facing::Facing;
pub use shares::share_table;
