mod record;
mod user;

pub use record::{DisplayAddress, DisplayRecord};
pub use user::{RawAddress, RawUser};
