pub mod vault;
pub mod custody;

pub use vault::*;
pub use custody::*;
