pub mod initialize_vault;
pub mod start_round;
pub mod participate;
pub mod end_round;
pub mod distribute_sol;

pub use initialize_vault::*;
pub use start_round::*;
pub use participate::*;
pub use end_round::*;
pub use distribute_sol::*;
