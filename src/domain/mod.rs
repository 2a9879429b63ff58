pub mod identifier;
pub mod user;
pub mod display;

pub use identifier::*;
pub use user::*;
pub use display::*;
