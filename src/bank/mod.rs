pub mod menu;
pub mod session;

pub use menu::{run, Action};
pub use session::{BankError, Session};
