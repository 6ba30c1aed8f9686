mod category;
mod expense;
mod identity;
mod period;
mod report;

pub use category::*;
pub use expense::*;
pub use identity::*;
pub use period::*;
pub use report::*;
