pub mod alert;
pub mod market;
pub mod sentiment;
pub mod trade;

pub use alert::*;
pub use market::*;
pub use sentiment::*;
pub use trade::*;
