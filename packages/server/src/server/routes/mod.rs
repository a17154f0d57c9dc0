// HTTP routes
pub mod health;
pub mod urls;

pub use health::*;
pub use urls::*;
