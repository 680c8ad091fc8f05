mod cors;
mod health_check;
mod newsletter;
mod subscribe;
pub use cors::*;
pub use health_check::*;
pub use newsletter::*;
pub use subscribe::*;
