// Models module - wire formats of the Involtum REST API

pub mod login;
pub mod location;
pub mod machine;
pub mod responses;

// Re-export all models for easier imports
pub use login::*;
pub use location::*;
pub use machine::*;
pub use responses::*;
