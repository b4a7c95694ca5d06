pub mod scoring;
pub mod settings;
pub mod validator;

pub use scoring::*;
pub use settings::*;
pub use validator::*;
