pub mod observation;
pub mod request;
pub mod risk_assessment;
pub mod risk_level;

pub use observation::*;
pub use request::*;
pub use risk_assessment::*;
pub use risk_level::*;
