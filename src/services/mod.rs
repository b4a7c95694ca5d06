pub mod assessment_service;
pub mod noise;
pub mod recommendation_table;
pub mod risk_calculator;
pub mod statistics_service;
pub mod trend_analyzer;

pub use assessment_service::*;
pub use noise::*;
pub use recommendation_table::*;
pub use risk_calculator::*;
pub use statistics_service::*;
pub use trend_analyzer::*;
