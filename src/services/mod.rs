pub mod donation_service;
pub mod donor_service;
pub mod event_service;
pub mod incentive_service;
pub mod prize_service;
pub mod speed_run_service;

pub use donation_service::*;
pub use donor_service::*;
pub use event_service::*;
pub use incentive_service::*;
pub use prize_service::*;
pub use speed_run_service::*;
