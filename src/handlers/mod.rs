pub mod donations;
pub mod donors;
pub mod events;
pub mod incentives;
pub mod prizes;
pub mod speed_runs;

pub use donations::donation_config;
pub use donors::donor_config;
pub use events::event_config;
pub use incentives::incentive_config;
pub use prizes::prize_config;
pub use speed_runs::speed_run_config;
