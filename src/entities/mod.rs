pub mod challenge_bids;
pub mod challenges;
pub mod choice_bids;
pub mod choice_options;
pub mod choices;
pub mod donations;
pub mod donors;
pub mod events;
pub mod prize_categories;
pub mod prizes;
pub mod speed_runs;

pub use challenge_bids as challenge_bid_entity;
pub use challenges as challenge_entity;
pub use choice_bids as choice_bid_entity;
pub use choice_options as choice_option_entity;
pub use choices as choice_entity;
pub use donations as donation_entity;
pub use donors as donor_entity;
pub use events as event_entity;
pub use prize_categories as prize_category_entity;
pub use prizes as prize_entity;
pub use speed_runs as speed_run_entity;

pub use challenges::IncentiveState;
pub use donations::{BidState, CommentState, DonationDomain, ReadState, TransactionState};
