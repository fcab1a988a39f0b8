pub mod donation_rules;
pub mod prize_rules;
pub mod validators;

pub use donation_rules::*;
pub use prize_rules::*;
