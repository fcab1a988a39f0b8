pub mod common;
pub mod donation;
pub mod donor;
pub mod event;
pub mod incentive;
pub mod pagination;
pub mod prize;
pub mod speed_run;

pub use common::*;
pub use donation::*;
pub use donor::*;
pub use event::*;
pub use incentive::*;
pub use pagination::*;
pub use prize::*;
pub use speed_run::*;
