pub mod category;
pub mod results;
pub mod votes;

pub use category::Category;
pub use results::{CandidateResult, CategoryResults};
pub use votes::{CandidateCounts, VoteTable};
