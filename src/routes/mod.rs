pub mod categories;
pub mod health;
pub mod results;
pub mod votes;

pub use categories::{list_categories, replace_categories};
pub use health::health_check;
pub use results::{all_results, category_results};
pub use votes::{all_votes, submit_vote};
