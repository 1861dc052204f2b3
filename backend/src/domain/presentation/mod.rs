//! Display formatting for listing cards: relative posting age and salary
//! labels. Pure functions over in-memory data.

mod posted_at;
mod salary;

pub use posted_at::time_since_posted;
pub use salary::{format_money, format_salary};
