pub mod next_date;
pub mod serve;
