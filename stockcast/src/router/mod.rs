pub mod forecast;
pub mod history;
pub mod insights;

pub mod util;
