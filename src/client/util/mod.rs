pub mod time;

pub use time::format_relative_time;
