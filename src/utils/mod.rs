mod time_utils;

pub use time_utils::history_time_string;
