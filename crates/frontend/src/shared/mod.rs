pub mod api_utils;
pub mod date_utils;
pub mod export;
pub mod number_format;
