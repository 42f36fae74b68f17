pub mod phoneinfo;
pub mod http;
pub mod config;
pub mod logging;
pub(crate) mod regex_util;
pub(crate) mod string_util;

pub use phoneinfo::{
    phone_info_util::PhoneInfoUtil, Carrier, NormalizationError, NormalizedNumber, PhoneInfo,
    PHONE_INFO_UTIL,
};

#[cfg(test)]
mod tests;
