mod helper_constants;
mod lookup_tables;

pub(super) use helper_constants::*;
pub(super) use lookup_tables::{AREA_CODES, CARRIER_PREFIXES, COUNTRY_PREFIXES};
