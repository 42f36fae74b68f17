pub const PLUS_SIGN: &'static str = "+";
pub const PLUS_CHAR: char = '+';

/// Country calling code of Brazil, without the plus sign.
pub const BRAZIL_COUNTRY_CODE: &'static str = "55";
/// Country calling code of Brazil as it appears at the start of a
/// normalized number.
pub const BRAZIL_PREFIX: &'static str = "+55";

// A number that already carries a plus sign must be longer than this,
// sign included.
pub const MIN_LENGTH_WITH_PLUS: usize = 9;
// Bare digits starting with 55 are taken as already carrying the Brazilian
// country code from this length on.
pub const MIN_LENGTH_WITH_BRAZIL_CODE: usize = 12;
/// DDD + 9 + eight digits.
pub const BRAZIL_MOBILE_LENGTH: usize = 11;
/// DDD + eight digits.
pub const BRAZIL_LANDLINE_LENGTH: usize = 10;
// Anything shorter than this without a plus sign is rejected.
pub const MIN_LENGTH_FOR_INTERNATIONAL: usize = 10;

pub const AREA_CODE_LENGTH: usize = 2;
// The carrier prefix is read from the start of the subscriber tail.
pub const CARRIER_TAIL_LENGTH: usize = 9;
pub const CARRIER_PREFIX_LENGTH: usize = 2;

// Matches every character the cleaner throws away. Only ASCII digits are
// kept, `\d` would let other Unicode decimals through.
pub const NON_DIALABLE_CHARS: &'static str = r"[^0-9+]";
pub const NORMALIZED_NUMBER: &'static str = r"\+[0-9]+";

pub const BRAZIL: &'static str = "Brasil";
pub const UNKNOWN_AREA: &'static str = "Desconhecida";
