//! Fixed parameters of the container format

/// Maximum distance a reference can reach back (12-bit field, stored minus one)
pub const WINDOW_SIZE: usize = 1 << DISTANCE_BITS;

/// Longest run a single reference can copy (4-bit field, stored minus one)
pub const MAX_MATCH: usize = 1 << LENGTH_BITS;

/// Shortest run worth encoding as a reference; anything shorter costs at
/// least as much as the literals it replaces
pub const MIN_MATCH: usize = 3;

pub const DISTANCE_BITS: u32 = 12;
pub const LENGTH_BITS: u32 = 4;

/// Size of the little-endian header count that opens every container
pub const COUNT_PREFIX_LEN: usize = 8;

/// Tokens described by one header byte
pub const TOKENS_PER_HEADER: usize = 8;

/// Wire size of a literal token in the data stream
pub const LITERAL_SIZE: usize = 1;

/// Wire size of a packed reference in the data stream
pub const REFERENCE_SIZE: usize = 2;
