//! Standard exit codes (BSD sysexits.h compatible)

/// Command line usage error
pub const USAGE: i32 = 64;

/// Data format error
pub const DATAERR: i32 = 65;
