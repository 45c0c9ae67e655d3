//! Dataset constants.

/// Default window length in points.
pub const DEFAULT_WINDOW_SIZE: usize = 512;

/// Default offset between consecutive window starts.
pub const DEFAULT_STRIDE: usize = 64;

/// Set label to directory name, in declaration order.
///
/// Recordings are stored in directories named after the recording
/// condition (Z, O, N, F, S) while sets are addressed as A..E.
pub const DEFAULT_SET_DIRECTORIES: [(&str, &str); 5] = [
    ("A", "Z"),
    ("B", "O"),
    ("C", "N"),
    ("D", "F"),
    ("E", "S"),
];
