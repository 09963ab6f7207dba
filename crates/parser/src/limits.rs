// Parse limits for signatures that may come from an untrusted peer.

/// Nesting cap applied when the caller does not pick one.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Ceiling on any configured depth; keeps the recursive grammar within the stack.
pub const HARD_MAX_DEPTH: usize = 255;

/// Longest signature the bus wire format can carry (length is a single byte).
pub const WIRE_MAX_LENGTH: usize = 255;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseLimits {
    /// Deepest allowed nesting of arrays, structs and dict entries combined.
    pub max_depth: usize,
    /// Longest accepted signature in bytes; `None` leaves the cap to the transport.
    pub max_length: Option<usize>,
}

impl Default for ParseLimits {
    fn default() -> Self {
        ParseLimits {
            max_depth: DEFAULT_MAX_DEPTH,
            max_length: None,
        }
    }
}

impl ParseLimits {
    /// Limits matching what a signature on the wire can legally be.
    pub fn wire() -> Self {
        ParseLimits {
            max_length: Some(WIRE_MAX_LENGTH),
            ..ParseLimits::default()
        }
    }

    /// Clamped to `HARD_MAX_DEPTH`.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth.min(HARD_MAX_DEPTH);
        self
    }

    /// Depth cap actually applied, even when `max_depth` was set directly.
    pub fn effective_max_depth(&self) -> usize {
        self.max_depth.min(HARD_MAX_DEPTH)
    }

    pub fn with_max_length(mut self, max_length: Option<usize>) -> Self {
        self.max_length = max_length;
        self
    }
}
