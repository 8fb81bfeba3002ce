/// Codes of the states outside the contiguous 48.
pub const NON_CONTIGUOUS_CODES: [&str; 2] = ["AK", "HI"];

/// Selection applied by `GET /states?contig=`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContigFilter {
    #[default]
    All,
    ContiguousOnly,
    NonContiguousOnly,
}

impl ContigFilter {
    /// Only the exact strings "true" and "false" select a filter; anything
    /// else (including absence) means every state.
    pub fn from_query(flag: Option<&str>) -> Self {
        match flag {
            Some("true") => Self::ContiguousOnly,
            Some("false") => Self::NonContiguousOnly,
            _ => Self::All,
        }
    }

    pub fn matches(&self, code: &str) -> bool {
        let outside = NON_CONTIGUOUS_CODES.contains(&code);
        match self {
            Self::All => true,
            Self::ContiguousOnly => !outside,
            Self::NonContiguousOnly => outside,
        }
    }
}
