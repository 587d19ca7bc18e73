//! Record status shared by users and products

/// Active/inactive flag, stored as a small integer (1 = active, 0 = inactive)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Status {
    Inactive,
    #[default]
    Active,
}

impl Status {
    /// Numeric code used by the store and the API
    #[inline]
    pub fn code(self) -> i16 {
        match self {
            Self::Inactive => 0,
            Self::Active => 1,
        }
    }

    /// Parse a numeric code
    pub fn from_code(code: i16) -> Option<Self> {
        match code {
            0 => Some(Self::Inactive),
            1 => Some(Self::Active),
            _ => None,
        }
    }
}
