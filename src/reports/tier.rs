use serde::Serialize;

/// Adoption count at or above which a shelter is rated [`AdoptionTier::Good`].
pub const GOOD_THRESHOLD: usize = 800;

/// Adoption count at or below which a shelter is rated [`AdoptionTier::Bad`].
pub const BAD_THRESHOLD: usize = 100;

/// Rating of a shelter by adoption volume.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum AdoptionTier {
    Good,
    Okay,
    Bad,
}

impl AdoptionTier {
    pub const ALL: [Self; 3] = [Self::Good, Self::Okay, Self::Bad];

    /// Converts an adoption count into a tier.
    ///
    /// | Adoptions        | Tier |
    /// |------------------|------|
    /// | >= 800           | Good |
    /// | 101 ..= 799      | Okay |
    /// | <= 100           | Bad  |
    pub fn from_adoptions(adoptions: usize) -> Self {
        match adoptions {
            n if n >= GOOD_THRESHOLD => Self::Good,
            n if n <= BAD_THRESHOLD => Self::Bad,
            _ => Self::Okay,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Good => "Good",
            Self::Okay => "Okay",
            Self::Bad => "Bad",
        }
    }
}

impl std::fmt::Display for AdoptionTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_boundaries() {
        assert_eq!(AdoptionTier::from_adoptions(5000), AdoptionTier::Good);
        assert_eq!(AdoptionTier::from_adoptions(800), AdoptionTier::Good);
        assert_eq!(AdoptionTier::from_adoptions(799), AdoptionTier::Okay);
        assert_eq!(AdoptionTier::from_adoptions(450), AdoptionTier::Okay);
        assert_eq!(AdoptionTier::from_adoptions(101), AdoptionTier::Okay);
        assert_eq!(AdoptionTier::from_adoptions(100), AdoptionTier::Bad);
        assert_eq!(AdoptionTier::from_adoptions(0), AdoptionTier::Bad);
    }

    #[test]
    fn test_display() {
        assert_eq!(AdoptionTier::Okay.to_string(), "Okay");
    }
}
