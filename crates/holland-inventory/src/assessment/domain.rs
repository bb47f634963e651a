use serde::{Deserialize, Serialize};

/// Number of attitude items (answered on the 1-5 agreement scale).
pub const ATTITUDE_ITEMS: usize = 60;
/// Number of trailing self-rating items (answered 1-6, each value used once).
pub const SELF_RATING_ITEMS: usize = 6;
/// Total questionnaire length.
pub const TOTAL_ITEMS: usize = ATTITUDE_ITEMS + SELF_RATING_ITEMS;
/// Attitude items per dimension, laid out contiguously in dimension order.
pub const ITEMS_PER_DIMENSION: usize = ATTITUDE_ITEMS / Dimension::COUNT;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    Realistic,
    Investigative,
    Artistic,
    Social,
    Enterprising,
    Conventional,
}

impl Dimension {
    pub const COUNT: usize = 6;

    /// Fixed declaration order; also the tie-break order for the top-3 ranking.
    pub const fn ordered() -> [Self; Self::COUNT] {
        [
            Self::Realistic,
            Self::Investigative,
            Self::Artistic,
            Self::Social,
            Self::Enterprising,
            Self::Conventional,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Realistic => "Realistic",
            Self::Investigative => "Investigative",
            Self::Artistic => "Artistic",
            Self::Social => "Social",
            Self::Enterprising => "Enterprising",
            Self::Conventional => "Conventional",
        }
    }

    /// One-letter code used in submission payloads and result views.
    pub const fn code(self) -> &'static str {
        match self {
            Self::Realistic => "R",
            Self::Investigative => "I",
            Self::Artistic => "A",
            Self::Social => "S",
            Self::Enterprising => "E",
            Self::Conventional => "C",
        }
    }

    /// Range of attitude-item indices belonging to this dimension.
    pub fn attitude_range(self) -> std::ops::Range<usize> {
        let start = self.position() * ITEMS_PER_DIMENSION;
        start..start + ITEMS_PER_DIMENSION
    }

    /// Index of the self-rating item paired with this dimension.
    pub const fn self_rating_index(self) -> usize {
        ATTITUDE_ITEMS + self.position()
    }

    const fn position(self) -> usize {
        match self {
            Self::Realistic => 0,
            Self::Investigative => 1,
            Self::Artistic => 2,
            Self::Social => 3,
            Self::Enterprising => 4,
            Self::Conventional => 5,
        }
    }
}

/// Which block an item belongs to, and therefore which value range it accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    Attitude,
    SelfRating,
}

impl ItemKind {
    pub const fn for_index(index: usize) -> Self {
        if index < ATTITUDE_ITEMS {
            Self::Attitude
        } else {
            Self::SelfRating
        }
    }

    pub const fn min_value(self) -> u8 {
        1
    }

    pub const fn max_value(self) -> u8 {
        match self {
            Self::Attitude => 5,
            Self::SelfRating => 6,
        }
    }

    pub const fn accepts(self, value: u8) -> bool {
        value >= self.min_value() && value <= self.max_value()
    }
}

/// Identity fields collected before the questionnaire starts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RespondentProfile {
    pub name: String,
    pub surname: String,
    pub section: String,
    pub gender: String,
}

impl RespondentProfile {
    /// All four fields must be non-empty before the assessment may begin.
    pub fn is_complete(&self) -> bool {
        !self.name.trim().is_empty()
            && !self.surname.trim().is_empty()
            && !self.section.trim().is_empty()
            && !self.gender.trim().is_empty()
    }
}

/// Selects which identity field a profile write targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProfileField {
    Name,
    Surname,
    Section,
    Gender,
}

/// Recoverable failures raised by the answer ledger. None of these abort the
/// assessment; the caller surfaces them and the respondent tries again.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LedgerError {
    #[error("item index {0} is outside the questionnaire (0-{max})", max = TOTAL_ITEMS - 1)]
    ItemOutOfBounds(usize),
    #[error("value {value} is not valid for item {item} (expected {min}-{max})")]
    ValueOutOfRange { item: usize, value: u8, min: u8, max: u8 },
    #[error("value {0} is already used by another self-rating item")]
    DuplicateSelfRating(u8),
    #[error("all four profile fields must be filled in before starting")]
    IncompleteProfile,
    #[error("the current step does not accept this action")]
    StepMismatch,
}
