use serde::Serialize;

/// Which input a one-sided record refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// The opposite side.
    pub fn other(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// One typed unit of structural or value difference between two trees.
///
/// `side` always names the input the element is missing from. `subsection`
/// is `None` for keys compared directly under a flat section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub enum DiffRecord {
    /// Section exists on one side only.
    SectionMissing { side: Side, section: String },
    /// Subsection exists on one side only within a shared section.
    SubsectionMissing {
        side: Side,
        section: String,
        subsection: String,
    },
    /// Key exists on one side only.
    KeyMissing {
        side: Side,
        section: String,
        subsection: Option<String>,
        key: String,
    },
    /// Key exists on both sides with different values.
    ValueDiff {
        section: String,
        subsection: Option<String>,
        key: String,
        left: String,
        right: String,
    },
}
