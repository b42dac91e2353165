use std::fmt;

/// Non-fatal findings of a bump check.
/// These are reported to the user but never stop the descriptor rewrite.
#[derive(Debug, Clone, PartialEq)]
pub enum BumpWarning {
    /// Head version does not sort after the base version
    NotBumped { base: String, head: String },
    /// Textual and numeric ordering of the two versions disagree
    OrderingMismatch { base: String, head: String },
    /// The base version tag was not found in the head descriptor
    SubstitutionMissed { path: String, base: String },
}

impl fmt::Display for BumpWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BumpWarning::NotBumped { base, head } => {
                write!(
                    f,
                    "Version should be bumped: base is {}, head is {}",
                    base, head
                )
            }
            BumpWarning::OrderingMismatch { base, head } => {
                write!(
                    f,
                    "Versions {} and {} compare differently as text and as numbers",
                    base, head
                )
            }
            BumpWarning::SubstitutionMissed { path, base } => {
                write!(
                    f,
                    "'<version>{}</version>' not found in {}; file left unchanged",
                    base, path
                )
            }
        }
    }
}
