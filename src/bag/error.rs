use std::fmt;

/// Errors that can occur when committing an addition to the bag
///
/// Both variants are expected boundary conditions: the presentation layer
/// reports them and lets the user adjust the quantity and retry. Neither
/// mutates manager state.
#[derive(Debug, Clone, PartialEq)]
pub enum BagError {
    /// The addition would push weight or volume over its maximum
    CapacityExceeded {
        projected_weight: f32,
        projected_volume: f32,
    },

    /// A zero-quantity commit is meaningless regardless of remaining room
    EmptyCommit,
}

impl fmt::Display for BagError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            BagError::CapacityExceeded {
                projected_weight,
                projected_volume,
            } => {
                write!(
                    f,
                    "Addition exceeds bag capacity (projected weight: {:.1}, volume: {:.1})",
                    projected_weight, projected_volume
                )
            }
            BagError::EmptyCommit => {
                write!(f, "Cannot commit a quantity of zero")
            }
        }
    }
}

impl std::error::Error for BagError {}

impl From<BagError> for String {
    fn from(error: BagError) -> Self {
        error.to_string()
    }
}
