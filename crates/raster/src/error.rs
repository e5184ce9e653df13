use crate::path::flatten::FlattenError;

/// The renderer's result type.
pub type RenderResult = Result<(), RenderError>;

/// An error that can happen while rendering a draw command.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum RenderError {
    /// The command's path is too complex for the flattener's fixed
    /// scratch buffers.
    ScratchOverflow,
    /// The command contains a NaN or infinite coordinate.
    NonFinitePosition,
}

impl core::fmt::Display for RenderError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            RenderError::ScratchOverflow => {
                write!(f, "Path is too complex to render")
            }
            RenderError::NonFinitePosition => {
                write!(f, "Position is not a finite number")
            }
        }
    }
}

impl std::error::Error for RenderError {}

impl core::convert::From<FlattenError> for RenderError {
    fn from(value: FlattenError) -> Self {
        match value {
            FlattenError::ScratchOverflow => RenderError::ScratchOverflow,
            FlattenError::NonFinitePosition => RenderError::NonFinitePosition,
        }
    }
}
