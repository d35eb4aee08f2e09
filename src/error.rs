use core::fmt;

/// Failure reported by a [`FrameAllocator`](crate::allocator::FrameAllocator)
/// backend when it cannot hand out a new handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum AllocationError {
    /// The backend has no capacity left for another handle.
    Exhausted,
    /// Backend-specific failure with a static description.
    Message(&'static str),
}

impl fmt::Display for AllocationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exhausted => f.write_str("allocator exhausted"),
            Self::Message(msg) => f.write_str(msg),
        }
    }
}

impl core::error::Error for AllocationError {}

/// Top-level crate error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// The backing allocation could not be acquired at construction.
    Allocation(AllocationError),
    /// The buffer was already released; no operation succeeds afterwards.
    UseAfterRelease,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Allocation(e) => write!(f, "allocation failed: {e}"),
            Self::UseAfterRelease => f.write_str("frame buffer used after release"),
        }
    }
}

impl core::error::Error for Error {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::Allocation(e) => Some(e),
            _ => None,
        }
    }
}

impl From<AllocationError> for Error {
    fn from(e: AllocationError) -> Self {
        Self::Allocation(e)
    }
}
