use crate::error::AllocationError;

/// Source of backing allocations for [`FrameBuffer`](crate::buffer::FrameBuffer).
///
/// Replaces a global native free-function pair with an injectable seam,
/// so buffer lifecycle logic can be exercised against a fake backend.
pub trait FrameAllocator {
    type Handle: FrameHandle;

    /// Acquire a new backing region.
    fn allocate(&self) -> Result<Self::Handle, AllocationError>;

    /// Return a region to the backend. Called exactly once per handle.
    fn free(&self, handle: Self::Handle);
}

/// An opaque, owned backing region for one frame buffer.
///
/// A handle is allocated once per buffer and reused for every frame
/// written through it; only its capacity may change over time.
pub trait FrameHandle {
    /// Bytes currently reserved in the region.
    fn capacity(&self) -> usize;

    /// Overwrite the region with `data`, growing it if `data` does not
    /// fit. Bytes past `data.len()` are left as-is (reuse semantics).
    fn fill(&mut self, data: &[u8]);

    /// Borrow the first `len` bytes of the region.
    ///
    /// `len` must not exceed the length of the last [`fill`](Self::fill).
    fn bytes(&self, len: usize) -> &[u8];
}

impl<A: FrameAllocator> FrameAllocator for &A {
    type Handle = A::Handle;

    fn allocate(&self) -> Result<Self::Handle, AllocationError> {
        (**self).allocate()
    }

    fn free(&self, handle: Self::Handle) {
        (**self).free(handle)
    }
}
