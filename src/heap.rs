use alloc::sync::Arc;
use alloc::vec::Vec;
use core::sync::atomic::{AtomicUsize, Ordering};

use crate::allocator::{FrameAllocator, FrameHandle};
use crate::error::AllocationError;

/// Heap-backed [`FrameAllocator`].
///
/// Clones share one outstanding-handle counter, so a pipeline can hand
/// the same allocator to several buffers and audit for leaks afterwards
/// with [`outstanding`](Self::outstanding).
#[derive(Debug, Clone, Default)]
pub struct HeapAllocator {
    initial_capacity: usize,
    limit: Option<usize>,
    outstanding: Arc<AtomicUsize>,
}

impl HeapAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail allocation with [`AllocationError::Exhausted`] once `limit`
    /// handles are live.
    pub fn with_limit(limit: usize) -> Self {
        Self {
            limit: Some(limit),
            ..Self::default()
        }
    }

    /// Reserve `capacity` bytes up front in each new handle, avoiding a
    /// grow on the first frame when its size is known ahead of time.
    pub fn with_initial_capacity(capacity: usize) -> Self {
        Self {
            initial_capacity: capacity,
            ..Self::default()
        }
    }

    /// Number of handles allocated and not yet freed.
    pub fn outstanding(&self) -> usize {
        self.outstanding.load(Ordering::Acquire)
    }
}

impl FrameAllocator for HeapAllocator {
    type Handle = HeapHandle;

    fn allocate(&self) -> Result<HeapHandle, AllocationError> {
        let limit = self.limit.unwrap_or(usize::MAX);
        self.outstanding
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |n| {
                (n < limit).then_some(n + 1)
            })
            .map_err(|_| AllocationError::Exhausted)?;
        Ok(HeapHandle {
            bytes: Vec::with_capacity(self.initial_capacity),
        })
    }

    fn free(&self, handle: HeapHandle) {
        drop(handle);
        self.outstanding.fetch_sub(1, Ordering::AcqRel);
    }
}

/// A `Vec`-backed region. Capacity is retained across frames, so steady
/// state writes never reallocate.
#[derive(Debug)]
pub struct HeapHandle {
    bytes: Vec<u8>,
}

impl FrameHandle for HeapHandle {
    fn capacity(&self) -> usize {
        self.bytes.capacity()
    }

    fn fill(&mut self, data: &[u8]) {
        self.bytes.clear();
        self.bytes.extend_from_slice(data);
    }

    fn bytes(&self, len: usize) -> &[u8] {
        &self.bytes[..len]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::FrameBuffer;
    use crate::error::Error;
    use crate::types::PixelFormat;

    #[test]
    fn all_released_leaves_zero_outstanding() {
        let allocator = HeapAllocator::new();
        let mut buffers: Vec<_> = (0..8)
            .map(|_| FrameBuffer::create(allocator.clone()).unwrap())
            .collect();
        assert_eq!(allocator.outstanding(), 8);

        for buf in &mut buffers {
            buf.release().unwrap();
        }
        assert_eq!(allocator.outstanding(), 0);
    }

    #[test]
    fn drop_frees_the_handle() {
        let allocator = HeapAllocator::new();
        {
            let mut buf = FrameBuffer::create(allocator.clone()).unwrap();
            buf.populate(&[1, 2], 2, 1, PixelFormat::Gray).unwrap();
            assert_eq!(allocator.outstanding(), 1);
        }
        assert_eq!(allocator.outstanding(), 0);
    }

    #[test]
    fn drop_after_explicit_release_frees_once() {
        let allocator = HeapAllocator::new();
        {
            let mut buf = FrameBuffer::create(allocator.clone()).unwrap();
            buf.release().unwrap();
            assert_eq!(allocator.outstanding(), 0);
        }
        assert_eq!(allocator.outstanding(), 0);
    }

    #[test]
    fn limit_exhaustion_surfaces_from_create() {
        let allocator = HeapAllocator::with_limit(1);
        let _held = FrameBuffer::create(allocator.clone()).unwrap();
        assert_eq!(
            FrameBuffer::create(allocator.clone()).err(),
            Some(Error::Allocation(AllocationError::Exhausted))
        );
    }

    #[test]
    fn capacity_is_retained_across_smaller_frames() {
        let mut handle = HeapAllocator::new().allocate().unwrap();
        handle.fill(&[0; 64]);
        let grown = handle.capacity();
        assert!(grown >= 64);

        handle.fill(&[1, 2, 3]);
        assert_eq!(handle.capacity(), grown);
        assert_eq!(handle.bytes(3), &[1, 2, 3]);
    }

    #[test]
    fn initial_capacity_is_reserved() {
        let handle = HeapAllocator::with_initial_capacity(1024)
            .allocate()
            .unwrap();
        assert!(handle.capacity() >= 1024);
    }
}
