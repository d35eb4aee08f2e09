use crate::allocator::{FrameAllocator, FrameHandle};
use crate::error::Error;
use crate::frame::FrameView;
use crate::types::{PixelFormat, Size};

/// A reusable buffer for raw frame data between capture reads.
///
/// The backing region is allocated once at construction and overwritten
/// in place for each frame, rather than reallocating per frame. Data
/// returned by [`data`](Self::data) or [`view`](Self::view) borrows the
/// buffer directly; it is valid until the next [`populate`](Self::populate)
/// or [`release`](Self::release), which exclusive borrows enforce.
///
/// Single-writer: one producer calls `populate` and the mutators. No
/// internal locking is provided; share across threads only behind
/// external synchronization.
pub struct FrameBuffer<A: FrameAllocator> {
    allocator: A,
    // None once released. Every other operation fails from then on.
    handle: Option<A::Handle>,
    total_length: usize,
    width: u32,
    height: u32,
    pixel_format: PixelFormat,
    generation: u64,
}

impl<A: FrameAllocator> FrameBuffer<A> {
    /// Acquire a backing region from `allocator` and return an
    /// unpopulated buffer.
    pub fn create(allocator: A) -> Result<Self, Error> {
        let handle = allocator.allocate()?;
        Ok(Self {
            allocator,
            handle: Some(handle),
            total_length: 0,
            width: 0,
            height: 0,
            pixel_format: PixelFormat::Unknown,
            generation: 0,
        })
    }

    fn handle(&self) -> Result<&A::Handle, Error> {
        self.handle.as_ref().ok_or(Error::UseAfterRelease)
    }

    fn guard(&self) -> Result<(), Error> {
        self.handle()?;
        Ok(())
    }

    /// Store a captured frame. Called by the producer once per frame;
    /// overwrites the data region and all metadata of the previous frame.
    pub fn populate(
        &mut self,
        data: &[u8],
        width: u32,
        height: u32,
        pixel_format: PixelFormat,
    ) -> Result<(), Error> {
        let handle = self.handle.as_mut().ok_or(Error::UseAfterRelease)?;
        handle.fill(data);
        self.total_length = data.len();
        self.width = width;
        self.height = height;
        self.pixel_format = pixel_format;
        self.generation += 1;
        Ok(())
    }

    /// The valid bytes of the most recent frame. Empty before the first
    /// [`populate`](Self::populate).
    pub fn data(&self) -> Result<&[u8], Error> {
        let handle = self.handle()?;
        Ok(handle.bytes(self.total_length))
    }

    /// Length in bytes of the most recent frame.
    pub fn total_length(&self) -> Result<usize, Error> {
        self.guard()?;
        Ok(self.total_length)
    }

    pub fn width(&self) -> Result<u32, Error> {
        self.guard()?;
        Ok(self.width)
    }

    pub fn height(&self) -> Result<u32, Error> {
        self.guard()?;
        Ok(self.height)
    }

    pub fn size(&self) -> Result<Size, Error> {
        self.guard()?;
        Ok(Size {
            width: self.width,
            height: self.height,
        })
    }

    pub fn pixel_format(&self) -> Result<PixelFormat, Error> {
        self.guard()?;
        Ok(self.pixel_format)
    }

    /// Count of `populate` calls so far. Snapshot consumers can compare
    /// generations to detect that the region was overwritten under them.
    pub fn generation(&self) -> Result<u64, Error> {
        self.guard()?;
        Ok(self.generation)
    }

    /// Borrowed snapshot of the current frame and its metadata.
    pub fn view(&self) -> Result<FrameView<'_>, Error> {
        let handle = self.handle()?;
        Ok(FrameView {
            data: handle.bytes(self.total_length),
            size: Size {
                width: self.width,
                height: self.height,
            },
            pixel_format: self.pixel_format,
            generation: self.generation,
        })
    }

    /// Record a width hint without touching the data region. May diverge
    /// from the dimensions of the last `populate`; callers that mix
    /// hints and populated frames must tolerate that.
    pub fn set_width(&mut self, width: u32) -> Result<(), Error> {
        self.guard()?;
        self.width = width;
        Ok(())
    }

    /// Record a height hint without touching the data region.
    pub fn set_height(&mut self, height: u32) -> Result<(), Error> {
        self.guard()?;
        self.height = height;
        Ok(())
    }

    /// Record a pixel format hint without touching the data region.
    pub fn set_pixel_format(&mut self, pixel_format: PixelFormat) -> Result<(), Error> {
        self.guard()?;
        self.pixel_format = pixel_format;
        Ok(())
    }

    /// Return the backing region to the allocator. Any further operation
    /// on this buffer, including a second release, fails with
    /// [`Error::UseAfterRelease`].
    pub fn release(&mut self) -> Result<(), Error> {
        match self.handle.take() {
            Some(handle) => {
                self.allocator.free(handle);
                Ok(())
            }
            None => Err(Error::UseAfterRelease),
        }
    }

    pub fn is_released(&self) -> bool {
        self.handle.is_none()
    }
}

impl<A: FrameAllocator> Drop for FrameBuffer<A> {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.take() {
            self.allocator.free(handle);
        }
    }
}
