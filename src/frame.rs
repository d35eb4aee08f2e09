use crate::types::{PixelFormat, Size};

/// A borrowed snapshot of the current frame. Lifetime tied to the buffer
/// borrow (zero-copy): the next `populate` or the release invalidates it
/// at compile time.
#[derive(Debug, Clone, Copy)]
pub struct FrameView<'a> {
    pub(crate) data: &'a [u8],
    pub(crate) size: Size,
    pub(crate) pixel_format: PixelFormat,
    pub(crate) generation: u64,
}

impl<'a> FrameView<'a> {
    /// The valid bytes of the frame.
    pub fn data(&self) -> &'a [u8] {
        self.data
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn pixel_format(&self) -> PixelFormat {
        self.pixel_format
    }

    /// Which `populate` call produced this view. Consumers that copy
    /// data out can compare generations to detect an overwrite.
    pub fn generation(&self) -> u64 {
        self.generation
    }
}
