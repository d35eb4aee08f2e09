/// Pixel formats a frame's data region may carry.
///
/// The discriminants of the raw tag are fixed by the capture wire format
/// and can be converted with [`from_raw`](PixelFormat::from_raw) /
/// [`as_raw`](PixelFormat::as_raw).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum PixelFormat {
    Unknown,
    Mjpeg,
    Yuyv,
    Rgb565,
    Bgr,
    Gray,
}

impl PixelFormat {
    /// Decode a raw format tag. Returns `None` for tags this crate does
    /// not know about.
    pub fn from_raw(raw: u32) -> Option<Self> {
        match raw {
            0 => Some(Self::Unknown),
            1 => Some(Self::Mjpeg),
            2 => Some(Self::Yuyv),
            3 => Some(Self::Rgb565),
            4 => Some(Self::Bgr),
            5 => Some(Self::Gray),
            _ => None,
        }
    }

    /// The raw format tag used by capture pipelines.
    pub fn as_raw(self) -> u32 {
        match self {
            Self::Unknown => 0,
            Self::Mjpeg => 1,
            Self::Yuyv => 2,
            Self::Rgb565 => 3,
            Self::Bgr => 4,
            Self::Gray => 5,
        }
    }
}

/// Pixel dimensions of a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}
