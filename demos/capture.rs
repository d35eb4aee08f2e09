use frame_buffer::buffer::FrameBuffer;
use frame_buffer::heap::HeapAllocator;
use frame_buffer::types::PixelFormat;

/// Simulates a capture pipeline: one buffer, overwritten per frame.
fn main() {
    let allocator = HeapAllocator::with_initial_capacity(64 * 48);
    let mut buffer = FrameBuffer::create(allocator.clone()).expect("failed to allocate buffer");

    let (width, height) = (64u32, 48u32);
    let mut scratch = vec![0u8; (width * height) as usize];

    for frame_no in 0..10u8 {
        // Synthetic grayscale gradient that shifts each frame.
        for (i, px) in scratch.iter_mut().enumerate() {
            *px = (i as u8).wrapping_add(frame_no);
        }
        buffer
            .populate(&scratch, width, height, PixelFormat::Gray)
            .expect("populate failed");

        let view = buffer.view().expect("buffer released");
        println!(
            "Frame {}: {:?} {}x{} bytes={} generation={}",
            frame_no + 1,
            view.pixel_format(),
            view.size().width,
            view.size().height,
            view.data().len(),
            view.generation(),
        );
    }

    buffer.release().expect("double release");
    println!(
        "\nDone. Outstanding allocations: {} (capacity was reused across all frames)",
        allocator.outstanding(),
    );
}
