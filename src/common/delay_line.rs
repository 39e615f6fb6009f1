use alloc::{boxed::Box, vec};

/// A fixed length sliding window of the most recent input samples.
/// The newest sample is at index 0.
///
/// Samples are stored twice in a buffer of twice the window length, so
/// that inserting a sample is O(1) while the window can still be read as a
/// single contiguous slice, newest first.
#[derive(Debug, Clone)]
pub struct DelayLine {
    buffer: Box<[f32]>,
    len: usize,
    // Index of the newest sample. buffer[i] == buffer[i + len] for all i < len.
    read_pos: usize,
}

impl DelayLine {
    pub fn new(len: usize) -> Self {
        DelayLine {
            buffer: vec![0.0; 2 * len].into_boxed_slice(),
            len,
            read_pos: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Inserts a sample at index 0, discarding the oldest one.
    #[inline]
    pub fn push(&mut self, sample: f32) {
        if self.len == 0 {
            return;
        }
        self.read_pos = if self.read_pos == 0 {
            self.len - 1
        } else {
            self.read_pos - 1
        };
        self.buffer[self.read_pos] = sample;
        self.buffer[self.read_pos + self.len] = sample;
    }

    /// The window contents, newest sample first.
    #[inline]
    pub fn as_slice(&self) -> &[f32] {
        &self.buffer[self.read_pos..self.read_pos + self.len]
    }

    pub fn reset(&mut self) {
        self.buffer.iter_mut().for_each(|sample| *sample = 0.0);
        self.read_pos = 0;
    }
}
