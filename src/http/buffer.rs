use crate::http::error::ParseError;

/// Default capacity of a [`ReadBuffer`], in bytes.
pub const DEFAULT_CAPACITY: usize = 4096;

/// Fixed-capacity, front-compacting read buffer.
///
/// Bytes are read into [`spare_mut`](Self::spare_mut), committed with
/// [`commit`](Self::commit), inspected through [`filled`](Self::filled), and
/// dropped from the front with [`consume`](Self::consume). The backing
/// storage never grows.
#[derive(Debug)]
pub struct ReadBuffer {
    buf: Box<[u8]>,
    filled: usize,
}

impl ReadBuffer {
    pub fn new(capacity: usize) -> Self {
        Self {
            buf: vec![0u8; capacity].into_boxed_slice(),
            filled: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    pub fn len(&self) -> usize {
        self.filled
    }

    pub fn is_empty(&self) -> bool {
        self.filled == 0
    }

    pub fn is_full(&self) -> bool {
        self.filled == self.buf.len()
    }

    /// Valid, not yet consumed bytes.
    pub fn filled(&self) -> &[u8] {
        &self.buf[..self.filled]
    }

    /// Free region after the filled bytes, to read into.
    ///
    /// Fails with [`ParseError::BufferOverflow`] when there is no room left.
    pub fn spare_mut(&mut self) -> Result<&mut [u8], ParseError> {
        if self.is_full() {
            return Err(ParseError::BufferOverflow {
                capacity: self.capacity(),
            });
        }
        Ok(&mut self.buf[self.filled..])
    }

    /// Marks `n` bytes of the spare region as filled.
    pub fn commit(&mut self, n: usize) {
        assert!(
            self.filled + n <= self.buf.len(),
            "commit past buffer capacity"
        );
        self.filled += n;
    }

    /// Drops `n` bytes from the front, shifting the remainder down.
    pub fn consume(&mut self, n: usize) {
        assert!(n <= self.filled, "consumed more than filled");
        if n == 0 {
            return;
        }
        self.buf.copy_within(n..self.filled, 0);
        self.filled -= n;
    }
}

impl Default for ReadBuffer {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}
