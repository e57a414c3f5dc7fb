//! Bit-level packing and unpacking.
//!
//! Bits are packed MSB-first: the first bit written to a byte lands in its
//! most significant position. The final partial byte is padded with zero
//! bits at the low end.
//!
//! On the read side each byte is bit-reversed first, so peeling bits from
//! the least significant end yields them in their original write order.

/// Bit-reversed value of each 4-bit nibble.
const NIBBLE_REVERSE: [u8; 16] = [
    0x0, 0x8, 0x4, 0xC, 0x2, 0xA, 0x6, 0xE, 0x1, 0x9, 0x5, 0xD, 0x3, 0xB, 0x7, 0xF,
];

/// Reverse the bit order of a byte.
#[inline]
pub fn reverse_bits(byte: u8) -> u8 {
    (NIBBLE_REVERSE[(byte & 0x0F) as usize] << 4) | NIBBLE_REVERSE[(byte >> 4) as usize]
}

/// Accumulates bits into bytes.
#[derive(Debug, Default)]
pub struct BitWriter {
    out: Vec<u8>,
    buffer: u8,
    held: u8,
}

impl BitWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(bytes: usize) -> Self {
        Self {
            out: Vec::with_capacity(bytes),
            ..Self::default()
        }
    }

    /// Shift `bit` into the accumulator, emitting a byte once eight are held.
    #[inline]
    pub fn write_bit(&mut self, bit: bool) {
        self.buffer = (self.buffer << 1) | bit as u8;
        self.held += 1;
        if self.held == 8 {
            self.out.push(self.buffer);
            self.buffer = 0;
            self.held = 0;
        }
    }

    pub fn write_bits(&mut self, bits: &[bool]) {
        for &bit in bits {
            self.write_bit(bit);
        }
    }

    /// Pad the partial byte with zero bits until it is emitted.
    pub fn flush(&mut self) {
        while self.held > 0 {
            self.write_bit(false);
        }
    }

    /// Bits currently held in the accumulator (0..=7).
    pub fn pending_bits(&self) -> u8 {
        self.held
    }

    /// Flush and return the packed bytes.
    pub fn finish(mut self) -> Vec<u8> {
        self.flush();
        self.out
    }
}

/// Yields the bits of a byte slice in the order they were packed.
#[derive(Debug)]
pub struct BitReader<'a> {
    bytes: std::slice::Iter<'a, u8>,
    buffer: u8,
    held: u8,
}

impl<'a> BitReader<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        Self {
            bytes: bytes.iter(),
            buffer: 0,
            held: 0,
        }
    }

    /// Next bit, or `None` once the input is exhausted.
    #[inline]
    pub fn read_bit(&mut self) -> Option<bool> {
        if self.held == 0 {
            self.buffer = reverse_bits(*self.bytes.next()?);
            self.held = 8;
        }
        let bit = self.buffer & 1 == 1;
        self.buffer >>= 1;
        self.held -= 1;
        Some(bit)
    }
}

impl Iterator for BitReader<'_> {
    type Item = bool;

    fn next(&mut self) -> Option<bool> {
        self.read_bit()
    }
}
