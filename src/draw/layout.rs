use std::marker::PhantomData;
use std::slice;

use crate::core::{PackedColor, Vec2};
use crate::error::{BridgeError, BridgeResult};

const F32_SIZE: usize = 4;
const VEC2_SIZE: usize = 2 * F32_SIZE;
const COLOR_SIZE: usize = 4;

/// Byte layout of one vertex record, as reported by the native library.
///
/// The packing can change between native builds, so a layout is queried for
/// each buffer access and never kept across frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VertexBufferLayout {
    pub entry_size: usize,
    pub pos_offset: usize,
    pub uv_offset: usize,
    pub col_offset: usize,
}

impl VertexBufferLayout {
    pub fn validate(self) -> BridgeResult<()> {
        if self.entry_size == 0 {
            return Err(BridgeError::InvalidLayout(
                "vertex entry size must be > 0".to_owned(),
            ));
        }
        for (field, offset, width) in [
            ("pos", self.pos_offset, VEC2_SIZE),
            ("uv", self.uv_offset, VEC2_SIZE),
            ("col", self.col_offset, COLOR_SIZE),
        ] {
            if offset.checked_add(width).is_none_or(|end| end > self.entry_size) {
                return Err(BridgeError::InvalidLayout(format!(
                    "vertex field `{field}` at offset {offset} exceeds entry size {}",
                    self.entry_size
                )));
            }
        }
        Ok(())
    }

    /// Number of whole records in `byte_len` bytes.
    pub fn record_count(self, byte_len: usize) -> BridgeResult<usize> {
        self.validate()?;
        record_count(byte_len, self.entry_size)
    }

    /// Decodes every record of a raw vertex buffer using this layout.
    pub fn decode(self, bytes: &[u8]) -> BridgeResult<Vec<DrawVertex>> {
        self.record_count(bytes.len())?;
        Ok(bytes
            .chunks_exact(self.entry_size)
            .map(|record| DrawVertex {
                pos: read_vec2(record, self.pos_offset),
                uv: read_vec2(record, self.uv_offset),
                col: PackedColor(read_u32(record, self.col_offset)),
            })
            .collect())
    }
}

/// Byte layout of one index record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexBufferLayout {
    pub entry_size: usize,
}

impl IndexBufferLayout {
    pub fn validate(self) -> BridgeResult<()> {
        match self.entry_size {
            2 | 4 => Ok(()),
            other => Err(BridgeError::InvalidLayout(format!(
                "index entry size must be 2 or 4 bytes, got {other}"
            ))),
        }
    }

    pub fn record_count(self, byte_len: usize) -> BridgeResult<usize> {
        self.validate()?;
        record_count(byte_len, self.entry_size)
    }

    /// Decodes a raw index buffer, widening 16-bit indices.
    pub fn decode(self, bytes: &[u8]) -> BridgeResult<Vec<u32>> {
        self.record_count(bytes.len())?;
        let indices = if self.entry_size == 2 {
            bytes
                .chunks_exact(2)
                .map(|chunk| u32::from(u16::from_ne_bytes([chunk[0], chunk[1]])))
                .collect()
        } else {
            bytes.chunks_exact(4).map(|chunk| read_u32(chunk, 0)).collect()
        };
        Ok(indices)
    }
}

/// One decoded vertex record.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawVertex {
    pub pos: Vec2,
    pub uv: Vec2,
    pub col: PackedColor,
}

/// View of a foreign-owned geometry buffer.
///
/// The memory belongs to the native library for the rest of the current frame;
/// the lifetime ties the view to the backend borrow that produced it so it
/// cannot be kept past the next call into the library.
#[derive(Debug, Clone, Copy)]
pub struct RawBuffer<'a> {
    ptr: *const u8,
    len: usize,
    _frame: PhantomData<&'a [u8]>,
}

impl<'a> RawBuffer<'a> {
    #[must_use]
    pub fn from_slice(bytes: &'a [u8]) -> Self {
        Self {
            ptr: bytes.as_ptr(),
            len: bytes.len(),
            _frame: PhantomData,
        }
    }

    /// # Safety
    ///
    /// When `len > 0`, `ptr` must be valid for reads of `len` bytes for `'a`
    /// and the memory must not be mutated during that time.
    #[cfg_attr(not(feature = "native"), allow(dead_code))]
    pub(crate) unsafe fn from_raw_parts(ptr: *const u8, len: usize) -> Self {
        Self {
            ptr,
            len,
            _frame: PhantomData,
        }
    }

    #[must_use]
    pub fn empty() -> Self {
        Self::from_slice(&[])
    }

    #[must_use]
    pub fn as_ptr(&self) -> *const u8 {
        self.ptr
    }

    #[must_use]
    pub fn byte_len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[must_use]
    pub fn as_bytes(&self) -> &'a [u8] {
        if self.ptr.is_null() || self.len == 0 {
            return &[];
        }
        // SAFETY: non-empty views come from `from_slice` or from
        // `from_raw_parts`, whose contract covers `len` readable bytes for `'a`.
        unsafe { slice::from_raw_parts(self.ptr, self.len) }
    }
}

fn record_count(byte_len: usize, entry_size: usize) -> BridgeResult<usize> {
    if byte_len % entry_size != 0 {
        return Err(BridgeError::BufferSize {
            len: byte_len,
            entry_size,
        });
    }
    Ok(byte_len / entry_size)
}

fn read_u32(record: &[u8], offset: usize) -> u32 {
    let mut buf = [0_u8; 4];
    buf.copy_from_slice(&record[offset..offset + 4]);
    u32::from_ne_bytes(buf)
}

fn read_vec2(record: &[u8], offset: usize) -> Vec2 {
    Vec2::new(
        f32::from_bits(read_u32(record, offset)),
        f32::from_bits(read_u32(record, offset + F32_SIZE)),
    )
}
