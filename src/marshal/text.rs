use std::ffi::{CStr, c_char, c_int};
use std::fmt;
use std::marker::PhantomData;
use std::ptr;

use smallvec::SmallVec;

use super::{note_acquired, note_released};

/// Null-terminated copy of a host string, alive for one foreign call.
///
/// The buffer is `text.len() + 1` bytes. Interior NUL bytes are copied as-is:
/// readers that stop at the terminator see a prefix, readers given an explicit
/// length see everything.
///
/// Not `Send`: acquisition and release are counted on the creating thread.
pub struct ForeignString {
    bytes: Box<[u8]>,
    _thread: PhantomData<*const ()>,
}

impl ForeignString {
    #[must_use]
    pub fn new(text: &str) -> Self {
        let mut bytes = Vec::with_capacity(text.len() + 1);
        bytes.extend_from_slice(text.as_bytes());
        bytes.push(0);
        note_acquired();
        Self {
            bytes: bytes.into_boxed_slice(),
            _thread: PhantomData,
        }
    }

    /// Marshals an optional string; `None` becomes a null pointer at the call.
    #[must_use]
    pub fn optional(text: Option<&str>) -> Option<Self> {
        text.map(Self::new)
    }

    #[must_use]
    pub fn as_ptr(&self) -> *const c_char {
        self.bytes.as_ptr().cast()
    }

    /// Size of the buffer including the terminator.
    #[must_use]
    pub fn byte_len(&self) -> usize {
        self.bytes.len()
    }

    /// Size of the text, excluding the terminator.
    #[must_use]
    pub fn text_len(&self) -> usize {
        self.bytes.len() - 1
    }

    /// Text length as a C `int`, `None` when it does not fit.
    #[must_use]
    pub fn text_len_c(&self) -> Option<c_int> {
        c_int::try_from(self.text_len()).ok()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text_len() == 0
    }

    #[must_use]
    pub fn as_bytes_with_nul(&self) -> &[u8] {
        &self.bytes
    }

    #[must_use]
    pub fn as_c_str(&self) -> &CStr {
        CStr::from_bytes_until_nul(&self.bytes).unwrap_or_default()
    }
}

impl Drop for ForeignString {
    fn drop(&mut self) {
        note_released();
    }
}

impl fmt::Debug for ForeignString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ForeignString").field(&self.as_c_str()).finish()
    }
}

/// Pointer for an optional marshaled string.
#[must_use]
pub fn optional_ptr(text: Option<&ForeignString>) -> *const c_char {
    text.map_or(ptr::null(), ForeignString::as_ptr)
}

/// Array of null-terminated strings for calls that take `const char**`.
///
/// Each element owns its own buffer; the pointer table borrows them. All
/// elements stay alive until the whole array drops, after the aggregate call.
pub struct ForeignStringArray {
    strings: Vec<ForeignString>,
    ptrs: SmallVec<[*const c_char; 8]>,
}

impl ForeignStringArray {
    #[must_use]
    pub fn new<S: AsRef<str>>(items: &[S]) -> Self {
        let strings: Vec<ForeignString> = items
            .iter()
            .map(|item| ForeignString::new(item.as_ref()))
            .collect();
        // Element buffers are boxed, so the pointers survive moving `strings`.
        let ptrs = strings.iter().map(ForeignString::as_ptr).collect();
        Self { strings, ptrs }
    }

    #[must_use]
    pub fn as_ptr(&self) -> *const *const c_char {
        self.ptrs.as_ptr()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.strings.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }

    #[must_use]
    pub fn strings(&self) -> &[ForeignString] {
        &self.strings
    }
}

impl fmt::Debug for ForeignStringArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.strings.iter()).finish()
    }
}
