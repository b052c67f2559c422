use std::ffi::c_void;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

/// Kind marker for a foreign-owned object family.
pub trait HandleKind {
    const NAME: &'static str;
}

/// Draw list owned per frame by the render library.
#[derive(Debug)]
pub enum DrawListKind {}

/// One entry of a draw list's command buffer.
#[derive(Debug)]
pub enum DrawCommandKind {}

/// Plotting session state owned by the plot library.
#[derive(Debug)]
pub enum PlotContextKind {}

/// Input/output state of the current GUI context.
#[derive(Debug)]
pub enum IoKind {}

impl HandleKind for DrawListKind {
    const NAME: &'static str = "DrawList";
}

impl HandleKind for DrawCommandKind {
    const NAME: &'static str = "DrawCommand";
}

impl HandleKind for PlotContextKind {
    const NAME: &'static str = "PlotContext";
}

impl HandleKind for IoKind {
    const NAME: &'static str = "Io";
}

/// Opaque identity of a foreign-owned object.
///
/// A handle carries only an address. It can be compared, hashed and passed back
/// to the backend, nothing else: the address is readable only inside this crate
/// and handles are only minted from foreign factory or accessor results.
///
/// Validity is a caller contract. A draw list handle from a previous frame is
/// stale and forwarding it is undefined on the foreign side; nothing here can
/// detect that.
pub struct Handle<K: HandleKind> {
    addr: usize,
    _kind: PhantomData<fn() -> K>,
}

pub type DrawListHandle = Handle<DrawListKind>;
pub type DrawCommandHandle = Handle<DrawCommandKind>;
pub type PlotContextHandle = Handle<PlotContextKind>;
pub type IoHandle = Handle<IoKind>;

impl<K: HandleKind> Handle<K> {
    pub(crate) const fn from_addr(addr: usize) -> Self {
        Self {
            addr,
            _kind: PhantomData,
        }
    }

    #[cfg_attr(not(feature = "native"), allow(dead_code))]
    pub(crate) fn from_ptr(ptr: *mut c_void) -> Self {
        Self::from_addr(ptr as usize)
    }

    pub(crate) const fn addr(self) -> usize {
        self.addr
    }

    #[cfg_attr(not(feature = "native"), allow(dead_code))]
    pub(crate) fn as_ptr(self) -> *mut c_void {
        self.addr as *mut c_void
    }

    /// Whether the foreign side handed back a null address.
    #[must_use]
    pub const fn is_null(self) -> bool {
        self.addr == 0
    }
}

impl<K: HandleKind> Clone for Handle<K> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K: HandleKind> Copy for Handle<K> {}

impl<K: HandleKind> PartialEq for Handle<K> {
    fn eq(&self, other: &Self) -> bool {
        self.addr == other.addr
    }
}

impl<K: HandleKind> Eq for Handle<K> {}

impl<K: HandleKind> Hash for Handle<K> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.addr.hash(state);
    }
}

impl<K: HandleKind> fmt::Debug for Handle<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({:#x})", K::NAME, self.addr)
    }
}
