use tracing::trace;

use crate::ffi::ForeignBackend;
use crate::io::IoMut;

use super::Bridge;

impl<B: ForeignBackend> Bridge<B> {
    /// IO block of the current GUI context, fetched for this call.
    pub fn io(&mut self) -> IoMut<'_, B> {
        let io = self.backend.io_current();
        trace!(?io, "current io");
        IoMut::new(&mut self.backend, io)
    }
}
