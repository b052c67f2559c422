//! Conversion between host values and the layouts the `igg*` shim expects.
//!
//! Every transient buffer built here is owned by exactly one foreign call and
//! released when it drops, so early returns cannot leak. Array inputs that are
//! empty, mismatched or too long for a C `int` turn the call into a no-op, as
//! do indices past the end of a fixed native table.

mod arrays;
mod geometry;
mod text;

use std::cell::Cell;

use tracing::{debug, trace, warn};

pub use arrays::{ForeignSlice, labeled, paired, single, table_index, triple};
pub use geometry::RawVec2;
pub use text::{ForeignString, ForeignStringArray, optional_ptr};

/// Per-thread counts of transient buffer acquisitions and releases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BufferStats {
    pub acquired: usize,
    pub released: usize,
}

impl BufferStats {
    /// Buffers acquired on this thread and not yet released.
    #[must_use]
    pub const fn live(self) -> usize {
        self.acquired.saturating_sub(self.released)
    }
}

thread_local! {
    static BUFFER_STATS: Cell<BufferStats> = const {
        Cell::new(BufferStats {
            acquired: 0,
            released: 0,
        })
    };
}

/// Snapshot of the calling thread's transient buffer counters.
#[must_use]
pub fn buffer_stats() -> BufferStats {
    BUFFER_STATS.with(Cell::get)
}

pub fn reset_buffer_stats() {
    BUFFER_STATS.with(|stats| stats.set(BufferStats::default()));
}

pub(crate) fn note_acquired() {
    BUFFER_STATS.with(|stats| {
        let mut current = stats.get();
        current.acquired += 1;
        stats.set(current);
    });
}

pub(crate) fn note_released() {
    BUFFER_STATS.with(|stats| {
        let mut current = stats.get();
        current.released += 1;
        stats.set(current);
    });
}

/// Why an operation skipped its foreign call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    Empty,
    LengthMismatch { expected: usize, found: usize },
    TooLong { len: usize },
    /// Index into a fixed-size native table (mouse buttons, keys) past its end.
    OutOfRange { index: usize, limit: usize },
}

impl SkipReason {
    pub(crate) fn log(self, entry: &'static str) {
        match self {
            Self::Empty => trace!(entry, "skipping foreign call: empty input"),
            // Non-empty but mismatched pairs are a caller bug the native side
            // would overread on; kept as a silent skip.
            Self::LengthMismatch { expected, found } => debug!(
                entry,
                expected, found, "skipping foreign call: mismatched array lengths"
            ),
            Self::TooLong { len } => warn!(
                entry,
                len, "skipping foreign call: array length exceeds C int range"
            ),
            Self::OutOfRange { index, limit } => warn!(
                entry,
                index, limit, "skipping foreign call: index outside native table"
            ),
        }
    }
}
