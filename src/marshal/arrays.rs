use std::ffi::c_int;

use super::{ForeignStringArray, SkipReason};

/// Borrowed, non-empty run of doubles passed to the shim without copying.
///
/// `&[f64]` already has the C layout, so the only marshaling work is checking
/// that the pointer is safe to hand over: the run is non-empty and its length
/// fits a C `int`.
#[derive(Debug, Clone, Copy)]
pub struct ForeignSlice<'a> {
    values: &'a [f64],
    len: c_int,
}

impl<'a> ForeignSlice<'a> {
    pub fn new(values: &'a [f64]) -> Result<Self, SkipReason> {
        if values.is_empty() {
            return Err(SkipReason::Empty);
        }
        let len = c_int::try_from(values.len())
            .map_err(|_| SkipReason::TooLong { len: values.len() })?;
        Ok(Self { values, len })
    }

    #[must_use]
    pub fn as_ptr(self) -> *const f64 {
        self.values.as_ptr()
    }

    #[must_use]
    pub fn len(self) -> c_int {
        self.len
    }

    /// Always `false`; empty input never becomes a `ForeignSlice`.
    #[must_use]
    pub fn is_empty(self) -> bool {
        self.values.is_empty()
    }

    #[must_use]
    pub fn values(self) -> &'a [f64] {
        self.values
    }
}

pub fn single(values: &[f64]) -> Result<ForeignSlice<'_>, SkipReason> {
    ForeignSlice::new(values)
}

/// Marshals x/y arrays that must be non-empty and of equal length.
pub fn paired<'a>(
    xs: &'a [f64],
    ys: &'a [f64],
) -> Result<(ForeignSlice<'a>, ForeignSlice<'a>), SkipReason> {
    let xs = ForeignSlice::new(xs)?;
    let ys = ForeignSlice::new(ys)?;
    same_len(xs.values.len(), ys.values.len())?;
    Ok((xs, ys))
}

pub fn triple<'a>(
    xs: &'a [f64],
    ys: &'a [f64],
    zs: &'a [f64],
) -> Result<(ForeignSlice<'a>, ForeignSlice<'a>, ForeignSlice<'a>), SkipReason> {
    let (xs, ys) = paired(xs, ys)?;
    let zs = ForeignSlice::new(zs)?;
    same_len(xs.values.len(), zs.values.len())?;
    Ok((xs, ys, zs))
}

/// Marshals values together with one label per value.
pub fn labeled<'a, S: AsRef<str>>(
    values: &'a [f64],
    labels: &[S],
) -> Result<(ForeignSlice<'a>, ForeignStringArray), SkipReason> {
    let values = ForeignSlice::new(values)?;
    if labels.is_empty() {
        return Err(SkipReason::Empty);
    }
    same_len(values.values.len(), labels.len())?;
    Ok((values, ForeignStringArray::new(labels)))
}

/// Index into a native fixed-size table, as a C `int`.
pub fn table_index(index: usize, limit: usize) -> Result<c_int, SkipReason> {
    if index >= limit {
        return Err(SkipReason::OutOfRange { index, limit });
    }
    c_int::try_from(index).map_err(|_| SkipReason::OutOfRange { index, limit })
}

fn same_len(expected: usize, found: usize) -> Result<(), SkipReason> {
    if expected == found {
        Ok(())
    } else {
        Err(SkipReason::LengthMismatch { expected, found })
    }
}
