//! Memory data collection.
//!
//! The primary counters are read in one call from a [`CounterSource`] and are
//! mapped onto a [`MemorySnapshot`] by counter identifier. The extended
//! counter comes from [`super::extended`] and never fails the query.

use std::io;

use crate::collection::{
    error::{CollectionError, CollectionResult},
    extended::{self, Device},
};

pub use crate::collection::extended::ExtendedMemory;

cfg_if::cfg_if! {
    if #[cfg(target_os = "linux")] {
        pub mod linux;
        pub use self::linux::ProcMemInfo as PlatformSource;
    } else if #[cfg(target_os = "windows")] {
        pub mod windows;
        pub use self::windows::PerformanceInfo as PlatformSource;
    } else {
        pub mod sysinfo;
        pub use self::sysinfo::SysinfoSource as PlatformSource;
    }
}

#[cfg(unix)]
mod unix;

/// The 4 GiB line that splits a process ceiling into its low and high arenas.
pub const ARENA_LINE: u64 = 4 * 1024 * 1024 * 1024;

/// The identifiers of the primary memory counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Counter {
    TotalPhysical,
    Available,
    Resident,
    MaxPrivate,
    MaxShared,
    MaxPrivateHigh,
    MaxSharedHigh,
}

impl Counter {
    /// Every counter, in the order they are requested.
    pub const ALL: [Counter; 7] = [
        Counter::TotalPhysical,
        Counter::Available,
        Counter::Resident,
        Counter::MaxPrivate,
        Counter::MaxShared,
        Counter::MaxPrivateHigh,
        Counter::MaxSharedHigh,
    ];
}

/// Something that can read all of the primary counters in a single call.
pub trait CounterSource {
    /// Returns one value, in bytes, per requested counter and in the same order.
    fn query(&mut self, counters: &[Counter]) -> CollectionResult<Vec<u64>>;
}

/// The memory figures of the system at one instant. All values are in bytes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemorySnapshot {
    pub total_physical: u64,
    pub available: u64,
    pub resident: u64,
    pub max_private: u64,
    pub max_shared: u64,
    pub max_private_high: u64,
    pub max_shared_high: u64,
    pub extended: ExtendedMemory,
}

impl MemorySnapshot {
    fn field_mut(&mut self, counter: Counter) -> &mut u64 {
        match counter {
            Counter::TotalPhysical => &mut self.total_physical,
            Counter::Available => &mut self.available,
            Counter::Resident => &mut self.resident,
            Counter::MaxPrivate => &mut self.max_private,
            Counter::MaxShared => &mut self.max_shared,
            Counter::MaxPrivateHigh => &mut self.max_private_high,
            Counter::MaxSharedHigh => &mut self.max_shared_high,
        }
    }

    /// The extended memory, if there is a non-zero amount of it.
    #[inline]
    pub fn extended_bytes(&self) -> Option<u64> {
        match self.extended {
            ExtendedMemory::Available(bytes) if bytes > 0 => Some(bytes),
            _ => None,
        }
    }

    /// The total physical memory including any extended memory. The primary
    /// counter itself never includes it.
    #[inline]
    pub fn accessible_total(&self) -> u64 {
        self.total_physical
            .saturating_add(self.extended_bytes().unwrap_or(0))
    }
}

/// Takes a snapshot of the memory counters.
///
/// A failure of `source` is fatal and is returned as
/// [`CollectionError::Query`]. The extended memory is queried through
/// `open_device` afterwards and only ever degrades to
/// [`ExtendedMemory::Unsupported`].
pub fn query_snapshot<S, D, F>(source: &mut S, open_device: F) -> CollectionResult<MemorySnapshot>
where
    S: CounterSource + ?Sized,
    D: Device,
    F: FnOnce() -> io::Result<D>,
{
    let values = source
        .query(&Counter::ALL)
        .map_err(CollectionError::query)?;

    if values.len() != Counter::ALL.len() {
        return Err(CollectionError::query(CollectionError::parsing(format!(
            "expected {} counters, got {}",
            Counter::ALL.len(),
            values.len()
        ))));
    }

    let mut snapshot = MemorySnapshot::default();
    for (counter, value) in Counter::ALL.into_iter().zip(values) {
        log::debug!("{counter:?} = {value}");
        *snapshot.field_mut(counter) = value;
    }

    if snapshot.total_physical == 0 {
        return Err(CollectionError::query(CollectionError::parsing(
            "the total physical memory was reported as zero",
        )));
    }

    snapshot.extended = extended::query_extended_memory(open_device);

    Ok(snapshot)
}

/// The values a platform source derives every counter from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct RawCounters {
    pub(crate) total_physical: u64,
    pub(crate) available: u64,
    pub(crate) resident: u64,
    /// The most private memory a single process could allocate.
    pub(crate) private_ceiling: u64,
    /// The most shared memory a single process could allocate.
    pub(crate) shared_ceiling: u64,
}

impl RawCounters {
    pub(crate) fn read(&self, counter: Counter) -> u64 {
        match counter {
            Counter::TotalPhysical => self.total_physical,
            Counter::Available => self.available,
            Counter::Resident => self.resident,
            Counter::MaxPrivate => split_arena(self.private_ceiling).0,
            Counter::MaxShared => split_arena(self.shared_ceiling).0,
            Counter::MaxPrivateHigh => split_arena(self.private_ceiling).1,
            Counter::MaxSharedHigh => split_arena(self.shared_ceiling).1,
        }
    }

    pub(crate) fn read_all(&self, counters: &[Counter]) -> Vec<u64> {
        counters.iter().map(|counter| self.read(*counter)).collect()
    }
}

/// Splits a per-process ceiling at [`ARENA_LINE`] into `(low, high)`. A
/// 32-bit process has nothing above the line.
#[inline]
pub(crate) fn split_arena(ceiling: u64) -> (u64, u64) {
    let low = ceiling.min(ARENA_LINE);
    let high = if cfg!(target_pointer_width = "64") {
        ceiling.saturating_sub(ARENA_LINE)
    } else {
        0
    };

    (low, high)
}
