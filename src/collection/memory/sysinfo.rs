//! Reading the memory counters using sysinfo, for platforms without a
//! dedicated source.

use sysinfo::{MemoryRefreshKind, RefreshKind, System};

use crate::collection::{
    error::CollectionResult,
    memory::{Counter, CounterSource, RawCounters},
};

pub struct SysinfoSource {
    sys: System,
}

impl Default for SysinfoSource {
    fn default() -> Self {
        Self::new()
    }
}

impl SysinfoSource {
    pub fn new() -> Self {
        SysinfoSource {
            sys: System::new_with_specifics(
                RefreshKind::nothing().with_memory(MemoryRefreshKind::everything()),
            ),
        }
    }

    fn read_raw(&mut self) -> RawCounters {
        self.sys.refresh_memory();

        let available = self
            .sys
            .available_memory()
            .saturating_add(self.sys.free_swap());

        #[cfg(unix)]
        let limit = super::unix::address_space_limit();
        #[cfg(not(unix))]
        let limit: Option<u64> = None;

        RawCounters {
            total_physical: self.sys.total_memory(),
            available,
            resident: self.sys.used_memory(),
            private_ceiling: limit.map_or(available, |limit| available.min(limit)),
            shared_ceiling: available,
        }
    }
}

impl CounterSource for SysinfoSource {
    fn query(&mut self, counters: &[Counter]) -> CollectionResult<Vec<u64>> {
        // sysinfo reports failures as zeroes; a zero total is rejected by the
        // caller.
        Ok(self.read_raw().read_all(counters))
    }
}
