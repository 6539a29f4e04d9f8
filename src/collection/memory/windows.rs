//! Reading the memory counters on Windows.

use std::{
    io,
    mem::{size_of, zeroed},
};

use windows::Win32::System::{
    ProcessStatus::{GetPerformanceInfo, PERFORMANCE_INFORMATION},
    SystemInformation::{GlobalMemoryStatusEx, MEMORYSTATUSEX},
};

use crate::collection::{
    error::CollectionResult,
    memory::{Counter, CounterSource, RawCounters},
};

const PERFORMANCE_INFORMATION_SIZE: u32 = size_of::<PERFORMANCE_INFORMATION>() as _;

/// Reads the counters from `GetPerformanceInfo` and `GlobalMemoryStatusEx`.
#[derive(Debug, Default)]
pub struct PerformanceInfo;

impl PerformanceInfo {
    pub fn new() -> Self {
        PerformanceInfo
    }

    fn read_raw(&self) -> CollectionResult<RawCounters> {
        // SAFETY: The safety invariant is that we only touch what's in `perf_info` and `status`
        // if the calls succeed, and that the bindings are "safe" to use with how we call them.
        let (perf_info, status) = unsafe {
            let mut perf_info: PERFORMANCE_INFORMATION = zeroed();
            GetPerformanceInfo(&mut perf_info, PERFORMANCE_INFORMATION_SIZE)
                .map_err(|_| io::Error::last_os_error())?;

            let mut status: MEMORYSTATUSEX = zeroed();
            status.dwLength = size_of::<MEMORYSTATUSEX>() as u32;
            GlobalMemoryStatusEx(&mut status).map_err(|_| io::Error::last_os_error())?;

            (perf_info, status)
        };

        let page_size = perf_info.PageSize as u64;
        let pages = |count: usize| (count as u64).saturating_mul(page_size);

        let total_physical = pages(perf_info.PhysicalTotal);
        let available = pages(perf_info.CommitLimit.saturating_sub(perf_info.CommitTotal));
        let resident = pages(
            perf_info
                .PhysicalTotal
                .saturating_sub(perf_info.PhysicalAvailable),
        );

        Ok(RawCounters {
            total_physical,
            available,
            resident,
            private_ceiling: available.min(status.ullAvailVirtual),
            shared_ceiling: available,
        })
    }
}

impl CounterSource for PerformanceInfo {
    fn query(&mut self, counters: &[Counter]) -> CollectionResult<Vec<u64>> {
        Ok(self.read_raw()?.read_all(counters))
    }
}
