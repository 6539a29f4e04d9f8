//! Reading the memory counters on Linux from procfs.

use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::collection::{
    error::{CollectionError, CollectionResult},
    memory::{unix::address_space_limit, Counter, CounterSource, RawCounters},
};

const PROC_PATH: &str = "/proc";

/// The `/proc/meminfo` keys we care about, in bytes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct MemInfo {
    total: u64,
    free: u64,
    available: Option<u64>,
    buffers: u64,
    cached: u64,
    swap_free: u64,
}

impl MemInfo {
    /// Memory that could be handed to processes without swapping. Kernels
    /// older than 3.14 don't report `MemAvailable`, so estimate it.
    fn available_ram(&self) -> u64 {
        self.available
            .unwrap_or_else(|| {
                self.free
                    .saturating_add(self.buffers)
                    .saturating_add(self.cached)
            })
            .min(self.total)
    }
}

/// Reads the counters from `/proc/meminfo` and `/proc/sys/kernel/shmmax`.
#[derive(Debug, Clone)]
pub struct ProcMemInfo {
    proc_path: PathBuf,
    address_space_limit: Option<u64>,
}

impl Default for ProcMemInfo {
    fn default() -> Self {
        Self::new()
    }
}

impl ProcMemInfo {
    pub fn new() -> Self {
        ProcMemInfo {
            proc_path: PathBuf::from(PROC_PATH),
            address_space_limit: address_space_limit(),
        }
    }

    /// Reads from a procfs mounted at `proc_path`, with a fixed address space
    /// limit.
    pub fn with_root<P: AsRef<Path>>(proc_path: P, address_space_limit: Option<u64>) -> Self {
        ProcMemInfo {
            proc_path: proc_path.as_ref().to_path_buf(),
            address_space_limit,
        }
    }

    fn read_raw(&self) -> CollectionResult<RawCounters> {
        let meminfo = fs::read_to_string(self.proc_path.join("meminfo"))?;
        let meminfo = parse_meminfo(&meminfo)?;

        let total_physical = meminfo.total;
        let available_ram = meminfo.available_ram();
        let available = available_ram.saturating_add(meminfo.swap_free);

        let private_ceiling = match self.address_space_limit {
            Some(limit) => available.min(limit),
            None => available,
        };
        let shared_ceiling = match self.shmmax() {
            Some(shmmax) => available.min(shmmax),
            None => available,
        };

        Ok(RawCounters {
            total_physical,
            available,
            resident: total_physical - available_ram,
            private_ceiling,
            shared_ceiling,
        })
    }

    /// The largest single shared memory segment allowed. Optional, as it is
    /// missing in some containers.
    fn shmmax(&self) -> Option<u64> {
        let path = self.proc_path.join("sys/kernel/shmmax");
        match fs::read_to_string(&path) {
            Ok(value) => value.trim().parse().ok(),
            Err(err) => {
                log::debug!("could not read {}: {err}", path.display());
                None
            }
        }
    }
}

impl CounterSource for ProcMemInfo {
    fn query(&mut self, counters: &[Counter]) -> CollectionResult<Vec<u64>> {
        Ok(self.read_raw()?.read_all(counters))
    }
}

fn parse_meminfo(contents: &str) -> CollectionResult<MemInfo> {
    let mut total = None;
    let mut meminfo = MemInfo::default();

    for line in contents.lines() {
        let Some((label, value)) = line.split_once(':') else {
            continue;
        };

        let to_write = match label {
            "MemTotal" => total.insert(0),
            "MemFree" => &mut meminfo.free,
            "MemAvailable" => meminfo.available.insert(0),
            "Buffers" => &mut meminfo.buffers,
            "Cached" => &mut meminfo.cached,
            "SwapFree" => &mut meminfo.swap_free,
            _ => continue,
        };

        // Values are in kibibytes, despite the "kB".
        let number = value.trim().trim_end_matches("kB").trim_end();
        *to_write = number.parse::<u64>()?.saturating_mul(1024);
    }

    meminfo.total = total.ok_or_else(|| CollectionError::parsing("MemTotal is missing"))?;

    Ok(meminfo)
}
