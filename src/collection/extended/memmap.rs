//! The firmware memory map exported by Linux under `/sys/firmware/memmap`,
//! used as the extended memory device.
//!
//! Only a 32-bit x86 kernel leaves RAM above 4GB out of its own counters, so
//! the device refuses to open anywhere else.

use std::{
    fs,
    io,
    path::{Path, PathBuf},
};

use super::{Device, MemInfoEx, GET_MEMINFO_EX, PAGE_SIZE};

const MEMMAP_PATH: &str = "/sys/firmware/memmap";

/// The type firmware gives usable RAM ranges.
const SYSTEM_RAM: &str = "System RAM";

const FIRST_MIB: u64 = 1024 * 1024;
const FOUR_GIB: u64 = 4 * 1024 * 1024 * 1024;

/// An open view of a firmware memory map directory.
#[derive(Debug)]
pub struct FirmwareMemMap {
    path: PathBuf,
    open: bool,
}

impl FirmwareMemMap {
    /// Opens the memory map of the running kernel.
    pub fn open() -> io::Result<Self> {
        let uname = rustix::system::uname();
        let machine = uname.machine().to_string_lossy();

        if !is_x86_32(&machine) {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("no extended memory device for a '{machine}' kernel"),
            ));
        }

        Self::open_at(MEMMAP_PATH)
    }

    /// Opens the memory map at `path`, which must be a readable directory.
    pub fn open_at<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let path = path.as_ref();
        fs::read_dir(path)?;

        Ok(FirmwareMemMap {
            path: path.to_path_buf(),
            open: true,
        })
    }

    fn read_mem_info(&self) -> io::Result<MemInfoEx> {
        let mut lo_bytes = 0u64;
        let mut hi_bytes = 0u64;

        for entry in fs::read_dir(&self.path)? {
            let entry = entry?.path();

            // Entries we can't make sense of are skipped rather than failing
            // the whole map.
            let Some((start, end)) = read_ram_range(&entry) else {
                continue;
            };

            lo_bytes = lo_bytes.saturating_add(overlap(start, end, FIRST_MIB, FOUR_GIB));
            hi_bytes = hi_bytes.saturating_add(overlap(start, end, FOUR_GIB, u64::MAX));
        }

        let lo_pages = to_pages(lo_bytes);
        Ok(MemInfoEx {
            lo_pages,
            hi_pages: to_pages(hi_bytes),
            avail_pages: lo_pages,
        })
    }
}

impl Device for FirmwareMemMap {
    fn control(&mut self, function: u16, response: &mut [u8]) -> io::Result<usize> {
        if !self.open {
            return Err(io::ErrorKind::NotConnected.into());
        }
        if function != GET_MEMINFO_EX {
            return Err(io::ErrorKind::Unsupported.into());
        }

        let packet = self.read_mem_info()?.to_bytes();
        let len = packet.len().min(response.len());
        response[..len].copy_from_slice(&packet[..len]);

        Ok(len)
    }

    fn close(&mut self) {
        self.open = false;
    }
}

#[inline]
fn is_x86_32(machine: &str) -> bool {
    matches!(machine, "i386" | "i486" | "i586" | "i686")
}

/// Returns the `[start, end)` range of a `System RAM` entry.
fn read_ram_range(entry: &Path) -> Option<(u64, u64)> {
    let kind = fs::read_to_string(entry.join("type")).ok()?;
    if kind.trim() != SYSTEM_RAM {
        return None;
    }

    let start = parse_address(&fs::read_to_string(entry.join("start")).ok()?)?;
    let end = parse_address(&fs::read_to_string(entry.join("end")).ok()?)?;

    // The end address is inclusive.
    (end >= start).then(|| (start, end.saturating_add(1)))
}

fn parse_address(value: &str) -> Option<u64> {
    let value = value.trim();
    let digits = value
        .strip_prefix("0x")
        .or_else(|| value.strip_prefix("0X"))
        .unwrap_or(value);

    u64::from_str_radix(digits, 16).ok()
}

/// The number of bytes `[start, end)` shares with `[lower, upper)`.
#[inline]
fn overlap(start: u64, end: u64, lower: u64, upper: u64) -> u64 {
    end.min(upper).saturating_sub(start.max(lower))
}

#[inline]
fn to_pages(bytes: u64) -> u32 {
    u32::try_from(bytes / PAGE_SIZE).unwrap_or(u32::MAX)
}
