//! Extended memory: physical memory above the 4GB line that the primary
//! counters cannot see.
//!
//! This is only reported by an optional loader-provided device. The device is
//! opened, asked for one [`MemInfoEx`] packet and closed again. Any failure
//! along the way just means the feature is unavailable.

use std::io;

cfg_if::cfg_if! {
    if #[cfg(target_os = "linux")] {
        pub mod memmap;
        pub use self::memmap::FirmwareMemMap as PlatformDevice;
    } else {
        pub use self::NoDevice as PlatformDevice;
    }
}

/// The control function that returns a [`MemInfoEx`] packet.
pub const GET_MEMINFO_EX: u16 = 0x0011;

/// The page size the device counts in.
pub const PAGE_SIZE: u64 = 4096;

/// The amount of extended memory, or the lack of support for querying it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ExtendedMemory {
    /// No device to ask, or it did not answer properly.
    #[default]
    Unsupported,
    /// The number of bytes above the 4GB line.
    Available(u64),
}

/// An open handle to a device that answers control requests.
pub trait Device {
    /// Runs control function `function`, writing the answer into `response`.
    /// Returns the number of bytes written.
    fn control(&mut self, function: u16, response: &mut [u8]) -> io::Result<usize>;

    /// Releases the handle.
    fn close(&mut self);
}

/// Closes the wrapped device when dropped.
struct DeviceGuard<D: Device>(D);

impl<D: Device> Drop for DeviceGuard<D> {
    fn drop(&mut self) {
        self.0.close();
        log::trace!("closed the extended memory device");
    }
}

/// The packet returned by [`GET_MEMINFO_EX`]. Three little-endian `u32`s,
/// with no padding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MemInfoEx {
    /// 4 KiB pages below the 4GB line, not counting the first MiB.
    pub lo_pages: u32,
    /// 4 KiB pages at or above the 4GB line.
    pub hi_pages: u32,
    /// Pages available to the system, not counting the first MiB.
    pub avail_pages: u32,
}

impl MemInfoEx {
    pub const SIZE: usize = 12;

    /// Decodes a packet. `bytes` must be exactly [`MemInfoEx::SIZE`] long.
    pub fn from_bytes(bytes: &[u8]) -> Option<Self> {
        let bytes: &[u8; Self::SIZE] = bytes.try_into().ok()?;
        let word = |i: usize| u32::from_le_bytes([bytes[i], bytes[i + 1], bytes[i + 2], bytes[i + 3]]);

        Some(MemInfoEx {
            lo_pages: word(0),
            hi_pages: word(4),
            avail_pages: word(8),
        })
    }

    pub fn to_bytes(self) -> [u8; Self::SIZE] {
        let mut bytes = [0; Self::SIZE];
        bytes[0..4].copy_from_slice(&self.lo_pages.to_le_bytes());
        bytes[4..8].copy_from_slice(&self.hi_pages.to_le_bytes());
        bytes[8..12].copy_from_slice(&self.avail_pages.to_le_bytes());
        bytes
    }

    /// The memory above the 4GB line, in bytes.
    #[inline]
    pub fn hi_bytes(&self) -> u64 {
        u64::from(self.hi_pages) * PAGE_SIZE
    }
}

/// Asks the device opened by `open` how much memory lies above the 4GB line.
///
/// The device, if it could be opened, is always closed before returning.
pub fn query_extended_memory<D, F>(open: F) -> ExtendedMemory
where
    D: Device,
    F: FnOnce() -> io::Result<D>,
{
    let mut device = match open() {
        Ok(device) => DeviceGuard(device),
        Err(err) => {
            log::debug!("no extended memory device: {err}");
            return ExtendedMemory::Unsupported;
        }
    };

    let mut response = [0; MemInfoEx::SIZE];
    match device.0.control(GET_MEMINFO_EX, &mut response) {
        Ok(len) if len == MemInfoEx::SIZE => match MemInfoEx::from_bytes(&response) {
            Some(info) => {
                log::debug!("extended memory device answered {info:?}");
                ExtendedMemory::Available(info.hi_bytes())
            }
            None => ExtendedMemory::Unsupported,
        },
        Ok(len) => {
            log::debug!("short extended memory response, {len} bytes");
            ExtendedMemory::Unsupported
        }
        Err(err) => {
            log::debug!("extended memory request failed: {err}");
            ExtendedMemory::Unsupported
        }
    }
}

/// Opens this platform's extended memory device.
pub fn open_platform_device() -> io::Result<PlatformDevice> {
    PlatformDevice::open()
}

/// A device that never exists, for platforms without a loader extension.
#[derive(Debug)]
pub struct NoDevice;

impl NoDevice {
    pub fn open() -> io::Result<Self> {
        Err(io::Error::new(
            io::ErrorKind::NotFound,
            "no extended memory device on this platform",
        ))
    }
}

impl Device for NoDevice {
    fn control(&mut self, _function: u16, _response: &mut [u8]) -> io::Result<usize> {
        Err(io::ErrorKind::Unsupported.into())
    }

    fn close(&mut self) {}
}
