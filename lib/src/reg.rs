// SPDX-FileCopyrightText: 2024 Kent Gibson <warthog618@gmail.com>
//
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::{Error, Result};
use std::fs::OpenOptions;
use std::io::Error as IoError;
use std::os::unix::fs::OpenOptionsExt;
use std::os::unix::io::AsRawFd;
use std::path::Path;
use std::ptr;

/// Byte access to the GPIO register containing the HPD control bit.
///
/// The production implementation is [`MemRegister`].  Tests may substitute
/// an in-memory implementation to observe writes without hardware.
///
/// [`MemRegister`]: struct.MemRegister.html
pub trait Register {
    /// Read the current register byte.
    fn read(&self) -> u8;

    /// Write the register byte.
    fn write(&mut self, byte: u8);
}

/// A GPIO register mapped from a physical memory device.
///
/// Maps the one page of physical memory containing the register and
/// addresses the register byte within it.  The mapping is exclusive by
/// contract - no other process may write the register while the mapping
/// is held - and is released when the `MemRegister` is dropped.
#[derive(Debug)]
pub struct MemRegister {
    // page aligned mapping containing the register
    base: *mut libc::c_void,

    // length of the mapping - one page
    len: usize,

    // byte offset of the register within the mapped page
    offset: usize,
}

impl MemRegister {
    /// Map the register at physical address `address` from the memory
    /// device at `path`, typically `/dev/mem`.
    ///
    /// Requires the privilege to open the memory device.
    pub fn map<P: AsRef<Path>>(path: P, address: u64) -> Result<MemRegister> {
        let path = path.as_ref();
        let f = OpenOptions::new()
            .read(true)
            .write(true)
            .custom_flags(libc::O_SYNC)
            .open(path)
            .map_err(|e| Error::MemDevice(path.into(), e))?;
        let page_size = match unsafe { libc::sysconf(libc::_SC_PAGESIZE) } {
            -1 => return Err(Error::MemDevice(path.into(), IoError::last_os_error())),
            sz => sz as u64,
        };
        let base = unsafe {
            libc::mmap(
                ptr::null_mut(),
                page_size as usize,
                libc::PROT_READ | libc::PROT_WRITE,
                libc::MAP_SHARED,
                f.as_raw_fd(),
                (address / page_size * page_size) as libc::off_t,
            )
        };
        if base == libc::MAP_FAILED {
            return Err(Error::MemDevice(path.into(), IoError::last_os_error()));
        }
        // the fd may close here - the mapping persists until munmap
        Ok(MemRegister {
            base,
            len: page_size as usize,
            offset: (address % page_size) as usize,
        })
    }

    #[inline]
    fn reg_ptr(&self) -> *mut u8 {
        // offset is within the page by construction
        unsafe { (self.base as *mut u8).add(self.offset) }
    }
}

impl Register for MemRegister {
    fn read(&self) -> u8 {
        unsafe { self.reg_ptr().read_volatile() }
    }

    fn write(&mut self, byte: u8) {
        unsafe { self.reg_ptr().write_volatile(byte) }
    }
}

impl Drop for MemRegister {
    fn drop(&mut self) {
        unsafe {
            libc::munmap(self.base, self.len);
        }
    }
}
