//! Writing a [`MemorySnapshot`] out as either the one-line summary or the
//! verbose report.

use std::io::{self, Write};

use crate::{
    collection::memory::MemorySnapshot,
    constants::*,
    options::MemOptions,
    utils::data_units::{format_sized, DisplayUnit},
};

/// Formats values for one report.
struct Sizer<'a> {
    unit: DisplayUnit,
    verbose: bool,
    separator: &'a str,
}

impl Sizer<'_> {
    #[inline]
    fn size(&self, bytes: u64) -> String {
        format_sized(bytes, self.unit, self.verbose, self.separator)
    }
}

/// Writes the report selected by `options`.
pub fn write_report<W: Write>(
    out: &mut W, snapshot: &MemorySnapshot, options: &MemOptions, separator: &str,
) -> io::Result<()> {
    let sizer = Sizer {
        unit: options.unit,
        verbose: options.verbose,
        separator,
    };

    if options.verbose {
        write_verbose(out, snapshot, &sizer)
    } else {
        write_summary(out, snapshot, &sizer)
    }
}

fn write_summary<W: Write>(out: &mut W, snapshot: &MemorySnapshot, sizer: &Sizer<'_>) -> io::Result<()> {
    if snapshot.extended_bytes().is_some() {
        writeln!(
            out,
            "{}  ({} accessible to system)",
            sizer.size(snapshot.accessible_total()),
            sizer.size(snapshot.total_physical)
        )
    } else {
        writeln!(out, "{}", sizer.size(snapshot.total_physical))
    }
}

fn write_verbose<W: Write>(out: &mut W, snapshot: &MemorySnapshot, sizer: &Sizer<'_>) -> io::Result<()> {
    writeln!(out)?;
    match snapshot.extended_bytes() {
        Some(extended) => {
            writeln!(out, "{TOTAL_LABEL}{}", sizer.size(snapshot.accessible_total()))?;
            writeln!(out, "{ACCESSIBLE_LABEL}{}", sizer.size(snapshot.total_physical))?;
            writeln!(out, "{ADDITIONAL_LABEL}{}", sizer.size(extended))?;
        }
        None => {
            writeln!(out, "{TOTAL_LABEL}{}", sizer.size(snapshot.total_physical))?;
        }
    }
    writeln!(out)?;

    writeln!(out, "{RESIDENT_LABEL}{}", sizer.size(snapshot.resident))?;
    writeln!(out, "{AVAILABLE_LABEL}{}", sizer.size(snapshot.available))?;
    writeln!(out)?;

    writeln!(out, "{PROCESS_HEADER}")?;
    writeln!(out, "{PRIVATE_LOW_LABEL}{}", sizer.size(snapshot.max_private))?;
    writeln!(out, "{PRIVATE_HIGH_LABEL}{}", sizer.size(snapshot.max_private_high))?;
    writeln!(out, "{SHARED_LOW_LABEL}{}", sizer.size(snapshot.max_shared))?;
    writeln!(out, "{SHARED_HIGH_LABEL}{}", sizer.size(snapshot.max_shared_high))?;

    Ok(())
}
