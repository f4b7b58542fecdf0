//! Scan report output.

use std::io::{self, Write};

use crate::models::Host;

/// Writes one `<endpoint> <status>` line per host, in list order.
pub fn write_report<W: Write>(out: &mut W, hosts: &[Host]) -> io::Result<()> {
    for host in hosts {
        writeln!(out, "{} {}", host.endpoint, host.status)?;
    }
    Ok(())
}
