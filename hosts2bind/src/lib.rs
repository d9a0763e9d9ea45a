//! Hosts-file to BIND zone-file conversion.
//!
//! This library turns the classic flat hosts format (`<ipv4-address>
//! <hostname> [hostname ...]`, one record per line) into a set of
//! authoritative zone files plus a `named.zones` include listing them.
//! The conversion runs in three sequential stages:
//!
//! 1. [`parse`] — read raw lines into [`parse::HostLine`] records,
//!    skipping comments, blanks, `localhost` entries, and IPv6 lines.
//! 2. [`aggregate`] — group the records into per-zone forward
//!    (name → address) and reverse (address → name) lookup tables.
//! 3. Rendering — [`aggregate::HostTables::into_zones`] hands ordered
//!    [`zonefile_core::Zone`] values to the `zonefile-core` writer.
//!
//! [`summary`] counts what a conversion produced for the final report
//! line. All stages are pure; the binary's `convert` module owns the
//! file I/O around them.

pub mod aggregate;
pub mod parse;
pub mod summary;
