use serde::Serialize;

use crate::record::Record;

/// One zone ready to be rendered: an origin name plus its records in
/// emit order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Zone {
    /// Zone origin, without a trailing dot (e.g. `example.com` or
    /// `30.20.10.in-addr.arpa`). Doubles as the output file name.
    pub name: String,
    /// Records in the order they will appear in the file.
    pub records: Vec<Record>,
}

impl Zone {
    /// Create an empty zone for the given origin.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            records: Vec::new(),
        }
    }

    /// Append a record.
    pub fn push(&mut self, record: Record) {
        self.records.push(record);
    }

    /// Render the complete zone file: SOA header followed by every record.
    pub fn render(&self) -> String {
        let mut out = soa_header(&self.name);
        for record in &self.records {
            out.push_str(&record.render());
        }
        out
    }
}

/// Render the fixed zone header for an origin.
///
/// The SOA carries a constant serial and generic timers; anyone serving
/// these zones on the public Internet is expected to edit the header.
/// The origin is substituted verbatim, with the trailing dot added once.
pub fn soa_header(origin: &str) -> String {
    format!(
        "; generated zone file - review before use on public DNS\n\
         $TTL 300\n\
         $ORIGIN {origin}.\n\
         @\t\tIN\tSOA\t@ root (\n\
         \t\t\t\t42\t; serial\n\
         \t\t\t\t3H\t; refresh\n\
         \t\t\t\t15M\t; retry\n\
         \t\t\t\t1W\t; expiry\n\
         \t\t\t\t1D\t; minimum ttl\n\
         )\n\n"
    )
}
