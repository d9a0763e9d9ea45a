use thiserror::Error;

/// One usable hosts-file record: an IPv4 address and its hostnames.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostLine {
    /// Address exactly as written in the file; emitted verbatim into
    /// A records, never renormalized.
    pub address: String,
    /// Parsed address octets, for reverse-zone keying and numeric sorting.
    pub octets: [u8; 4],
    /// Hostname tokens in file order; never empty.
    pub names: Vec<String>,
}

impl HostLine {
    /// Reverse-zone name for this address: the first three octets
    /// reversed under `in-addr.arpa` (e.g. `10.20.30.40` maps into
    /// `30.20.10.in-addr.arpa`).
    pub fn reverse_zone(&self) -> String {
        format!(
            "{}.{}.{}.in-addr.arpa",
            self.octets[2], self.octets[1], self.octets[0]
        )
    }

    /// First hostname token on the line, used for the PTR record.
    pub fn canonical_name(&self) -> &str {
        &self.names[0]
    }
}

/// Reasons a non-skipped line cannot become a [`HostLine`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LineError {
    #[error("address {0:?} is not a dotted-quad IPv4 address")]
    BadAddress(String),
    #[error("no hostname after address {0}")]
    MissingHostname(String),
}

/// Parse one raw hosts-file line.
///
/// Returns `Ok(None)` for lines skipped by design: blanks, comments,
/// anything mentioning `localhost`, and anything containing a colon
/// (the IPv6 heuristic). Everything else must carry a dotted-quad
/// address followed by at least one hostname.
pub fn parse_line(line: &str) -> Result<Option<HostLine>, LineError> {
    let line = line.trim_start();
    if line.is_empty()
        || line.starts_with('#')
        || line.contains(':')
        || line.contains("localhost")
    {
        return Ok(None);
    }

    let mut tokens = line.split_whitespace();
    let Some(address) = tokens.next() else {
        return Ok(None);
    };
    let octets =
        dotted_quad(address).ok_or_else(|| LineError::BadAddress(address.to_string()))?;
    let names: Vec<String> = tokens.map(str::to_string).collect();
    if names.is_empty() {
        return Err(LineError::MissingHostname(address.to_string()));
    }

    Ok(Some(HostLine {
        address: address.to_string(),
        octets,
        names,
    }))
}

/// Parse a dotted-quad IPv4 literal into its octets.
///
/// Accepts leading zeros (`010.0.0.1`), unlike [`std::net::Ipv4Addr`],
/// because hosts files in the wild contain them; the octet values are
/// what matter for zone keying and record ordering.
pub fn dotted_quad(token: &str) -> Option<[u8; 4]> {
    let mut octets = [0u8; 4];
    let mut parts = token.split('.');
    for slot in &mut octets {
        let part = parts.next()?;
        if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        *slot = part.parse().ok()?;
    }
    if parts.next().is_some() {
        return None;
    }
    Some(octets)
}
