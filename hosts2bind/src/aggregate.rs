//! Grouping of parsed host lines into per-zone lookup tables.
//!
//! The tables are built in one pass and are immutable once rendering
//! starts: [`HostTables::into_zones`] consumes them. Duplicate keys keep
//! the hosts-file semantics of last-write-wins, but every overwrite is
//! surfaced through the observer so the caller can warn about it.

use std::collections::BTreeMap;

use zonefile_core::{Record, Zone};

use crate::parse::{dotted_quad, HostLine};

/// Checkpoints emitted while the lookup tables are built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableEvent {
    /// A reverse (`in-addr.arpa`) zone was seen for the first time.
    ReverseZoneAdded(String),
    /// A forward (domain) zone was seen for the first time.
    ForwardZoneAdded(String),
    /// A later line replaced the PTR mapping for a final octet.
    ReverseOverwritten {
        zone: String,
        octet: u8,
        previous: String,
        replacement: String,
    },
    /// A later line replaced the address for a (domain, label) pair.
    ForwardOverwritten {
        zone: String,
        name: String,
        previous: String,
        replacement: String,
    },
}

/// Forward and reverse lookup tables grouped by zone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HostTables {
    /// `in-addr.arpa` zone name → final octet → canonical hostname.
    pub reverse: BTreeMap<String, BTreeMap<u8, String>>,
    /// Domain suffix → short host label → address literal.
    pub forward: BTreeMap<String, BTreeMap<String, String>>,
}

impl HostTables {
    /// Fold one parsed line into both tables.
    ///
    /// The reverse entry uses the first hostname token whether or not it
    /// is qualified. Forward entries come from every token that contains
    /// a dot, split at the first dot into label and domain suffix; bare
    /// names contribute nothing forward.
    pub fn insert(&mut self, line: &HostLine, observe: &mut dyn FnMut(TableEvent)) {
        let zone = line.reverse_zone();
        if !self.reverse.contains_key(&zone) {
            observe(TableEvent::ReverseZoneAdded(zone.clone()));
        }
        let octet = line.octets[3];
        let canonical = line.canonical_name().to_string();
        if let Some(previous) = self
            .reverse
            .entry(zone.clone())
            .or_default()
            .insert(octet, canonical.clone())
        {
            if previous != canonical {
                observe(TableEvent::ReverseOverwritten {
                    zone,
                    octet,
                    previous,
                    replacement: canonical,
                });
            }
        }

        for name in &line.names {
            let Some((label, domain)) = name.split_once('.') else {
                continue;
            };
            if !self.forward.contains_key(domain) {
                observe(TableEvent::ForwardZoneAdded(domain.to_string()));
            }
            if let Some(previous) = self
                .forward
                .entry(domain.to_string())
                .or_default()
                .insert(label.to_string(), line.address.clone())
            {
                if previous != line.address {
                    observe(TableEvent::ForwardOverwritten {
                        zone: domain.to_string(),
                        name: label.to_string(),
                        previous,
                        replacement: line.address.clone(),
                    });
                }
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.reverse.is_empty() && self.forward.is_empty()
    }

    /// Render the tables into zones, reverse zones first.
    ///
    /// PTR records come out in ascending final-octet order. A records
    /// are sorted by the numeric value of their address octets, not by
    /// the address string, so `10.0.0.9` sorts before `10.0.0.10`.
    pub fn into_zones(self) -> Vec<Zone> {
        let mut zones = Vec::with_capacity(self.reverse.len() + self.forward.len());

        for (name, entries) in self.reverse {
            let mut zone = Zone::new(name);
            for (octet, target) in entries {
                zone.push(Record::Ptr { octet, target });
            }
            zones.push(zone);
        }

        for (name, entries) in self.forward {
            let mut zone = Zone::new(name);
            let mut records: Vec<(String, String)> = entries.into_iter().collect();
            // Addresses were validated at parse time; ties keep label order.
            records.sort_by_key(|(_, address)| dotted_quad(address).unwrap_or([0; 4]));
            for (name, address) in records {
                zone.push(Record::A { name, address });
            }
            zones.push(zone);
        }

        zones
    }
}

/// Build both tables in one pass over parsed lines.
pub fn build_tables<'a, I>(lines: I, mut observe: impl FnMut(TableEvent)) -> HostTables
where
    I: IntoIterator<Item = &'a HostLine>,
{
    let mut tables = HostTables::default();
    for line in lines {
        tables.insert(line, &mut observe);
    }
    tables
}
