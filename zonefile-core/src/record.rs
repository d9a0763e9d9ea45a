use serde::Serialize;

/// A single resource record inside a rendered zone file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Record {
    /// Address record mapping a short host label to an IPv4 address literal.
    A { name: String, address: String },
    /// Pointer record mapping the final address octet to a host name.
    Ptr { octet: u8, target: String },
}

impl Record {
    /// Render the record as one master-file line, newline included.
    ///
    /// A records left-justify the label into a 31-character field; labels
    /// longer than that simply widen the field. PTR targets are emitted
    /// fully qualified (trailing dot appended here, not stored).
    pub fn render(&self) -> String {
        match self {
            Record::A { name, address } => format!("{name:<31} IN\tA\t{address}\n"),
            Record::Ptr { octet, target } => format!("{octet}\t\tIN\tPTR\t{target}.\n"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Record;

    #[test]
    fn a_record_pads_label_to_31_characters() {
        let record = Record::A {
            name: "web".to_string(),
            address: "10.0.0.1".to_string(),
        };
        assert_eq!(record.render(), format!("{:<31} IN\tA\t10.0.0.1\n", "web"));
    }

    #[test]
    fn a_record_keeps_long_labels_intact() {
        let name = "a-rather-long-hostname-label-over-width";
        let record = Record::A {
            name: name.to_string(),
            address: "10.0.0.2".to_string(),
        };
        let line = record.render();
        assert!(line.starts_with(name));
        assert!(line.ends_with(" IN\tA\t10.0.0.2\n"));
    }

    #[test]
    fn ptr_record_appends_trailing_dot() {
        let record = Record::Ptr {
            octet: 40,
            target: "host1".to_string(),
        };
        assert_eq!(record.render(), "40\t\tIN\tPTR\thost1.\n");
    }
}
