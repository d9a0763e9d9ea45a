use pretty_assertions::assert_eq;
use zonefile_core::{Manifest, Record, Zone};

#[test]
fn reverse_zone_renders_header_and_ptr_records() {
    let mut zone = Zone::new("30.20.10.in-addr.arpa");
    zone.push(Record::Ptr {
        octet: 1,
        target: "gateway".to_string(),
    });
    zone.push(Record::Ptr {
        octet: 40,
        target: "host1".to_string(),
    });

    let rendered = zone.render();
    let expected_tail = "1\t\tIN\tPTR\tgateway.\n40\t\tIN\tPTR\thost1.\n";

    assert!(rendered.contains("$ORIGIN 30.20.10.in-addr.arpa.\n"));
    assert!(rendered.ends_with(expected_tail));
}

#[test]
fn forward_zone_renders_a_records_in_given_order() {
    let mut zone = Zone::new("example.com");
    zone.push(Record::A {
        name: "host1".to_string(),
        address: "10.20.30.40".to_string(),
    });
    zone.push(Record::A {
        name: "host2".to_string(),
        address: "10.20.30.41".to_string(),
    });

    let rendered = zone.render();
    let host1 = rendered.find("host1").expect("host1 record");
    let host2 = rendered.find("host2").expect("host2 record");
    assert!(host1 < host2);
    assert!(rendered.contains(&format!("{:<31} IN\tA\t10.20.30.40\n", "host1")));
}

#[test]
fn manifest_lists_zones_in_push_order() {
    let mut manifest = Manifest::default();
    manifest.push("30.20.10.in-addr.arpa");
    manifest.push("example.com");

    let rendered = manifest.render();
    assert_eq!(
        rendered,
        "zone \"30.20.10.in-addr.arpa\" { type master; file \"30.20.10.in-addr.arpa\"; };\n\
         zone \"example.com\" { type master; file \"example.com\"; };\n"
    );
}

#[test]
fn rendering_is_deterministic() {
    let mut zone = Zone::new("example.com");
    zone.push(Record::A {
        name: "host1".to_string(),
        address: "10.20.30.40".to_string(),
    });

    assert_eq!(zone.render(), zone.render());
}
