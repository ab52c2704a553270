//! Compact identifier ↔ IRI conversions against an ontology named `test`.

use obo_ids::{Codec, Iri, PrefixContext};

fn codec() -> Codec {
    Codec::new(PrefixContext::obo().with_ontology("test"))
}

/// `(compact id, minted IRI, compact id recovered from the IRI)`.
const CASES: &[(&str, &str, &str)] = &[
    ("GO:001", "http://purl.obolibrary.org/obo/GO_001", "GO:001"),
    (
        "My_Ont:FOO_002",
        "http://purl.obolibrary.org/obo/My_Ont#_FOO_002",
        "My_Ont:FOO_002",
    ),
    ("My_Ont:002", "http://purl.obolibrary.org/obo/My_Ont_002", "My_Ont:002"),
    // Unprefixed ids take the current ontology; the prefix is not restored.
    ("003", "http://purl.obolibrary.org/obo/test#003", "003"),
    ("part_of", "http://purl.obolibrary.org/obo/test#part_of", "part_of"),
    (
        "OBO_REL:part_of",
        "http://purl.obolibrary.org/obo/OBO_REL#_part_of",
        "OBO_REL:part_of",
    ),
    (
        "http://purl.obolibrary.org/testont",
        "http://purl.obolibrary.org/testont",
        "http://purl.obolibrary.org/testont",
    ),
    (
        "http://purl.obolibrary.org/obo/BFO_0000050",
        "http://purl.obolibrary.org/obo/BFO_0000050",
        "BFO:0000050",
    ),
    // MGI ids carry a second separator inside the local part.
    ("MGI:MGI:1", "http://purl.obolibrary.org/obo/MGI_MGI%3A1", "MGI:MGI:1"),
];

#[test]
fn concrete_conversions() {
    let codec = codec();
    for &(compact, iri, back) in CASES {
        let minted = codec.to_iri(compact).unwrap();
        assert_eq!(minted.as_str(), iri, "to_iri({compact})");
        assert_eq!(codec.from_iri(&minted).as_str(), back, "from_iri({iri})");
    }
}

#[test]
fn foreign_fragment_is_left_as_iri() {
    let iri = Iri::new("http://purl.obolibrary.org/obo/alternate#abcdef");
    assert_eq!(codec().from_iri(&iri).as_str(), iri.as_str());
}

#[test]
fn unprefixed_fragment_needs_matching_ontology() {
    let iri = Iri::new("http://purl.obolibrary.org/obo/test#003");
    let elsewhere = Codec::new(PrefixContext::obo().with_ontology("other"));
    assert_eq!(elsewhere.from_iri(&iri).as_str(), iri.as_str());
}
