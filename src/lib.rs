//! Typed SPDX 2.2 document predicate for supply-chain attestations.
//!
//! Models one SPDX document (metadata, packages, relationships, extracted
//! licensing info) and maps it losslessly to and from the SPDX 2.2 JSON
//! encoding. The value is meant to travel as the `predicate` of an
//! attestation statement whose predicate type is [`PREDICATE_SPDX`].
//!
//! # Quick Start
//!
//! ```
//! use spdx_predicate::{decode, encode};
//!
//! let doc = decode(br#"{"SPDXID": "SPDXRef-DOCUMENT", "spdxVersion": "SPDX-2.2"}"#).unwrap();
//! assert_eq!(doc.spdx_version, "SPDX-2.2");
//! let bytes = encode(&doc).unwrap();
//! assert_eq!(decode(&bytes).unwrap(), doc);
//! ```

pub mod codec;
pub mod config;
pub mod error;
pub mod model;

pub use codec::{decode, decode_str, decode_value, encode, encode_with, to_value, EncodeFormat};
pub use config::Config;
pub use error::{PredicateError, Result};
pub use model::{
    Checksum, CreationInfo, ExtractedLicensingInfo, Package, Relationship, SpdxPredicate,
    PREDICATE_SPDX, SPDX_REF_DOCUMENT, SPDX_VERSION_2_2,
};

#[cfg(test)]
mod integration_tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    const FIXTURE: &str = include_str!("../tests/fixtures/spdx_document.json");

    fn expected_fixture() -> SpdxPredicate {
        SpdxPredicate {
            spdx_id: SPDX_REF_DOCUMENT.into(),
            spdx_version: SPDX_VERSION_2_2.into(),
            creation_info: CreationInfo {
                created: Some(Utc.timestamp_opt(1_597_826_280, 0).unwrap()),
                creators: vec!["Tool: tern-2.9.0".into()],
                license_list_version: "3.8".into(),
            },
            name: "Test SBOM report".into(),
            data_license: "Data License".into(),
            comment: "Comment field on root element".into(),
            document_namespace: "Document Namespace".into(),
            document_describes: vec!["SPDXRef-sbom-image-name".into()],
            packages: vec![
                Package {
                    name: "organization/image-name".into(),
                    spdx_id: "SPDXRef-sbom-image-name".into(),
                    version_info: "latest".into(),
                    download_location: "Download Location".into(),
                    files_analyzed: false,
                    license_concluded: "License concluded".into(),
                    license_declared: "License declared".into(),
                    copyright_text: "Copyright Text".into(),
                    ..Default::default()
                },
                Package {
                    name: "package".into(),
                    spdx_id: "SPDXRef-package".into(),
                    package_filename: "packageFileName".into(),
                    download_location: "Download Location".into(),
                    files_analyzed: false,
                    checksums: vec![Checksum::new("SHA256", "checksum hash")],
                    license_concluded: "License concluded".into(),
                    license_declared: "License declared".into(),
                    copyright_text: "Copyright Text".into(),
                    comment: "This is a comment on package level".into(),
                    ..Default::default()
                },
            ],
            relationships: vec![Relationship::new(
                SPDX_REF_DOCUMENT,
                Relationship::DESCRIBES,
                "SPDXRef-sbom-image-name",
            )],
            has_extracted_licensing_infos: vec![ExtractedLicensingInfo::new(
                "LicenseRef-xxxxxxx",
                "MPL-2.0 AND MIT",
            )],
        }
    }

    #[test]
    fn fixture_decodes_to_expected_document() {
        let doc = decode_str(FIXTURE).unwrap();
        assert_eq!(doc, expected_fixture());
    }

    #[test]
    fn fixture_scenario_fields() {
        let doc = decode_str(FIXTURE).unwrap();
        assert_eq!(doc.packages.len(), 2);
        assert_eq!(doc.packages[1].checksums[0].algorithm, "SHA256");
        assert!(doc.packages[0].checksums.is_empty());
        assert_eq!(doc.relationships[0].relationship_type, "DESCRIBES");
        assert_eq!(
            doc.has_extracted_licensing_infos[0].extracted_text,
            "MPL-2.0 AND MIT"
        );
        assert_eq!(
            doc.has_extracted_licensing_infos[0].license_id,
            "LicenseRef-xxxxxxx"
        );
        assert_eq!(doc.creation_info.created.unwrap().timestamp(), 1_597_826_280);
    }

    #[test]
    fn fixture_reencodes_without_empty_optionals() {
        let doc = decode_str(FIXTURE).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&encode(&doc).unwrap()).unwrap();

        let first = value["packages"][0].as_object().unwrap();
        assert!(!first.contains_key("filesAnalyzed"));
        assert!(!first.contains_key("checksums"));
        assert!(!first.contains_key("comment"));

        let second = value["packages"][1].as_object().unwrap();
        assert_eq!(second["packageFilename"], "packageFileName");
        assert!(!second.contains_key("packageFileName"));
        assert_eq!(second["versionInfo"], "");

        assert_eq!(decode(&encode(&doc).unwrap()).unwrap(), doc);
    }

    #[test]
    fn extra_top_level_key_is_ignored() {
        let mut value: serde_json::Value = serde_json::from_str(FIXTURE).unwrap();
        value["extra"] = serde_json::json!(1);
        let with_extra = decode(&serde_json::to_vec(&value).unwrap()).unwrap();
        assert_eq!(with_extra, decode_str(FIXTURE).unwrap());
    }

    #[test]
    fn absent_created_is_not_zero_instant() {
        let mut value: serde_json::Value = serde_json::from_str(FIXTURE).unwrap();
        value["creationInfo"]
            .as_object_mut()
            .unwrap()
            .remove("created");
        let doc = decode_value(value).unwrap();
        assert_eq!(doc.creation_info.created, None);
        assert_eq!(doc.creation_info.license_list_version, "3.8");
    }

    #[test]
    fn predicate_type_matches_spdx_document_uri() {
        assert_eq!(SpdxPredicate::PREDICATE_TYPE, "https://spdx.dev/Document");
    }

    fn text() -> impl Strategy<Value = String> {
        prop_oneof![Just(String::new()), "[A-Za-z0-9 ./:()+-]{1,16}"]
    }

    fn checksum() -> impl Strategy<Value = Checksum> {
        (text(), "[0-9a-f]{0,64}").prop_map(|(a, v)| Checksum::new(a, v))
    }

    fn package() -> impl Strategy<Value = Package> {
        (
            (text(), text(), text(), text()),
            any::<bool>(),
            (text(), text(), text(), text(), text()),
            prop::collection::vec(checksum(), 0..3),
        )
            .prop_map(
                |(
                    (name, spdx_id, version_info, download_location),
                    files_analyzed,
                    (license_concluded, license_declared, copyright_text, package_filename, comment),
                    checksums,
                )| Package {
                    name,
                    spdx_id,
                    version_info,
                    download_location,
                    files_analyzed,
                    license_concluded,
                    license_declared,
                    copyright_text,
                    package_filename,
                    comment,
                    checksums,
                },
            )
    }

    fn predicate() -> impl Strategy<Value = SpdxPredicate> {
        let creation = (
            prop::option::of(0i64..4_102_444_800),
            prop::collection::vec(text(), 0..3),
            text(),
        )
            .prop_map(|(secs, creators, license_list_version)| CreationInfo {
                created: secs.and_then(|s| Utc.timestamp_opt(s, 0).single()),
                creators,
                license_list_version,
            });
        (
            (text(), text(), creation, text(), text(), text(), text()),
            prop::collection::vec(text(), 0..3),
            prop::collection::vec(package(), 0..3),
            prop::collection::vec((text(), text(), text()), 0..3),
            prop::collection::vec((text(), text()), 0..2),
        )
            .prop_map(
                |(
                    (spdx_id, spdx_version, creation_info, name, data_license, comment, namespace),
                    document_describes,
                    packages,
                    rels,
                    licenses,
                )| SpdxPredicate {
                    spdx_id,
                    spdx_version,
                    creation_info,
                    name,
                    data_license,
                    comment,
                    document_namespace: namespace,
                    document_describes,
                    packages,
                    relationships: rels
                        .into_iter()
                        .map(|(a, t, b)| Relationship::new(a, t, b))
                        .collect(),
                    has_extracted_licensing_infos: licenses
                        .into_iter()
                        .map(|(id, text)| ExtractedLicensingInfo::new(id, text))
                        .collect(),
                },
            )
    }

    proptest! {
        #[test]
        fn encode_decode_round_trip(doc in predicate()) {
            let bytes = encode(&doc).unwrap();
            prop_assert_eq!(decode(&bytes).unwrap(), doc);
        }
    }
}
