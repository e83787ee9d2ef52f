use crate::common::test_data::{META_ISCC, META_UNENDLICHE};
use iscc::{meta_id, IsccConfig, IsccError, Iscc};

#[test]
fn test_meta_id_vectors() {
    assert_eq!(meta_id("ISCC Content Identifiers", "", 1).unwrap().code, META_ISCC);
    assert_eq!(
        meta_id("Die Unendliche Geschichte", "Von Michael Ende", 1)
            .unwrap()
            .code,
        META_UNENDLICHE
    );
}

#[test]
fn test_meta_id_compatibility_forms_match() {
    // U+FB01 decomposes to "fi" under NFKC
    let plain = meta_id("file", "", 1).unwrap();
    let ligature = meta_id("\u{FB01}le", "", 1).unwrap();
    assert_eq!(plain.code, ligature.code);
    assert_eq!(ligature.title, "file");
}

#[test]
fn test_meta_id_similar_titles_share_bits() {
    let a = meta_id("Die Unendliche Geschichte", "", 1).unwrap();
    let b = meta_id("Die Unendliche Geschichten", "", 1).unwrap();
    let c = meta_id("A completely different book title", "", 1).unwrap();

    let bits = |code: &str| u64::from_be_bytes(iscc::codec::decode(code).unwrap()[1..].try_into().unwrap());
    let near = (bits(&a.code) ^ bits(&b.code)).count_ones();
    let far = (bits(&a.code) ^ bits(&c.code)).count_ones();
    assert!(near < far, "near={near} far={far}");
}

#[test]
fn test_meta_id_trim_budget_is_configurable() {
    let mut config = IsccConfig::default();
    config.text.input_trim = 8;
    let iscc = Iscc::new(config).unwrap();
    let id = iscc.meta_id("abcdefghijkl", "mnopqrstuvwx", 1).unwrap();
    assert_eq!(id.title, "abcdefgh");
    assert_eq!(id.extra, "mnopqrst");
    assert_eq!(id.code, meta_id("abcdefgh", "mnopqrst", 1).unwrap().code);
}

#[test]
fn test_meta_id_version_check() {
    let err = meta_id("title", "", 3).unwrap_err();
    assert!(matches!(err, IsccError::UnsupportedVersion { version: 3 }));
    assert!(err.to_string().contains("version"));
}
