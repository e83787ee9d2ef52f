use iscc::{content_id_text, instance_id, meta_id, Iscc, IsccConfig};
use std::sync::Arc;
use std::thread;

#[test]
fn test_default_generator_is_shared_across_threads() {
    let expected = content_id_text("the same words in every thread of the pool", false).unwrap();
    let handles: Vec<_> = (0..8)
        .map(|_| {
            thread::spawn(|| {
                (
                    content_id_text("the same words in every thread of the pool", false).unwrap(),
                    meta_id("ISCC Content Identifiers", "", 1).unwrap().code,
                )
            })
        })
        .collect();
    for handle in handles {
        let (text, meta) = handle.join().unwrap();
        assert_eq!(text, expected);
        assert_eq!(meta, crate::common::test_data::META_ISCC);
    }
}

#[test]
fn test_custom_generator_behind_arc() {
    let mut config = IsccConfig::default();
    config.instance.chunk_size = 1024;
    let iscc = Arc::new(Iscc::new(config).unwrap());
    let data: Arc<Vec<u8>> = Arc::new((0..10_000u32).map(|i| (i % 251) as u8).collect());

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let iscc = Arc::clone(&iscc);
            let data = Arc::clone(&data);
            thread::spawn(move || iscc.instance_id(&data[..]).unwrap())
        })
        .collect();
    let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert!(results.windows(2).all(|w| w[0] == w[1]));
    // a different chunk size gives a different tree
    assert_ne!(results[0], instance_id(&data[..]).unwrap());
}
