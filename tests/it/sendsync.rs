use std::collections::HashSet;

use crossbeam_utils::thread::scope;

use super::*;

fn assert_send<T: Send>() {}
fn assert_sync<T: Sync>() {}

#[test]
fn markup_types_are_send_and_sync() {
    assert_send::<RawMarkup>();
    assert_sync::<RawMarkup>();
    assert_send::<Markup>();
    assert_sync::<Markup>();
    assert_send::<Document>();
    assert_sync::<Block>();
    assert_sync::<Inline>();
    assert_sync::<IdAllocator>();
}

#[test]
#[cfg_attr(miri, ignore)]
fn concurrent_identities_are_distinct() {
    const THREADS: usize = 8;
    const PER_THREAD: usize = 1000;

    let ids = IdAllocator::new();
    let issued: Vec<Vec<MarkupId>> = scope(|s| {
        let handles: Vec<_> = (0..THREADS)
            .map(|_| s.spawn(|_| (0..PER_THREAD).map(|_| ids.next()).collect::<Vec<_>>()))
            .collect();
        handles.into_iter().map(|handle| handle.join().unwrap()).collect()
    })
    .unwrap();

    for sequence in &issued {
        assert!(sequence.windows(2).all(|pair| pair[0] < pair[1]));
    }
    let distinct: HashSet<_> = issued.iter().flatten().copied().collect();
    assert_eq!(distinct.len(), THREADS * PER_THREAD);
    assert_eq!(ids.issued(), (THREADS * PER_THREAD) as u64);
    assert!(distinct.iter().all(|id| id.allocator() == ids.namespace()));
}

#[test]
#[cfg_attr(miri, ignore)]
fn editing_one_version_from_many_threads() {
    let paragraphs = (0..8).map(|i| Paragraph::new([Text::new(format!("paragraph {}", i))]));
    let document = Document::new(paragraphs);
    let before = document.debug_description(DumpOptions::everything());

    let versions: Vec<Document> = scope(|s| {
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let document = &document;
                s.spawn(move |_| {
                    let mut text = text_at(document, &[i, 0]);
                    text.set_string(format!("edited by thread {}", i));
                    Document::from_markup(text.root())
                })
            })
            .collect();
        handles.into_iter().map(|handle| handle.join().unwrap()).collect()
    })
    .unwrap();

    assert_eq!(document.debug_description(DumpOptions::everything()), before);
    let roots: HashSet<_> = versions.iter().map(|version| version.id()).collect();
    assert_eq!(roots.len(), versions.len());
    for (i, version) in versions.iter().enumerate() {
        assert_eq!(text_at(version, &[i, 0]).string(), format!("edited by thread {}", i));
        for j in (0..8).filter(|&j| j != i) {
            let shared = version.as_markup().child(j).unwrap();
            assert!(shared.raw().ptr_eq(document.as_markup().child(j).unwrap().raw()));
        }
    }
}

#[test]
#[cfg_attr(miri, ignore)]
fn reading_shared_trees() {
    let document = two_paragraphs();
    let dumps: Vec<String> = scope(|s| {
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let document = document.clone();
                s.spawn(move |_| document.debug_description(DumpOptions::default()))
            })
            .collect();
        handles.into_iter().map(|handle| handle.join().unwrap()).collect()
    })
    .unwrap();
    let expected = document.debug_description(DumpOptions::default());
    assert!(dumps.iter().all(|dump| *dump == expected));
}
