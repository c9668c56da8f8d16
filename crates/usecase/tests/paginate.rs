// crates/usecase/tests/paginate.rs
use std::{
    io,
    sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    },
    thread,
};

use page_range_domain::{PageRequest, PaginatorConfig};
use page_range_ports::InMemoryListing;
use page_range_shared_kernel::{DomainError, PaginateError};
use page_range_usecase::Paginator;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn numbered(count: u32) -> InMemoryListing<u32> {
    (1..=count).collect()
}

fn listing_paginator(count: u32, per_page: usize, in_range: usize) -> Paginator<u32, std::convert::Infallible> {
    let listing = numbered(count);
    let config = PaginatorConfig::new(per_page, in_range).unwrap();
    Paginator::with_providers(config, listing.clone(), listing)
}

#[test]
fn first_of_ten_pages() {
    init_logging();
    let page = listing_paginator(100, 10, 5).paginate(1).unwrap();

    assert_eq!(page.total_pages, 10);
    assert_eq!(page.current_page, 1);
    assert_eq!(page.pages, vec![1, 2, 3, 4, 5]);
    assert_eq!(page.previous_page, None);
    assert_eq!(page.next_page, Some(2));
    assert_eq!(page.items, (1..=10).collect::<Vec<_>>());
    assert_eq!(page.first_page_in_range, 1);
    assert_eq!(page.last_page_in_range, 5);
}

#[test]
fn last_of_ten_pages() {
    init_logging();
    let page = listing_paginator(100, 10, 5).paginate(10).unwrap();

    assert_eq!(page.pages, vec![6, 7, 8, 9, 10]);
    assert_eq!(page.next_page, None);
    assert_eq!(page.previous_page, Some(9));
    assert_eq!(page.items, (91..=100).collect::<Vec<_>>());
}

#[test]
fn empty_listing_yields_single_empty_page() {
    init_logging();
    let page = listing_paginator(0, 10, 5).paginate(4).unwrap();

    assert_eq!(page.total_pages, 1);
    assert_eq!(page.current_page, 1);
    assert_eq!(page.pages, vec![1]);
    assert!(page.items.is_empty());
    assert!(page.is_first_page() && page.is_last_page());
}

#[test]
fn partial_last_page() {
    let page = listing_paginator(23, 10, 5).paginate(3).unwrap();
    assert_eq!(page.items, vec![21, 22, 23]);
    assert_eq!(page.pages, vec![1, 2, 3]);
    assert_eq!(page.total_items, 23);
}

#[test]
fn non_positive_page_calls_no_provider() {
    let calls = Arc::new(AtomicUsize::new(0));
    let count_calls = Arc::clone(&calls);
    let slice_calls = Arc::clone(&calls);

    let paginator = Paginator::with_providers(
        PaginatorConfig::default(),
        move || {
            count_calls.fetch_add(1, Ordering::SeqCst);
            Ok::<u64, io::Error>(50)
        },
        move |_offset: usize, _limit: usize| {
            slice_calls.fetch_add(1, Ordering::SeqCst);
            Ok::<Vec<u8>, io::Error>(vec![])
        },
    );

    for page in [0, -1, i64::MIN] {
        let err = paginator.paginate(page).unwrap_err();
        assert!(err.is_invalid_page());
        assert_eq!(err.domain_error(), Some(&DomainError::InvalidPage { page }));
    }
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[test]
fn counter_failure_is_returned_unchanged() {
    let sliced = Arc::new(AtomicUsize::new(0));
    let sliced_in_provider = Arc::clone(&sliced);
    let paginator = Paginator::with_providers(
        PaginatorConfig::default(),
        || Err::<u64, _>(io::Error::new(io::ErrorKind::ConnectionRefused, "count query failed")),
        move |_: usize, _: usize| {
            sliced_in_provider.fetch_add(1, Ordering::SeqCst);
            Ok::<Vec<String>, io::Error>(vec![])
        },
    );

    let err = paginator.paginate(1).unwrap_err();
    assert_eq!(err.to_string(), "count query failed");
    let inner = err.into_provider_error().expect("provider error");
    assert_eq!(inner.kind(), io::ErrorKind::ConnectionRefused);
    assert_eq!(sliced.load(Ordering::SeqCst), 0);
}

#[test]
fn slicer_failure_is_returned_unchanged() {
    #[derive(Debug, PartialEq)]
    struct Timeout {
        offset: usize,
    }

    let paginator = Paginator::with_providers(
        PaginatorConfig::new(5, 3).unwrap(),
        || Ok::<u64, Timeout>(12),
        |offset: usize, _limit: usize| Err::<Vec<char>, _>(Timeout { offset }),
    );

    match paginator.paginate(3) {
        Err(PaginateError::Provider(err)) => assert_eq!(err, Timeout { offset: 10 }),
        other => panic!("expected provider error, got {other:?}"),
    }
}

#[test]
fn request_parsed_from_query_value() {
    let paginator = listing_paginator(60, 10, 3);
    let request: PageRequest = PageRequest::parse(Some("4")).unwrap();
    let page = paginator.paginate_request(request).unwrap();

    assert_eq!(page.current_page, 4);
    assert_eq!(page.pages, vec![3, 4, 5]);
    assert_eq!(page.items.first(), Some(&31));
}

#[test]
fn paginator_is_shared_across_threads() {
    let paginator = listing_paginator(250, 25, 5);

    let handles: Vec<_> = (1..=10)
        .map(|page| {
            let paginator = paginator.clone();
            thread::spawn(move || paginator.paginate(page).map(|p| p.items[0]))
        })
        .collect();

    for (index, handle) in handles.into_iter().enumerate() {
        let first_item = handle.join().unwrap().unwrap();
        assert_eq!(first_item, (index as u32) * 25 + 1);
    }
}
