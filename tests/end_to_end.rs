//! End-to-end tests through the `scout` facade
//!
//! Exercises a realistic session: build a server, index a small corpus,
//! query it in both modes, page the results, track empty requests, mutate
//! and query again.

use scout::{
    paginate, process_queries_joined, DocumentStatus, Error, ExecutionMode,
    RequestQueue, SearchConfig, SearchServer, ShardedMap,
};

fn corpus_server() -> SearchServer {
    let config = SearchConfig::new()
        .with_stop_words(["and", "with", "in"])
        .with_max_parallel_tasks(4);
    let mut server = SearchServer::with_config(config).unwrap();
    let corpus: [(&str, DocumentStatus, &[i32]); 6] = [
        ("white cat and fashionable collar", DocumentStatus::Actual, &[8, -3]),
        ("fluffy cat fluffy tail", DocumentStatus::Actual, &[7, 2, 7]),
        ("groomed dog expressive eyes", DocumentStatus::Actual, &[5, -12, 2, 1]),
        ("groomed starling eugene", DocumentStatus::Banned, &[9]),
        ("nasty rat with curly tail", DocumentStatus::Actual, &[]),
        ("fluffy dog in a white collar", DocumentStatus::Irrelevant, &[1, 1]),
    ];
    for (id, (text, status, ratings)) in corpus.iter().enumerate() {
        server.add_document(id as i32, text, *status, ratings).unwrap();
    }
    server
}

#[test]
fn test_session_end_to_end() {
    let mut server = corpus_server();
    assert_eq!(server.document_count(), 6);

    let seq = server
        .find_top_documents(ExecutionMode::Sequential, "fluffy groomed cat")
        .unwrap();
    let par = server
        .find_top_documents(ExecutionMode::Parallel, "fluffy groomed cat")
        .unwrap();
    let ids: Vec<i32> = seq.iter().map(|d| d.id).collect();
    assert_eq!(ids, par.iter().map(|d| d.id).collect::<Vec<_>>());
    // Equal relevance for 0 and 2, higher rating first
    assert_eq!(ids, vec![1, 0, 2]);

    // Minus term drops the fluffy cat
    let docs = server
        .find_top_documents(ExecutionMode::Parallel, "fluffy groomed cat -tail")
        .unwrap();
    assert_eq!(docs.iter().map(|d| d.id).collect::<Vec<_>>(), vec![0, 2]);

    let banned = server
        .find_top_documents_by_status(ExecutionMode::Sequential, "groomed", DocumentStatus::Banned)
        .unwrap();
    assert_eq!(banned.len(), 1);
    assert_eq!(banned[0].id, 3);

    server.remove_document(1);
    let docs = server
        .find_top_documents(ExecutionMode::Parallel, "fluffy tail")
        .unwrap();
    assert_eq!(docs.iter().map(|d| d.id).collect::<Vec<_>>(), vec![4]);
}

#[test]
fn test_helpers_through_facade() {
    let server = corpus_server();

    let joined = process_queries_joined(&server, &["cat", "dog", "parrot"]).unwrap();
    assert_eq!(joined.len(), 3);

    let pages = paginate(&joined, 2);
    assert_eq!(pages.len(), 2);
    let rendered = pages.page(1).unwrap().to_string();
    assert!(rendered.starts_with("{ document_id = 2,"));

    let mut queue = RequestQueue::new(&server).with_mode(ExecutionMode::Parallel);
    queue.add_find_request("parrot").unwrap();
    queue.add_find_request("collar").unwrap();
    assert_eq!(queue.no_result_requests(), 1);
}

#[test]
fn test_errors_through_facade() {
    let mut server = corpus_server();
    assert_eq!(
        server.add_document(-1, "cat", DocumentStatus::Actual, &[1]),
        Err(Error::InvalidId(-1))
    );
    assert!(matches!(
        server.match_document(ExecutionMode::Sequential, "--cat", 0),
        Err(Error::MalformedQuery(_))
    ));
    assert_eq!(
        server
            .match_document(ExecutionMode::Parallel, "cat", 99)
            .unwrap_err(),
        Error::UnknownDocument(99)
    );
}

#[test]
fn test_sharded_map_reexported() {
    let map: ShardedMap<i32, f64> = ShardedMap::new(3);
    *map.access(1) += 0.5;
    *map.access(1) += 0.25;
    let merged = map.snapshot_merge();
    assert_eq!(merged.get(&1), Some(&0.75));
}
