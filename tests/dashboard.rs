mod common;

use httpmock::Method::GET;
use httpmock::MockServer;
use kabuboard::Dashboard;

#[tokio::test]
async fn refresh_populates_all_three_views() {
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(GET).path("/data.json");
        then.status(200)
            .header("content-type", "application/json")
            .body(common::payload(&[
                common::record("A", 0.8),
                common::record("B", -0.9),
                common::record("C", 0.05),
            ]));
    });

    let mut board = Dashboard::new(common::client_for(&server));
    board.refresh().await.unwrap();

    let stats = board.statistics();
    assert_eq!(stats.total, 3);
    assert_eq!(stats.buy, 1);
    assert_eq!(stats.hold, 1);
    assert_eq!(stats.sell, 1);

    let list = board.shortlist();
    assert_eq!(list.featured.len(), 1);
    assert_eq!(list.featured[0].name, "A");
    assert!(list.other.is_empty());

    assert_eq!(board.table().len(), 3);
    assert_eq!(board.error_banner(), None);
    assert!(!board.is_loading());
}

#[tokio::test]
async fn failed_refresh_raises_the_banner_and_keeps_records_empty() {
    let server = MockServer::start();

    let mock = server.mock(|when, then| {
        when.method(GET).path("/data.json");
        then.status(500).body("oops");
    });

    let mut board = Dashboard::new(common::client_for(&server));
    let err = board.refresh().await.unwrap_err();
    mock.assert();

    assert_eq!(err.user_message(), "サーバーでエラーが発生しました。");
    assert_eq!(board.error_banner(), Some("サーバーでエラーが発生しました。"));
    assert!(board.records().is_empty());
    assert_eq!(board.statistics().total, 0);
    assert!(!board.is_loading());
}

#[tokio::test]
async fn failed_refresh_keeps_the_previous_record_list() {
    let server = MockServer::start();

    let mut ok = server.mock(|when, then| {
        when.method(GET).path("/data.json");
        then.status(200)
            .header("content-type", "application/json")
            .body(common::payload(&[common::record("A", 0.8)]));
    });

    let mut board = Dashboard::new(common::client_for(&server));
    board.refresh().await.unwrap();
    assert_eq!(board.records().len(), 1);

    ok.delete();
    server.mock(|when, then| {
        when.method(GET).path("/data.json");
        then.status(503).body("maintenance");
    });

    board.refresh().await.unwrap_err();
    assert_eq!(board.records().len(), 1, "prior list survives a failed fetch");
    assert!(board.error_banner().is_some());
}

#[tokio::test]
async fn successful_refresh_replaces_records_and_clears_the_banner() {
    let server = MockServer::start();

    let mut failing = server.mock(|when, then| {
        when.method(GET).path("/data.json");
        then.status(502).body("bad gateway");
    });

    let mut board = Dashboard::new(common::client_for(&server));
    board.refresh().await.unwrap_err();
    assert!(board.error_banner().is_some());

    failing.delete();
    server.mock(|when, then| {
        when.method(GET).path("/data.json");
        then.status(200)
            .header("content-type", "application/json")
            .body(common::payload(&[
                common::record("X", 0.4),
                common::record("Y", 0.3),
            ]));
    });

    board.refresh().await.unwrap();
    assert_eq!(board.records().len(), 2);
    assert_eq!(board.error_banner(), None);
}

#[tokio::test]
async fn detail_addresses_records_in_feed_order() {
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(GET).path("/data.json");
        then.status(200)
            .header("content-type", "application/json")
            .body(common::payload(&[
                common::record("A", 0.8),
                common::record("B", -0.9),
            ]));
    });

    let mut board = Dashboard::new(common::client_for(&server));
    board.refresh().await.unwrap();

    let detail = board.detail(1).unwrap();
    assert_eq!(detail.name, "B");
    assert_eq!(detail.recommendation, "強い売り推奨 (-0.90)");
    assert_eq!(detail.reason, "推奨理由の情報はありません。");

    assert!(board.detail(2).is_none());
}
