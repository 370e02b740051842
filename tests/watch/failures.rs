use httpmock::Method::GET;
use tsetmc_rs::{MarketWatch, TsError, WatchCursor};

use crate::common::{client_for, setup_server, tsev2_path};
use crate::watch_incremental::first_body;

#[tokio::test]
async fn failed_refresh_leaves_cursor_and_snapshot_untouched() {
    let server = setup_server();
    let client = client_for(&server);

    server.mock(|when, then| {
        when.method(GET)
            .path(tsev2_path("data/MarketWatchPlus.aspx"))
            .query_param("h", "0");
        then.status(200).body(first_body());
    });
    let mut failing = server.mock(|when, then| {
        when.method(GET)
            .path(tsev2_path("data/MarketWatchPlus.aspx"))
            .query_param("h", "100500")
            .query_param("r", "5");
        then.status(500).body("oops");
    });

    let mut watch = MarketWatch::new(&client);
    watch.refresh_price_view().await.unwrap();
    let cursor_before = watch.cursor();
    let snapshot_before = watch.snapshot().clone();

    let err = watch.refresh_price_view().await.unwrap_err();
    failing.assert();
    match &err {
        TsError::Status { status, url } => {
            assert_eq!(*status, 500);
            assert!(url.contains("MarketWatchPlus.aspx"));
        }
        other => panic!("expected Status error, got {other:?}"),
    }
    assert!(err.is_transport());
    assert_eq!(watch.cursor(), cursor_before);
    assert_eq!(watch.snapshot(), &snapshot_before);

    // The retry presents the same cursor.
    failing.delete();
    let retry = server.mock(|when, then| {
        when.method(GET)
            .path(tsev2_path("data/MarketWatchPlus.aspx"))
            .query_param("h", "100500")
            .query_param("r", "5");
        then.status(200).body("0@0@@@6");
    });
    let rows = watch.refresh_price_view().await.unwrap();
    retry.assert();
    assert_eq!(rows.len(), 1);
    assert_eq!(watch.cursor(), WatchCursor { heven: 100500, refid: 6 });
}

#[tokio::test]
async fn undecodable_reply_is_a_decode_error_without_state_change() {
    let server = setup_server();
    let client = client_for(&server);

    server.mock(|when, then| {
        when.method(GET).path(tsev2_path("data/MarketWatchPlus.aspx"));
        then.status(200).body("0@0@111,not-a-number,1,2,3,4,5,6,7,8@@1");
    });

    let mut watch = MarketWatch::new(&client);
    let err = watch.refresh_price_view().await.unwrap_err();
    assert!(err.is_decode(), "got {err:?}");
    assert_eq!(watch.cursor(), WatchCursor::default());
    assert!(watch.snapshot().is_empty());
}
