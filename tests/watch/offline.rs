use httpmock::Method::GET;
use tsetmc_rs::{MarketWatch, WatchCursor};

use crate::common::{client_for, fixture, setup_server, tsev2_path};

#[tokio::test]
async fn replays_a_recorded_session() {
    let server = setup_server();
    let client = client_for(&server);

    let open = server.mock(|when, then| {
        when.method(GET)
            .path(tsev2_path("data/MarketWatchPlus.aspx"))
            .query_param("h", "0")
            .query_param("r", "0");
        then.status(200).body(fixture("watch_price", "0_0", "txt"));
    });
    let next = server.mock(|when, then| {
        when.method(GET)
            .path(tsev2_path("data/MarketWatchPlus.aspx"))
            .query_param("h", "122959")
            .query_param("r", "17");
        then.status(200).body(fixture("watch_price", "122959_17", "txt"));
    });

    let mut watch = MarketWatch::new(&client);
    let rows = watch.refresh_price_view().await.unwrap();
    open.assert();
    assert_eq!(rows.len(), 3);
    assert_eq!(watch.cursor(), WatchCursor { heven: 122959, refid: 17 });

    let fold = &rows["35425587644337450"];
    assert_eq!(fold.short_name, "FOLD");
    assert_eq!(fold.eps, Some(620));
    assert_eq!(fold.orderbook.buy_rows.len(), 2);
    assert_eq!(fold.orderbook.buy_rows[0].price, 5170);
    assert_eq!(rows["778253364357513"].eps, None);

    let rows = watch.refresh_price_view().await.unwrap();
    next.assert();
    assert_eq!(watch.cursor(), WatchCursor { heven: 123005, refid: 21 });

    let fold = &rows["35425587644337450"];
    assert_eq!(fold.last, 5160);
    assert_eq!(fold.count, 4302);
    // Static fields and untouched book levels survive the delta.
    assert_eq!(fold.isin, "IRO1FOLD0001");
    assert_eq!(fold.orderbook.buy_rows[0].price, 5160);
    assert_eq!(fold.orderbook.buy_rows[1].price, 5160);
    assert_eq!(fold.orderbook.sell_rows[1].volume, 300000);
    assert_eq!(rows["46348559193224090"].last, 6840);
}
