use httpmock::Method::GET;
use tsetmc_rs::{MarketWatch, WatchCursor};

use crate::common::{client_for, setup_server, tsev2_path};

#[tokio::test]
async fn traders_type_for_all_symbols() {
    let server = setup_server();
    let client = client_for(&server);

    let mock = server.mock(|when, then| {
        when.method(GET).path(tsev2_path("data/ClientTypeAll.aspx"));
        then.status(200)
            .body("111,10,2,1000,200,8,1,900,300;222,1,0,5,0,1,0,5,0;");
    });

    let watch = MarketWatch::new(&client);
    let rows = watch.traders_type().await.unwrap();
    mock.assert();

    assert_eq!(rows.len(), 2);
    assert_eq!(rows["111"].legal.buy.volume, 200);
    assert_eq!(rows["111"].real.sell.count, 8);
    assert_eq!(rows["222"].real.buy.volume, 5);
    assert_eq!(watch.cursor(), WatchCursor::default(), "stateless reads leave the cursor alone");
}

#[tokio::test]
async fn daily_history_for_all_symbols() {
    let server = setup_server();
    let client = client_for(&server);

    let mock = server.mock(|when, then| {
        when.method(GET).path(tsev2_path("data/ClosingPriceAll.aspx"));
        then.status(200).body(
            "111,0,100,101,5,50,5000,99,102,98,97;1,98,99,4,40,4000,97,100,96,95;\
             222,0,10,10,1,1,10,10,10,10,10;",
        );
    });

    let watch = MarketWatch::new(&client);
    let history = watch.daily_history().await.unwrap();
    mock.assert();

    assert_eq!(history["111"].len(), 2);
    assert_eq!(history["111"][0].close, 100);
    assert_eq!(history["111"][1].day, 1);
    assert_eq!(history["222"][0].open, 10);
    assert!(watch.snapshot().is_empty());
}
