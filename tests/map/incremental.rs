use httpmock::Method::GET;
use tsetmc_rs::{MapType, MarketMap, TsError};

use crate::common::{cdn_path, client_for, setup_server};

const FIRST: &str = r##"[
    {"insCode":"111","lVal18AFC":"AAA","lVal30":"Alpha Co","pClosing":1010.0,"pDrCotVal":1020,
     "qTotTran5J":20000,"qTotCap":20200000,"zTotTran":50,"lSecVal":"Metals","color":"#00ff00",
     "priceChangePercent":1.0,"percent":0.35,"hEven":100500},
    {"insCode":"222","pDrCotVal":7,"hEven":93000}
]"##;

const SECOND: &str = r##"[
    {"insCode":"111","pDrCotVal":1030,"priceChangePercent":3.0,"hEven":101000},
    {"insCode":"222","lVal18AFC":"BBB","lVal30":"Beta Co","lSecVal":"Banks","hEven":100900}
]"##;

#[tokio::test]
async fn map_deltas_fold_into_tiles() {
    let server = setup_server();
    let client = client_for(&server);

    let first = server.mock(|when, then| {
        when.method(GET)
            .path(cdn_path("ClosingPrice/GetMarketMap"))
            .query_param("typeSelected", "1")
            .query_param("hEven", "0")
            .query_param("size", "1360");
        then.status(200)
            .header("content-type", "application/json")
            .body(FIRST);
    });
    let second = server.mock(|when, then| {
        when.method(GET)
            .path(cdn_path("ClosingPrice/GetMarketMap"))
            .query_param("typeSelected", "1")
            .query_param("hEven", "100500");
        then.status(200)
            .header("content-type", "application/json")
            .body(SECOND);
    });

    let mut map = MarketMap::new(&client);
    let tiles = map.refresh_map_view(MapType::MarketValue).await.unwrap();
    first.assert();
    assert_eq!(map.cursor(), 100500);
    assert_eq!(map.last_mode(), Some(MapType::MarketValue));
    assert_eq!(tiles.keys().collect::<Vec<_>>(), vec!["111"]);
    assert_eq!(tiles["111"].close, 1010);
    assert_eq!(tiles["111"].group_name, "Metals");

    let tiles = map.refresh_map_view(MapType::MarketValue).await.unwrap();
    second.assert();
    assert_eq!(map.cursor(), 101000);

    let a = &tiles["111"];
    assert_eq!(a.symbol_short_name, "AAA");
    assert_eq!(a.last, 1030);
    assert_eq!(a.close, 1010);
    assert!((a.price_change_percent - 3.0).abs() < 1e-9);
    assert_eq!(a.color, "#00ff00");

    let b = &tiles["222"];
    assert_eq!(b.symbol_short_name, "BBB");
    assert_eq!(b.last, 7, "value from the earlier partial row is kept");
}

#[tokio::test]
async fn mode_switch_reuses_the_shared_cursor() {
    let server = setup_server();
    let client = client_for(&server);

    server.mock(|when, then| {
        when.method(GET)
            .path(cdn_path("ClosingPrice/GetMarketMap"))
            .query_param("typeSelected", "1")
            .query_param("hEven", "0");
        then.status(200).body(FIRST);
    });
    let volume = server.mock(|when, then| {
        when.method(GET)
            .path(cdn_path("ClosingPrice/GetMarketMap"))
            .query_param("typeSelected", "2")
            .query_param("hEven", "100500");
        then.status(200).body("[]");
    });

    let mut map = MarketMap::new(&client);
    map.refresh_map_view(MapType::MarketValue).await.unwrap();
    let tiles = map.refresh_map_view(MapType::MarketVolume).await.unwrap();
    volume.assert();

    assert_eq!(map.cursor(), 100500);
    assert_eq!(map.last_mode(), Some(MapType::MarketVolume));
    assert_eq!(tiles.len(), 1);

    map.reset();
    assert_eq!(map.cursor(), 0);
    assert_eq!(map.last_mode(), None);
}

#[tokio::test]
async fn forbidden_and_garbage_replies_keep_state() {
    let server = setup_server();
    let client = client_for(&server);

    server.mock(|when, then| {
        when.method(GET)
            .path(cdn_path("ClosingPrice/GetMarketMap"))
            .query_param("typeSelected", "1");
        then.status(403);
    });
    server.mock(|when, then| {
        when.method(GET)
            .path(cdn_path("ClosingPrice/GetMarketMap"))
            .query_param("typeSelected", "2");
        then.status(200).body("<html>busy</html>");
    });

    let mut map = MarketMap::new(&client);

    let err = map.refresh_map_view(MapType::MarketValue).await.unwrap_err();
    assert!(matches!(err, TsError::Status { status: 403, .. }), "got {err:?}");

    let err = map.refresh_map_view(MapType::MarketVolume).await.unwrap_err();
    assert!(err.is_decode(), "got {err:?}");

    assert_eq!(map.cursor(), 0);
    assert!(map.snapshot().is_empty());
    assert_eq!(map.last_mode(), None);
}
