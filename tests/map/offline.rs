use httpmock::Method::GET;
use tsetmc_rs::{MapType, MarketMap};

use crate::common::{cdn_path, client_for, fixture, setup_server};

#[tokio::test]
async fn recorded_map_reply_yields_identified_tiles_only() {
    let server = setup_server();
    let client = client_for(&server);

    let mock = server.mock(|when, then| {
        when.method(GET)
            .path(cdn_path("ClosingPrice/GetMarketMap"))
            .query_param("typeSelected", "1")
            .query_param("hEven", "0");
        then.status(200)
            .header("content-type", "application/json")
            .body(fixture("market_map", "1_0", "json"));
    });

    let mut map = MarketMap::new(&client);
    let tiles = map.refresh_map_view(MapType::MarketValue).await.unwrap();
    mock.assert();

    assert_eq!(map.cursor(), 122959);
    assert_eq!(tiles.len(), 2);
    assert!(!tiles.contains_key("46348559193224090"));
    assert_eq!(tiles["778253364357513"].group_name, "Banks");
    assert_eq!(tiles["35425587644337450"].last, 5170);
}
