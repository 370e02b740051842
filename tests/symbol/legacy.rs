use chrono::NaiveTime;
use httpmock::Method::GET;
use tsetmc_rs::Symbol;

use crate::common::{client_for, setup_server, tsev2_path};

const ID: &str = "35425587644337450";

#[tokio::test]
async fn price_overview_from_instinfodata() {
    let server = setup_server();
    let client = client_for(&server);

    let mock = server.mock(|when, then| {
        when.method(GET)
            .path(tsev2_path("data/instinfodata.aspx"))
            .query_param("i", ID)
            .query_param("c", "27");
        then.status(200).body(
            "12:30:00,A ,1020,1010,1000,1000,1030,990,50,20000,20200000,0,20231021,122959;\
             0;4@300@1010@1000@200@5,;0;1000,200,0,900,300,10,2,0,8,1;222@7@6@0@1@2@3,",
        );
    });

    let overview = Symbol::new(&client, ID).price_overview().await.unwrap();
    mock.assert();

    assert_eq!(overview.price_data.close, 1010);
    assert_eq!(overview.orderbook.buy_rows[0].price, 1000);
    assert_eq!(overview.traders_type.legal.buy.value, Some(200 * 1010));
    assert_eq!(overview.group_data[0].symbol_id, "222");
}

#[tokio::test]
async fn intraday_chart_and_traders_history() {
    let server = setup_server();
    let client = client_for(&server);

    server.mock(|when, then| {
        when.method(GET)
            .path(tsev2_path("chart/data/IntraDayPrice.aspx"))
            .query_param("i", ID);
        then.status(200)
            .body("9:00,1030,1000,1005,1010,500;9:01,1040,1000,1005,1020,700;");
    });
    server.mock(|when, then| {
        when.method(GET)
            .path(tsev2_path("data/clienttype.aspx"))
            .query_param("i", ID);
        then.status(200).body(
            "20231021,10,2,8,1,1000,200,900,300,1000000,200000,900000,300000;\
             20231018,1,1,1,1,5,5,5,5,50,50,50,50",
        );
    });

    let symbol = Symbol::new(&client, ID);

    let chart = symbol.intraday_price_chart().await.unwrap();
    assert_eq!(chart.len(), 2);
    assert_eq!(chart[1].time, NaiveTime::from_hms_opt(9, 1, 0).unwrap());
    assert_eq!(chart[1].volume, 700);

    let history = symbol.traders_type_history().await.unwrap();
    assert_eq!(history.len(), 2);
    assert_eq!(history[0].real.buy.value, Some(1_000_000));
    assert_eq!(history[1].legal.sell.volume, 5);
}

#[tokio::test]
async fn notifications_from_codal_literal() {
    let server = setup_server();
    let client = client_for(&server);

    server.mock(|when, then| {
        when.method(GET)
            .path(tsev2_path("data/CodalTopNew.aspx"))
            .query_param("i", ID);
        then.status(200).body(
            "[[812345,'FOLD','Mobarakeh Steel','Interim financial statements','02/07/15 18:30','',0],\
             [812300,'FOLD','Mobarakeh Steel','Board meeting, invitation','02/07/01 09:05','',0]]",
        );
    });

    let rows = Symbol::new(&client, ID).notifications().await.unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].title, "Interim financial statements");
    assert_eq!(rows[1].title, "Board meeting, invitation");
    assert_eq!(rows[1].published, "02/07/01 09:05");
}

#[tokio::test]
async fn shareholder_details_chart_and_portfolio() {
    let server = setup_server();
    let client = client_for(&server);

    let mock = server.mock(|when, then| {
        when.method(GET)
            .path(tsev2_path("data/ShareHolder.aspx"))
            .query_param("i", "21552,IRO1FOLD0004");
        then.status(200).body(
            "20231021,1500000;20231022,1600000;\
             #35425587644337450,Mobarakeh Steel,1600000,12.5;778253364357513,Bank Mellat,9000,0.3",
        );
    });

    let details = Symbol::new(&client, ID)
        .shareholder_details("21552", "IRO1FOLD0004")
        .await
        .unwrap();
    mock.assert();

    assert_eq!(details.chart.len(), 2);
    assert_eq!(details.chart[0].count, 1_500_000);
    assert_eq!(details.portfolio.len(), 2);
    assert_eq!(details.portfolio[0].symbol_id, ID);
    assert!((details.portfolio[0].percentage - 12.5).abs() < 1e-9);
}
