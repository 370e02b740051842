use chrono::{NaiveDate, NaiveTime};
use httpmock::Method::GET;
use tsetmc_rs::Symbol;

use crate::common::{cdn_path, client_for, setup_server};

const ID: &str = "35425587644337450";

const INFO: &str = r#"{"instrumentInfo":{
    "dEven":20231021,"insCode":"35425587644337450","instrumentID":"IRO1FOLD0001",
    "lVal18AFC":"FOLD","lVal30":"Mobarakeh Steel",
    "eps":{"estimatedEPS":620,"sectorPE":7.5},
    "sector":{"cSecVal":"27 ","lSecVal":"Basic metals"},
    "staticThreshold":{"psGelStaMin":5120.0,"psGelStaMax":5650.0},
    "minWeek":5200,"maxWeek":5500,"minYear":4000,"maxYear":7000,
    "qTotTran5JAvg":80000000,"contractSize":0,"nav":0,"flow":1,
    "flowTitle":"Exchange","zTitad":800000000000,"baseVol":20000000}}"#;

const RELATED: &str = r#"{"relatedCompany":[
    {"instrument":{"insCode":"35425587644337450","lVal18AFC":"FOLD","lVal30":"Mobarakeh Steel "},
     "priceChange":20.0,"priceMin":5080.0,"priceMax":5200.0,"priceYesterday":5130.0,"priceFirst":5130.0,
     "pClosing":5150.0,"pDrCotVal":5170.0,"zTotTran":4210,"qTotTran5J":91500000,"qTotCap":471225000000.0},
    {"instrument":{"insCode":46348559193224090,"lVal18AFC":"FKHZ","lVal30":"Foolad Khuzestan"},
     "priceChange":-10,"priceMin":6750,"priceMax":6900,"priceYesterday":6825,"priceFirst":6800,
     "pClosing":6815,"pDrCotVal":6840,"zTotTran":980,"qTotTran5J":9000000,"qTotCap":61335000000}],
    "relatedCompanyThirtyDayHistory":[]}"#;

#[tokio::test]
async fn related_companies_resolve_group_through_info() {
    let server = setup_server();
    let client = client_for(&server);

    let info = server.mock(|when, then| {
        when.method(GET).path(cdn_path(&format!("Instrument/GetInstrumentInfo/{ID}")));
        then.status(200).header("content-type", "application/json").body(INFO);
    });
    let related = server.mock(|when, then| {
        when.method(GET).path(cdn_path("ClosingPrice/GetRelatedCompany/27"));
        then.status(200).header("content-type", "application/json").body(RELATED);
    });

    let symbol = Symbol::new(&client, ID);
    let rows = symbol.related_companies(None).await.unwrap();
    info.assert();
    related.assert();

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].long_name, "Mobarakeh Steel");
    assert_eq!(rows[0].change, 20);
    assert_eq!(rows[0].value, 471_225_000_000);
    assert_eq!(rows[1].symbol_id, "46348559193224090");
    assert_eq!(rows[1].last, 6840);

    // An explicit group code skips the info lookup.
    let rows = symbol.related_companies(Some("27")).await.unwrap();
    assert_eq!(rows.len(), 2);
    info.assert_calls(1);
    related.assert_calls(2);
}

#[tokio::test]
async fn intraday_trades_in_execution_order() {
    let server = setup_server();
    let client = client_for(&server);

    server.mock(|when, then| {
        when.method(GET).path(cdn_path(&format!("Trade/GetTrade/{ID}")));
        then.status(200).body(
            r#"{"trade":[
                {"insCode":null,"dEven":0,"nTran":1,"hEven":90012,"qTitTran":1000,"pTran":5170.0,"canceled":0},
                {"insCode":null,"dEven":0,"nTran":2,"hEven":90105,"qTitTran":250,"pTran":5160.0,"canceled":1}]}"#,
        );
    });

    let trades = Symbol::new(&client, ID).intraday_trades().await.unwrap();
    assert_eq!(trades.len(), 2);
    assert_eq!(trades[0].time, NaiveTime::from_hms_opt(9, 0, 12).unwrap());
    assert_eq!(trades[0].price, 5170);
    assert!(!trades[0].canceled);
    assert_eq!(trades[1].number, 2);
    assert!(trades[1].canceled);
}

#[tokio::test]
async fn option_data_by_isin() {
    let server = setup_server();
    let client = client_for(&server);

    let info = server.mock(|when, then| {
        when.method(GET).path(cdn_path(&format!("Instrument/GetInstrumentInfo/{ID}")));
        then.status(200).body(INFO);
    });
    let option = server.mock(|when, then| {
        when.method(GET)
            .path(cdn_path("Instrument/GetInstrumentOptionByInstrumentID/IRO1FOLD0001"));
        then.status(200).body(
            r#"{"instrumentOption":{"insCode":"111","uaInsCode":35425587644337450,
                "buyOP":120,"sellOP":80,"cSize":1000,"strikePrice":6000,
                "beginDate":20230722,"endDate":20231122,
                "aFactor":0.2,"bFactor":"1.0","cFactor":1}}"#,
        );
    });
    server.mock(|when, then| {
        when.method(GET)
            .path(cdn_path("Instrument/GetInstrumentOptionByInstrumentID/IRO1NOPT0001"));
        then.status(200).body(r#"{"instrumentOption":null}"#);
    });

    let symbol = Symbol::new(&client, ID);
    let data = symbol.option_data(None).await.unwrap();
    info.assert();
    option.assert();

    assert_eq!(data.isin, "IRO1FOLD0001");
    assert_eq!(data.base_symbol_id, "35425587644337450");
    assert_eq!(data.strike_price, 6000);
    assert_eq!(data.end_date, NaiveDate::from_ymd_opt(2023, 11, 22).unwrap());
    assert!((data.b_factor - 1.0).abs() < 1e-9);

    let err = symbol.option_data(Some("IRO1NOPT0001")).await.unwrap_err();
    assert!(err.is_decode(), "expected decode error, got {err:?}");
}
