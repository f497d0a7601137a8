use serde_json::json;
use t212_client::presentation::account::{Cash, Dividend, Paginated, Portfolio, Position};
use t212_client::presentation::instrument::{Exchange, Instrument, InstrumentType};
use t212_client::presentation::order::{Order, OrderStatus, OrderType, TimeValidity};
use t212_client::presentation::pie::{DividendCashAction, Pie, PieSummary};

#[test]
fn cash_deserializes_from_wire_format() {
    let body = json!({
        "free": 102.33,
        "total": 1502.1,
        "invested": 1380.0,
        "result": 19.77,
        "ppl": -12.64,
        "pieCash": 20.0,
        "blocked": null
    });

    let cash: Cash = serde_json::from_value(body).unwrap();
    assert_eq!(cash.free, 102.33);
    assert_eq!(cash.pie_cash, 20.0);
    assert_eq!(cash.blocked, None);
}

#[test]
fn position_deserializes_with_optional_fields_missing() {
    let body = json!({
        "ticker": "RRl_EQ",
        "quantity": 25.0,
        "averagePrice": 211.4,
        "currentPrice": 498.0,
        "ppl": 71.65
    });

    let position: Position = serde_json::from_value(body).unwrap();
    assert_eq!(position.ticker, "RRl_EQ");
    assert_eq!(position.fx_ppl, None);
    assert_eq!(position.frontend, None);
}

#[test]
fn portfolio_display_renders_a_table() {
    let positions = vec![
        Position {
            ticker: "MSFT_US_EQ".to_string(),
            quantity: 1.0,
            average_price: 300.0,
            current_price: 310.0,
            ppl: 10.0,
            fx_ppl: None,
            pie_quantity: None,
            initial_fill_date: None,
            frontend: None,
            max_buy: None,
            max_sell: None,
        },
        Position {
            ticker: "AAPL_US_EQ".to_string(),
            quantity: 2.5,
            average_price: 150.0,
            current_price: 180.0,
            ppl: 75.0,
            fx_ppl: None,
            pie_quantity: None,
            initial_fill_date: None,
            frontend: None,
            max_buy: None,
            max_sell: None,
        },
    ];

    let rendered = Portfolio::from(positions).to_string();
    assert!(rendered.contains("AAPL_US_EQ"));
    assert!(rendered.contains("MSFT_US_EQ"));
    // Sorted by ticker, so AAPL comes first
    assert!(rendered.find("AAPL_US_EQ").unwrap() < rendered.find("MSFT_US_EQ").unwrap());
}

#[test]
fn order_deserializes_from_wire_format() {
    let body = json!({
        "id": 172347221,
        "ticker": "AAPL_US_EQ",
        "quantity": 0.5,
        "type": "LIMIT",
        "status": "NEW",
        "limitPrice": 180.0,
        "timeValidity": "GOOD_TILL_CANCEL",
        "creationTime": "2025-11-18T10:34:16.000+02:00",
        "filledQuantity": 0.0,
        "filledValue": 0.0
    });

    let order: Order = serde_json::from_value(body).unwrap();
    assert_eq!(order.id, 172347221);
    assert_eq!(order.order_type, OrderType::Limit);
    assert_eq!(order.status, OrderStatus::New);
    assert_eq!(order.time_validity, Some(TimeValidity::GoodTillCancel));
    assert_eq!(order.stop_price, None);
}

#[test]
fn order_status_covers_partial_fills() {
    let status: OrderStatus = serde_json::from_value(json!("PARTIALLY_FILLED")).unwrap();
    assert_eq!(status, OrderStatus::PartiallyFilled);
    assert_eq!(
        serde_json::to_value(OrderStatus::PartiallyFilled).unwrap(),
        json!("PARTIALLY_FILLED")
    );
}

#[test]
fn instrument_type_uses_uppercase_wire_names() {
    let instrument: Instrument = serde_json::from_value(json!({
        "ticker": "VUSA_EQ",
        "name": "Vanguard S&P 500 UCITS ETF",
        "currencyCode": "GBX",
        "type": "ETF"
    }))
    .unwrap();
    assert_eq!(instrument.instrument_type, InstrumentType::Etf);
    assert_eq!(instrument.currency_code, "GBX");
}

#[test]
fn exchange_deserializes_with_schedules() {
    let body = json!([{
        "id": 108,
        "name": "London Stock Exchange",
        "workingSchedules": [{
            "id": 53,
            "timeEvents": [
                {"date": "2025-11-17T08:00:00Z", "type": "OPEN"},
                {"date": "2025-11-17T16:30:00Z", "type": "CLOSE"}
            ]
        }]
    }]);

    let exchanges: Vec<Exchange> = serde_json::from_value(body).unwrap();
    assert_eq!(exchanges.len(), 1);
    assert_eq!(exchanges[0].working_schedules[0].time_events.len(), 2);
}

#[test]
fn dividends_arrive_in_a_paginated_envelope() {
    let body = json!({
        "items": [{
            "ticker": "AAPL_US_EQ",
            "reference": "0dd9d9bc",
            "quantity": 2.5,
            "amount": 0.55,
            "grossAmountPerShare": 0.24,
            "paidOn": "2025-08-14T00:00:00Z",
            "type": "ORDINARY"
        }],
        "nextPagePath": null
    });

    let page: Paginated<Dividend> = serde_json::from_value(body).unwrap();
    assert_eq!(page.items.len(), 1);
    assert_eq!(page.items[0].amount, 0.55);
    assert!(page.next_page_path.is_none());
}

#[test]
fn pie_models_deserialize_from_wire_format() {
    let summary: Vec<PieSummary> = serde_json::from_value(json!([{
        "id": 9912,
        "cash": 1.52,
        "dividendDetails": {"gained": 0.93, "reinvested": 0.93, "inCash": 0.0},
        "progress": 0.43,
        "result": {"priceAvgValue": 430.0, "priceAvgResult": 12.0},
        "status": "AHEAD"
    }]))
    .unwrap();
    assert_eq!(summary[0].id, 9912);
    assert_eq!(summary[0].dividend_details.as_ref().unwrap().gained, Some(0.93));

    let pie: Pie = serde_json::from_value(json!({
        "instruments": [{
            "ticker": "AAPL_US_EQ",
            "expectedShare": 0.6,
            "currentShare": 0.58,
            "ownedQuantity": 1.2,
            "issues": []
        }],
        "settings": {
            "id": 9912,
            "name": "Tech",
            "dividendCashAction": "REINVEST",
            "endDate": null,
            "goal": 5000.0
        }
    }))
    .unwrap();
    assert_eq!(pie.settings.name, "Tech");
    assert_eq!(
        pie.settings.dividend_cash_action,
        DividendCashAction::Reinvest
    );
    assert_eq!(pie.instruments[0].expected_share, Some(0.6));
}
