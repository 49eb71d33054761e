//! Unit tests for types module

use tidewatch::types::*;

#[test]
fn test_trend_serialization() {
    assert_eq!(
        serde_json::to_string(&Trend::BullishCrossover).unwrap(),
        "\"bullish_crossover\""
    );
    let parsed: Trend = serde_json::from_str("\"uptrend\"").unwrap();
    assert_eq!(parsed, Trend::Uptrend);
}

#[test]
fn test_trend_display() {
    assert_eq!(format!("{}", Trend::Uptrend), "Uptrend");
    assert_eq!(format!("{}", Trend::BearishCrossover), "Bearish Crossover");
    assert_eq!(format!("{}", Trend::Unknown), "Unknown");
}

#[test]
fn test_alert_direction_from_str() {
    assert_eq!(AlertDirection::from_str("above"), Some(AlertDirection::Above));
    assert_eq!(AlertDirection::from_str("BELOW"), Some(AlertDirection::Below));
    assert_eq!(AlertDirection::from_str("sideways"), None);
}

#[test]
fn test_alert_direction_serialization() {
    assert_eq!(
        serde_json::to_string(&AlertDirection::Above).unwrap(),
        "\"above\""
    );
    let parsed: AlertDirection = serde_json::from_str("\"below\"").unwrap();
    assert_eq!(parsed, AlertDirection::Below);
}

#[test]
fn test_indicator_snapshot_skips_unset_fields() {
    let snapshot = IndicatorSnapshot {
        sma: Some(100.0),
        ..Default::default()
    };

    let json = serde_json::to_string(&snapshot).unwrap();
    assert!(json.contains("\"sma\":100.0"));
    assert!(!json.contains("rsi"));
    assert!(!json.contains("macdLine"));
}

#[test]
fn test_indicator_snapshot_camel_case() {
    let snapshot = IndicatorSnapshot {
        macd_line: Some(1.5),
        macd_signal: Some(1.0),
        macd_histogram: Some(0.5),
        ..Default::default()
    };

    let json = serde_json::to_string(&snapshot).unwrap();
    assert!(json.contains("\"macdLine\""));
    assert!(json.contains("\"macdSignal\""));
    assert!(json.contains("\"macdHistogram\""));
}

#[test]
fn test_trade_action_display() {
    assert_eq!(format!("{}", TradeAction::Buy), "BUY");
    assert_eq!(format!("{}", TradeAction::Sell), "SELL");
    assert_eq!(format!("{}", TradeAction::Hold), "HOLD");
}

#[test]
fn test_sentiment_label_display() {
    assert_eq!(format!("{}", SentimentLabel::Bullish), "Bullish");
    assert_eq!(format!("{}", SentimentLabel::Neutral), "Neutral");
}

#[test]
fn test_alert_round_trip() {
    let alert = Alert {
        id: uuid::Uuid::new_v4(),
        asset: "BTC/USD".to_string(),
        price_level: 50_000.0,
        direction: AlertDirection::Above,
        triggered: false,
        created_at: 1_700_000_000,
    };

    let json = serde_json::to_string(&alert).unwrap();
    assert!(json.contains("\"priceLevel\":50000.0"));
    assert!(json.contains("\"createdAt\""));

    let parsed: Alert = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed.id, alert.id);
    assert_eq!(parsed.price_level, alert.price_level);
}

#[test]
fn test_create_alert_request_deserialization() {
    let request: CreateAlertRequest =
        serde_json::from_str(r#"{"priceLevel": 42000.5, "direction": "below"}"#).unwrap();
    assert_eq!(request.price_level, 42_000.5);
    assert_eq!(request.direction, AlertDirection::Below);
}

#[test]
fn test_price_sample_serialization() {
    let sample = PriceSample::new(1_700_000_000, 65_432.1);
    let json = serde_json::to_string(&sample).unwrap();
    assert!(json.contains("\"timestamp\":1700000000"));
    assert!(json.contains("\"price\":65432.1"));
}
