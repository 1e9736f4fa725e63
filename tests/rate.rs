use std::time::Duration;

use pacenet::{error::RateParseError, DataRate};

#[test]
fn parses_the_simulation_rate_grammar() {
    assert_eq!(
        "500Kbps".parse::<DataRate>().unwrap(),
        DataRate::from_bits_per_sec(500_000)
    );
    assert_eq!(
        "1.5Mbps".parse::<DataRate>().unwrap(),
        DataRate::from_bits_per_sec(1_500_000)
    );
    assert_eq!(
        "5Gbps".parse::<DataRate>().unwrap(),
        DataRate::from_bits_per_sec(5_000_000_000)
    );
    assert_eq!(
        "100bps".parse::<DataRate>().unwrap(),
        DataRate::from_bits_per_sec(100)
    );
}

#[test]
fn rejects_malformed_rates() {
    assert!(matches!(
        "".parse::<DataRate>(),
        Err(RateParseError::Empty)
    ));
    assert!(matches!(
        "Mbps".parse::<DataRate>(),
        Err(RateParseError::InvalidNumber(_))
    ));
    assert!(matches!(
        "3excited".parse::<DataRate>(),
        Err(RateParseError::InvalidUnit(_))
    ));
    assert!(matches!(
        "0bps".parse::<DataRate>(),
        Err(RateParseError::InvalidNumber(_))
    ));
}

#[test]
fn serialization_delay_follows_the_bit_rate() {
    let rate: DataRate = "1.5Mbps".parse().unwrap();
    assert_eq!(rate.serialization_delay(3000), Duration::from_millis(16));

    let throttled: DataRate = "500Kbps".parse().unwrap();
    assert_eq!(throttled.serialization_delay(3000), Duration::from_millis(48));
}
