use super::OffsetCalculator;
use crate::api::{Options, offset_minutes};
use crate::error::Rejection;
use crate::{Instant, Offset};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn at(timestamp: &str) -> Instant {
    timestamp.parse().unwrap()
}

fn calculator(zone: &str) -> OffsetCalculator {
    OffsetCalculator::new(&Options::with_zone_name(zone).unwrap())
}

#[test]
fn new_york_examples_matching() {
    init_logger();

    // Array of (expected_minutes, instant)
    let cases: Vec<(Option<i32>, &str)> = vec![
        (Some(-240), "2024-07-01T12:00:00Z"),
        (Some(-300), "2024-01-01T12:00:00Z"),
        (Some(-300), "2023-12-31T23:59:59Z"),
        (Some(-240), "2024-10-31T12:00:00Z"),
        (Some(-300), "2024-11-30T12:00:00Z"),
        (Some(-240), "1969-07-20T20:17:00Z"),
        (Some(-300), "1970-01-01T00:00:00Z"),
        (Some(-300), "1920-01-01T00:00:00Z"),
        // War time: daylight offset all year 1942-1945.
        (Some(-240), "1943-01-15T12:00:00Z"),
        (Some(-240), "2030-07-04T16:00:00Z"),
        // Past the last listed transition the recurring US rule still applies.
        (Some(-240), "2100-07-01T12:00:00Z"),
        (Some(-300), "2100-01-01T12:00:00Z"),
        (Some(-240), "2250-08-15T00:00:00Z"),
        (Some(-300), "2250-12-15T00:00:00Z"),
        (Some(-240), "2500-07-01T12:00:00Z"),
        (Some(-300), "2500-01-01T12:00:00Z"),
        // Local mean time before the 1883 railway standardization.
        (None, "1850-06-01T12:00:00Z"),
    ];

    for (expected, timestamp) in cases {
        assert_eq!(offset_minutes(at(timestamp)).map(Offset::minutes), expected, "offset_minutes({timestamp})");
    }
}

#[test]
fn spring_forward_boundary_is_half_open() {
    let transition = at("2024-03-10T07:00:00Z");
    assert_eq!(transition.millis(), 1_710_054_000_000);

    let before = Instant::from_millis(transition.millis() - 1);
    assert_eq!(offset_minutes(before), Some(Offset::from_minutes(-300)));
    assert_eq!(offset_minutes(transition), Some(Offset::from_minutes(-240)));
}

#[test]
fn fall_back_boundary_is_half_open() {
    let transition = at("2024-11-03T06:00:00Z");
    assert_eq!(transition.millis(), 1_730_613_600_000);

    let before = Instant::from_millis(transition.millis() - 1);
    assert_eq!(offset_minutes(before), Some(Offset::from_minutes(-240)));
    assert_eq!(offset_minutes(transition), Some(Offset::from_minutes(-300)));
}

#[test]
fn local_mean_time_ends_at_railway_standard_time() {
    init_logger();

    let transition = at("1883-11-18T17:00:00Z");
    let before = Instant::from_millis(transition.millis() - 1);

    let calc = OffsetCalculator::new(&Options::default());
    let details = calc.details(before);
    assert_eq!(details.offset, None);
    assert_eq!(details.designator.as_deref(), Some("-04:56:02"));
    assert_eq!(details.rejection, Some(Rejection::WrongLength(9)));

    assert_eq!(calc.offset_minutes(transition), Some(Offset::from_minutes(-300)));
}

#[test]
fn boundaries_hold_after_last_listed_transition() {
    // Second Sunday of March and first Sunday of November, 2:00 local.
    let spring = at("2107-03-13T07:00:00Z");
    let fall = at("2107-11-06T06:00:00Z");

    assert_eq!(offset_minutes(Instant::from_millis(spring.millis() - 1)), Some(Offset::from_minutes(-300)));
    assert_eq!(offset_minutes(spring), Some(Offset::from_minutes(-240)));
    assert_eq!(offset_minutes(Instant::from_millis(fall.millis() - 1)), Some(Offset::from_minutes(-240)));
    assert_eq!(offset_minutes(fall), Some(Offset::from_minutes(-300)));
}

#[test]
fn every_summer_observes_daylight_time() {
    for year in 1967..=2300 {
        let instant = at(&format!("{year}-07-01T12:00:00Z"));
        assert_eq!(offset_minutes(instant), Some(Offset::from_minutes(-240)), "July {year}");
    }
}

#[test]
fn only_historic_offsets_are_reported() {
    let calc = OffsetCalculator::new(&Options::default());
    let start = at("1883-11-19T00:00:00Z").millis();
    let end = at("2300-01-01T00:00:00Z").millis();
    // Six days and an hour, so the sweep drifts across weekdays and hours.
    let step = (6 * 24 + 1) * 3_600_000;

    let mut seen_standard = false;
    let mut seen_daylight = false;
    let mut millis = start;
    while millis < end {
        match calc.offset_minutes(Instant::from_millis(millis)).map(Offset::minutes) {
            Some(-300) => seen_standard = true,
            Some(-240) => seen_daylight = true,
            other => panic!("unexpected offset {other:?} at {millis} ms"),
        }
        millis += step;
    }

    assert!(seen_standard && seen_daylight);
}

#[test]
fn repeated_calls_agree() {
    let calc = OffsetCalculator::new(&Options::default());
    for timestamp in ["2024-03-10T07:00:00Z", "2024-07-01T12:00:00Z", "1850-06-01T12:00:00Z"] {
        let instant = at(timestamp);
        assert_eq!(calc.offset_minutes(instant), calc.offset_minutes(instant));
        assert_eq!(calc.offset_minutes(instant), offset_minutes(instant));
    }
}

#[test]
fn shared_across_threads() {
    let calc = OffsetCalculator::new(&Options::default());
    let summer = at("2024-07-01T12:00:00Z");
    let winter = at("2024-01-01T12:00:00Z");

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let calc = &calc;
                scope.spawn(move || {
                    let instant = if i % 2 == 0 { summer } else { winter };
                    (i, calc.offset_minutes(instant))
                })
            })
            .collect();

        for handle in handles {
            let (i, offset) = handle.join().unwrap();
            let expected = if i % 2 == 0 { -240 } else { -300 };
            assert_eq!(offset, Some(Offset::from_minutes(expected)));
        }
    });
}

#[test]
fn other_zones_matching() {
    init_logger();

    let cases: Vec<(Option<i32>, &str, &str)> = vec![
        (Some(330), "Asia/Kolkata", "2024-07-01T12:00:00Z"),
        (Some(345), "Asia/Kathmandu", "2024-07-01T12:00:00Z"),
        (Some(-210), "America/St_Johns", "2024-01-15T12:00:00Z"),
        (Some(660), "Australia/Lord_Howe", "2024-01-15T12:00:00Z"),
        (Some(630), "Australia/Lord_Howe", "2024-07-01T12:00:00Z"),
        (Some(60), "Europe/London", "2024-07-01T12:00:00Z"),
        (Some(-480), "America/Los_Angeles", "2024-01-15T12:00:00Z"),
        // Zero offsets render as a bare `GMT` and are reported as unknown.
        (None, "Europe/London", "2024-01-15T12:00:00Z"),
        (None, "UTC", "2024-01-15T12:00:00Z"),
    ];

    for (expected, zone, timestamp) in cases {
        let got = calculator(zone).offset_minutes(at(timestamp)).map(Offset::minutes);
        assert_eq!(got, expected, "{zone} at {timestamp}");
    }
}
