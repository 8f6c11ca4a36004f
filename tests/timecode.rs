//! Timecode and frame rate integration tests.
//!
//! Drop-frame expectations follow the published SMPTE 29.97 tables.

use seekbar::{DisplayField, FrameRate, SeekbarError, Timecode, format_timecode};

fn rate(value: &str) -> FrameRate {
    value.parse().expect("valid frame rate")
}

fn timecode(hours: u64, minutes: u32, seconds: u32, frames: u32) -> Timecode {
    Timecode {
        hours,
        minutes,
        seconds,
        frames,
    }
}

// ── FrameRate ──────────────────────────────────────────────────────

#[test]
fn integer_rates_parse_exactly() {
    for (text, expected) in [("24", 24), ("25", 25), ("30", 30), ("60", 60)] {
        let parsed = rate(text);
        assert_eq!(parsed.numerator(), expected);
        assert_eq!(parsed.denominator(), 1);
        assert!(!parsed.is_drop_frame());
        assert_eq!(parsed.timebase(), u64::from(expected));
    }
}

#[test]
fn ntsc_rates_normalise_to_rationals() {
    let ntsc = rate("29.97");
    assert_eq!((ntsc.numerator(), ntsc.denominator()), (30000, 1001));
    assert!(ntsc.is_drop_frame());

    let film = rate("23.976");
    assert_eq!((film.numerator(), film.denominator()), (24000, 1001));
    assert!(!film.is_drop_frame());
    assert_eq!(film.timebase(), 24);

    let rational = rate("30000/1001");
    assert_eq!(rational, ntsc);
}

#[test]
fn rational_rates_are_reduced() {
    let parsed = rate("50/2");
    assert_eq!((parsed.numerator(), parsed.denominator()), (25, 1));
}

#[test]
fn drop_frame_can_be_disabled_but_not_forced() {
    let non_drop = rate("29.97").with_drop_frame(false);
    assert!(!non_drop.is_drop_frame());

    let forced = rate("25").with_drop_frame(true);
    assert!(!forced.is_drop_frame());
}

#[test]
fn invalid_rates_are_rejected() {
    for text in ["", "abc", "0", "-25", "30/0", "0/1"] {
        let result: Result<FrameRate, _> = text.parse();
        assert!(
            matches!(result, Err(SeekbarError::InvalidFrameRate(_))),
            "expected rejection for {text:?}"
        );
    }
}

#[test]
fn rate_displays_two_decimals() {
    assert_eq!(rate("29.97").to_string(), "29.97");
    assert_eq!(rate("25").to_string(), "25.00");
}

// ── Standard timecode ──────────────────────────────────────────────

#[test]
fn standard_timecode_reference_table() {
    let cases = [
        ("24", 0, "00:00:00:00"),
        ("24", 23, "00:00:00:23"),
        ("24", 24, "00:00:01:00"),
        ("24", 86_400, "01:00:00:00"),
        ("25", 1_499, "00:00:59:24"),
        ("25", 90_061, "01:00:02:11"),
        ("30", 1_800, "00:01:00:00"),
        ("30", 107_999, "00:59:59:29"),
        ("30", 108_000, "01:00:00:00"),
        ("23.976", 24, "00:00:01:00"),
    ];

    for (fps, frame, expected) in cases {
        assert_eq!(
            format_timecode(frame, &rate(fps)).to_string(),
            expected,
            "frame {frame} @ {fps}"
        );
    }
}

#[test]
fn non_drop_29_97_counts_thirty_labels() {
    let non_drop = rate("29.97").with_drop_frame(false);
    assert_eq!(format_timecode(1_800, &non_drop).to_string(), "00:01:00:00");
}

// ── Drop-frame timecode ────────────────────────────────────────────

#[test]
fn drop_frame_reference_table() {
    let ntsc = rate("29.97");
    let cases = [
        (0, "00:00:00:00"),
        (1, "00:00:00:01"),
        (29, "00:00:00:29"),
        (1_798, "00:00:59:28"),
        (1_799, "00:00:59:29"),
        (1_800, "00:01:00:02"),
        (1_801, "00:01:00:03"),
        (3_597, "00:01:59:29"),
        (3_598, "00:02:00:02"),
        (17_981, "00:09:59:29"),
        (17_982, "00:10:00:00"),
        (17_983, "00:10:00:01"),
        (19_782, "00:11:00:02"),
        (107_891, "00:59:59:29"),
        (107_892, "01:00:00:00"),
    ];

    for (frame, expected) in cases {
        assert_eq!(
            format_timecode(frame, &ntsc).to_string(),
            expected,
            "frame {frame}"
        );
    }
}

#[test]
fn drop_frame_never_shows_skipped_labels() {
    let ntsc = rate("29.97");
    for frame in 0..=60_000 {
        let code = format_timecode(frame, &ntsc);
        if code.seconds == 0 && code.minutes % 10 != 0 {
            assert!(code.frames >= 2, "frame {frame} shows {code}");
        }
    }
}

#[test]
fn drop_frame_is_monotonic_and_gapless_in_frames() {
    let ntsc = rate("29.97");
    let mut previous = format_timecode(0, &ntsc).to_frame_number(&ntsc).unwrap();
    for frame in 1..=40_000 {
        let back = format_timecode(frame, &ntsc).to_frame_number(&ntsc).unwrap();
        assert_eq!(back, previous + 1);
        previous = back;
    }
}

// ── Fields and parsing ─────────────────────────────────────────────

#[test]
fn fields_are_zero_padded_in_page_order() {
    let code = format_timecode(90_061, &rate("25"));
    let fields = code.fields();
    assert_eq!(
        fields,
        [
            (DisplayField::Frames, "11".to_string()),
            (DisplayField::Seconds, "02".to_string()),
            (DisplayField::Minutes, "00".to_string()),
            (DisplayField::Hours, "01".to_string()),
        ]
    );
}

#[test]
fn parse_accepts_common_separators() {
    let expected = timecode(0, 1, 0, 2);
    assert_eq!("00:01:00:02".parse::<Timecode>().unwrap(), expected);
    assert_eq!("00:01:00;02".parse::<Timecode>().unwrap(), expected);
    assert_eq!("00:01:00.02".parse::<Timecode>().unwrap(), expected);
}

#[test]
fn parse_rejects_malformed_timecode() {
    for text in ["", "00:01:00", "00:01:00:02:03", "aa:bb:cc:dd"] {
        assert!(text.parse::<Timecode>().is_err(), "{text:?}");
    }
}

#[test]
fn to_frame_number_inverts_standard_rates() {
    let pal = rate("25");
    assert_eq!(timecode(1, 0, 2, 11).to_frame_number(&pal).unwrap(), 90_061);

    let ntsc = rate("29.97");
    assert_eq!(timecode(0, 1, 0, 2).to_frame_number(&ntsc).unwrap(), 1_800);
    assert_eq!(timecode(0, 10, 0, 0).to_frame_number(&ntsc).unwrap(), 17_982);
}

#[test]
fn to_frame_number_rejects_out_of_range_fields() {
    let pal = rate("25");
    assert!(timecode(0, 0, 0, 25).to_frame_number(&pal).is_err());
    assert!(timecode(0, 60, 0, 0).to_frame_number(&pal).is_err());
    assert!(timecode(0, 0, 60, 0).to_frame_number(&pal).is_err());
}

#[test]
fn to_frame_number_rejects_dropped_labels() {
    let ntsc = rate("29.97");
    let result = timecode(0, 1, 0, 0).to_frame_number(&ntsc);
    match result {
        Err(SeekbarError::InvalidTimecode(message)) => {
            assert!(message.contains("drop-frame"), "{message}");
        }
        other => panic!("Expected InvalidTimecode, got: {other:?}"),
    }

    // Every tenth minute keeps its labels.
    assert!(timecode(0, 10, 0, 0).to_frame_number(&ntsc).is_ok());
}

// ── Range limits ───────────────────────────────────────────────────

#[test]
fn largest_frame_number_formats() {
    assert_eq!(
        format_timecode(u64::MAX, &rate("25")),
        timecode(204_963_823_041_217, 14, 24, 15)
    );

    let ntsc = rate("29.97");
    assert_eq!(
        format_timecode(u64::MAX, &ntsc),
        timecode(170_974_160_027_708, 44, 31, 29)
    );
    assert_eq!(
        format_timecode(u64::MAX - 1, &ntsc),
        timecode(170_974_160_027_708, 44, 31, 28)
    );
}

#[test]
fn largest_frame_number_round_trips() {
    for value in ["25", "29.97"] {
        let frame_rate = rate(value);
        let largest = format_timecode(u64::MAX, &frame_rate);
        assert_eq!(largest.to_frame_number(&frame_rate).unwrap(), u64::MAX);
    }
}

#[test]
fn to_frame_number_rejects_overflowing_hours() {
    let huge: Timecode = "5124095576030432:00:00:00".parse().unwrap();

    for value in ["25", "29.97"] {
        match huge.to_frame_number(&rate(value)) {
            Err(SeekbarError::InvalidTimecode(message)) => {
                assert!(message.contains("overflows"), "{message}");
            }
            other => panic!("Expected InvalidTimecode, got: {other:?}"),
        }
    }

    let one_past = timecode(204_963_823_041_217, 14, 24, 16);
    assert!(one_past.to_frame_number(&rate("25")).is_err());
}
