#![cfg(feature = "std")]

mod support;

use pretty_assertions::assert_eq;
use regulator::{
    category::{
        BatteryStatus, Decoded, DiveAlert, Event, EventType, FileKind, GasMode, GasStatus,
        Manufacturer, Sport, SubSport, TimerTrigger, WaterType,
    },
    report::{
        Alert, AlertDetail, Assembler, Gas, MessageKind, ParseError, parse_path, parse_reader,
        parse_slice,
    },
    message::Timeline,
    units::{Position, Timestamp},
};
use support::{DIVE, ScriptDecoder, init_logger, report};

#[test]
fn parse_path_dive() {
    init_logger();
    let report = parse_path(DIVE, ScriptDecoder).unwrap();

    let session = report.session();
    assert_eq!(session.sport, Some(Decoded::Known(Sport::Diving)));
    assert_eq!(session.sub_sport, Some(Decoded::Known(SubSport::SingleGasDiving)));
    assert_eq!(session.max_depth, Some(18.0));
    assert_eq!(session.avg_depth, Some(9.5));
    assert_eq!(session.min_temperature, Some(26.0));
    assert_eq!(session.avg_temperature, Some(27.0));
    assert_eq!(session.max_temperature, Some(32.0));
    assert_eq!(session.total_elapsed_time, Some(3480.0));
    assert_eq!(session.dive_number, Some(1));
    assert_eq!(session.start_time, Some(Timestamp(1_000_000_000)));
    assert_eq!(session.start_position, None);

    let settings = report.settings().unwrap();
    assert_eq!(settings.water_type, Some(Decoded::Known(WaterType::Salt)));
    assert_eq!(settings.water_type.unwrap().to_string(), "Salt");
    assert_eq!(settings.water_density, Some(1025.0));
    assert_eq!(settings.name.as_deref(), Some("Recreational"));
    assert_eq!(settings.gf_low, Some(40));
    assert_eq!(settings.gf_high, Some(85));
    assert_eq!(settings.po2_warn, Some(1.4));
    assert_eq!(settings.po2_critical, Some(1.6));
    assert_eq!(settings.po2_deco, Some(1.6));
    assert_eq!(settings.safety_stop_enabled, Some(true));
    assert_eq!(settings.bottom_depth, Some(30.0));

    let summary = report.summary().unwrap();
    assert_eq!(summary.surface_interval, Some(4680));
    assert_eq!(summary.bottom_time, Some(3480.0));
    assert_eq!(summary.max_depth, Some(18.0));
    assert_eq!(summary.end_cns, Some(12));
    assert_eq!(summary.descent_time, Some(600.0));
    assert_eq!(summary.ascent_time, Some(900.0));

    assert!(report.tank_summaries().is_empty());
    assert!(report.tank_updates().is_empty());

    assert_eq!(report.laps().len(), 1);
    let lap = &report.laps()[0];
    assert!(lap.synthesized);
    assert_eq!(lap.total_elapsed_time, Some(3480.0));
    assert_eq!(lap.max_depth, Some(18.0));
    assert_eq!(
        lap.start_position,
        Some(Position {
            latitude: 22.5,
            longitude: -90.0
        })
    );
    assert_eq!(
        lap.end_position,
        Some(Position {
            latitude: 11.25,
            longitude: 45.0
        })
    );
}

#[test]
fn parse_path_identity_and_devices() {
    let report = parse_path(DIVE, ScriptDecoder).unwrap();

    let identity = report.file_identity().unwrap();
    assert_eq!(identity.kind, Some(Decoded::Known(FileKind::Activity)));
    assert_eq!(identity.manufacturer, Some(Decoded::Known(Manufacturer::Garmin)));
    assert_eq!(identity.product, Some(3258));
    assert_eq!(identity.serial_number, Some(3_400_000_001));
    assert_eq!(identity.product_name.as_deref(), Some("Descent Mk2i"));

    let [computer, sensor] = report.devices() else {
        panic!("expected two devices, found {:?}", report.devices());
    };

    assert_eq!(computer.software_version, Some(12.3));
    assert_eq!(computer.battery_voltage, Some(4.0));
    assert_eq!(computer.battery_status, Some(Decoded::Known(BatteryStatus::Okay)));
    assert_eq!(computer.product_name.as_deref(), Some("Descent Mk2i"));

    assert_eq!(sensor.device_index, Some(1));
    assert_eq!(sensor.manufacturer, Some(Decoded::Unrecognized(9999)));
    assert_eq!(sensor.serial_number, None);
    assert_eq!(sensor.product_name, None);
}

#[test]
fn parse_path_samples() {
    let report = parse_path(DIVE, ScriptDecoder).unwrap();
    let samples = report.samples();

    assert_eq!(samples.len(), 5);

    let timestamps: Vec<_> = samples.iter().map(|s| s.timestamp).collect();
    assert_eq!(
        timestamps,
        [
            Some(Timestamp(1_000_000_000)),
            Some(Timestamp(1_000_000_001)),
            Some(Timestamp(1_000_000_002)),
            Some(Timestamp(1_000_002_000)),
            Some(Timestamp(1_000_003_470)),
        ]
    );

    assert_eq!(samples[0].position, None);
    assert_eq!(samples[0].depth, Some(0.0));
    assert_eq!(samples[1].depth, Some(1.5));
    assert_eq!(samples[2].n2_load, Some(12));
    assert_eq!(samples[2].cns_load, Some(3));
    assert_eq!(samples[3].temperature, Some(26.0));
    assert_eq!(samples[3].ndl_time, Some(2400));
    assert_eq!(samples[3].time_to_surface, Some(300));
    assert_eq!(samples[3].absolute_pressure, Some(2.81325));
    assert_eq!(samples[4].depth, Some(0.4));
}

#[test]
fn parse_path_alerts() {
    let report = parse_path(DIVE, ScriptDecoder).unwrap();
    let alerts = report.alerts();

    // The event without a sub-type is not an alert.
    assert_eq!(alerts.len(), 5);

    assert_eq!(
        alerts[0],
        Alert {
            timestamp: Some(Timestamp(1_000_000_000)),
            event: Decoded::Known(Event::Timer),
            event_type: Decoded::Known(EventType::Start),
            data: Some(0),
            detail: Some(AlertDetail::Timer(Decoded::Known(TimerTrigger::Manual))),
        }
    );

    assert_eq!(alerts[1].event, Decoded::Known(Event::DiveGasSwitched));
    assert_eq!(alerts[1].data, Some(1));
    assert_eq!(alerts[1].detail.unwrap().to_string(), "Gas 1");

    assert_eq!(alerts[2].data, None);
    assert_eq!(alerts[2].detail, None);

    assert_eq!(
        alerts[3].detail,
        Some(AlertDetail::DiveAlert(Decoded::Unrecognized(200)))
    );
    assert_eq!(alerts[3].detail.unwrap().to_string(), "Unknown Alert Data(200)");

    assert_eq!(
        alerts[4].detail,
        Some(AlertDetail::DiveAlert(Decoded::Known(DiveAlert::Surface)))
    );
    assert_eq!(alerts[4].detail.unwrap().to_string(), "Surface");

    for alert in alerts {
        assert_eq!(alert.data.is_some(), alert.detail.is_some());
    }
}

#[test]
fn parse_path_gases() {
    let report = parse_path(DIVE, ScriptDecoder).unwrap();

    assert_eq!(
        report.gases(),
        [
            Gas {
                index: Some(0),
                helium: Some(0),
                oxygen: Some(32),
                status: Some(Decoded::Known(GasStatus::Enabled)),
                mode: Some(Decoded::Known(GasMode::OpenCircuit)),
            },
            Gas {
                index: Some(1),
                helium: Some(35),
                oxygen: Some(18),
                status: Some(Decoded::Known(GasStatus::BackupOnly)),
                mode: Some(Decoded::Known(GasMode::OpenCircuit)),
            },
        ]
    );
}

#[test]
fn parse_reader_matches_parse_path() {
    let mut file = std::fs::File::open(DIVE).unwrap();
    let from_reader = parse_reader(&mut file, ScriptDecoder).unwrap();
    let from_path = parse_path(DIVE, ScriptDecoder).unwrap();
    assert_eq!(from_reader, from_path);
}

#[test]
fn assembler_states() {
    let data = std::fs::read(DIVE).unwrap();
    let extraction = Assembler::new(ScriptDecoder).decode(&data).unwrap();

    let messages = extraction.messages();
    assert_eq!(messages.sessions.len(), 1);
    assert_eq!(messages.records.len(), 5);
    assert_eq!(messages.events.len(), 6);
    assert_eq!(messages.dive_summaries.len(), 2);
    assert_eq!(messages.records[2].time_offset, Some(2));
    assert_eq!(messages.records[2].timestamp, None);

    let report = extraction.extract().unwrap();
    assert_eq!(report, parse_slice(&data, ScriptDecoder).unwrap());
}

#[test]
fn decode_failure_nonexistent_path() {
    let err = parse_path("/path/to/nonexistent/file.fit", ScriptDecoder).unwrap_err();
    assert!(matches!(err, ParseError::DecodeFailure(_)));
}

#[test]
fn decode_failure_malformed() {
    let err = report("18,253,u32\n").unwrap_err();
    assert!(matches!(err, ParseError::DecodeFailure(_)));
    assert_eq!(
        err.to_string(),
        "Failed to decode the container: malformed script row 0."
    );
}

#[test]
fn missing_session() {
    let err = report("0,0,u8,4\n20,253,u32,1000,92,u32,1500\n").unwrap_err();
    assert!(matches!(
        err,
        ParseError::MissingMandatoryMessage(MessageKind::Session)
    ));
    assert_eq!(err.to_string(), "The container holds no session message.");
}

#[test]
fn empty_container() {
    let err = report("").unwrap_err();
    assert!(matches!(
        err,
        ParseError::MissingMandatoryMessage(MessageKind::Session)
    ));
}

#[test]
fn session_only() {
    let report = report("18,7,u32,60000\n").unwrap();

    assert_eq!(report.summary(), None);
    assert_eq!(report.settings(), None);
    assert_eq!(report.file_identity(), None);
    assert!(report.samples().is_empty());
    assert!(report.alerts().is_empty());
    assert!(report.gases().is_empty());
    assert!(report.devices().is_empty());

    let [lap] = report.laps() else {
        panic!("expected one lap, found {:?}", report.laps());
    };

    assert!(lap.synthesized);
    assert_eq!(lap.total_elapsed_time, Some(60.0));
    assert_eq!(lap.start_position, None);
    assert_eq!(lap.end_position, None);
}

#[test]
fn extra_sessions_ignored() {
    let report = report("18,156,u32,1\n18,156,u32,2\n").unwrap();
    assert_eq!(report.session().dive_number, Some(1));
}

#[test]
fn recorded_laps_kept() {
    let report = report(
        "18,7,u32,60000,3,i32,268435456,4,i32,268435456\n\
         19,7,u32,20000,123,u32,5000\n\
         19,7,u32,40000,123,u32,9000,110,u32,1000,13,u16,500\n",
    )
    .unwrap();

    let [first, second] = report.laps() else {
        panic!("expected two laps, found {:?}", report.laps());
    };

    assert!(!first.synthesized);
    assert!(!second.synthesized);
    assert_eq!(first.total_elapsed_time, Some(20.0));
    assert_eq!(first.max_depth, Some(5.0));
    assert_eq!(first.start_position, None);
    assert_eq!(second.max_depth, Some(9.0));
    assert_eq!(second.avg_speed, Some(3.6));
}

#[test]
fn synthesized_lap_prefers_session_positions() {
    let report = report(
        "18,3,i32,536870912,4,i32,536870912\n\
         20,253,u32,1,0,i32,268435456,1,i32,268435456\n",
    )
    .unwrap();

    let lap = &report.laps()[0];
    assert_eq!(
        lap.start_position,
        Some(Position {
            latitude: 45.0,
            longitude: 45.0
        })
    );
    assert_eq!(
        lap.end_position,
        Some(Position {
            latitude: 22.5,
            longitude: 22.5
        })
    );
}

#[test]
fn sentinels_absent() {
    let report = report(
        "18,141,u32,4294967295,57,i8,127,156,u32,7\n\
         258,4,u8,255,6,u8,255\n\
         323,0,u32,0,1,u16,20000,2,u16,65535\n\
         319,0,u32,12345,1,u16,15000\n",
    )
    .unwrap();

    assert_eq!(report.session().max_depth, None);
    assert_eq!(report.session().avg_temperature, None);
    assert_eq!(report.session().dive_number, Some(7));

    let settings = report.settings().unwrap();
    assert_eq!(settings.water_type, None);
    assert_eq!(settings.po2_warn, None);

    let tank = &report.tank_summaries()[0];
    assert_eq!(tank.sensor, None);
    assert_eq!(tank.start_pressure, Some(200.0));
    assert_eq!(tank.end_pressure, None);

    let update = &report.tank_updates()[0];
    assert_eq!(update.sensor, Some(12345));
    assert_eq!(update.pressure, Some(150.0));
}

#[test]
fn unrecognized_codes_kept() {
    let report = report("18,5,u8,200,6,u8,100\n258,4,u8,9\n").unwrap();

    assert_eq!(report.session().sport, Some(Decoded::Unrecognized(200)));
    assert_eq!(report.session().sub_sport, Some(Decoded::Unrecognized(100)));

    let water_type = report.settings().unwrap().water_type.unwrap();
    assert_eq!(water_type, Decoded::Unrecognized(9));
    assert_eq!(water_type.to_string(), "Unknown (9)");
}

#[test]
fn enhanced_speed_preferred() {
    let report = report("18,14,u16,500,124,u32,1000,15,u16,2000\n").unwrap();

    assert_eq!(report.session().avg_speed, Some(3.6));
    assert_eq!(report.session().max_speed, Some(7.2));
}

#[test]
fn summary_without_session_reference() {
    let report = report(
        "18,7,u32,1000\n\
         268,0,u16,19,11,u32,5000\n\
         268,0,u16,19,11,u32,9000\n",
    )
    .unwrap();

    assert_eq!(report.summary().unwrap().bottom_time, Some(5.0));
}

#[test]
fn bottom_time_from_session() {
    let report = report("18,7,u32,60000\n268,0,u16,18\n").unwrap();
    assert_eq!(report.summary().unwrap().bottom_time, Some(60.0));
}

#[test]
fn compressed_timestamps_without_reference() {
    let report = report(
        "18\n\
         20,time,u8,5,92,u32,1000\n\
         20,253,u32,100,92,u32,2000\n\
         20,time,u8,10,92,u32,3000\n\
         20,time,u8,2,92,u32,4000\n",
    )
    .unwrap();

    let timestamps: Vec<_> = report.samples().iter().map(|s| s.timestamp).collect();
    assert_eq!(
        timestamps,
        [None, Some(Timestamp(100)), Some(Timestamp(106)), Some(Timestamp(130))]
    );
}

#[test]
fn compressed_timestamps_across_kinds() {
    let report = report(
        "18\n\
         20,253,u32,100\n\
         21,253,u32,200,0,u8,0,1,u8,0\n\
         20,time,u8,5\n\
         21,time,u8,9,0,u8,0,1,u8,4\n",
    )
    .unwrap();

    let timestamps: Vec<_> = report.samples().iter().map(|s| s.timestamp).collect();
    assert_eq!(timestamps, [Some(Timestamp(100)), Some(Timestamp(205))]);

    let timestamps: Vec<_> = report.alerts().iter().map(|a| a.timestamp).collect();
    assert_eq!(timestamps, [Some(Timestamp(200)), Some(Timestamp(233))]);
}

#[test]
fn compressed_timestamps_from_session() {
    let data = b"18,253,u32,300\n\
                 20,time,u8,2\n\
                 1000,253,u32,900\n\
                 20,time,u8,3\n";
    let extraction = Assembler::new(ScriptDecoder).decode(data).unwrap();

    let messages = extraction.messages();
    // Unknown messages are not collected, so their timestamps do not count.
    assert_eq!(messages.order, [18, 20, 20]);
    assert_eq!(
        messages.timeline(),
        Timeline {
            records: vec![Some(Timestamp(322)), Some(Timestamp(323))],
            events: vec![],
        }
    );
}

#[test]
fn event_data16_fallback() {
    let report = report("18\n21,0,u8,56,1,u8,3,2,u16,8\n").unwrap();
    let alert = &report.alerts()[0];

    assert_eq!(alert.data, Some(8));
    assert_eq!(
        alert.detail,
        Some(AlertDetail::DiveAlert(Decoded::Known(DiveAlert::DepthAlert)))
    );
    assert_eq!(alert.detail.unwrap().to_string(), "Depth Alert");
}

#[test]
fn unknown_messages_skipped() {
    let report = report("1000,0,u8,1,1,str,ignored\n18,156,u32,3\n").unwrap();
    assert_eq!(report.session().dive_number, Some(3));
}

#[test]
fn event_value_fallback() {
    let report = report("18\n21,0,u8,11,1,u8,3,3,u32,42\n").unwrap();
    let alert = &report.alerts()[0];

    assert_eq!(alert.event, Decoded::Known(Event::Battery));
    assert_eq!(alert.detail, Some(AlertDetail::Value(42)));
    assert_eq!(alert.detail.unwrap().to_string(), "42");
}

#[test]
fn unrecognized_timer_trigger() {
    let report = report("18\n21,0,u8,0,1,u8,0,3,u32,9\n").unwrap();
    let alert = &report.alerts()[0];

    assert_eq!(alert.detail, Some(AlertDetail::Timer(Decoded::Unrecognized(9))));
    assert_eq!(alert.detail.unwrap().to_string(), "Unknown Alert Data(9)");
}

#[test]
fn decoder_by_reference() {
    let mut decoder = ScriptDecoder;

    let first = parse_slice(b"18,156,u32,1\n", &mut decoder).unwrap();
    let second = parse_slice(b"18,156,u32,2\n", &mut decoder).unwrap();

    assert_eq!(first.session().dive_number, Some(1));
    assert_eq!(second.session().dive_number, Some(2));
}

#[test]
fn message_kinds() {
    assert_eq!(MessageKind::Session.global(), 18);
    assert_eq!(MessageKind::TankSummary.global(), 323);
    assert_eq!(MessageKind::DiveSettings.to_string(), "dive_settings");
}
