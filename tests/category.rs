use regulator::category::{
    BatteryStatus, Decoded, DiveAlert, Event, EventType, FileKind, GasMode, GasStatus,
    Manufacturer, Sport, SubSport, TimerTrigger, Vocabulary, WaterType,
};

/// Every code decodes, and known codes decode to a variant carrying that
/// same code.
fn total_over_u8<T: Vocabulary<Code = u8>>() {
    for code in 0..=u8::MAX {
        match T::decode(code) {
            Decoded::Known(known) => assert_eq!(known.code(), code),
            Decoded::Unrecognized(unknown) => assert_eq!(unknown, code),
        }
        assert_eq!(T::decode(code).code(), code);
    }
}

#[test]
fn decoding_is_total() {
    total_over_u8::<Sport>();
    total_over_u8::<SubSport>();
    total_over_u8::<WaterType>();
    total_over_u8::<GasStatus>();
    total_over_u8::<GasMode>();
    total_over_u8::<Event>();
    total_over_u8::<EventType>();
    total_over_u8::<FileKind>();
    total_over_u8::<BatteryStatus>();

    for code in [0, 1, 255, 294, 9999, u16::MAX] {
        assert_eq!(Manufacturer::decode(code).code(), code);
    }

    for code in [0, 39, 40, 200, u32::MAX] {
        assert_eq!(DiveAlert::decode(code).code(), code);
        assert_eq!(TimerTrigger::decode(code).code(), code);
    }
}

#[test]
fn known_codes() {
    assert_eq!(Sport::decode(53), Decoded::Known(Sport::Diving));
    assert_eq!(SubSport::decode(63), Decoded::Known(SubSport::CcrDiving));
    assert_eq!(SubSport::decode(62), Decoded::Known(SubSport::Breathing));
    assert_eq!(WaterType::decode(2), Decoded::Known(WaterType::En13319));
    assert_eq!(Event::decode(56), Decoded::Known(Event::DiveAlert));
    assert_eq!(DiveAlert::decode(0), Decoded::Known(DiveAlert::Surface));
    assert_eq!(Manufacturer::decode(294), Decoded::Known(Manufacturer::Coros));
}

#[test]
fn unrecognized_codes() {
    assert_eq!(WaterType::decode(4), Decoded::Unrecognized(4));
    assert_eq!(GasStatus::decode(3), Decoded::Unrecognized(3));
    assert_eq!(SubSport::decode(61), Decoded::Unrecognized(61));
    assert_eq!(DiveAlert::decode(31), Decoded::Unrecognized(31));
    assert_eq!(Manufacturer::decode(9999).known(), None);
}

#[test]
fn labels() {
    assert_eq!(WaterType::Salt.to_string(), "Salt");
    assert_eq!(WaterType::En13319.label(), "EN13319");
    assert_eq!(SubSport::CcrDiving.to_string(), "CCR Diving");
    assert_eq!(GasStatus::BackupOnly.to_string(), "Backup Only");
    assert_eq!(DiveAlert::ApproachingNdl.to_string(), "Approaching NDL");
    assert_eq!(Decoded::Known(WaterType::Fresh).to_string(), "Fresh");
    assert_eq!(Decoded::<WaterType>::Unrecognized(9).to_string(), "Unknown (9)");
}
