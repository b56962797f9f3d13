vocabulary! {
    /// Kind of a container file.
    pub enum FileKind: u8 {
        Device = 1 => "Device",
        Settings = 2 => "Settings",
        Sport = 3 => "Sport",
        Activity = 4 => "Activity",
        Workout = 5 => "Workout",
        Course = 6 => "Course",
        Schedules = 7 => "Schedules",
        Weight = 9 => "Weight",
        Totals = 10 => "Totals",
        Goals = 11 => "Goals",
        BloodPressure = 14 => "Blood Pressure",
        MonitoringA = 15 => "Monitoring A",
        ActivitySummary = 20 => "Activity Summary",
        MonitoringDaily = 28 => "Monitoring Daily",
        MonitoringB = 32 => "Monitoring B",
        Segment = 34 => "Segment",
        SegmentList = 35 => "Segment List",
        ExdConfiguration = 40 => "Exd Configuration",
        MfgRangeMin = 0xF7 => "Manufacturer Range Min",
        MfgRangeMax = 0xFE => "Manufacturer Range Max",
    }
}

vocabulary! {
    /// Manufacturer of a device.
    pub enum Manufacturer: u16 {
        Garmin = 1 => "Garmin",
        GarminFr405Antfs = 2 => "Garmin FR405 ANTFS",
        Zephyr = 3 => "Zephyr",
        Dayton = 4 => "Dayton",
        Idt = 5 => "IDT",
        Srm = 6 => "SRM",
        Quarq = 7 => "Quarq",
        Ibike = 8 => "iBike",
        Saris = 9 => "Saris",
        SparkHk = 10 => "Spark HK",
        Tanita = 11 => "Tanita",
        Echowell = 12 => "Echowell",
        DynastreamOem = 13 => "Dynastream OEM",
        Nautilus = 14 => "Nautilus",
        Dynastream = 15 => "Dynastream",
        Timex = 16 => "Timex",
        Metrigear = 17 => "MetriGear",
        Xelic = 18 => "Xelic",
        Beurer = 19 => "Beurer",
        Cardiosport = 20 => "Cardiosport",
        AAndD = 21 => "A&D",
        Hmm = 22 => "HMM",
        Suunto = 23 => "Suunto",
        WahooFitness = 32 => "Wahoo Fitness",
        Development = 255 => "Development",
        Zwift = 260 => "Zwift",
        Strava = 265 => "Strava",
        Coros = 294 => "COROS",
    }
}

vocabulary! {
    /// Battery condition reported by a device.
    pub enum BatteryStatus: u8 {
        New = 1 => "New",
        Good = 2 => "Good",
        Okay = 3 => "Ok",
        Low = 4 => "Low",
        Critical = 5 => "Critical",
        Charging = 6 => "Charging",
        Unknown = 7 => "Unknown",
    }
}
