vocabulary! {
    /// Category of an event message.
    pub enum Event: u8 {
        Timer = 0 => "Timer",
        Workout = 3 => "Workout",
        WorkoutStep = 4 => "Workout Step",
        PowerDown = 5 => "Power Down",
        PowerUp = 6 => "Power Up",
        OffCourse = 7 => "Off Course",
        Session = 8 => "Session",
        Lap = 9 => "Lap",
        CoursePoint = 10 => "Course Point",
        Battery = 11 => "Battery",
        VirtualPartnerPace = 12 => "Virtual Partner Pace",
        HrHighAlert = 13 => "Heart Rate High Alert",
        HrLowAlert = 14 => "Heart Rate Low Alert",
        SpeedHighAlert = 15 => "Speed High Alert",
        SpeedLowAlert = 16 => "Speed Low Alert",
        CadHighAlert = 17 => "Cadence High Alert",
        CadLowAlert = 18 => "Cadence Low Alert",
        PowerHighAlert = 19 => "Power High Alert",
        PowerLowAlert = 20 => "Power Low Alert",
        RecoveryHr = 21 => "Recovery Heart Rate",
        BatteryLow = 22 => "Battery Low",
        TimeDurationAlert = 23 => "Time Duration Alert",
        DistanceDurationAlert = 24 => "Distance Duration Alert",
        CalorieDurationAlert = 25 => "Calorie Duration Alert",
        Activity = 26 => "Activity",
        FitnessEquipment = 27 => "Fitness Equipment",
        Length = 28 => "Length",
        UserMarker = 32 => "User Marker",
        SportPoint = 33 => "Sport Point",
        Calibration = 36 => "Calibration",
        FrontGearChange = 42 => "Front Gear Change",
        RearGearChange = 43 => "Rear Gear Change",
        RiderPositionChange = 44 => "Rider Position Change",
        ElevHighAlert = 45 => "Elevation High Alert",
        ElevLowAlert = 46 => "Elevation Low Alert",
        CommTimeout = 47 => "Communication Timeout",
        AutoActivityDetect = 54 => "Auto Activity Detect",
        DiveAlert = 56 => "Dive Alert",
        DiveGasSwitched = 57 => "Dive Gas Switched",
        TankPressureReserve = 71 => "Tank Pressure Reserve",
        TankPressureCritical = 72 => "Tank Pressure Critical",
        TankLost = 73 => "Tank Lost",
        RadarThreatAlert = 75 => "Radar Threat Alert",
        TankBatteryLow = 76 => "Tank Battery Low",
        TankPodConnected = 81 => "Tank Pod Connected",
        TankPodDisconnected = 82 => "Tank Pod Disconnected",
    }
}

vocabulary! {
    /// Sub-type of an event message.
    pub enum EventType: u8 {
        Start = 0 => "Start",
        Stop = 1 => "Stop",
        ConsecutiveDepreciated = 2 => "Consecutive",
        Marker = 3 => "Marker",
        StopAll = 4 => "Stop All",
        BeginDepreciated = 5 => "Begin",
        EndDepreciated = 6 => "End",
        EndAllDepreciated = 7 => "End All",
        StopDisable = 8 => "Stop Disable",
        StopDisableAll = 9 => "Stop Disable All",
    }
}

vocabulary! {
    /// Payload of a dive alert event.
    pub enum DiveAlert: u32 {
        Surface = 0 => "Surface",
        GasSwitchPrompted = 1 => "Gas Switch Prompted",
        NearSurface = 2 => "Near Surface",
        ApproachingNdl = 3 => "Approaching NDL",
        Po2Warn = 4 => "PO2 Warning",
        Po2CritHigh = 5 => "PO2 Critical High",
        Po2CritLow = 6 => "PO2 Critical Low",
        TimeAlert = 7 => "Time Alert",
        DepthAlert = 8 => "Depth Alert",
        DecoCeilingBroken = 9 => "Deco Ceiling Broken",
        DecoComplete = 10 => "Deco Complete",
        SafetyStopBroken = 11 => "Safety Stop Broken",
        SafetyStopComplete = 12 => "Safety Stop Complete",
        CnsWarning = 13 => "CNS Warning",
        CnsCritical = 14 => "CNS Critical",
        OtuWarning = 15 => "OTU Warning",
        OtuCritical = 16 => "OTU Critical",
        AscentCritical = 17 => "Ascent Critical",
        AlertDismissedByKey = 18 => "Alert Dismissed by Key",
        AlertDismissedByTimeout = 19 => "Alert Dismissed by Timeout",
        BatteryLow = 20 => "Battery Low",
        BatteryCritical = 21 => "Battery Critical",
        SafetyStopStarted = 22 => "Safety Stop Started",
        ApproachingFirstDecoStop = 23 => "Approaching First Deco Stop",
        SetpointSwitchAutoLow = 24 => "Setpoint Switch Auto Low",
        SetpointSwitchAutoHigh = 25 => "Setpoint Switch Auto High",
        SetpointSwitchManualLow = 26 => "Setpoint Switch Manual Low",
        SetpointSwitchManualHigh = 27 => "Setpoint Switch Manual High",
        AutoSetpointSwitchIgnored = 28 => "Auto Setpoint Switch Ignored",
        SwitchedToOpenCircuit = 29 => "Switched to Open Circuit",
        SwitchedToClosedCircuit = 30 => "Switched to Closed Circuit",
        TankBatteryLow = 32 => "Tank Battery Low",
        Po2CcrDilLow = 33 => "PO2 CCR Diluent Low",
        DecoStopCleared = 34 => "Deco Stop Cleared",
        ApneaNeutralBuoyancy = 35 => "Apnea Neutral Buoyancy",
        ApneaTargetDepth = 36 => "Apnea Target Depth",
        ApneaSurface = 37 => "Apnea Surface",
        ApneaHighSpeed = 38 => "Apnea High Speed",
        ApneaLowSpeed = 39 => "Apnea Low Speed",
    }
}

vocabulary! {
    /// Payload of a timer event: what started or stopped the timer.
    pub enum TimerTrigger: u32 {
        Manual = 0 => "Manual",
        Auto = 1 => "Auto",
        FitnessEquipment = 2 => "Fitness Equipment",
    }
}
