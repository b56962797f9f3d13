vocabulary! {
    /// Sport of a session.
    pub enum Sport: u8 {
        Generic = 0 => "Generic",
        Running = 1 => "Running",
        Cycling = 2 => "Cycling",
        Transition = 3 => "Transition",
        FitnessEquipment = 4 => "Fitness Equipment",
        Swimming = 5 => "Swimming",
        Basketball = 6 => "Basketball",
        Soccer = 7 => "Soccer",
        Tennis = 8 => "Tennis",
        AmericanFootball = 9 => "American Football",
        Training = 10 => "Training",
        Walking = 11 => "Walking",
        CrossCountrySkiing = 12 => "Cross Country Skiing",
        AlpineSkiing = 13 => "Alpine Skiing",
        Snowboarding = 14 => "Snowboarding",
        Rowing = 15 => "Rowing",
        Mountaineering = 16 => "Mountaineering",
        Hiking = 17 => "Hiking",
        Multisport = 18 => "Multisport",
        Paddling = 19 => "Paddling",
        Flying = 20 => "Flying",
        EBiking = 21 => "E-Biking",
        Motorcycling = 22 => "Motorcycling",
        Boating = 23 => "Boating",
        Driving = 24 => "Driving",
        Golf = 25 => "Golf",
        HangGliding = 26 => "Hang Gliding",
        HorsebackRiding = 27 => "Horseback Riding",
        Hunting = 28 => "Hunting",
        Fishing = 29 => "Fishing",
        InlineSkating = 30 => "Inline Skating",
        RockClimbing = 31 => "Rock Climbing",
        Sailing = 32 => "Sailing",
        IceSkating = 33 => "Ice Skating",
        SkyDiving = 34 => "Sky Diving",
        Snowshoeing = 35 => "Snowshoeing",
        Snowmobiling = 36 => "Snowmobiling",
        StandUpPaddleboarding = 37 => "Stand Up Paddleboarding",
        Surfing = 38 => "Surfing",
        Wakeboarding = 39 => "Wakeboarding",
        WaterSkiing = 40 => "Water Skiing",
        Kayaking = 41 => "Kayaking",
        Rafting = 42 => "Rafting",
        Windsurfing = 43 => "Windsurfing",
        Kitesurfing = 44 => "Kitesurfing",
        Tactical = 45 => "Tactical",
        Jumpmaster = 46 => "Jumpmaster",
        Boxing = 47 => "Boxing",
        FloorClimbing = 48 => "Floor Climbing",
        Diving = 53 => "Diving",
        All = 254 => "All",
    }
}

vocabulary! {
    /// Sub-sport of a session.
    ///
    /// Includes closed-circuit rebreather diving, which some dive computers
    /// record ahead of the published profile.
    pub enum SubSport: u8 {
        Generic = 0 => "Generic",
        Treadmill = 1 => "Treadmill",
        Street = 2 => "Street",
        Trail = 3 => "Trail",
        Track = 4 => "Track",
        Spin = 5 => "Spin",
        IndoorCycling = 6 => "Indoor Cycling",
        Road = 7 => "Road",
        Mountain = 8 => "Mountain",
        Downhill = 9 => "Downhill",
        Recumbent = 10 => "Recumbent",
        Cyclocross = 11 => "Cyclocross",
        HandCycling = 12 => "Hand Cycling",
        TrackCycling = 13 => "Track Cycling",
        IndoorRowing = 14 => "Indoor Rowing",
        Elliptical = 15 => "Elliptical",
        StairClimbing = 16 => "Stair Climbing",
        LapSwimming = 17 => "Lap Swimming",
        OpenWater = 18 => "Open Water",
        FlexibilityTraining = 19 => "Flexibility Training",
        StrengthTraining = 20 => "Strength Training",
        WarmUp = 21 => "Warm Up",
        Match = 22 => "Match",
        Exercise = 23 => "Exercise",
        Challenge = 24 => "Challenge",
        IndoorSkiing = 25 => "Indoor Skiing",
        CardioTraining = 26 => "Cardio Training",
        IndoorWalking = 27 => "Indoor Walking",
        EBikeFitness = 28 => "E-Bike Fitness",
        Bmx = 29 => "BMX",
        CasualWalking = 30 => "Casual Walking",
        SpeedWalking = 31 => "Speed Walking",
        BikeToRunTransition = 32 => "Bike to Run Transition",
        RunToBikeTransition = 33 => "Run to Bike Transition",
        SwimToBikeTransition = 34 => "Swim to Bike Transition",
        Atv = 35 => "ATV",
        Motocross = 36 => "Motocross",
        Backcountry = 37 => "Backcountry",
        Resort = 38 => "Resort",
        RcDrone = 39 => "RC Drone",
        Wingsuit = 40 => "Wingsuit",
        Whitewater = 41 => "Whitewater",
        SkateSkiing = 42 => "Skate Skiing",
        Yoga = 43 => "Yoga",
        Pilates = 44 => "Pilates",
        IndoorRunning = 45 => "Indoor Running",
        GravelCycling = 46 => "Gravel Cycling",
        EBikeMountain = 47 => "E-Bike Mountain",
        Commuting = 48 => "Commuting",
        MixedSurface = 49 => "Mixed Surface",
        Navigate = 50 => "Navigate",
        TrackMe = 51 => "Track Me",
        Map = 52 => "Map",
        SingleGasDiving = 53 => "Single Gas Diving",
        MultiGasDiving = 54 => "Multi Gas Diving",
        GaugeDiving = 55 => "Gauge Diving",
        ApneaDiving = 56 => "Apnea Diving",
        ApneaHunting = 57 => "Apnea Hunting",
        VirtualActivity = 58 => "Virtual Activity",
        Obstacle = 59 => "Obstacle",
        Breathing = 62 => "Breathing",
        CcrDiving = 63 => "CCR Diving",
        All = 254 => "All",
    }
}
