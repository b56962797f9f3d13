vocabulary! {
    /// Water type used to convert pressure to depth.
    pub enum WaterType: u8 {
        Fresh = 0 => "Fresh",
        Salt = 1 => "Salt",
        En13319 = 2 => "EN13319",
        Custom = 3 => "Custom",
    }
}

vocabulary! {
    /// Availability of a configured gas.
    pub enum GasStatus: u8 {
        Disabled = 0 => "Disabled",
        Enabled = 1 => "Enabled",
        BackupOnly = 2 => "Backup Only",
    }
}

vocabulary! {
    /// Breathing circuit a gas is configured for.
    pub enum GasMode: u8 {
        OpenCircuit = 0 => "Open Circuit",
        ClosedCircuitDiluent = 1 => "Closed Circuit Diluent",
    }
}
