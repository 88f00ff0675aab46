use std::fmt;

/// Cassini instruments with imagery in OPUS.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Instrument {
    Cirs,
    Iss,
    Uvis,
    Vims,
}

impl Instrument {
    pub const ALL: [Instrument; 4] = [
        Instrument::Cirs,
        Instrument::Iss,
        Instrument::Uvis,
        Instrument::Vims,
    ];

    pub fn acronym(&self) -> &'static str {
        match self {
            Instrument::Cirs => "CIRS",
            Instrument::Iss => "ISS",
            Instrument::Uvis => "UVIS",
            Instrument::Vims => "VIMS",
        }
    }

    pub fn full_name(&self) -> &'static str {
        match self {
            Instrument::Cirs => "Composite Infrared Spectrometer",
            Instrument::Iss => "Imaging Science Subsystem",
            Instrument::Uvis => "Ultraviolet Imaging Spectrograph",
            Instrument::Vims => "Visible and Infrared Mapping Spectrometer",
        }
    }

    /// File name of the instrument's animation inside an orbit directory.
    pub fn file_name(&self) -> String {
        format!("{}.gif", self.acronym())
    }

    pub fn from_acronym(acronym: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|i| i.acronym() == acronym)
    }
}

impl fmt::Display for Instrument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.acronym())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_acronym_round_trip() {
        for instrument in Instrument::ALL {
            assert_eq!(Instrument::from_acronym(instrument.acronym()), Some(instrument));
        }
        assert_eq!(Instrument::from_acronym("RADAR"), None);
    }

    #[test]
    fn test_file_name() {
        assert_eq!(Instrument::Uvis.file_name(), "UVIS.gif");
    }

    #[test]
    fn test_display() {
        assert_eq!(Instrument::Cirs.to_string(), "CIRS");
        assert_eq!(Instrument::Vims.full_name(), "Visible and Infrared Mapping Spectrometer");
    }
}
