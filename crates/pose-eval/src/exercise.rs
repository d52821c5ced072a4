use std::fmt;

/// Exercises with a built-in rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Exercise {
    BicepCurl,
    FrontRaise,
    ShoulderShrug,
    ShoulderPress,
}

impl Exercise {
    pub const ALL: [Exercise; 4] = [
        Exercise::BicepCurl,
        Exercise::FrontRaise,
        Exercise::ShoulderShrug,
        Exercise::ShoulderPress,
    ];

    /// Identifier used for dispatch and on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            Exercise::BicepCurl => "bicep_curl",
            Exercise::FrontRaise => "front_raise",
            Exercise::ShoulderShrug => "shoulder_shrug",
            Exercise::ShoulderPress => "shoulder_press",
        }
    }
}

impl fmt::Display for Exercise {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
