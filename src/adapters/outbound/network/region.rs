use serde::Deserialize;

/// Veracode platform region, which decides the API host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Region {
    #[default]
    Commercial,
    European,
    Federal,
}

impl Region {
    pub fn api_host(self) -> &'static str {
        match self {
            Region::Commercial => "api.veracode.com",
            Region::European => "api.veracode.eu",
            Region::Federal => "api.veracode.us",
        }
    }
}

impl std::str::FromStr for Region {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "commercial" | "us" | "com" => Ok(Region::Commercial),
            "european" | "eu" => Ok(Region::European),
            "federal" | "fedramp" => Ok(Region::Federal),
            _ => Err(format!(
                "Invalid region: {}. Please specify 'commercial', 'european' or 'federal'",
                s
            )),
        }
    }
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Region::Commercial => write!(f, "commercial"),
            Region::European => write!(f, "european"),
            Region::Federal => write!(f, "federal"),
        }
    }
}
