use std::fmt;
use std::fmt::Formatter;
use std::str::FromStr;
use crate::database::enums::peer_status::PeerStatus;

impl PeerStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PeerStatus::Incomplete => "incomplete",
            PeerStatus::Complete => "complete"
        }
    }
}

impl fmt::Display for PeerStatus {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PeerStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "incomplete" => Ok(PeerStatus::Incomplete),
            "complete" => Ok(PeerStatus::Complete),
            other => Err(format!("unknown peer status \"{other}\""))
        }
    }
}
