use serde::Deserialize;
use std::fmt;

#[derive(Debug, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "UPPERCASE")]
pub enum MachineState {
    Available,
    Reserved,
    Occupied,
    Stoppable,
    Faulted,
}

impl fmt::Display for MachineState {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            MachineState::Available => write!(f, "Available"),
            MachineState::Reserved => write!(f, "Reserved"),
            MachineState::Occupied => write!(f, "Occupied"),
            MachineState::Stoppable => write!(f, "Stoppable"),
            MachineState::Faulted => write!(f, "Faulted"),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MachineData {
    pub external_id: String,
    pub location_id: String,
    pub service_type: String,
    pub service_name: String,
    pub unit: String,
    pub state: MachineState,
    pub state_description: String,
}
