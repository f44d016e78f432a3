use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SimError {
    #[error("units can only be placed during the placement phase")]
    NotInPlacementPhase,

    #[error("placement at ({x:.1}, {y:.1}) is within {spacing} of an existing unit")]
    PlacementTooClose { x: f32, y: f32, spacing: f32 },
}

pub type Result<T> = std::result::Result<T, SimError>;
