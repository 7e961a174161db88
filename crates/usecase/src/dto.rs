// crates/usecase/src/dto.rs

/// Strings derived from one slider position: four projected-size displays and
/// the encoded form-field value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlideOutput {
    pub thirty_minute_min: String,
    pub thirty_minute_max: String,
    pub sixty_minute_min: String,
    pub sixty_minute_max: String,
    pub encoded: String,
}
