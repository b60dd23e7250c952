pub mod civic_assistant;
pub mod lookup_representative;
pub mod resolve_location;
pub mod summarize_representative;
