pub mod dto;
pub mod use_case;

pub use use_case::LookupRepresentativeUseCase;
