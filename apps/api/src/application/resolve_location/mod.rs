pub mod use_case;

pub use use_case::LocationResolver;
