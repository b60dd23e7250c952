pub mod datasets;
pub mod llm;
