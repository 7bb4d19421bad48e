pub mod document;
pub mod match_result;
