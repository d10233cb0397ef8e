use super::TxtRule;

pub type Result<T> = std::result::Result<T, pest::error::Error<TxtRule>>;
