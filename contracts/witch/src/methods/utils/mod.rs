pub mod price_decay;
pub mod validation;
