//! Sales quotation extraction module.

mod parser;
pub mod rules;
pub mod validation;

pub use parser::{HeuristicQuotationParser, ParseReport, QuotationParser};
pub use validation::{validate, ValidationError};
