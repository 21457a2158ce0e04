pub mod expression;
pub mod validator;

pub use expression::{parse_expression, Expression};
pub use validator::{looks_like_number, parse_quantity};
