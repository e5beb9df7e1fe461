pub mod engine;
pub mod evaluator;
pub mod roman;
pub mod tokenizer;

pub use crate::domain::model::{Evaluation, Expression, Notation, Operand, Operator, Tokens};
pub use crate::domain::ports::{ConfigProvider, Console};
pub use crate::utils::error::Result;
