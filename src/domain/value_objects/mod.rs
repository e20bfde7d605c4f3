//! # Value Objects
//!
//! Immutable types with validation and domain semantics.
//!
//! ## Identity Types
//!
//! - [`CarId`]: Opaque car identifier
//!
//! ## Numeric Types
//!
//! - [`Price`]: Positive decimal daily rate
//! - [`CheckedArithmetic`]: Trait for overflow-safe arithmetic
//!
//! ## Pricing Configuration
//!
//! - [`TaxBracket`], [`TaxTable`]: Age brackets and their multipliers
//! - [`FormatConfig`]: Locale and currency used for receipts

pub mod arithmetic;
pub mod format;
pub mod ids;
pub mod price;
pub mod tax_bracket;

pub use arithmetic::{ArithmeticError, ArithmeticResult, CheckedArithmetic, round_to_cents};
pub use format::{Currency, FormatConfig, Locale};
pub use ids::CarId;
pub use price::Price;
pub use tax_bracket::{TaxBracket, TaxTable};
