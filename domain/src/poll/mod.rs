//! Poll configuration domain
//!
//! The immutable configuration shared by every conversation in a session:
//! the response options participants may choose from and the ordered
//! statements they respond to.
//!
//! # Matching
//!
//! ```text
//! incoming text ──► options (configured order)
//!                     └─► triggers (configured order)
//!                           ├─ trigger == text   ─► match
//!                           ├─ trigger == "*"    ─► match (wildcard)
//!                           └─ otherwise         ─► next trigger / option
//! ```

pub mod definition;
pub mod option;
pub mod statement;
pub mod validation;

// Re-export main types
pub use definition::Poll;
pub use option::{ResponseOption, WILDCARD_TRIGGER};
pub use statement::Statement;
pub use validation::is_valid;
