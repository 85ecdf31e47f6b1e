//! Prelude module - commonly used types for convenient import.
//!
//! Use `use entitle_parser::prelude::*;` to import all essential types.
//!
//! # Example
//!
//! ```rust
//! use entitle_parser::prelude::*;
//!
//! let entitlement = parse_as(EntitlementKind::Int, "quota.bytes=-1").unwrap();
//! assert_eq!(entitlement.kind(), EntitlementKind::Int);
//! assert_eq!(entitlement.int_value(), Some(-1));
//! ```

// Errors
pub use crate::{EntitlementError, EntitlementResult, LexicalError, ParseStage};

// Data model
pub use crate::{DomainLabel, DomainPath, Entitlement, EntitlementKind, Identifier};

// Parse modes
pub use crate::{parse_as, parse_int, parse_str, parse_void};

// Validators
pub use crate::{is_valid_domain_label, is_valid_domain_path, is_valid_identifier};
