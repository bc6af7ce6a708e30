//! Common imports for test files
//!
//! `use tests::prelude::*;` brings in the helpers and assertion macros.

pub use crate::{field_names, init_logging};

pub use std_util::prelude::*;
