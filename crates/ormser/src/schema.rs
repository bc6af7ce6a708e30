pub use ormser_core::schema::*;
