pub mod concurrent_unit;
