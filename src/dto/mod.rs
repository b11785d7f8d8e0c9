//! Wire DTOs bridging domain types with the report endpoint's JSON contract.

pub mod report;
