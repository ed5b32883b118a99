//! Row transformation and record linkage.
//!
//! - [`RowTransformer`]: per-column cleaning, prefixing, and domain filtering
//! - [`EmployeeColumns`]: aggregation of `employee*` columns
//! - [`merge_datasets`]: company-name join of two transformed datasets

mod employee;
mod merge;
mod row;

pub use employee::{EmployeeColumns, aggregate_employee_info, is_employee_column};
pub use merge::merge_datasets;
pub use row::{ColumnRule, RowTransformer, transform_row};
