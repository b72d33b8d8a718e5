//! Wire contracts shared between the Cortex dashboard client and the analytics API.
//!
//! Every DTO here mirrors a JSON payload produced by the backend. Numeric
//! columns that the API may emit as decimal strings are decoded through
//! [`shared::numeric::lenient`].

pub mod dashboards;
pub mod shared;
