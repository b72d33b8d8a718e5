pub mod numeric;
pub mod pagination;
pub mod period;
