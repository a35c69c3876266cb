pub mod filter;
pub mod global_id;

pub use filter::{Filter, FilterKind};
pub use global_id::{GlobalIdDto, InstanceIdDto, ValueObjectIdDto};
