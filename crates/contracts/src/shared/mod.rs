pub mod amount;
pub mod pagination;
pub mod review;
pub mod validation;

/// Records that carry a stable server-side identity.
pub trait Identified {
    fn record_id(&self) -> i64;
}
