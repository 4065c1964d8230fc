pub mod swap_vec;

pub mod prelude {
    pub use super::swap_vec::SwapVec;
    pub use super::DsError;
}

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DsError {
    #[error("failed to allocate container storage")]
    AllocationFailed(#[from] std::collections::TryReserveError),
}
