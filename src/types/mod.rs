mod approval;
mod farm_id;

pub use approval::ApprovalStatus;
pub use farm_id::FarmId;
