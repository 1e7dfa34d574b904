/// Approval state mirrored from the farm record.
/// Owned by the farm-record store; read-only in this subsystem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApprovalStatus {
    Approved,
    Pending,
}

impl ApprovalStatus {
    pub fn from_approved(approved: bool) -> Self {
        if approved { ApprovalStatus::Approved } else { ApprovalStatus::Pending }
    }

    pub fn to_str(&self) -> &'static str {
        match self {
            ApprovalStatus::Approved => "approved",
            ApprovalStatus::Pending => "pending",
        }
    }
}
