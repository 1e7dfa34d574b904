use crate::types::ApprovalStatus;

use super::FarmBoundary;

/// Filter query over the catalog.
///
/// `text` is a case-insensitive substring match across label, farmer name
/// and region (OR across the fields); `approval` and `region` match their
/// field exactly. Set dimensions AND together; unset dimensions match
/// everything.
#[derive(Debug, Clone, Default)]
pub struct BoundaryFilter {
    pub text: Option<String>,
    pub approval: Option<ApprovalStatus>,
    pub region: Option<String>,
}

impl BoundaryFilter {
    pub(crate) fn matches(&self, boundary: &FarmBoundary) -> bool {
        if let Some(approval) = self.approval {
            if boundary.approval != approval {
                return false;
            }
        }

        if let Some(region) = &self.region {
            if !boundary.region.eq_ignore_ascii_case(region) {
                return false;
            }
        }

        if let Some(text) = &self.text {
            let needle = text.to_lowercase();
            return [&boundary.label, &boundary.farmer_name, &boundary.region]
                .iter()
                .any(|field| field.to_lowercase().contains(&needle));
        }

        true
    }
}
