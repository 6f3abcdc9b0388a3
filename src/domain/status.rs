//! Work-order workflow status.
//!
//! Eight stages from intake to hand-over. The display labels and badge
//! classes are the ones the workshop UI renders; transition legality is
//! enforced here rather than letting callers assign any value.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::errors::ServiceError;

/// Badge style used when a raw status string is not one of the known
/// values (legacy rows, manual data edits).
pub const FALLBACK_BADGE_CLASS: &str = "bg-gray-100 text-gray-800";

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    EnumIter,
    DeriveActiveEnum,
    ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
pub enum WorkStatus {
    #[sea_orm(string_value = "RECEIVED")]
    #[serde(rename = "RECEIVED")]
    Received,
    #[sea_orm(string_value = "IN_PROGRESS")]
    #[serde(rename = "IN_PROGRESS")]
    InProgress,
    #[sea_orm(string_value = "QUOTED")]
    #[serde(rename = "QUOTED")]
    Quoted,
    #[sea_orm(string_value = "ACCEPTED")]
    #[serde(rename = "ACCEPTED")]
    Accepted,
    #[sea_orm(string_value = "REJECTED")]
    #[serde(rename = "REJECTED")]
    Rejected,
    #[sea_orm(string_value = "WORKING")]
    #[serde(rename = "WORKING")]
    Working,
    #[sea_orm(string_value = "READY")]
    #[serde(rename = "READY")]
    Ready,
    #[sea_orm(string_value = "DELIVERED")]
    #[serde(rename = "DELIVERED")]
    Delivered,
}

impl WorkStatus {
    /// Wire representation, matching the stored string value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Received => "RECEIVED",
            Self::InProgress => "IN_PROGRESS",
            Self::Quoted => "QUOTED",
            Self::Accepted => "ACCEPTED",
            Self::Rejected => "REJECTED",
            Self::Working => "WORKING",
            Self::Ready => "READY",
            Self::Delivered => "DELIVERED",
        }
    }

    /// Hungarian display label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Received => "Beérkezett",
            Self::InProgress => "Vizsgálat alatt",
            Self::Quoted => "Árajánlat készült",
            Self::Accepted => "Elfogadva",
            Self::Rejected => "Elutasítva",
            Self::Working => "Javítás alatt",
            Self::Ready => "Kész",
            Self::Delivered => "Átvett",
        }
    }

    /// CSS badge classes for the status pill.
    pub fn badge_class(&self) -> &'static str {
        match self {
            Self::Received => "bg-blue-100 text-blue-800",
            Self::InProgress => "bg-yellow-100 text-yellow-800",
            Self::Quoted => "bg-purple-100 text-purple-800",
            Self::Accepted => "bg-green-100 text-green-800",
            Self::Rejected => "bg-red-100 text-red-800",
            Self::Working => "bg-orange-100 text-orange-800",
            Self::Ready => "bg-teal-100 text-teal-800",
            Self::Delivered => "bg-gray-100 text-gray-800",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "RECEIVED" => Some(Self::Received),
            "IN_PROGRESS" => Some(Self::InProgress),
            "QUOTED" => Some(Self::Quoted),
            "ACCEPTED" => Some(Self::Accepted),
            "REJECTED" => Some(Self::Rejected),
            "WORKING" => Some(Self::Working),
            "READY" => Some(Self::Ready),
            "DELIVERED" => Some(Self::Delivered),
            _ => None,
        }
    }
}

impl std::fmt::Display for WorkStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Label and badge class for an arbitrary raw status string. Unknown
/// values render as themselves on the neutral style instead of failing.
pub fn badge_for(raw: &str) -> (String, &'static str) {
    match WorkStatus::parse(raw) {
        Some(status) => (status.label().to_string(), status.badge_class()),
        None => (raw.to_string(), FALLBACK_BADGE_CLASS),
    }
}

/// Whether moving from `from` to `to` is a legal workflow step.
/// Same-status updates are accepted as no-ops.
pub fn is_valid_transition(from: WorkStatus, to: WorkStatus) -> bool {
    use WorkStatus::*;
    match (from, to) {
        (Received, InProgress) => true,
        (InProgress, Quoted) => true,
        (Quoted, Accepted) | (Quoted, Rejected) => true,
        (Accepted, Working) => true,
        (Working, Ready) => true,
        (Ready, Delivered) => true,
        _ => from == to,
    }
}

/// Validates a transition, producing the new status or a descriptive error.
pub fn transition(from: WorkStatus, to: WorkStatus) -> Result<WorkStatus, ServiceError> {
    if is_valid_transition(from, to) {
        Ok(to)
    } else {
        Err(ServiceError::InvalidStatusTransition(format!(
            "Nem váltható a(z) '{}' státuszról '{}' státuszra",
            from.label(),
            to.label()
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::Iterable;

    #[test]
    fn every_status_has_label_and_badge() {
        for status in WorkStatus::iter() {
            assert!(!status.label().is_empty());
            assert!(!status.badge_class().is_empty());
            assert_eq!(WorkStatus::parse(status.as_str()), Some(status));
        }
    }

    #[test]
    fn unknown_status_falls_back_to_raw_string() {
        let (label, class) = badge_for("ARCHIVED");
        assert_eq!(label, "ARCHIVED");
        assert_eq!(class, FALLBACK_BADGE_CLASS);
    }

    #[test]
    fn happy_path_is_fully_traversable() {
        use WorkStatus::*;
        let path = [
            Received, InProgress, Quoted, Accepted, Working, Ready, Delivered,
        ];
        for pair in path.windows(2) {
            assert!(
                is_valid_transition(pair[0], pair[1]),
                "{:?} -> {:?} should be legal",
                pair[0],
                pair[1]
            );
        }
    }

    #[test]
    fn quote_can_be_rejected_and_rejection_is_terminal() {
        use WorkStatus::*;
        assert!(is_valid_transition(Quoted, Rejected));
        for target in WorkStatus::iter().filter(|s| *s != Rejected) {
            assert!(!is_valid_transition(Rejected, target));
        }
    }

    #[test]
    fn self_transition_is_a_noop() {
        for status in WorkStatus::iter() {
            assert!(is_valid_transition(status, status));
        }
    }

    #[test]
    fn skipping_stages_is_rejected() {
        use WorkStatus::*;
        assert!(!is_valid_transition(Received, Delivered));
        assert!(!is_valid_transition(Received, Quoted));
        assert!(!is_valid_transition(Quoted, Working));
        assert!(transition(Received, Delivered).is_err());
    }
}
