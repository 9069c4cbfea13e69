use std::{fmt, str::FromStr};

use model::{MembershipResult, Notification, NotificationKind, Role};

/// Decides how "outside" results are reported.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NotificationPolicy {
    /// One notification per matched geofence, plus a single `Outside` if
    /// nothing matched at all.
    #[default]
    Aggregate,
    /// One notification per evaluated geofence, `Outside` ones included.
    PerGeofence,
}

impl FromStr for NotificationPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "aggregate" => Ok(Self::Aggregate),
            "per-geofence" | "per_geofence" => Ok(Self::PerGeofence),
            other => Err(other.to_owned()),
        }
    }
}

impl fmt::Display for NotificationPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Aggregate => write!(f, "aggregate"),
            Self::PerGeofence => write!(f, "per-geofence"),
        }
    }
}

fn inside_kind(role: Role) -> NotificationKind {
    match role {
        Role::Admin => NotificationKind::InsideAdminConfirm,
        Role::User => NotificationKind::Inside,
    }
}

/// Notifications to show for one evaluation, in result order.
pub fn notifications_for(
    results: &[MembershipResult],
    role: Role,
    policy: NotificationPolicy,
) -> Vec<Notification> {
    match policy {
        NotificationPolicy::Aggregate => {
            let mut notifications = results
                .iter()
                .filter(|result| result.inside)
                .map(|result| {
                    Notification::for_geofence(inside_kind(role), result.geofence_id.clone())
                })
                .collect::<Vec<_>>();
            if notifications.is_empty() {
                notifications.push(Notification::new(NotificationKind::Outside));
            }
            notifications
        }
        NotificationPolicy::PerGeofence => results
            .iter()
            .map(|result| {
                let kind = if result.inside {
                    inside_kind(role)
                } else {
                    NotificationKind::Outside
                };
                Notification::for_geofence(kind, result.geofence_id.clone())
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use utility::id::Id;

    use super::*;

    fn results(flags: &[bool]) -> Vec<MembershipResult> {
        flags
            .iter()
            .enumerate()
            .map(|(i, &inside)| {
                MembershipResult::new(Id::new(format!("geofence{}", i + 1)), inside)
            })
            .collect()
    }

    #[test]
    fn aggregate_reports_single_outside() {
        let notifications = notifications_for(
            &results(&[false, false, false]),
            Role::User,
            NotificationPolicy::Aggregate,
        );
        assert_eq!(notifications, vec![Notification::new(NotificationKind::Outside)]);
    }

    #[test]
    fn aggregate_reports_only_matches() {
        let notifications = notifications_for(
            &results(&[false, true, true]),
            Role::User,
            NotificationPolicy::Aggregate,
        );
        assert_eq!(
            notifications,
            vec![
                Notification::for_geofence(NotificationKind::Inside, Id::from("geofence2")),
                Notification::for_geofence(NotificationKind::Inside, Id::from("geofence3")),
            ]
        );
    }

    #[test]
    fn admin_gets_confirmation_prompt() {
        let notifications = notifications_for(
            &results(&[true]),
            Role::Admin,
            NotificationPolicy::Aggregate,
        );
        assert_eq!(notifications[0].kind, NotificationKind::InsideAdminConfirm);
    }

    #[test]
    fn per_geofence_reports_every_result() {
        let notifications = notifications_for(
            &results(&[false, true]),
            Role::User,
            NotificationPolicy::PerGeofence,
        );
        assert_eq!(
            notifications,
            vec![
                Notification::for_geofence(NotificationKind::Outside, Id::from("geofence1")),
                Notification::for_geofence(NotificationKind::Inside, Id::from("geofence2")),
            ]
        );
    }

    #[test]
    fn per_geofence_without_geofences_is_silent() {
        assert!(notifications_for(&[], Role::User, NotificationPolicy::PerGeofence).is_empty());
    }

    #[test]
    fn parses_policy_names() {
        assert_eq!(
            "per-geofence".parse::<NotificationPolicy>(),
            Ok(NotificationPolicy::PerGeofence)
        );
        assert_eq!(
            "Aggregate".parse::<NotificationPolicy>(),
            Ok(NotificationPolicy::Aggregate)
        );
        assert!("sometimes".parse::<NotificationPolicy>().is_err());
    }
}
