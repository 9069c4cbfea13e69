use geofencing::{
    platform::simulated::{RecordingNotifier, RecordingRenderer, ScriptedLocationProvider},
    GeofencingConfig, LocationError, NotificationPolicy, RegistryError, Session, SessionError,
};
use model::{Coordinate, GeofenceOrigin, Notification, NotificationKind, Role};
use utility::id::Id;

type TestSession = Session<ScriptedLocationProvider, RecordingRenderer, RecordingNotifier>;

// inside predefined geofence3 only
const IN_GEOFENCE3: Coordinate = Coordinate::new_unchecked(28.48125, 77.10206);
const NOWHERE: Coordinate = Coordinate::new_unchecked(28.0, 77.0);

fn session(
    config: GeofencingConfig,
    readings: Vec<Result<Coordinate, LocationError>>,
) -> TestSession {
    Session::new(
        config,
        ScriptedLocationProvider::new(readings),
        RecordingRenderer::default(),
        RecordingNotifier::default(),
    )
}

fn kinds(session: &TestSession) -> Vec<NotificationKind> {
    session
        .notifier()
        .notifications
        .iter()
        .map(|n| n.kind)
        .collect()
}

#[tokio::test]
async fn start_renders_and_reports_inside() {
    let mut session = session(GeofencingConfig::default(), vec![Ok(IN_GEOFENCE3)]);

    let results = session.start().await.unwrap();

    assert_eq!(results.len(), 3);
    assert!(results[2].inside);
    assert_eq!(
        session.notifier().notifications,
        vec![Notification::for_geofence(
            NotificationKind::Inside,
            Id::from("geofence3")
        )]
    );
    // before and after the location fix
    assert_eq!(session.renderer().frames.len(), 2);
    let last = session.renderer().last().unwrap();
    assert_eq!(last.user_marker, Some(IN_GEOFENCE3));
    assert_eq!(last.viewport.center, IN_GEOFENCE3);
    assert_eq!(session.state().current_location(), Some(IN_GEOFENCE3));
}

#[tokio::test]
async fn aggregate_policy_reports_outside_once() {
    let mut session = session(GeofencingConfig::default(), vec![Ok(NOWHERE)]);

    session.refresh_location().await.unwrap();

    assert_eq!(kinds(&session), vec![NotificationKind::Outside]);
}

#[tokio::test]
async fn per_geofence_policy_reports_every_geofence() {
    let config = GeofencingConfig {
        outside_policy: NotificationPolicy::PerGeofence,
        ..Default::default()
    };
    let mut session = session(config, vec![Ok(IN_GEOFENCE3)]);

    session.refresh_location().await.unwrap();

    assert_eq!(
        kinds(&session),
        vec![
            NotificationKind::Outside,
            NotificationKind::Outside,
            NotificationKind::Inside
        ]
    );
}

#[tokio::test]
async fn admin_is_asked_to_confirm_presence() {
    let config = GeofencingConfig {
        initial_role: Role::Admin,
        ..Default::default()
    };
    let mut session = session(config, vec![Ok(IN_GEOFENCE3)]);

    session.refresh_location().await.unwrap();

    assert_eq!(kinds(&session), vec![NotificationKind::InsideAdminConfirm]);
    // admins only see the geofences
    assert_eq!(session.renderer().last().unwrap().user_marker, None);
}

#[tokio::test]
async fn location_errors_keep_previous_state() {
    let mut session = session(
        GeofencingConfig::default(),
        vec![
            Ok(IN_GEOFENCE3),
            Err(LocationError::ServiceDisabled),
            Err(LocationError::PermissionDenied),
        ],
    );
    session.refresh_location().await.unwrap();
    let frames = session.renderer().frames.len();

    assert_eq!(
        session.refresh_location().await,
        Err(SessionError::Location(LocationError::ServiceDisabled))
    );
    assert_eq!(
        session.refresh_location().await,
        Err(SessionError::Location(LocationError::PermissionDenied))
    );
    // script drained
    assert_eq!(
        session.refresh_location().await,
        Err(SessionError::Location(LocationError::Unavailable))
    );

    assert_eq!(
        kinds(&session),
        vec![
            NotificationKind::Inside,
            NotificationKind::LocationServiceDisabled,
            NotificationKind::LocationPermissionDenied,
            NotificationKind::LocationUnavailable,
        ]
    );
    assert_eq!(session.state().current_location(), Some(IN_GEOFENCE3));
    assert_eq!(session.renderer().frames.len(), frames);
}

#[tokio::test]
async fn user_can_not_add_geofence() {
    let mut session = session(GeofencingConfig::default(), vec![Ok(NOWHERE)]);
    session.refresh_location().await.unwrap();

    assert_eq!(
        session.add_geofence(),
        Err(SessionError::Registry(RegistryError::PermissionDenied))
    );
    assert_eq!(session.state().registry.len(), 3);
    assert_eq!(
        kinds(&session).last(),
        Some(&NotificationKind::AccessDenied)
    );
}

#[tokio::test]
async fn admin_needs_location_to_add_geofence() {
    let mut session = session(GeofencingConfig::default(), vec![]);
    session.set_role(Role::Admin);

    assert_eq!(
        session.add_geofence(),
        Err(SessionError::Registry(RegistryError::NoLocation))
    );
    assert_eq!(session.state().registry.len(), 3);
    assert_eq!(kinds(&session), vec![NotificationKind::NoLocation]);
}

#[tokio::test]
async fn admin_adds_geofence_that_is_evaluated_next_time() {
    let mut session = session(GeofencingConfig::default(), vec![Ok(NOWHERE), Ok(NOWHERE)]);
    session.start().await.unwrap();
    session.set_role(Role::Admin);

    let fence = session.add_geofence().unwrap();
    assert_eq!(fence.origin, GeofenceOrigin::Dynamic);
    assert_eq!(fence.id.as_str(), "geofence4");
    let ids = &session.renderer().last().unwrap().geofence_ids;
    assert_eq!(ids.last(), Some(&fence.id));

    let results = session.refresh_location().await.unwrap();
    let inside = results.iter().map(|r| r.inside).collect::<Vec<_>>();
    assert_eq!(inside, vec![false, false, false, true]);
    assert_eq!(
        session.notifier().notifications.last(),
        Some(&Notification::for_geofence(
            NotificationKind::InsideAdminConfirm,
            fence.id.clone()
        ))
    );
}

#[tokio::test]
async fn repeated_evaluation_is_idempotent() {
    let mut session = session(
        GeofencingConfig::default(),
        vec![Ok(IN_GEOFENCE3), Ok(IN_GEOFENCE3)],
    );
    let first = session.refresh_location().await.unwrap();
    let second = session.refresh_location().await.unwrap();
    assert_eq!(first, second);
}

#[tokio::test]
async fn out_of_range_reading_counts_as_unavailable() {
    let mut session = session(
        GeofencingConfig::default(),
        vec![
            Ok(IN_GEOFENCE3),
            Ok(Coordinate::new_unchecked(f64::NAN, 500.0)),
        ],
    );
    session.refresh_location().await.unwrap();
    let frames = session.renderer().frames.len();

    assert_eq!(
        session.refresh_location().await,
        Err(SessionError::Location(LocationError::Unavailable))
    );
    assert_eq!(session.state().current_location(), Some(IN_GEOFENCE3));
    assert_eq!(
        kinds(&session),
        vec![NotificationKind::Inside, NotificationKind::LocationUnavailable]
    );
    assert_eq!(session.renderer().frames.len(), frames);

    // geofences are still built around the last valid fix
    session.set_role(Role::Admin);
    let fence = session.add_geofence().unwrap();
    assert!(fence
        .polygon
        .vertices()
        .iter()
        .all(|v| Coordinate::new(v.latitude, v.longitude).is_ok()));
}
