use geofencing::{Notifier, Renderer};
use itertools::Itertools;
use model::{Coordinate, Geofence, Notification, Viewport};
use serde::Serialize;

/// Prints alerts to stdout, the way a dialog would show them.
#[derive(Debug, Default)]
pub struct ConsoleNotifier {
    pub shown: usize,
}

impl Notifier for ConsoleNotifier {
    fn notify(&mut self, notification: &Notification) {
        self.shown += 1;
        let kind = notification.kind;
        let about = notification
            .geofence_id
            .as_ref()
            .map(|id| format!(" ({})", id))
            .unwrap_or_default();
        println!(
            "[{}]{} {} [{}]{}",
            kind.title(),
            about,
            kind.message(),
            kind.choices().iter().join(" / "),
            if kind.cancelable() { "" } else { " (required)" }
        );
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Snapshot<'a> {
    geofences: &'a [&'a Geofence],
    user_marker: Option<Coordinate>,
    viewport: &'a Viewport,
}

/// Writes every frame as a JSON document instead of drawing a map.
#[derive(Debug, Default)]
pub struct JsonRenderer {
    pub pretty: bool,
}

impl Renderer for JsonRenderer {
    fn render(
        &mut self,
        geofences: &[&Geofence],
        user_marker: Option<Coordinate>,
        viewport: &Viewport,
    ) {
        let snapshot = Snapshot {
            geofences,
            user_marker,
            viewport,
        };
        let json = if self.pretty {
            serde_json::to_string_pretty(&snapshot)
        } else {
            serde_json::to_string(&snapshot)
        };
        match json {
            Ok(json) => println!("map: {}", json),
            Err(why) => log::error!("could not serialize map snapshot: {}", why),
        }
    }
}
