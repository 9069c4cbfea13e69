//! In-memory collaborators for demos and tests.

use std::collections::VecDeque;

use async_trait::async_trait;
use model::{Coordinate, Geofence, Notification, Viewport};
use utility::id::Id;

use super::{LocationError, LocationProvider, Notifier, Renderer};

/// Answers location requests from a queue. Once the queue is drained every
/// request fails with `Unavailable`.
#[derive(Debug, Default)]
pub struct ScriptedLocationProvider {
    readings: VecDeque<Result<Coordinate, LocationError>>,
}

impl ScriptedLocationProvider {
    pub fn new<I>(readings: I) -> Self
    where
        I: IntoIterator<Item = Result<Coordinate, LocationError>>,
    {
        Self {
            readings: readings.into_iter().collect(),
        }
    }
}

#[async_trait]
impl LocationProvider for ScriptedLocationProvider {
    async fn current_coordinate(&mut self) -> Result<Coordinate, LocationError> {
        self.readings
            .pop_front()
            .unwrap_or(Err(LocationError::Unavailable))
    }
}

#[derive(Debug, Default)]
pub struct RecordingNotifier {
    pub notifications: Vec<Notification>,
}

impl Notifier for RecordingNotifier {
    fn notify(&mut self, notification: &Notification) {
        self.notifications.push(notification.clone());
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RenderedFrame {
    pub geofence_ids: Vec<Id<Geofence>>,
    pub user_marker: Option<Coordinate>,
    pub viewport: Viewport,
}

#[derive(Debug, Default)]
pub struct RecordingRenderer {
    pub frames: Vec<RenderedFrame>,
}

impl RecordingRenderer {
    pub fn last(&self) -> Option<&RenderedFrame> {
        self.frames.last()
    }
}

impl Renderer for RecordingRenderer {
    fn render(
        &mut self,
        geofences: &[&Geofence],
        user_marker: Option<Coordinate>,
        viewport: &Viewport,
    ) {
        self.frames.push(RenderedFrame {
            geofence_ids: geofences.iter().map(|fence| fence.id.clone()).collect(),
            user_marker,
            viewport: *viewport,
        });
    }
}
