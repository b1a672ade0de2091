//! The crop widget handle.
//!
//! `CropWidget` wires the state store, load lifecycle, drag controller and
//! event channel together behind one chainable API. Hosts own the window and
//! the decoder; they forward pointer input and decode results to the widget.

use image::{DynamicImage, RgbaImage};
use tracing::{debug, info};

use crate::config::CropConfig;
use crate::drag::DragController;
use crate::error::{CropError, Result};
use crate::events::{CropEvent, EventChannel};
use crate::geometry::{Position, Size};
use crate::lifecycle::{LoadLifecycle, LoadPhase, LoadTicket};
use crate::moves::{self, MoveTarget};
use crate::render::{encode_data_uri, render_crop};
use crate::source::natural_size;
use crate::state::{StatePatch, StateSnapshot, StateStore};

/// The region hosting the widget.
pub trait Container {
    /// Current on-screen size of the region.
    fn measure(&self) -> Size;
}

/// A fixed-size region.
impl Container for Size {
    fn measure(&self) -> Size {
        *self
    }
}

pub struct CropWidget<C: Container> {
    container: C,
    config: CropConfig,
    store: StateStore,
    lifecycle: LoadLifecycle,
    drag: DragController,
    events: EventChannel,
    /// Decoded pixels of the current source, present once loaded.
    image: Option<RgbaImage>,
}

impl<C: Container> CropWidget<C> {
    pub fn create(container: C) -> Self {
        Self::with_config(container, CropConfig::default())
    }

    pub fn with_config(container: C, config: CropConfig) -> Self {
        let viewport = container.measure();
        Self {
            container,
            config,
            store: StateStore::new(viewport),
            lifecycle: LoadLifecycle::new(),
            drag: DragController::new(),
            events: EventChannel::new(),
            image: None,
        }
    }

    pub fn container(&self) -> &C {
        &self.container
    }

    pub fn container_mut(&mut self) -> &mut C {
        &mut self.container
    }

    pub fn config(&self) -> &CropConfig {
        &self.config
    }

    /// Replace the configuration. Takes effect from the next load or crop.
    pub fn set_config(&mut self, config: CropConfig) -> &mut Self {
        self.config = config;
        self
    }

    /// Install the visual-update hook, called after every state mutation.
    pub fn on_repaint(&mut self, hook: impl FnMut(&StateSnapshot) + 'static) -> &mut Self {
        self.store.on_repaint(Box::new(hook));
        self
    }

    /// Start loading `url`. The natural size is forgotten until the host
    /// reports the decoded image through [`CropWidget::finish_load`] with the
    /// ticket from [`CropWidget::pending_load`].
    pub fn load(&mut self, url: &str) -> &mut Self {
        self.lifecycle.begin(url);
        self.image = None;
        self.store.set_state(StatePatch::image_size(Size::ZERO));
        self.events.publish(CropEvent::LoadStart);
        if self.config.behavior.center_on_load {
            self.lifecycle.defer(MoveTarget::Center);
        }
        self
    }

    pub fn pending_load(&self) -> Option<&LoadTicket> {
        self.lifecycle.pending()
    }

    pub fn load_phase(&self) -> LoadPhase {
        self.lifecycle.phase()
    }

    /// Source of the latest load request.
    pub fn source(&self) -> Option<&str> {
        self.lifecycle.source()
    }

    /// Decode completion. Results for a ticket that has since been replaced
    /// by a newer `load` are dropped.
    pub fn finish_load(&mut self, ticket: &LoadTicket, image: DynamicImage) -> &mut Self {
        if !self.lifecycle.complete(ticket) {
            return self;
        }

        let size = natural_size(&image);
        self.image = Some(image.to_rgba8());
        self.store.set_state(StatePatch::image_size(size));
        self.events.publish(CropEvent::LoadEnd);

        if let Some(target) = self.lifecycle.take_deferred() {
            debug!(command = %target, "Replaying deferred move");
            moves::apply(&mut self.store, target);
        }
        self
    }

    /// Run a move command now, or after the pending load if the natural size
    /// is not known yet.
    pub fn move_to(&mut self, target: MoveTarget) -> &mut Self {
        if self.store.loading() {
            debug!(command = %target, "Deferring move until load completes");
            self.lifecycle.defer(target);
        } else {
            moves::apply(&mut self.store, target);
        }
        self
    }

    /// [`CropWidget::move_to`] with the target given by name, e.g. `"center"`.
    pub fn move_to_named(&mut self, name: &str) -> Result<&mut Self> {
        let target = name.parse::<MoveTarget>()?;
        Ok(self.move_to(target))
    }

    /// Re-measure the container and feed its size into the state.
    pub fn update_viewport_size(&mut self) -> &mut Self {
        let size = self.container.measure();
        self.store.set_state(StatePatch::viewport_size(size));
        self
    }

    pub fn subscribe(
        &mut self,
        event: impl AsRef<str>,
        callback: impl FnMut() + 'static,
    ) -> &mut Self {
        self.events.subscribe(event, callback);
        self
    }

    /// Apply a partial state update. Out-of-range zoom and position are
    /// clamped, never rejected.
    pub fn set_state(&mut self, patch: StatePatch) -> &mut Self {
        self.store.set_state(patch);
        self
    }

    pub fn get_state(&self) -> StateSnapshot {
        self.store.get_state()
    }

    /// Pointer pressed inside the container.
    pub fn pointer_down(&mut self, pointer: Position) -> &mut Self {
        let position = self.store.get_state().position;
        self.drag.start(pointer, position);
        self
    }

    /// Pointer moved anywhere in the host window. Ignored unless a drag
    /// started on this widget.
    pub fn pointer_move(&mut self, pointer: Position) -> &mut Self {
        if let Some(position) = self.drag.drag_to(pointer) {
            self.store.set_state(StatePatch::position(position));
        }
        self
    }

    /// Pointer released anywhere in the host window.
    pub fn pointer_up(&mut self) -> &mut Self {
        self.drag.end();
        self
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    /// Decoded pixels of the loaded image.
    pub fn image(&self) -> Option<&RgbaImage> {
        self.image.as_ref()
    }

    /// The visible region as a bitmap the size of the viewport.
    pub fn crop_image(&self) -> Result<RgbaImage> {
        let source = self.image.as_ref().ok_or(CropError::NotReady)?;
        render_crop(source, &self.store.get_state())
    }

    /// The visible region encoded as a base64 data URI.
    pub fn crop(&self) -> Result<String> {
        let cropped = self.crop_image()?;
        let uri = encode_data_uri(&cropped, &self.config.output)?;
        info!(
            width = cropped.width(),
            height = cropped.height(),
            format = %self.config.output.format,
            "Cropped visible region"
        );
        Ok(uri)
    }
}
