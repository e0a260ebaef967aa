//! Drag controller
//!
//! Owns a [`DockModel`] and a [`Scheduler`], feeds messages through
//! [`update`], and performs the returned commands. The runtime and the tests
//! both drive the dock through this type.

use crate::commands::Cmd;
use crate::geometry::{Point, RowLayout, Viewport};
use crate::messages::{GestureMsg, LayoutMsg, Msg};
use crate::model::{DockModel, DragStatus, Item};
use crate::scheduler::{Scheduler, VirtualClock};
use crate::update::update;
use crate::view_model::DockView;

pub struct DockController<S: Scheduler> {
    model: DockModel,
    scheduler: S,
}

impl<S: Scheduler> DockController<S> {
    pub fn new(model: DockModel, scheduler: S) -> Self {
        Self { model, scheduler }
    }

    /// Run one message through update and perform its commands
    ///
    /// Returns true if the dock needs a redraw.
    pub fn handle(&mut self, msg: Msg) -> bool {
        match update(&mut self.model, msg) {
            Some(cmd) => self.process_cmd(cmd),
            None => false,
        }
    }

    fn process_cmd(&mut self, cmd: Cmd) -> bool {
        match cmd {
            Cmd::None => false,
            Cmd::Redraw => true,
            Cmd::ScheduleAfter { delay_ms, msg } => {
                self.scheduler.schedule_after(delay_ms, *msg);
                false
            }
            Cmd::Batch(cmds) => cmds
                .into_iter()
                .fold(false, |redraw, cmd| self.process_cmd(cmd) || redraw),
        }
    }

    // =========================================================================
    // Gestures
    // =========================================================================

    /// Start dragging the slot at `index`
    pub fn pick(&mut self, index: usize) -> bool {
        self.handle(Msg::Gesture(GestureMsg::Pick(index)))
    }

    /// Start dragging whichever measured slot contains `point`
    pub fn pick_at(&mut self, point: Point) -> bool {
        self.handle(Msg::Gesture(GestureMsg::PressStart(point)))
    }

    pub fn move_to(&mut self, point: Point) -> bool {
        self.handle(Msg::Gesture(GestureMsg::PressMove(point)))
    }

    pub fn release(&mut self) -> bool {
        self.handle(Msg::Gesture(GestureMsg::PressEnd))
    }

    // =========================================================================
    // Layout
    // =========================================================================

    /// Report a measured row
    pub fn record_layout(&mut self, row: RowLayout) -> bool {
        self.handle(Msg::Layout(LayoutMsg::RowMeasured(row)))
    }

    /// Lay out the current view at its target widths and record it
    ///
    /// Stands in for a renderer that has finished its transitions.
    pub fn relayout(&mut self) -> RowLayout {
        let view = self.view();
        let row = RowLayout::from_view(&view, &self.model.metrics, self.model.viewport);
        self.record_layout(row.clone());
        row
    }

    pub fn set_viewport(&mut self, viewport: Viewport) -> bool {
        self.handle(Msg::Layout(LayoutMsg::Viewport {
            width: viewport.width,
            height: viewport.height,
        }))
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn view(&self) -> DockView {
        DockView::derive(&self.model)
    }

    pub fn model(&self) -> &DockModel {
        &self.model
    }

    pub fn status(&self) -> DragStatus {
        self.model.drag.status
    }

    pub fn items(&self) -> &[Item] {
        self.model.items()
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }
}

impl DockController<VirtualClock> {
    /// Advance virtual time by `ms`, delivering every timer that falls due
    ///
    /// Timers scheduled by delivered messages also fire if they fall inside
    /// the window. Returns true if any delivery asked for a redraw.
    pub fn advance(&mut self, ms: u64) -> bool {
        let until = self.scheduler.now_ms() + ms;
        let mut redraw = false;
        while let Some(msg) = self.scheduler.pop_due(until) {
            redraw |= self.handle(msg);
        }
        self.scheduler.set_now(until);
        redraw
    }
}
