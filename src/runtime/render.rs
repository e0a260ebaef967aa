//! Software rendering of the dock into a softbuffer surface

use std::num::NonZeroU32;
use std::rc::Rc;
use std::time::Instant;

use anyhow::Result;
use softbuffer::{Context, Surface};
use winit::window::Window;

use dock_reorder::geometry::{layout_row, DockMetrics, Rect, RowLayout, Viewport};
use dock_reorder::model::{GapId, Item, SlotStatus};
use dock_reorder::view_model::DockView;

use super::tween::DisplayState;

const BACKGROUND: u32 = 0xFF1E1F22;
const SHELF: u32 = 0xFF2B2D30;
const EMPTY_SLOT: u32 = 0xFF3C3F41;
const SHELF_PADDING: f32 = 6.0;

/// Stable icon color for an item id
pub fn icon_color(item: &Item) -> u32 {
    // FNV-1a
    let hash = item
        .as_str()
        .bytes()
        .fold(0x811c9dc5u32, |h, b| (h ^ b as u32).wrapping_mul(0x01000193));
    // Keep every channel in the upper half so icons read against the shelf
    0xFF000000 | (hash & 0x007F7F7F) | 0x00808080
}

/// A frame buffer wrapper providing clipped rectangle fills
pub struct Frame<'a> {
    buffer: &'a mut [u32],
    width: usize,
    height: usize,
}

impl<'a> Frame<'a> {
    pub fn new(buffer: &'a mut [u32], width: usize, height: usize) -> Self {
        // Never index past a buffer smaller than the requested size
        let height = if width > 0 {
            height.min(buffer.len() / width)
        } else {
            0
        };
        Self {
            buffer,
            width,
            height,
        }
    }

    pub fn clear(&mut self, color: u32) {
        self.buffer.fill(color);
    }

    /// Fill a rectangle with a solid color, clipped to the frame
    pub fn fill_rect(&mut self, rect: Rect, color: u32) {
        let x0 = (rect.x.max(0.0) as usize).min(self.width);
        let y0 = (rect.y.max(0.0) as usize).min(self.height);
        let x1 = (rect.right().max(0.0) as usize).min(self.width);
        let y1 = (rect.bottom().max(0.0) as usize).min(self.height);

        for y in y0..y1 {
            let row_start = y * self.width;
            self.buffer[row_start + x0..row_start + x1].fill(color);
        }
    }
}

/// Result of drawing one frame
pub struct Painted {
    /// Geometry exactly as drawn
    pub row: RowLayout,
    /// True while transitions are still running
    pub animating: bool,
}

pub struct Renderer {
    surface: Surface<Rc<Window>, Rc<Window>>,
    width: u32,
    height: u32,
    display: DisplayState,
}

impl Renderer {
    pub fn new(window: Rc<Window>, context: &Context<Rc<Window>>) -> Result<Self> {
        let size = window.inner_size();
        let mut surface = Surface::new(context, Rc::clone(&window))
            .map_err(|e| anyhow::anyhow!("Failed to create surface: {}", e))?;

        let (width, height) = (size.width.max(1), size.height.max(1));
        surface
            .resize(non_zero(width), non_zero(height))
            .map_err(|e| anyhow::anyhow!("Failed to resize surface: {}", e))?;

        Ok(Self {
            surface,
            width,
            height,
            display: DisplayState::default(),
        })
    }

    pub fn resize(&mut self, width: u32, height: u32) -> Result<()> {
        self.width = width.max(1);
        self.height = height.max(1);
        self.surface
            .resize(non_zero(self.width), non_zero(self.height))
            .map_err(|e| anyhow::anyhow!("Failed to resize surface: {}", e))
    }

    pub fn render(
        &mut self,
        view: &DockView,
        metrics: &DockMetrics,
        viewport: Viewport,
    ) -> Result<Painted> {
        let now = Instant::now();
        self.display.sync(view, now);

        let gap_ids: Vec<GapId> = view.gaps.iter().map(|g| g.id).collect();
        let row = layout_row(
            &self.display.slot_widths(now),
            &self.display.gap_widths(now),
            &gap_ids,
            metrics,
            viewport,
            view.generation,
        );

        let mut buffer = self
            .surface
            .buffer_mut()
            .map_err(|e| anyhow::anyhow!("Failed to get surface buffer: {}", e))?;
        {
            let mut frame = Frame::new(&mut buffer, self.width as usize, self.height as usize);
            frame.clear(BACKGROUND);

            if let (Some(first), Some(last)) = (row.gaps.first(), row.gaps.last()) {
                let shelf = Rect::new(
                    first.1.x - SHELF_PADDING,
                    first.1.y - SHELF_PADDING,
                    last.1.right() - first.1.x + 2.0 * SHELF_PADDING,
                    metrics.slot_height + 2.0 * SHELF_PADDING,
                );
                frame.fill_rect(shelf, SHELF);
            }

            for (rect, slot) in row.slots.iter().zip(&view.slots) {
                match (slot.status, &slot.icon) {
                    (SlotStatus::Filled, Some(icon)) => frame.fill_rect(*rect, icon_color(icon)),
                    (SlotStatus::Hidden, _) => {}
                    _ => frame.fill_rect(*rect, EMPTY_SLOT),
                }
            }

            if let Some((rect, icon)) = self.display.avatar(now) {
                frame.fill_rect(rect, icon_color(icon));
            }
        }
        buffer
            .present()
            .map_err(|e| anyhow::anyhow!("Failed to present buffer: {}", e))?;

        Ok(Painted {
            row,
            animating: self.display.is_animating(now),
        })
    }
}

fn non_zero(value: u32) -> NonZeroU32 {
    NonZeroU32::new(value).unwrap_or(NonZeroU32::MIN)
}
