use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gtk4 as gtk;
use gtk4::prelude::*;
use tracing::warn;

use crate::api::PlotEngine;
use crate::error::{PlotError, PlotResult};
use crate::interaction::WheelInput;
use crate::render::CairoRenderer;

/// Shared handle to the engine driven by GTK callbacks.
pub type SharedPlotEngine = Rc<RefCell<PlotEngine<CairoRenderer>>>;

/// Mounts a [`PlotEngine`] on a `gtk::DrawingArea`.
///
/// Pointer motion, drag, wheel and double-click controllers feed the engine;
/// a frame-clock tick callback drives animations and the wheel idle timer.
/// Point-click handlers run while the engine is borrowed and must not borrow
/// it again.
pub struct GtkPlotAdapter {
    engine: SharedPlotEngine,
    drawing_area: gtk::DrawingArea,
}

impl GtkPlotAdapter {
    #[must_use]
    pub fn new(engine: PlotEngine<CairoRenderer>) -> Self {
        let viewport = engine.viewport();
        let engine = Rc::new(RefCell::new(engine));

        let drawing_area = gtk::DrawingArea::new();
        drawing_area.set_content_width(viewport.width as i32);
        drawing_area.set_content_height(viewport.height as i32);
        drawing_area.set_draw_func({
            let engine = Rc::clone(&engine);
            move |_widget, context, width, height| {
                if width <= 0 || height <= 0 {
                    return;
                }
                let Ok(mut plot) = engine.try_borrow_mut() else {
                    return;
                };
                if let Err(err) = plot.render_on_cairo_context(context) {
                    warn!(error = %err, "plot draw failed");
                }
            }
        });

        attach_pointer_controllers(&drawing_area, &engine);
        attach_frame_clock(&drawing_area, &engine);

        Self {
            engine,
            drawing_area,
        }
    }

    #[must_use]
    pub fn engine(&self) -> SharedPlotEngine {
        Rc::clone(&self.engine)
    }

    #[must_use]
    pub fn drawing_area(&self) -> &gtk::DrawingArea {
        &self.drawing_area
    }

    /// Runs `update` on the engine and schedules a redraw.
    pub fn update_engine<F>(&self, update: F) -> PlotResult<()>
    where
        F: FnOnce(&mut PlotEngine<CairoRenderer>) -> PlotResult<()>,
    {
        let mut engine = self.engine.try_borrow_mut().map_err(|_| {
            PlotError::Interaction("plot engine is already borrowed".to_owned())
        })?;
        let result = update(&mut engine);
        drop(engine);
        self.drawing_area.queue_draw();
        result
    }
}

fn attach_pointer_controllers(drawing_area: &gtk::DrawingArea, engine: &SharedPlotEngine) {
    let pointer = Rc::new(Cell::new((0.0, 0.0)));

    let motion = gtk::EventControllerMotion::new();
    {
        let engine = Rc::clone(engine);
        let drawing_area = drawing_area.clone();
        let pointer = Rc::clone(&pointer);
        motion.connect_motion(move |_, x, y| {
            pointer.set((x, y));
            if let Ok(mut plot) = engine.try_borrow_mut() {
                if let Err(err) = plot.pointer_move(x, y) {
                    warn!(error = %err, "pointer move rejected");
                }
            }
            drawing_area.queue_draw();
        });
    }
    {
        let engine = Rc::clone(engine);
        let drawing_area = drawing_area.clone();
        motion.connect_leave(move |_| {
            if let Ok(mut plot) = engine.try_borrow_mut() {
                plot.pointer_leave();
            }
            drawing_area.queue_draw();
        });
    }
    drawing_area.add_controller(motion);

    let drag = gtk::GestureDrag::new();
    {
        let engine = Rc::clone(engine);
        drag.connect_drag_begin(move |_, start_x, start_y| {
            if let Ok(mut plot) = engine.try_borrow_mut() {
                plot.pointer_down(start_x, start_y);
            }
        });
    }
    {
        let engine = Rc::clone(engine);
        let drawing_area = drawing_area.clone();
        drag.connect_drag_update(move |gesture, offset_x, offset_y| {
            let Some((start_x, start_y)) = gesture.start_point() else {
                return;
            };
            if let Ok(mut plot) = engine.try_borrow_mut() {
                if let Err(err) = plot.pointer_move(start_x + offset_x, start_y + offset_y) {
                    warn!(error = %err, "drag update rejected");
                }
            }
            drawing_area.queue_draw();
        });
    }
    {
        let engine = Rc::clone(engine);
        let drawing_area = drawing_area.clone();
        drag.connect_drag_end(move |gesture, offset_x, offset_y| {
            let (start_x, start_y) = gesture.start_point().unwrap_or_default();
            if let Ok(mut plot) = engine.try_borrow_mut() {
                if let Err(err) = plot.pointer_up(start_x + offset_x, start_y + offset_y) {
                    warn!(error = %err, "pointer release rejected");
                }
            }
            drawing_area.queue_draw();
        });
    }
    drawing_area.add_controller(drag);

    let scroll = gtk::EventControllerScroll::new(gtk::EventControllerScrollFlags::VERTICAL);
    {
        let engine = Rc::clone(engine);
        let drawing_area = drawing_area.clone();
        let pointer = Rc::clone(&pointer);
        scroll.connect_scroll(move |controller, _dx, dy| {
            let zoom_modifier = controller
                .current_event_state()
                .contains(gtk::gdk::ModifierType::CONTROL_MASK);
            let (x, y) = pointer.get();
            if let Ok(mut plot) = engine.try_borrow_mut() {
                let input = WheelInput {
                    zoom_modifier,
                    ..WheelInput::lines(dy)
                };
                if let Err(err) = plot.wheel(x, y, input) {
                    warn!(error = %err, "wheel zoom rejected");
                }
            }
            drawing_area.queue_draw();
            gtk::glib::Propagation::Stop
        });
    }
    drawing_area.add_controller(scroll);

    let click = gtk::GestureClick::new();
    {
        let engine = Rc::clone(engine);
        let drawing_area = drawing_area.clone();
        click.connect_pressed(move |gesture, n_press, x, y| {
            if n_press != 2 {
                return;
            }
            let zoom_out = gesture
                .current_event_state()
                .contains(gtk::gdk::ModifierType::SHIFT_MASK);
            if let Ok(mut plot) = engine.try_borrow_mut() {
                if let Err(err) = plot.double_click(x, y, zoom_out) {
                    warn!(error = %err, "double-click zoom rejected");
                }
            }
            drawing_area.queue_draw();
        });
    }
    drawing_area.add_controller(click);
}

fn attach_frame_clock(drawing_area: &gtk::DrawingArea, engine: &SharedPlotEngine) {
    let engine = Rc::clone(engine);
    let last_frame_us: Cell<Option<i64>> = Cell::new(None);
    drawing_area.add_tick_callback(move |widget, clock| {
        let now = clock.frame_time();
        let delta_seconds = last_frame_us
            .replace(Some(now))
            .map_or(0.0, |last| (now - last).max(0) as f64 / 1_000_000.0);
        if let Ok(mut plot) = engine.try_borrow_mut() {
            match plot.tick(delta_seconds) {
                Ok(true) => widget.queue_draw(),
                Ok(false) => {}
                Err(err) => warn!(error = %err, "frame tick rejected"),
            }
        }
        gtk::glib::ControlFlow::Continue
    });
}
