use crate::core::{cardinal_spline, path_length};
use crate::error::PlotResult;
use crate::render::{
    CirclePrimitive, Color, LinePrimitive, PathPrimitive, RectPrimitive, RenderFrame, Renderer,
    TextHAlign, TextPrimitive,
};

use super::{PlotEngine, log_tick_labels};

const AXIS_LINE_WIDTH_PX: f64 = 1.0;
const TICK_LABEL_GAP_PX: f64 = 3.0;
/// Ticks this close outside the axis still count as on it.
const EDGE_TOLERANCE_PX: f64 = 0.5;
const X_TITLE_OFFSET: (f64, f64) = (15.0, 40.0);
const Y_TITLE_INSET: (f64, f64) = (20.0, 35.0);
const TOOLTIP_PADDING_PX: f64 = 8.0;
const TOOLTIP_LINE_HEIGHT: f64 = 1.4;
const TOOLTIP_CORNER_RADIUS_PX: f64 = 4.0;
const TOOLTIP_BACKGROUND: Color = Color::rgba(1.0, 1.0, 1.0, 0.95);
const TOOLTIP_BORDER: Color = Color::rgb(0.6, 0.6, 0.6);
const TOOLTIP_TEXT: Color = Color::rgb(0.1, 0.1, 0.1);

impl<R: Renderer> PlotEngine<R> {
    /// Materializes the current plot state into surface-space primitives.
    ///
    /// Draw order: hit-catcher, axes, path, markers (hovered last), tooltip.
    pub fn build_render_frame(&self) -> PlotResult<RenderFrame> {
        let mut frame = RenderFrame::new(self.viewport());
        let origin = (self.config.margin.left, self.config.margin.top);
        let size = self.config.size;

        frame.rects.push(RectPrimitive::new(
            origin.0,
            origin.1,
            size.width,
            size.height,
            Color::TRANSPARENT,
        ));
        self.append_x_axis(&mut frame, origin)?;
        self.append_y_axis(&mut frame, origin)?;
        self.append_axis_titles(&mut frame, origin);
        self.append_path(&mut frame, origin);
        self.append_markers(&mut frame, origin);
        self.append_tooltip(&mut frame);
        Ok(frame)
    }

    fn append_x_axis(&self, frame: &mut RenderFrame, origin: (f64, f64)) -> PlotResult<()> {
        let style = &self.config.axes;
        let scale = self.visible_scales.x;
        let width = self.config.size.width;
        let axis_y = origin.1 + self.config.size.height;

        frame.lines.push(LinePrimitive::new(
            origin.0,
            axis_y,
            origin.0 + width,
            axis_y,
            AXIS_LINE_WIDTH_PX,
            style.color,
        ));

        let ticks = scale.ticks(style.x_tick_count);
        let labels = log_tick_labels(&ticks, style.x_tick_count);
        for (tick, label) in ticks.into_iter().zip(labels) {
            let px = scale.scale(tick)?;
            if !(-EDGE_TOLERANCE_PX..=width + EDGE_TOLERANCE_PX).contains(&px) {
                continue;
            }
            let x = origin.0 + px;
            if style.tick_size_px > 0.0 {
                frame.lines.push(LinePrimitive::new(
                    x,
                    axis_y,
                    x,
                    axis_y + style.tick_size_px,
                    AXIS_LINE_WIDTH_PX,
                    style.color,
                ));
            }
            if !label.is_empty() {
                frame.texts.push(TextPrimitive::new(
                    label,
                    x,
                    axis_y + style.tick_size_px + TICK_LABEL_GAP_PX,
                    style.font_size_px,
                    style.color,
                    TextHAlign::Center,
                ));
            }
        }
        Ok(())
    }

    fn append_y_axis(&self, frame: &mut RenderFrame, origin: (f64, f64)) -> PlotResult<()> {
        let style = &self.config.axes;
        let scale = self.visible_scales.y;
        let height = self.config.size.height;
        let axis_x = origin.0;

        frame.lines.push(LinePrimitive::new(
            axis_x,
            origin.1,
            axis_x,
            origin.1 + height,
            AXIS_LINE_WIDTH_PX,
            style.color,
        ));

        let ticks = scale.ticks(style.y_tick_count);
        let labels = log_tick_labels(&ticks, style.y_tick_count);
        for (tick, label) in ticks.into_iter().zip(labels) {
            let py = scale.scale(tick)?;
            if !(-EDGE_TOLERANCE_PX..=height + EDGE_TOLERANCE_PX).contains(&py) {
                continue;
            }
            let y = origin.1 + py;
            if style.tick_size_px > 0.0 {
                frame.lines.push(LinePrimitive::new(
                    axis_x - style.tick_size_px,
                    y,
                    axis_x,
                    y,
                    AXIS_LINE_WIDTH_PX,
                    style.color,
                ));
            }
            if !label.is_empty() {
                frame.texts.push(TextPrimitive::new(
                    label,
                    axis_x - style.tick_size_px - TICK_LABEL_GAP_PX,
                    y - style.font_size_px / 2.0,
                    style.font_size_px,
                    style.color,
                    TextHAlign::Right,
                ));
            }
        }
        Ok(())
    }

    fn append_axis_titles(&self, frame: &mut RenderFrame, origin: (f64, f64)) {
        let style = &self.config.axes;
        let margin = self.config.margin;
        let size = self.config.size;

        if let Some(title) = style.x_title.as_deref().filter(|title| !title.is_empty()) {
            frame.texts.push(TextPrimitive::new(
                title,
                origin.0 + size.width + X_TITLE_OFFSET.0,
                origin.1 + size.height + X_TITLE_OFFSET.1,
                style.font_size_px,
                style.color,
                TextHAlign::Right,
            ));
        }
        if let Some(title) = style.y_title.as_deref().filter(|title| !title.is_empty()) {
            // Rotated a quarter turn counter-clockwise; the title ends near
            // the top of the y axis.
            frame.texts.push(
                TextPrimitive::new(
                    title,
                    origin.0 - margin.left + Y_TITLE_INSET.0,
                    origin.1 + margin.top - Y_TITLE_INSET.1,
                    style.font_size_px,
                    style.color,
                    TextHAlign::Right,
                )
                .rotated(-90.0),
            );
        }
    }

    fn append_path(&self, frame: &mut RenderFrame, origin: (f64, f64)) {
        let Some(node) = self.scene.path() else {
            return;
        };
        if self.base_projection.len() < 2 {
            return;
        }

        let screen: Vec<(f64, f64)> = self
            .base_projection
            .iter()
            .map(|point| {
                let (x, y) = self.transform.apply((point.x, point.y));
                (origin.0 + x, origin.1 + y)
            })
            .collect();
        let style = self.config.path;
        let segments = cardinal_spline(&screen, style.tension);
        // The dash tracks the on-screen length, so zooming re-measures it.
        let length = path_length(&segments);
        let (dash_array, dash_offset) = if length > 0.0 {
            (Some(length), length * (1.0 - node.revealed()))
        } else {
            (None, 0.0)
        };

        frame.paths.push(PathPrimitive {
            segments,
            stroke_width: style.stroke_width_px,
            color: style.color,
            opacity: 1.0,
            dash_array,
            dash_offset,
        });
    }

    fn append_markers(&self, frame: &mut RenderFrame, origin: (f64, f64)) {
        let style = self.config.markers;
        let hovered = self.hovered_index();
        let mut hovered_circle = None;

        for (_, node) in self.scene.markers() {
            let (Some(point), Some(projected)) = (
                self.dataset.get(node.index),
                self.base_projection.get(node.index),
            ) else {
                continue;
            };
            let (x, y) = self.transform.apply((projected.x, projected.y));
            let is_hovered = hovered == Some(node.index);
            let circle = CirclePrimitive::new(
                origin.0 + x,
                origin.1 + y,
                if is_hovered {
                    style.hover_radius_px
                } else {
                    style.radius_px
                },
                self.visible_scales.color.color(point.z),
                node.opacity(),
            );
            if is_hovered {
                hovered_circle = Some(circle);
            } else {
                frame.circles.push(circle);
            }
        }
        frame.circles.extend(hovered_circle);
    }

    fn append_tooltip(&self, frame: &mut RenderFrame) {
        let Some(tooltip) = &self.tooltip else {
            return;
        };
        let behavior = &self.config.tooltip;
        let line_height = behavior.font_size_px * TOOLTIP_LINE_HEIGHT;
        let rows = 1 + tooltip.lines.len();
        let height = TOOLTIP_PADDING_PX * 2.0 + line_height * rows as f64;

        frame.overlay_rects.push(
            RectPrimitive::new(
                tooltip.left,
                tooltip.top,
                behavior.width_px,
                height,
                TOOLTIP_BACKGROUND,
            )
            .with_border(1.0, TOOLTIP_BORDER)
            .with_corner_radius(TOOLTIP_CORNER_RADIUS_PX),
        );

        let x = tooltip.left + TOOLTIP_PADDING_PX;
        let rows = std::iter::once(&tooltip.title).chain(&tooltip.lines);
        for (row, text) in rows.enumerate() {
            if text.is_empty() {
                continue;
            }
            frame.overlay_texts.push(TextPrimitive::new(
                text.clone(),
                x,
                tooltip.top + TOOLTIP_PADDING_PX + line_height * row as f64,
                behavior.font_size_px,
                TOOLTIP_TEXT,
                TextHAlign::Left,
            ));
        }
    }
}
