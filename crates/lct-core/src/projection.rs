//! Projection of samples onto a plotting surface
//!
//! Maps a (domain, value) pair linearly onto the pixel box
//! `[padding, dimension − padding]`, with the y axis inverted so larger values
//! sit higher on the surface. Logarithmic axes take `log10` of the value first
//! and then apply the same linear map.

use serde::{Deserialize, Serialize};

/// Fixed-size drawing surface with a uniform inner padding
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    pub padding: f64,
}

impl Viewport {
    pub const fn new(width: f64, height: f64, padding: f64) -> Self {
        Self {
            width,
            height,
            padding,
        }
    }

    /// Width of the padded plot area
    #[inline]
    pub fn plot_width(&self) -> f64 {
        self.width - 2.0 * self.padding
    }

    /// Height of the padded plot area
    #[inline]
    pub fn plot_height(&self) -> f64 {
        self.height - 2.0 * self.padding
    }

    #[inline]
    pub fn left(&self) -> f64 {
        self.padding
    }

    #[inline]
    pub fn right(&self) -> f64 {
        self.width - self.padding
    }

    #[inline]
    pub fn top(&self) -> f64 {
        self.padding
    }

    #[inline]
    pub fn bottom(&self) -> f64 {
        self.height - self.padding
    }
}

/// Axis scale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AxisScale {
    #[default]
    Linear,
    /// Bounds are decades; values are mapped through log10
    Log10,
}

/// Value range of one plot axis
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Axis {
    pub min: f64,
    pub max: f64,
    pub scale: AxisScale,
}

impl Axis {
    pub const fn linear(min: f64, max: f64) -> Self {
        Self {
            min,
            max,
            scale: AxisScale::Linear,
        }
    }

    /// Logarithmic axis spanning `10^min_exp ..= 10^max_exp`
    pub const fn log10(min_exp: f64, max_exp: f64) -> Self {
        Self {
            min: min_exp,
            max: max_exp,
            scale: AxisScale::Log10,
        }
    }

    /// Position of `value` along the axis, 0 at `min` and 1 at `max`
    pub fn fraction(&self, value: f64) -> f64 {
        let v = match self.scale {
            AxisScale::Linear => value,
            AxisScale::Log10 => value.log10(),
        };
        (v - self.min) / (self.max - self.min)
    }
}

/// A point on the plotting surface (pixels, y pointing down)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotPoint {
    pub x: f64,
    pub y: f64,
}

/// Stateless mapping from data space to a viewport
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projector {
    pub viewport: Viewport,
    pub x_axis: Axis,
    pub y_axis: Axis,
}

impl Projector {
    pub fn new(viewport: Viewport, x_axis: Axis, y_axis: Axis) -> Self {
        Self {
            viewport,
            x_axis,
            y_axis,
        }
    }

    /// Horizontal pixel of a domain value
    #[inline]
    pub fn px(&self, x: f64) -> f64 {
        self.viewport.padding + self.x_axis.fraction(x) * self.viewport.plot_width()
    }

    /// Vertical pixel of an output value (inverted)
    #[inline]
    pub fn py(&self, y: f64) -> f64 {
        self.viewport.height
            - self.viewport.padding
            - self.y_axis.fraction(y) * self.viewport.plot_height()
    }

    /// Project one sample; `None` when either coordinate is not finite
    pub fn project(&self, x: f64, y: f64) -> Option<PlotPoint> {
        let p = PlotPoint {
            x: self.px(x),
            y: self.py(y),
        };
        (p.x.is_finite() && p.y.is_finite()).then_some(p)
    }

    /// Project a curve, splitting it wherever a sample cannot be drawn
    ///
    /// Each returned segment is a run of consecutive drawable samples; empty
    /// runs are dropped.
    pub fn segments<I>(&self, samples: I) -> Vec<Vec<PlotPoint>>
    where
        I: IntoIterator<Item = (f64, f64)>,
    {
        let mut segments = Vec::new();
        let mut current = Vec::new();
        for (x, y) in samples {
            match self.project(x, y) {
                Some(p) => current.push(p),
                None if !current.is_empty() => segments.push(std::mem::take(&mut current)),
                None => {}
            }
        }
        if !current.is_empty() {
            segments.push(current);
        }
        segments
    }
}
