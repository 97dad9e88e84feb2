//!Plotting surface for observation planning quantities.
//!
//!Re-exports every public plotting function of the time-dependent and
//!sky-position submodules so callers import one namespace. The list is
//!explicit on purpose, no glob re-exports.

use chrono::{DateTime, FixedOffset, Utc};
use plotly::common::{DashType, Line, Marker};
use plotly::color::NamedColor;

pub mod sky;
pub mod time_dependent;

pub use sky::plot_sky;
pub use time_dependent::plot_airmass;
pub use time_dependent::plot_altitude;
pub use time_dependent::AirmassOptions;

///Per-call style overrides distinguishing overlaid curves. Only the
///fields that are set are forwarded to the renderer; an override never
///persists past the call it was supplied to.
#[derive(Clone, Debug, Default)]
pub struct TraceStyle {
    pub color: Option<NamedColor>,
    pub dash: Option<DashType>,
    pub width: Option<f64>,
}

impl TraceStyle {
    pub fn new() -> TraceStyle {
        TraceStyle::default()
    }

    pub fn color(mut self, color: NamedColor) -> TraceStyle {
        self.color = Some(color);
        self
    }

    pub fn dash(mut self, dash: DashType) -> TraceStyle {
        self.dash = Some(dash);
        self
    }

    pub fn width(mut self, width: f64) -> TraceStyle {
        self.width = Some(width);
        self
    }

    pub(crate) fn line(&self) -> Line {
        let mut line = Line::new();
        if let Some(color) = self.color.clone() {
            line = line.color(color);
        }
        if let Some(dash) = self.dash.clone() {
            line = line.dash(dash);
        }
        if let Some(width) = self.width {
            line = line.width(width);
        }
        line
    }

    pub(crate) fn marker(&self) -> Marker {
        let mut marker = Marker::new();
        if let Some(color) = self.color.clone() {
            marker = marker.color(color);
        }
        marker
    }
}

///X axis / hover label for one sample, optionally shifted into the
///observer's timezone.
pub(crate) fn format_time(time: DateTime<Utc>, timezone: Option<FixedOffset>) -> String {
    match timezone {
        Some(tz) => time.with_timezone(&tz).format("%Y-%m-%d %H:%M").to_string(),
        None => time.format("%Y-%m-%d %H:%M").to_string(),
    }
}

#[cfg(test)]
mod tests {
    use crate::helpers::quick_gen_datetime;
    use crate::{FixedTarget, Observer};

    ///Both submodules' plotting functions are reachable through the
    ///namespace root and draw onto one shared figure.
    #[test]
    fn test_namespace_surface() {
        let observer = Observer::new([19.8285, -155.48025, 4163.], "Subaru");
        let target =
            FixedTarget::from_sexagesimal("06h45m08.9173s", "-16d42m58.017s", "Sirius").unwrap();
        let time = quick_gen_datetime(2015, 6, 15, 23, 30, 0);

        let plot = crate::plots::plot_airmass(&target, &observer, time, None, None, None).unwrap();
        let plot =
            crate::plots::plot_altitude(&target, &observer, time, Some(plot), None).unwrap();
        let plot = crate::plots::plot_sky(&target, &observer, time, Some(plot), None).unwrap();

        let json: serde_json::Value = serde_json::from_str(&plot.to_json()).unwrap();
        assert_eq!(json["data"].as_array().unwrap().len(), 3);
    }
}
