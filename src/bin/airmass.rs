//!Overlay airmass curves for three targets from one site onto a single
//!figure, then render it to an HTML file.

use chrono::{FixedOffset, NaiveDateTime};
use log::info;
use plotly::color::NamedColor;
use plotly::common::DashType;

use sky_plan::plots::{plot_airmass, AirmassOptions, TraceStyle};
use sky_plan::{FixedTarget, Observer};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let hawaii = FixedOffset::west_opt(10 * 3600).ok_or("bad utc offset")?;
    let observer = Observer::new([19.8285, -155.48025, 4163.], "Subaru Telescope")
        .with_atmosphere(615., 0., 0.11)
        .with_timezone(hawaii)
        .with_description("Subaru Telescope on Mauna Kea, Hawaii");

    let sirius = FixedTarget::from_sexagesimal("06h45m08.9173s", "-16d42m58.017s", "Sirius")?;
    let polaris = FixedTarget::from_sexagesimal("02h31m49.09s", "+89d15m50.8s", "Polaris")?;
    let pollux = FixedTarget::from_sexagesimal("07h45m19.4s", "+28d01m35s", "Pollux")?;

    let observe_time =
        NaiveDateTime::parse_from_str("2015-06-15 23:30:00", "%Y-%m-%d %H:%M:%S")?.and_utc();

    let polaris_style = TraceStyle::new().dash(DashType::Dash).color(NamedColor::Red);
    let pollux_style = TraceStyle::new()
        .dash(DashType::Solid)
        .color(NamedColor::Green);

    let options = AirmassOptions {
        legend_anchor: Some((1.0, 0.5)),
        ..AirmassOptions::default()
    };
    let plot = plot_airmass(&sirius, &observer, observe_time, None, None, Some(options))?;
    let plot = plot_airmass(
        &polaris,
        &observer,
        observe_time,
        Some(plot),
        Some(polaris_style),
        None,
    )?;
    let plot = plot_airmass(
        &pollux,
        &observer,
        observe_time,
        Some(plot),
        Some(pollux_style),
        None,
    )?;

    std::fs::write("airmass.html", plot.to_html())?;
    info!("rendered airmass overlay for 3 targets to airmass.html");
    Ok(())
}
