//! Figure builders behind the two dashboard callbacks.
//!
//! Both functions are pure: the same dataset and inputs always produce the
//! same [`Figure`].

use std::collections::BTreeMap;

use shared::{
    domain::{OutcomeClass, PayloadRange, SiteSelection},
    protocol::{Axis, Figure, FigureLayout, Legend, PieTrace, ScatterTrace, Title, Trace},
};
use storage::Dataset;

pub const PAYLOAD_AXIS_TITLE: &str = "Payload Mass (kg)";
pub const CLASS_AXIS_TITLE: &str = "class";
pub const BOOSTER_LEGEND_TITLE: &str = "Booster Version Category";

/// Successful launches per site for [`SiteSelection::All`]; otherwise the
/// success/failure split of one site.
pub fn success_pie_chart(dataset: &Dataset, site: &SiteSelection) -> Figure {
    let (labels, values, title) = match site {
        SiteSelection::All => {
            let values: Vec<u64> = dataset
                .sites()
                .iter()
                .map(|name| {
                    dataset
                        .records()
                        .iter()
                        .filter(|record| &record.launch_site == name)
                        .map(|record| u64::from(record.class.as_u8()))
                        .sum::<u64>()
                })
                .collect();
            (
                dataset.sites().to_vec(),
                values,
                "Total Success Launches By Site".to_string(),
            )
        }
        SiteSelection::Site(name) => {
            let mut counts: BTreeMap<OutcomeClass, u64> = BTreeMap::new();
            for record in dataset.records_for_site(site) {
                *counts.entry(record.class).or_default() += 1;
            }
            let (labels, values): (Vec<String>, Vec<u64>) = counts
                .into_iter()
                .map(|(class, count)| (class.as_u8().to_string(), count))
                .unzip();
            (
                labels,
                values,
                format!("Total Success Launches for site {name}"),
            )
        }
    };

    Figure {
        data: vec![Trace::Pie(PieTrace { labels, values })],
        layout: FigureLayout {
            title: Title::new(title),
            xaxis: None,
            yaxis: None,
            legend: None,
        },
    }
}

/// Payload against outcome for the rows kept by both filters, one marker
/// trace per booster version category.
pub fn payload_scatter_chart(
    dataset: &Dataset,
    site: &SiteSelection,
    range: PayloadRange,
) -> Figure {
    let mut traces: Vec<ScatterTrace> = Vec::new();
    for record in dataset
        .records_for_site(site)
        .filter(|record| range.contains(record.payload_mass_kg))
    {
        let category = &record.booster_version_category;
        let index = match traces.iter().position(|trace| &trace.name == category) {
            Some(index) => index,
            None => {
                traces.push(ScatterTrace {
                    name: category.clone(),
                    legendgroup: category.clone(),
                    mode: "markers".to_string(),
                    x: Vec::new(),
                    y: Vec::new(),
                    text: Vec::new(),
                });
                traces.len() - 1
            }
        };
        let trace = &mut traces[index];
        trace.x.push(record.payload_mass_kg);
        trace.y.push(record.class.as_u8());
        trace.text.push(record.launch_site.clone());
    }

    let title = match site {
        SiteSelection::All => "Correlation between Payload and Success for all Sites".to_string(),
        SiteSelection::Site(name) => {
            format!("Correlation between Payload and Success for site {name}")
        }
    };

    Figure {
        data: traces.into_iter().map(Trace::Scatter).collect(),
        layout: FigureLayout {
            title: Title::new(title),
            xaxis: Some(Axis {
                title: Title::new(PAYLOAD_AXIS_TITLE),
            }),
            yaxis: Some(Axis {
                title: Title::new(CLASS_AXIS_TITLE),
            }),
            legend: Some(Legend {
                title: Title::new(BOOSTER_LEGEND_TITLE),
            }),
        },
    }
}

#[cfg(test)]
#[path = "tests/charts_tests.rs"]
mod tests;
