use shared::{
    domain::ALL_SITES_VALUE,
    protocol::{
        Component, DropdownOption, TextStyle, PAYLOAD_SLIDER_ID, SITE_DROPDOWN_ID,
        SUCCESS_PAYLOAD_SCATTER_CHART_ID, SUCCESS_PIE_CHART_ID,
    },
};
use storage::Dataset;

pub const DASHBOARD_TITLE: &str = "SpaceX Launch Records Dashboard";
pub const ALL_SITES_LABEL: &str = "All Sites";
pub const SITE_PLACEHOLDER: &str = "Select a Launch Site here";
pub const PAYLOAD_CAPTION: &str = "Payload range (Kg):";

pub const SLIDER_MIN_KG: f64 = 0.0;
pub const SLIDER_MAX_KG: f64 = 10_000.0;
pub const SLIDER_STEP_KG: f64 = 1_000.0;

pub fn site_options(dataset: &Dataset) -> Vec<DropdownOption> {
    std::iter::once(DropdownOption {
        label: ALL_SITES_LABEL.to_string(),
        value: ALL_SITES_VALUE.to_string(),
    })
    .chain(dataset.sites().iter().map(|site| DropdownOption {
        label: site.clone(),
        value: site.clone(),
    }))
    .collect()
}

/// Builds the dashboard's component tree. The slider starts at the dataset's
/// payload extremes.
pub fn build_layout(dataset: &Dataset) -> Component {
    Component::Div {
        children: vec![
            Component::Heading {
                text: DASHBOARD_TITLE.to_string(),
                style: TextStyle {
                    text_align: "center".to_string(),
                    color: "#503D36".to_string(),
                    font_size: 40,
                },
            },
            Component::Dropdown {
                id: SITE_DROPDOWN_ID.to_string(),
                options: site_options(dataset),
                value: ALL_SITES_VALUE.to_string(),
                placeholder: SITE_PLACEHOLDER.to_string(),
                searchable: true,
            },
            Component::LineBreak,
            Component::Div {
                children: vec![Component::Graph {
                    id: SUCCESS_PIE_CHART_ID.to_string(),
                }],
            },
            Component::LineBreak,
            Component::Paragraph {
                text: PAYLOAD_CAPTION.to_string(),
            },
            Component::RangeSlider {
                id: PAYLOAD_SLIDER_ID.to_string(),
                min: SLIDER_MIN_KG,
                max: SLIDER_MAX_KG,
                step: SLIDER_STEP_KG,
                value: [dataset.min_payload_kg(), dataset.max_payload_kg()],
            },
            Component::Div {
                children: vec![Component::Graph {
                    id: SUCCESS_PAYLOAD_SCATTER_CHART_ID.to_string(),
                }],
            },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::domain::{LaunchRecord, OutcomeClass};

    fn dataset() -> Dataset {
        let record = |site: &str, payload: f64| LaunchRecord {
            launch_site: site.to_string(),
            payload_mass_kg: payload,
            class: OutcomeClass::Success,
            booster_version_category: "FT".to_string(),
        };
        Dataset::from_records(vec![
            record("CCAFS LC-40", 2000.0),
            record("KSC LC-39A", 9600.0),
            record("CCAFS LC-40", 350.0),
        ])
        .expect("dataset")
    }

    #[test]
    fn dropdown_lists_all_sites_sentinel_first() {
        let layout = build_layout(&dataset());
        let Some(Component::Dropdown { options, value, .. }) = layout.find(SITE_DROPDOWN_ID)
        else {
            panic!("dropdown missing from layout");
        };

        let values: Vec<&str> = options.iter().map(|o| o.value.as_str()).collect();
        assert_eq!(values, vec!["ALL", "CCAFS LC-40", "KSC LC-39A"]);
        assert_eq!(options[0].label, ALL_SITES_LABEL);
        assert_eq!(value, ALL_SITES_VALUE);
    }

    #[test]
    fn slider_defaults_to_payload_extremes() {
        let layout = build_layout(&dataset());
        let Some(Component::RangeSlider {
            min,
            max,
            step,
            value,
            ..
        }) = layout.find(PAYLOAD_SLIDER_ID)
        else {
            panic!("slider missing from layout");
        };

        assert_eq!((*min, *max, *step), (0.0, 10_000.0, 1_000.0));
        assert_eq!(*value, [350.0, 9600.0]);
    }

    #[test]
    fn both_chart_placeholders_are_present() {
        let layout = build_layout(&dataset());
        assert!(layout.find(SUCCESS_PIE_CHART_ID).is_some());
        assert!(layout.find(SUCCESS_PAYLOAD_SCATTER_CHART_ID).is_some());
    }
}
