use std::sync::Arc;

use serde::de::DeserializeOwned;
use shared::{
    domain::{PayloadRange, SiteSelection},
    error::ApiError,
    protocol::{
        CallbackSpec, Component, DatasetSummary, Dependency, Figure, UpdateRequest,
        UpdateResponse, PAYLOAD_SLIDER_ID, SITE_DROPDOWN_ID, SUCCESS_PAYLOAD_SCATTER_CHART_ID,
        SUCCESS_PIE_CHART_ID,
    },
};
use storage::Dataset;
use tracing::{debug, warn};

pub mod charts;
pub mod layout;

#[derive(Clone)]
pub struct ApiContext {
    pub dataset: Arc<Dataset>,
}

impl ApiContext {
    pub fn new(dataset: Dataset) -> Self {
        Self {
            dataset: Arc::new(dataset),
        }
    }
}

type Handler = fn(&Dataset, &[&serde_json::Value]) -> Result<Figure, ApiError>;

struct RegisteredCallback {
    spec: CallbackSpec,
    handler: Handler,
}

fn registry() -> Vec<RegisteredCallback> {
    vec![
        RegisteredCallback {
            spec: CallbackSpec {
                output: Dependency::figure_of(SUCCESS_PIE_CHART_ID),
                inputs: vec![Dependency::value_of(SITE_DROPDOWN_ID)],
            },
            handler: success_pie_handler,
        },
        RegisteredCallback {
            spec: CallbackSpec {
                output: Dependency::figure_of(SUCCESS_PAYLOAD_SCATTER_CHART_ID),
                inputs: vec![
                    Dependency::value_of(SITE_DROPDOWN_ID),
                    Dependency::value_of(PAYLOAD_SLIDER_ID),
                ],
            },
            handler: payload_scatter_handler,
        },
    ]
}

pub fn callback_specs() -> Vec<CallbackSpec> {
    registry().into_iter().map(|callback| callback.spec).collect()
}

pub fn dashboard_layout(ctx: &ApiContext) -> Component {
    layout::build_layout(&ctx.dataset)
}

pub fn summary(ctx: &ApiContext) -> DatasetSummary {
    ctx.dataset.summary()
}

/// Recomputes the output named by `request` from the input values it carries.
pub fn dispatch(ctx: &ApiContext, request: &UpdateRequest) -> Result<UpdateResponse, ApiError> {
    let callback = registry()
        .into_iter()
        .find(|callback| callback.spec.output == request.output)
        .ok_or_else(|| {
            warn!(
                output = %request.output.id,
                property = %request.output.property,
                "no callback registered for output"
            );
            ApiError::not_found(format!(
                "no callback produces {}.{}",
                request.output.id, request.output.property
            ))
        })?;

    let values = callback
        .spec
        .inputs
        .iter()
        .map(|dependency| {
            request
                .inputs
                .iter()
                .find(|input| input.id == dependency.id && input.property == dependency.property)
                .map(|input| &input.value)
                .ok_or_else(|| {
                    ApiError::validation(format!(
                        "missing input {}.{}",
                        dependency.id, dependency.property
                    ))
                })
        })
        .collect::<Result<Vec<_>, _>>()
        .inspect_err(|e| warn!(output = %request.output.id, error = %e.message, "rejected update"))?;

    debug!(output = %request.output.id, inputs = values.len(), "dispatching callback");
    let figure = (callback.handler)(&ctx.dataset, &values)
        .inspect_err(|e| warn!(output = %request.output.id, error = %e.message, "rejected update"))?;

    Ok(UpdateResponse {
        output: callback.spec.output,
        figure,
    })
}

fn success_pie_handler(
    dataset: &Dataset,
    inputs: &[&serde_json::Value],
) -> Result<Figure, ApiError> {
    match inputs {
        [site] => {
            let site: SiteSelection = decode(site, SITE_DROPDOWN_ID)?;
            Ok(charts::success_pie_chart(dataset, &site))
        }
        _ => Err(arity_mismatch(SUCCESS_PIE_CHART_ID)),
    }
}

fn payload_scatter_handler(
    dataset: &Dataset,
    inputs: &[&serde_json::Value],
) -> Result<Figure, ApiError> {
    match inputs {
        [site, range] => {
            let site: SiteSelection = decode(site, SITE_DROPDOWN_ID)?;
            let range: PayloadRange = decode(range, PAYLOAD_SLIDER_ID)?;
            Ok(charts::payload_scatter_chart(dataset, &site, range))
        }
        _ => Err(arity_mismatch(SUCCESS_PAYLOAD_SCATTER_CHART_ID)),
    }
}

fn decode<T: DeserializeOwned>(value: &serde_json::Value, id: &str) -> Result<T, ApiError> {
    serde_json::from_value(value.clone())
        .map_err(|e| ApiError::validation(format!("invalid value for {id}: {e}")))
}

fn arity_mismatch(output: &str) -> ApiError {
    ApiError::internal(format!(
        "callback for {output} received the wrong number of inputs"
    ))
}
