pub mod demo;
pub mod output;

use crate::{BatchResult, CaseConverter, Conversion, Scheme};
use anyhow::{Context, Result};
use serde_json::Value;
use tracing::{debug, warn};

/// Convert every input, either as plain text or as JSON values
pub fn convert_inputs(
    converter: &CaseConverter,
    inputs: &[String],
    scheme: Scheme,
    json: bool,
) -> Result<BatchResult> {
    debug!(count = inputs.len(), %scheme, json, "Converting inputs");

    let conversions = if json {
        let mut conversions = Vec::with_capacity(inputs.len());
        for input in inputs {
            // Blank lines carry no JSON value
            if input.trim().is_empty() {
                continue;
            }
            let value: Value = match serde_json::from_str(input) {
                Ok(value) => value,
                Err(e) => {
                    warn!(%input, error = %e, "Aborting on invalid JSON input");
                    return Err(e).with_context(|| format!("Invalid JSON input: {}", input));
                }
            };
            conversions.push(Conversion {
                input: input.clone(),
                outcome: converter.convert_value(&value, scheme),
            });
        }
        conversions
    } else {
        converter
            .convert_batch(inputs, scheme)
            .into_iter()
            .zip(inputs)
            .map(|(output, input)| Conversion {
                input: input.clone(),
                outcome: Ok(output),
            })
            .collect()
    };

    Ok(BatchResult::from_conversions(conversions))
}
