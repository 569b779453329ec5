use crate::error::{ChartError, ChartResult};

use super::{ChartConfig, ChartKind, Dataset};

/// Checks structural consistency of a chart config and returns the dataset
/// that drawing routines project.
pub(super) fn validate_chart_config(config: &ChartConfig) -> ChartResult<&Dataset> {
    let primary = config.primary_dataset().ok_or(ChartError::EmptyDatasets)?;

    for (index, dataset) in config.datasets.iter().enumerate() {
        if dataset.values.len() != config.labels.len() {
            return Err(ChartError::LengthMismatch {
                dataset: index,
                labels: config.labels.len(),
                values: dataset.values.len(),
            });
        }
        if let Some(position) = dataset.values.iter().position(|value| !value.is_finite()) {
            return Err(ChartError::InvalidData(format!(
                "dataset {index} value at index {position} must be finite"
            )));
        }
        validate_dataset_style(index, dataset)?;
    }

    if matches!(config.kind, ChartKind::Pie | ChartKind::Doughnut)
        && primary.values.iter().any(|value| *value < 0.0)
    {
        return Err(ChartError::InvalidData(format!(
            "{} chart values must be >= 0",
            config.kind.as_str()
        )));
    }

    Ok(primary)
}

fn validate_dataset_style(index: usize, dataset: &Dataset) -> ChartResult<()> {
    let style = &dataset.style;
    if let Some(width) = style.stroke_width {
        if !width.is_finite() || width <= 0.0 {
            return Err(ChartError::InvalidData(format!(
                "dataset {index} stroke width must be finite and > 0"
            )));
        }
    }
    if let Some(radius) = style.point_radius {
        if !radius.is_finite() || radius < 0.0 {
            return Err(ChartError::InvalidData(format!(
                "dataset {index} point radius must be finite and >= 0"
            )));
        }
    }
    for color in style
        .stroke_color
        .iter()
        .chain(style.point_color.iter())
        .chain(style.fill_colors.iter())
    {
        color.validate()?;
    }
    Ok(())
}
