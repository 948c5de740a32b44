use crate::error::{ChartError, ChartResult};

use super::{ChartSessionConfig, ColorAssigner};

pub(super) fn validate_session_config(config: &ChartSessionConfig) -> ChartResult<ColorAssigner> {
    let viewport = config.viewport;
    if !viewport.is_valid() {
        return Err(ChartError::InvalidViewport {
            width: viewport.width,
            height: viewport.height,
        });
    }

    let shortest_side = f64::from(viewport.width.min(viewport.height));
    if !config.padding_px.is_finite()
        || config.padding_px < 0.0
        || config.padding_px * 2.0 >= shortest_side
    {
        return Err(ChartError::InvalidData(
            "padding must be finite, >= 0 and smaller than half the viewport".to_owned(),
        ));
    }

    validate_export_file_name(&config.export_file_name)?;
    ColorAssigner::from_hex_palette(config.palette.as_slice())
}

fn validate_export_file_name(file_name: &str) -> ChartResult<()> {
    if file_name.trim().is_empty() {
        return Err(ChartError::InvalidData(
            "export file name must not be empty".to_owned(),
        ));
    }
    if file_name.contains(['/', '\\']) || file_name == "." || file_name == ".." {
        return Err(ChartError::InvalidData(format!(
            "export file name `{file_name}` must not contain path components"
        )));
    }
    Ok(())
}
