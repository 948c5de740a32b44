mod data_controller;
mod export;
mod export_controller;
mod json_contract;
mod observer_registry;
mod palette;
mod presenter;
mod selection;
mod selection_controller;
mod session;
mod session_config;
mod tooltip;
mod validation;

pub use export::{ExportOutcome, ExportReport, ExportTicket};
pub use json_contract::{RENDER_VIEW_JSON_SCHEMA_V1, RenderViewJsonContractV1};
pub use palette::{ColorAssigner, ColorMap, DEFAULT_PALETTE_HEX};
pub use presenter::ChartPresenter;
pub use selection::{SelectionState, SelectionStore, ToggleOutcome};
pub use session::ChartSession;
pub use session_config::{ChartSessionConfig, DEFAULT_EXPORT_FILE_NAME};
pub use tooltip::{
    PercentTooltipFormatter, TooltipEntry, TooltipFormatter, TooltipPanel, TooltipRow,
    tooltip_payload,
};
