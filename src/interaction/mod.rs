mod pointer;
mod throttle;
mod tooltip;

pub use pointer::{
    PointerEvent, PointerState, PointerTracker, PointerUpdate, TrackerState, pointer_state_at,
    resolve_index,
};
pub use throttle::Throttle;
pub use tooltip::{
    TooltipContent, TooltipSize, format_time_label, format_value_label, tooltip_left,
};
