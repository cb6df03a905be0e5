pub mod bounds;
pub mod clock;
pub mod labels;
pub mod primitives;
pub mod refresh;
pub mod snap;
pub mod types;
pub mod view;

pub use bounds::TimeBounds;
pub use clock::{Clock, ManualClock, SystemClock};
pub use labels::{Label, LabelSequence, generate_labels};
pub use primitives::{EDGE_SNAP_MS, GRID_STEP_MS, MIN_WINDOW_MS};
pub use refresh::{RefreshTicker, TickerState};
pub use snap::closest_grid_time;
pub use types::{
    HandleKind, HandlerState, RangeChangeCause, RangeEvent, RangeSelection, RangeState,
};
pub use view::{TimeView, compute_bounds};
