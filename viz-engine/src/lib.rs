//! Chart mechanics shared by every visualization in the report.
//!
//! Everything here is a pure function of its inputs: no DOM types, no
//! environment sensing, no clocks. The `ui` crate feeds in viewport events
//! and the motion preference; this crate decides what the chart looks like.

pub mod aria;
pub mod donut;
pub mod format;
pub mod interaction;
pub mod layout;
pub mod reveal;
pub mod scrollspy;
pub mod treemap;

pub use aria::chart_summary;
pub use donut::{annular_path, ring_segments, segment_radius, ArcSegment};
pub use format::{format_value, pct_label, signed_gap_pp, usd_label};
pub use interaction::{InteractionState, NavKey, Orientation};
pub use layout::{
    bar_label_anchor, path_length, points_attr, polyline_points, scale_frac, scale_px, stack,
    LabelAnchor, StackSegment,
};
pub use reveal::{stagger_delay_ms, transition_ms, MotionPreference, RevealConfig, RevealState};
pub use scrollspy::active_section;
pub use treemap::{label_mode, squarify, wrap_label, LabelMode, Rect, TreemapRect};
