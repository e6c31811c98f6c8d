pub mod dataset;
pub mod layout;
pub mod primitives;
pub mod scale;
pub mod types;

pub use dataset::Dataset;
pub use layout::{LayoutBox, LayoutTuning, Margin};
pub use primitives::{parse_css_px, parse_date_to_unix_millis};
pub use scale::{LinearScale, ScalePair};
pub use types::{DataPoint, Size};
