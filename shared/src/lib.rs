pub mod bounds;
pub mod contact;
pub mod debounce;
pub mod filter;
pub mod markup;
pub mod poi;
pub mod render;

pub use bounds::{Bounds, InitialView};
pub use contact::{FormSurface, SubmitOutcome, handle_submit};
pub use debounce::{Debouncer, TimerHost};
pub use filter::{FilterAction, FilterState, categories};
pub use markup::{category_class, escape_html, popup_html};
pub use poi::{ParsedPois, Poi, PoiId, parse_pois};
pub use render::{ListRow, ListView, MarkerIndex, MarkerLayer, RenderPass, render_pass};
